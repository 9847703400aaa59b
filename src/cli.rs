use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, Parser, Subcommand};

use cdpcli::domain::schema::{OptionAction, Schema};

/// CDP command line client
///
/// Global options are declared in the option schema and added to this
/// command at startup (see [`build_command`]).
#[derive(Parser, Debug)]
#[command(name = "cdp")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read and write CLI configuration
    Configure {
        #[command(subcommand)]
        command: ConfigureCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigureCommand {
    /// Print a configuration value (exit status 1 if it is not set)
    Get {
        /// Name of the value, e.g. `cdp_region`, `default.cdp_region`,
        /// `profile.dev.cdp_region` or `preview.service`
        varname: String,
    },

    /// Set a configuration value
    Set {
        /// Name of the value, qualified or not
        varname: String,

        /// The value to store
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// List the effective configuration and where each value came from
    List,
}

/// The clap command with every schema flag attached.
///
/// Value and presence options are global so they can follow a subcommand;
/// `version` and `help` only exist at the top level.
pub fn build_command(schema: &Schema) -> Command {
    let mut command = Cli::command();

    for option in schema.flags() {
        let arg = Arg::new(option.name.clone())
            .long(option.name.clone())
            .help(option.help.clone())
            .hide(option.hidden);

        let arg = match option.action {
            OptionAction::Store => arg
                .action(ArgAction::Set)
                .value_name(option.dest.to_uppercase())
                .global(true),
            OptionAction::StoreTrue | OptionAction::StoreFalse => {
                arg.action(ArgAction::SetTrue).global(true)
            }
            OptionAction::Version | OptionAction::Help => arg.action(ArgAction::SetTrue),
        };

        command = command.arg(arg);
    }

    command
}

/// Schema flags the user actually gave, as `(option name, raw value)`.
///
/// Presence flags carry no value. Global flags given after a subcommand are
/// visible here too.
pub fn raw_flags(schema: &Schema, matches: &ArgMatches) -> Vec<(String, Option<String>)> {
    let mut raw = Vec::new();

    for option in schema.flags() {
        let id = option.name.as_str();
        match option.action {
            OptionAction::Store => {
                if let Some(value) = matches.get_one::<String>(id) {
                    raw.push((option.name.clone(), Some(value.clone())));
                }
            }
            _ => {
                if matches.get_flag(id) {
                    raw.push((option.name.clone(), None));
                }
            }
        }
    }

    raw
}
