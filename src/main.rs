//! CDP CLI - schema-driven client with layered profile configuration
//!
//! Usage: cdp [GLOBAL OPTIONS] <COMMAND>
//!
//! Commands:
//!   configure get   Print a configuration value
//!   configure set   Write a configuration value
//!   configure list  Show effective settings and their sources

mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::FromArgMatches;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cdpcli::application::{ConfigList, ConfigureUseCase, GetOutcome, ResolveUseCase};
use cdpcli::config::{self, Environment};
use cdpcli::domain::schema::{FlagOutcome, Schema, TerminalAction};
use cdpcli::domain::services::active_profile;
use cdpcli::infrastructure::IniStoreRepository;

use cli::{Cli, Commands, ConfigureCommand};

/// Exit status for any error.
const ERROR_EXIT: u8 = 255;

/// Exit status of `configure get` when the value is not set.
const NOT_FOUND_EXIT: u8 = 1;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{:#}\n", e);
            ExitCode::from(ERROR_EXIT)
        }
    }
}

fn run() -> Result<ExitCode> {
    let schema = Schema::builtin()?;
    let mut command = cli::build_command(&schema);

    let matches = match command.try_get_matches_from_mut(std::env::args_os()) {
        Ok(matches) => matches,
        Err(e) => {
            let code = if e.use_stderr() { ERROR_EXIT } else { 0 };
            e.print()?;
            return Ok(ExitCode::from(code));
        }
    };

    let raw = cli::raw_flags(&schema, &matches);
    let flags = match schema.validate_flags(raw.iter().map(|(n, v)| (n.as_str(), v.as_deref())))? {
        FlagOutcome::Terminal(TerminalAction::Help) => {
            println!("{}", command.render_help());
            return Ok(ExitCode::SUCCESS);
        }
        FlagOutcome::Terminal(TerminalAction::Version) => {
            println!("cdpcli/{}", env!("CARGO_PKG_VERSION"));
            return Ok(ExitCode::SUCCESS);
        }
        FlagOutcome::Values(values) => values,
    };

    if flags.get("debug").and_then(|v| v.as_bool()).unwrap_or(false) {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "error,cdpcli=debug,cdp=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let env = Environment::from_process();
    let engine = config::from_env(&env);
    tracing::debug!(
        config_file = %engine.config_file.display(),
        credentials_file = %engine.credentials_file.display(),
        "store locations"
    );

    let cli = Cli::from_arg_matches(&matches)?;
    let Some(Commands::Configure { command: configure }) = cli.command else {
        eprintln!("{}", command.render_usage());
        return Ok(ExitCode::from(ERROR_EXIT));
    };

    let repo = IniStoreRepository::new(&engine);
    let profile_flag = flags.get("profile").and_then(|v| v.as_str());

    match configure {
        ConfigureCommand::Get { varname } => {
            let profile = active_profile(profile_flag, &env, &engine.default_profile);
            match ConfigureUseCase::new(repo).get(&varname, &profile)? {
                GetOutcome::Found(value) => {
                    println!("{}", value);
                    Ok(ExitCode::SUCCESS)
                }
                GetOutcome::NotFound => Ok(ExitCode::from(NOT_FOUND_EXIT)),
            }
        }
        ConfigureCommand::Set { varname, value } => {
            let profile = active_profile(profile_flag, &env, &engine.default_profile);
            ConfigureUseCase::new(repo).set(&varname, &value, &profile)?;
            Ok(ExitCode::SUCCESS)
        }
        ConfigureCommand::List => {
            let resolved = ResolveUseCase::new(repo).execute(&schema, &flags, &env, &engine)?;
            print!("{}", ConfigList::from_resolved(&resolved, &schema, &engine).render());
            Ok(ExitCode::SUCCESS)
        }
    }
}
