//! Option schema
//!
//! In-memory model of the declared CLI options. Parsing and validation are
//! pure: no I/O, no environment access, repeatable.

mod option;

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use crate::domain::value_objects::TypedValue;
use crate::error::{CdpError, CdpResult};

pub use option::{normalize_dest, OptionAction, OptionDefinition, OptionSpec, OptionType};

/// Option declarations shipped with the binary.
pub const BUILTIN_SCHEMA: &str = include_str!("../../../data/cli.json");

/// Outcome of an action that ends the invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalAction {
    Version,
    Help,
}

/// Result of validating one raw flag
#[derive(Debug, Clone, PartialEq)]
pub enum Validated {
    Value(TypedValue),
    Terminal(TerminalAction),
}

/// Result of validating every flag given on the command line
#[derive(Debug, Clone, PartialEq)]
pub enum FlagOutcome {
    /// Stop and display something instead of running a command
    Terminal(TerminalAction),
    /// Typed values keyed by destination
    Values(FlagValues),
}

/// Flag values keyed by destination.
pub type FlagValues = BTreeMap<String, TypedValue>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaDocument {
    options: Vec<OptionDefinition>,
}

/// A checked set of option declarations, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    options: Vec<OptionSpec>,
}

impl Schema {
    /// Build a schema from declarations.
    ///
    /// Fails on duplicate names, duplicate destinations, or any invalid
    /// single declaration (e.g. an `enum` without choices).
    pub fn parse(definitions: Vec<OptionDefinition>) -> CdpResult<Self> {
        let mut names = HashSet::new();
        let mut dests = HashSet::new();
        let mut options = Vec::with_capacity(definitions.len());

        for definition in definitions {
            let spec = OptionSpec::from_definition(definition)?;
            if !names.insert(spec.name.clone()) {
                return Err(CdpError::Schema {
                    message: format!("duplicate option name '{}'", spec.name),
                });
            }
            if !dests.insert(spec.dest.clone()) {
                return Err(CdpError::Schema {
                    message: format!("duplicate destination '{}'", spec.dest),
                });
            }
            options.push(spec);
        }

        Ok(Self { options })
    }

    /// Parse a JSON schema document: `{ "options": [ ... ] }`.
    pub fn from_json(json: &str) -> CdpResult<Self> {
        let document: SchemaDocument = serde_json::from_str(json).map_err(|e| CdpError::Schema {
            message: e.to_string(),
        })?;
        Self::parse(document.options)
    }

    /// The schema embedded in the binary.
    pub fn builtin() -> CdpResult<Self> {
        Self::from_json(BUILTIN_SCHEMA)
    }

    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// Options that have a command-line spelling.
    pub fn flags(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.iter().filter(|o| o.flag)
    }

    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    pub fn by_dest(&self, dest: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.dest == dest)
    }

    /// Validate one raw flag.
    ///
    /// `raw` is the value that followed the flag, `None` for presence-only
    /// flags. Presence flags ignore any value they are handed.
    pub fn validate(&self, option_name: &str, raw: Option<&str>) -> CdpResult<Validated> {
        let spec = self.get(option_name).ok_or_else(|| CdpError::Schema {
            message: format!("unknown option '{}'", option_name),
        })?;

        match spec.action {
            OptionAction::StoreTrue => Ok(Validated::Value(TypedValue::Boolean(true))),
            OptionAction::StoreFalse => Ok(Validated::Value(TypedValue::Boolean(false))),
            OptionAction::Version => Ok(Validated::Terminal(TerminalAction::Version)),
            OptionAction::Help => Ok(Validated::Terminal(TerminalAction::Help)),
            OptionAction::Store => {
                let raw = raw.ok_or_else(|| CdpError::Type {
                    option: spec.name.clone(),
                    value: String::new(),
                    expected: "a value".to_string(),
                })?;
                spec.coerce(raw).map(Validated::Value)
            }
        }
    }

    /// Validate every flag given on the command line, in order.
    ///
    /// `help` wins over `version`; either one wins over any value error, the
    /// same way a display-and-exit flag short-circuits argument processing.
    pub fn validate_flags<'a, I>(&self, raw: I) -> CdpResult<FlagOutcome>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut values = FlagValues::new();
        let mut terminal = None;
        let mut first_error = None;

        for (name, value) in raw {
            match self.validate(name, value) {
                Ok(Validated::Value(typed)) => {
                    if let Some(spec) = self.get(name) {
                        values.insert(spec.dest.clone(), typed);
                    }
                }
                Ok(Validated::Terminal(action)) => {
                    terminal = match (terminal, action) {
                        (Some(TerminalAction::Help), _) => Some(TerminalAction::Help),
                        (_, action) => Some(action),
                    };
                }
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(action) = terminal {
            return Ok(FlagOutcome::Terminal(action));
        }
        if let Some(e) = first_error {
            return Err(e);
        }
        Ok(FlagOutcome::Values(values))
    }
}
