//! Option declarations
//!
//! `OptionDefinition` is the serde shape of one entry in `data/cli.json`;
//! `OptionSpec` is the checked form the rest of the engine works with.

use serde::Deserialize;

use crate::domain::value_objects::{is_credential_key, TypedValue};
use crate::error::{CdpError, CdpResult};

/// Declared value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    #[default]
    String,
    Integer,
    Boolean,
    Enum,
}

impl OptionType {
    fn expected(&self) -> &'static str {
        match self {
            OptionType::String => "a string",
            OptionType::Integer => "an integer",
            OptionType::Boolean => "a boolean (true/false)",
            OptionType::Enum => "one of the declared choices",
        }
    }
}

/// What the parser does when it meets the option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptionAction {
    /// Take the following value
    #[default]
    Store,
    /// Presence sets the destination to `true`
    StoreTrue,
    /// Presence sets the destination to `false`
    StoreFalse,
    /// Print the version and stop
    Version,
    /// Print help and stop
    Help,
}

impl OptionAction {
    /// Actions that take no value on the command line.
    pub fn is_flag(&self) -> bool {
        !matches!(self, OptionAction::Store)
    }

    /// Actions that end the invocation instead of producing a value.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OptionAction::Version | OptionAction::Help)
    }
}

/// One option as written in the schema file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionDefinition {
    pub name: String,
    #[serde(default)]
    pub dest: Option<String>,
    #[serde(default, rename = "type")]
    pub option_type: Option<OptionType>,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    #[serde(default)]
    pub choices: Option<Vec<String>>,
    #[serde(default)]
    pub action: OptionAction,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub env: Option<String>,
    #[serde(default)]
    pub config: Option<String>,
    #[serde(default = "default_flag")]
    pub flag: bool,
    #[serde(default)]
    pub help: String,
}

fn default_flag() -> bool {
    true
}

/// A validated option declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    pub name: String,
    pub dest: String,
    pub option_type: OptionType,
    pub default: Option<TypedValue>,
    pub choices: Vec<String>,
    pub action: OptionAction,
    pub hidden: bool,
    /// Environment variable bound to this option
    pub env: Option<String>,
    /// Key looked up in the active profile's section
    pub config_key: Option<String>,
    /// Whether the option has a `--name` spelling
    pub flag: bool,
    pub help: String,
}

impl OptionSpec {
    /// Check a definition and fill in derived fields.
    pub fn from_definition(def: OptionDefinition) -> CdpResult<Self> {
        let name = def.name.trim().to_string();
        if name.is_empty() {
            return Err(schema_error("option with empty name"));
        }

        let dest = def
            .dest
            .map(|d| d.trim().to_string())
            .unwrap_or_else(|| normalize_dest(&name));
        if dest.is_empty() {
            return Err(schema_error(format!("option '{}' has an empty dest", name)));
        }

        let option_type = match (def.action, def.option_type) {
            (OptionAction::StoreTrue | OptionAction::StoreFalse, None | Some(OptionType::Boolean)) => {
                OptionType::Boolean
            }
            (OptionAction::StoreTrue | OptionAction::StoreFalse, Some(other)) => {
                return Err(schema_error(format!(
                    "option '{}' is a presence flag but declares type {:?}",
                    name, other
                )));
            }
            (_, declared) => declared.unwrap_or_default(),
        };

        let choices = def.choices.unwrap_or_default();
        if option_type == OptionType::Enum && choices.is_empty() {
            return Err(schema_error(format!(
                "enum option '{}' declares no choices",
                name
            )));
        }

        let mut spec = OptionSpec {
            name,
            dest,
            option_type,
            default: None,
            choices,
            action: def.action,
            hidden: def.hidden,
            env: def.env.filter(|e| !e.is_empty()),
            config_key: def.config.filter(|c| !c.is_empty()),
            flag: def.flag,
            help: def.help,
        };

        spec.default = match def.default {
            Some(value) => Some(spec.default_from_json(value)?),
            None => match spec.action {
                OptionAction::StoreTrue => Some(TypedValue::Boolean(false)),
                OptionAction::StoreFalse => Some(TypedValue::Boolean(true)),
                _ => None,
            },
        };

        Ok(spec)
    }

    /// Coerce a raw string (flag, env var or file) through the declared type.
    pub fn coerce(&self, raw: &str) -> CdpResult<TypedValue> {
        match self.option_type {
            OptionType::String => Ok(TypedValue::String(raw.to_string())),
            OptionType::Integer => raw
                .trim()
                .parse::<i64>()
                .map(TypedValue::Integer)
                .map_err(|_| self.type_error(raw)),
            OptionType::Boolean => parse_bool(raw)
                .map(TypedValue::Boolean)
                .ok_or_else(|| self.type_error(raw)),
            OptionType::Enum => {
                if self.choices.iter().any(|c| c == raw) {
                    Ok(TypedValue::String(raw.to_string()))
                } else {
                    Err(CdpError::Choice {
                        option: self.name.clone(),
                        value: raw.to_string(),
                        choices: self.choices.clone(),
                    })
                }
            }
        }
    }

    /// True if the option carries credential material.
    pub fn is_credential(&self) -> bool {
        is_credential_key(self.config_key.as_deref().unwrap_or(&self.dest))
    }

    /// Command-line spelling, e.g. `--endpoint-url`.
    pub fn cli_name(&self) -> String {
        format!("--{}", self.name)
    }

    fn default_from_json(&self, value: serde_json::Value) -> CdpResult<TypedValue> {
        let invalid = || {
            schema_error(format!(
                "default for '{}' is not {}",
                self.name,
                self.option_type.expected()
            ))
        };
        match (&value, self.option_type) {
            (serde_json::Value::String(s), _) => self.coerce(s).map_err(|_| invalid()),
            (serde_json::Value::Number(n), OptionType::Integer) => {
                n.as_i64().map(TypedValue::Integer).ok_or_else(invalid)
            }
            (serde_json::Value::Bool(b), OptionType::Boolean) => Ok(TypedValue::Boolean(*b)),
            _ => Err(invalid()),
        }
    }

    fn type_error(&self, raw: &str) -> CdpError {
        CdpError::Type {
            option: self.name.clone(),
            value: raw.to_string(),
            expected: self.option_type.expected().to_string(),
        }
    }
}

/// Destination derived from an option name: separators become `_`.
pub fn normalize_dest(name: &str) -> String {
    name.trim_start_matches('-').replace('-', "_")
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn schema_error(message: impl Into<String>) -> CdpError {
    CdpError::Schema {
        message: message.into(),
    }
}
