//! Value resolution chain
//!
//! Produces the effective value of one option. First match wins:
//!
//! 1. the command-line flag
//! 2. the bound environment variable (set and non-empty)
//! 3. the option's key in the active profile, via the name resolver
//! 4. the declared default
//!
//! Step 2 is skipped for credential options whenever `--profile` was given:
//! asking for a profile by name means its stored credentials must be used,
//! even if credentials are exported in the environment.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::Environment;
use crate::domain::entities::{ResolvedValue, StorePair};
use crate::domain::schema::{FlagValues, OptionSpec, Schema};
use crate::domain::services::name_resolver;
use crate::domain::services::profile_resolver::ActiveProfile;
use crate::domain::value_objects::{ValueSource, PRIVATE_KEY_KEY};
use crate::error::CdpResult;

/// Everything the chain reads from, borrowed for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct ChainInputs<'a> {
    /// Typed flag values keyed by destination
    pub flags: &'a FlagValues,
    pub env: &'a Environment,
    pub stores: &'a StorePair,
    pub profile: &'a ActiveProfile,
}

/// Resolve one option. `Ok(None)` means no source had a value and the option
/// has no default; whether that matters is the caller's decision.
pub fn resolve(option: &OptionSpec, inputs: &ChainInputs<'_>) -> CdpResult<Option<ResolvedValue>> {
    if let Some(value) = inputs.flags.get(&option.dest) {
        return Ok(Some(ResolvedValue::new(value.clone(), ValueSource::Flag)));
    }

    if let Some(var) = option.env.as_deref() {
        if option.is_credential() && inputs.profile.is_explicit() {
            debug!(
                option = %option.name,
                var,
                profile = %inputs.profile.name,
                "ignoring environment credentials because --profile was given"
            );
        } else if let Some(raw) = inputs.env.get_non_empty(var) {
            let value = option.coerce(raw)?;
            return Ok(Some(ResolvedValue::new(
                value,
                ValueSource::Env(var.to_string()),
            )));
        }
    }

    if let Some(key) = option.config_key.as_deref() {
        let name = name_resolver::resolve(key, &inputs.profile.name)?;
        if let Some(hit) = inputs.stores.lookup(&name).filter(|h| !h.value.is_empty()) {
            let raw = if name.key == PRIVATE_KEY_KEY {
                unescape_private_key(hit.value)
            } else {
                hit.value.to_string()
            };
            let value = option.coerce(&raw)?;
            return Ok(Some(ResolvedValue::new(value, ValueSource::Store(hit.store))));
        }
    }

    Ok(option
        .default
        .clone()
        .map(|value| ResolvedValue::new(value, ValueSource::Default)))
}

/// Resolve every value-carrying option of `schema`, keyed by destination.
///
/// Options with no value anywhere are left out.
pub fn resolve_all(
    schema: &Schema,
    inputs: &ChainInputs<'_>,
) -> CdpResult<BTreeMap<String, ResolvedValue>> {
    let mut values = BTreeMap::new();
    for option in schema.options().iter().filter(|o| !o.action.is_terminal()) {
        if let Some(resolved) = resolve(option, inputs)? {
            debug!(
                dest = %option.dest,
                source = resolved.source.source_type(),
                "resolved option"
            );
            values.insert(option.dest.clone(), resolved);
        }
    }
    Ok(values)
}

/// Private keys are stored on one line with newlines written as `\n`.
pub fn escape_private_key(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\n', "\\n")
}

pub fn unescape_private_key(value: &str) -> String {
    value.replace("\\n", "\n")
}
