//! Profile resolver
//!
//! Picks the active profile (flag > environment > `default`) and maps a
//! profile name to its physical section name in each store.
//!
//! The two stores name profile sections differently and that difference is
//! kept on purpose:
//!
//! | profile   | config file         | credentials file |
//! |-----------|---------------------|------------------|
//! | `default` | `[default]`         | `[default]`      |
//! | `dev`     | `[profile dev]`     | `[dev]`          |
//!
//! Callers go through [`section_name_for`] (or `SectionRef::section_name`)
//! and never build section names themselves.

use crate::config::Environment;
use crate::domain::value_objects::StoreKind;

/// Name of the profile used when none is requested.
pub const DEFAULT_PROFILE_NAME: &str = "default";

/// Environment variables naming the profile, in priority order.
pub const PROFILE_ENV_VARS: [&str; 2] = ["CDP_DEFAULT_PROFILE", "CDP_PROFILE"];

const CONFIG_PROFILE_PREFIX: &str = "profile ";

/// Where the active profile name came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOrigin {
    /// `--profile`
    Flag,
    /// One of [`PROFILE_ENV_VARS`]
    Env(String),
    /// Nothing requested
    Default,
}

/// The profile an invocation runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveProfile {
    pub name: String,
    pub origin: ProfileOrigin,
}

impl ActiveProfile {
    /// True only when `--profile` was given on the command line.
    pub fn is_explicit(&self) -> bool {
        matches!(self.origin, ProfileOrigin::Flag)
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_PROFILE_NAME
    }
}

/// Resolve the active profile: explicit flag, then env var, then
/// `default_profile`.
///
/// Empty values count as unset.
pub fn active_profile(
    explicit_flag: Option<&str>,
    env: &Environment,
    default_profile: &str,
) -> ActiveProfile {
    if let Some(name) = explicit_flag.filter(|n| !n.is_empty()) {
        return ActiveProfile {
            name: name.to_string(),
            origin: ProfileOrigin::Flag,
        };
    }

    for var in PROFILE_ENV_VARS {
        if let Some(name) = env.get_non_empty(var) {
            return ActiveProfile {
                name: name.to_string(),
                origin: ProfileOrigin::Env(var.to_string()),
            };
        }
    }

    ActiveProfile {
        name: default_profile.to_string(),
        origin: ProfileOrigin::Default,
    }
}

/// Physical section name of `profile` inside `store`.
pub fn section_name_for(profile: &str, store: StoreKind) -> String {
    if profile == DEFAULT_PROFILE_NAME {
        return DEFAULT_PROFILE_NAME.to_string();
    }
    match store {
        StoreKind::Config => format!("{}{}", CONFIG_PROFILE_PREFIX, profile),
        StoreKind::Credentials => profile.to_string(),
    }
}

/// Inverse of [`section_name_for`]: the profile a section belongs to, if any.
///
/// Config sections without the `profile ` prefix (other than `default`) are
/// ad hoc sections, not profiles. Every credentials section is a profile.
pub fn profile_for_section(section: &str, store: StoreKind) -> Option<&str> {
    if section == DEFAULT_PROFILE_NAME {
        return Some(DEFAULT_PROFILE_NAME);
    }
    match store {
        StoreKind::Config => section
            .strip_prefix(CONFIG_PROFILE_PREFIX)
            .map(str::trim)
            .filter(|name| !name.is_empty()),
        StoreKind::Credentials => Some(section),
    }
}
