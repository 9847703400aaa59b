//! Name resolver
//!
//! Turns a user supplied configuration name into a [`QualifiedName`]:
//!
//! - `key`                   → active profile's section
//! - `default.key`           → the default profile, whatever is active
//! - `profile.<name>.key`    → profile `<name>`
//! - `<section>.key`         → the literal section `<section>` (e.g. `[preview]`)
//!
//! Only the first `.` (or the first two, for `profile.`) is structural; the
//! key keeps any further dots. Absence of the addressed value is not the
//! resolver's concern.

use crate::domain::services::profile_resolver::DEFAULT_PROFILE_NAME;
use crate::domain::value_objects::{QualifiedName, SectionRef};
use crate::error::{CdpError, CdpResult};

const PROFILE_PREFIX: &str = "profile";

/// Resolve `raw_name` against `active_profile`.
pub fn resolve(raw_name: &str, active_profile: &str) -> CdpResult<QualifiedName> {
    let ambiguous = || CdpError::AmbiguousName {
        name: raw_name.to_string(),
    };

    let (section, key) = match raw_name.split_once('.') {
        None => (SectionRef::profile(active_profile), raw_name),
        Some((DEFAULT_PROFILE_NAME, key)) => (SectionRef::profile(DEFAULT_PROFILE_NAME), key),
        Some((PROFILE_PREFIX, rest)) => {
            let (profile, key) = rest.split_once('.').unwrap_or((rest, ""));
            let profile = profile.trim();
            if profile.is_empty() {
                return Err(ambiguous());
            }
            (SectionRef::profile(profile), key)
        }
        Some((section, key)) => {
            let section = section.trim();
            if section.is_empty() {
                return Err(ambiguous());
            }
            (SectionRef::Literal(section.to_string()), key)
        }
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(ambiguous());
    }

    Ok(QualifiedName::new(section, key))
}

/// True if `raw_name` carries its own section address.
pub fn is_qualified(raw_name: &str) -> bool {
    raw_name.contains('.')
}
