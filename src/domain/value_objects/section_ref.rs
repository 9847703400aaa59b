//! Section reference - a store-independent address of a section
//!
//! A profile maps to a different physical section name in each store
//! (`[profile dev]` in config, `[dev]` in credentials). Literal sections
//! keep their name in both.

use super::StoreKind;
use crate::domain::services::profile_resolver;

/// Logical section address, resolved to a physical name per store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionRef {
    /// A named profile (`default` included)
    Profile(String),
    /// An ad hoc section addressed by its literal name, e.g. `[preview]`
    Literal(String),
}

impl SectionRef {
    /// Reference to a profile's section.
    pub fn profile(name: impl Into<String>) -> Self {
        SectionRef::Profile(name.into())
    }

    /// Physical section name inside `store`.
    pub fn section_name(&self, store: StoreKind) -> String {
        match self {
            SectionRef::Profile(name) => profile_resolver::section_name_for(name, store),
            SectionRef::Literal(name) => name.clone(),
        }
    }

    /// Profile name, if this references a profile.
    pub fn profile_name(&self) -> Option<&str> {
        match self {
            SectionRef::Profile(name) => Some(name),
            SectionRef::Literal(_) => None,
        }
    }
}

impl std::fmt::Display for SectionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionRef::Profile(name) => write!(f, "profile {}", name),
            SectionRef::Literal(name) => write!(f, "{}", name),
        }
    }
}
