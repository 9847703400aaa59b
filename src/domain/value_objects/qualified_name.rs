//! Qualified name - the fully resolved address of one configuration value

use super::{SectionRef, StoreKind};

/// `(store, section, key)` produced by the name resolver.
///
/// `kind` is the store the key is routed to; the section is store
/// independent until [`QualifiedName::section_name`] is asked for a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub kind: StoreKind,
    pub section: SectionRef,
    pub key: String,
}

impl QualifiedName {
    pub fn new(section: SectionRef, key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            kind: StoreKind::for_key(&key),
            section,
            key,
        }
    }

    /// Physical section name in the given store.
    pub fn section_name(&self, store: StoreKind) -> String {
        self.section.section_name(store)
    }

    /// Physical section name in the store the key is routed to.
    pub fn primary_section_name(&self) -> String {
        self.section_name(self.kind)
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} ({})", self.primary_section_name(), self.key, self.kind)
    }
}
