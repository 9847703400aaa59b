//! StorePair entity - the config and credentials stores of one invocation

use super::ConfigStore;
use crate::domain::value_objects::{QualifiedName, StoreKind};

/// A value found in one of the stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreHit<'a> {
    pub value: &'a str,
    pub store: StoreKind,
}

/// Both persisted stores, loaded once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorePair {
    pub config: ConfigStore,
    pub credentials: ConfigStore,
}

impl StorePair {
    pub fn new(config: ConfigStore, credentials: ConfigStore) -> Self {
        Self {
            config,
            credentials,
        }
    }

    pub fn store(&self, kind: StoreKind) -> &ConfigStore {
        match kind {
            StoreKind::Config => &self.config,
            StoreKind::Credentials => &self.credentials,
        }
    }

    pub fn store_mut(&mut self, kind: StoreKind) -> &mut ConfigStore {
        match kind {
            StoreKind::Config => &mut self.config,
            StoreKind::Credentials => &mut self.credentials,
        }
    }

    /// Look `name` up in its own store, then in the other one.
    ///
    /// Each store is searched under its own section-naming rule, so
    /// `cdp_region` for profile `dev` is read from `[profile dev]` in the
    /// config file and from `[dev]` in the credentials file.
    pub fn lookup(&self, name: &QualifiedName) -> Option<StoreHit<'_>> {
        [name.kind, name.kind.other()]
            .into_iter()
            .find_map(|store| {
                let section = name.section_name(store);
                self.store(store)
                    .get(&section, &name.key)
                    .map(|value| StoreHit { value, store })
            })
    }
}
