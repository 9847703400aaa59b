//! StoreRepository port - persistence of the config and credentials stores
//!
//! The domain only sees parsed `ConfigStore`s; where and how the INI text
//! lives is the infrastructure's concern.

use crate::domain::entities::{ConfigStore, StorePair};
use crate::domain::value_objects::StoreKind;
use crate::error::CdpResult;

pub trait StoreRepository {
    /// Load one store. A missing file is an empty store, not an error.
    fn load(&self, kind: StoreKind) -> CdpResult<ConfigStore>;

    /// Persist one store, creating the file and its directory if needed.
    fn save(&self, kind: StoreKind, store: &ConfigStore) -> CdpResult<()>;

    /// Load both stores.
    fn load_pair(&self) -> CdpResult<StorePair> {
        Ok(StorePair::new(
            self.load(StoreKind::Config)?,
            self.load(StoreKind::Credentials)?,
        ))
    }
}
