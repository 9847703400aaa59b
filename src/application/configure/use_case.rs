//! Configure use case implementation

use tracing::debug;

use crate::domain::entities::{check_key, check_section_name};
use crate::domain::ports::StoreRepository;
use crate::domain::services::value_chain::escape_private_key;
use crate::domain::services::{name_resolver, ActiveProfile};
use crate::domain::value_objects::PRIVATE_KEY_KEY;
use crate::error::{CdpError, CdpResult};

use super::result::{GetOutcome, SetResult};

/// Configure use case - reads and writes single stored values
pub struct ConfigureUseCase<R>
where
    R: StoreRepository,
{
    repo: R,
}

impl<R> ConfigureUseCase<R>
where
    R: StoreRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up the stored value addressed by `raw_name`.
    ///
    /// Only the stores are consulted; flags and environment variables play
    /// no part. The value is returned exactly as stored.
    pub fn get(&self, raw_name: &str, profile: &ActiveProfile) -> CdpResult<GetOutcome> {
        let name = name_resolver::resolve(raw_name, &profile.name)?;
        let stores = self.repo.load_pair()?;

        let outcome = match stores.lookup(&name) {
            Some(hit) => {
                debug!(%name, store = %hit.store, "configure get found value");
                GetOutcome::Found(hit.value.to_string())
            }
            None => {
                debug!(%name, "configure get found nothing");
                GetOutcome::NotFound
            }
        };
        Ok(outcome)
    }

    /// Write `value` at the address `raw_name`.
    ///
    /// Credential keys go to the credentials store under its bare section
    /// name; everything else goes to the config store. Sections and files
    /// are created as needed; other content is left untouched.
    pub fn set(&self, raw_name: &str, value: &str, profile: &ActiveProfile) -> CdpResult<SetResult> {
        let name = name_resolver::resolve(raw_name, &profile.name)?;

        let value = if name.key == PRIVATE_KEY_KEY {
            escape_private_key(value)
        } else {
            value.to_string()
        };
        check_storable_value(&name.key, &value)?;

        let section = name.primary_section_name();
        check_key(&name.key)?;
        check_section_name(&section)?;

        let store_kind = name.kind;

        let mut store = self.repo.load(store_kind)?;
        store.ensure_section(&section).set(name.key.as_str(), value);
        self.repo.save(store_kind, &store)?;

        Ok(SetResult {
            name,
            store: store_kind,
            section,
        })
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}

/// Values must survive a write and re-read unchanged.
fn check_storable_value(key: &str, value: &str) -> CdpResult<()> {
    let expected = if value.contains('\n') || value.contains('\r') {
        "a single-line value"
    } else if value.trim() != value {
        "a value without leading or trailing whitespace"
    } else {
        return Ok(());
    };
    Err(CdpError::Type {
        option: key.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    })
}
