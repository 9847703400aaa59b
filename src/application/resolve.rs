//! Resolve Use Case
//!
//! Builds the `ResolvedConfig` of an invocation: active profile, every
//! schema option run through the value chain, and the form factor.

use tracing::debug;

use crate::config::{EngineConfig, Environment};
use crate::domain::entities::{ResolvedConfig, StorePair};
use crate::domain::ports::StoreRepository;
use crate::domain::schema::{FlagValues, Schema};
use crate::domain::services::{active_profile, form_factor, value_chain, ChainInputs};
use crate::domain::value_objects::{FormFactor, ValueSource};
use crate::error::{CdpError, CdpResult};

/// Destination holding `--profile`.
pub const PROFILE_DEST: &str = "profile";

const FORM_FACTOR_DEST: &str = "form_factor";
const ENDPOINT_URL_DEST: &str = "endpoint_url";
const CDP_ENDPOINT_URL_DEST: &str = "cdp_endpoint_url";
const CDP_REGION_DEST: &str = "cdp_region";

/// Resolve use case - loads the stores and resolves every option
pub struct ResolveUseCase<R>
where
    R: StoreRepository,
{
    repo: R,
}

impl<R> ResolveUseCase<R>
where
    R: StoreRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn execute(
        &self,
        schema: &Schema,
        flags: &FlagValues,
        env: &Environment,
        config: &EngineConfig,
    ) -> CdpResult<ResolvedConfig> {
        let stores = self.repo.load_pair()?;
        resolve_config(schema, flags, env, config, &stores)
    }
}

/// Resolve against already loaded stores.
pub fn resolve_config(
    schema: &Schema,
    flags: &FlagValues,
    env: &Environment,
    config: &EngineConfig,
    stores: &StorePair,
) -> CdpResult<ResolvedConfig> {
    let profile_flag = flags.get(PROFILE_DEST).and_then(|v| v.as_str());
    let profile = active_profile(profile_flag, env, &config.default_profile);
    debug!(profile = %profile.name, origin = ?profile.origin, "active profile");

    let inputs = ChainInputs {
        flags,
        env,
        stores,
        profile: &profile,
    };
    let values = value_chain::resolve_all(schema, &inputs)?;

    let explicit = values
        .get(FORM_FACTOR_DEST)
        .and_then(|r| r.value.as_str())
        .map(|raw| {
            raw.parse::<FormFactor>().map_err(|_| CdpError::Choice {
                option: "form-factor".to_string(),
                value: raw.to_string(),
                choices: FormFactor::ALL.iter().map(|f| f.to_string()).collect(),
            })
        })
        .transpose()?;

    // Only a command-line endpoint counts here; a profile's `endpoint_url`
    // is not consulted, its `cdp_endpoint_url` is.
    let endpoint_url = values
        .get(ENDPOINT_URL_DEST)
        .filter(|r| r.source == ValueSource::Flag)
        .or_else(|| values.get(CDP_ENDPOINT_URL_DEST))
        .and_then(|r| r.value.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| {
            let region = values.get(CDP_REGION_DEST).and_then(|r| r.value.as_str());
            form_factor::default_endpoint_url(region)
        });

    let form_factor = form_factor::infer(explicit, Some(endpoint_url.as_str()));
    debug!(%form_factor, endpoint = %endpoint_url, "form factor");

    Ok(ResolvedConfig::new(profile, values, form_factor))
}
