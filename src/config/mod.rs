//! Engine configuration
//!
//! Everything the resolution engine would otherwise read from ambient
//! process state is captured here once and passed down explicitly:
//! - store file locations (`CDP_CONFIG_FILE`, `CDP_SHARED_CREDENTIALS_FILE`,
//!   defaulting to `~/.cdp/config` and `~/.cdp/credentials`)
//! - the default profile name
//! - a snapshot of the environment variables

mod loader;
mod types;

pub use loader::{cdp_home_dir, from_env, CONFIG_FILE_ENV, CREDENTIALS_FILE_ENV, TEST_HOME_ENV};
pub use types::{EngineConfig, Environment};
