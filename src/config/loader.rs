//! Default store locations

use std::path::PathBuf;

use super::types::{EngineConfig, Environment};

/// Overrides the config file location.
pub const CONFIG_FILE_ENV: &str = "CDP_CONFIG_FILE";

/// Overrides the credentials file location.
pub const CREDENTIALS_FILE_ENV: &str = "CDP_SHARED_CREDENTIALS_FILE";

/// Overrides the home directory for test isolation.
///
/// On Windows `dirs::home_dir()` ignores `HOME`/`USERPROFILE`, so tests
/// set this instead.
pub const TEST_HOME_ENV: &str = "CDP_TEST_HOME";

const DEFAULT_CONFIG_FILE: &str = ".cdp/config";
const DEFAULT_CREDENTIALS_FILE: &str = ".cdp/credentials";

/// Home directory used for the default store paths.
pub fn cdp_home_dir(env: &Environment) -> Option<PathBuf> {
    env.get_non_empty(TEST_HOME_ENV)
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Build the engine configuration from the environment.
///
/// `CDP_CONFIG_FILE` / `CDP_SHARED_CREDENTIALS_FILE` win; otherwise both
/// files live under `~/.cdp/`. A leading `~/` in an override is expanded.
pub fn from_env(env: &Environment) -> EngineConfig {
    let home = cdp_home_dir(env).unwrap_or_else(|| PathBuf::from("~"));

    let resolve = |var: &str, default: &str| -> PathBuf {
        match env.get_non_empty(var) {
            Some(path) => expand_home(path, &home),
            None => home.join(default),
        }
    };

    EngineConfig::new(
        resolve(CONFIG_FILE_ENV, DEFAULT_CONFIG_FILE),
        resolve(CREDENTIALS_FILE_ENV, DEFAULT_CREDENTIALS_FILE),
    )
}

fn expand_home(path: &str, home: &std::path::Path) -> PathBuf {
    if path == "~" {
        home.to_path_buf()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
