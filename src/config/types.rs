//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::services::profile_resolver::DEFAULT_PROFILE_NAME;
use crate::domain::value_objects::StoreKind;

/// Inputs of the resolution engine that would otherwise be ambient state.
///
/// Built once in `main` from the process environment; tests build it by
/// hand and point it at temporary files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Path of the config store (`~/.cdp/config`)
    pub config_file: PathBuf,
    /// Path of the credentials store (`~/.cdp/credentials`)
    pub credentials_file: PathBuf,
    /// Profile used when none is requested
    pub default_profile: String,
}

impl EngineConfig {
    pub fn new(config_file: impl Into<PathBuf>, credentials_file: impl Into<PathBuf>) -> Self {
        Self {
            config_file: config_file.into(),
            credentials_file: credentials_file.into(),
            default_profile: DEFAULT_PROFILE_NAME.to_string(),
        }
    }

    /// Both store files inside `dir` (`<dir>/config`, `<dir>/credentials`).
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("config"), dir.join("credentials"))
    }

    /// Path of the file backing `store`.
    pub fn path_for(&self, store: StoreKind) -> &Path {
        match store {
            StoreKind::Config => &self.config_file,
            StoreKind::Credentials => &self.credentials_file,
        }
    }
}

/// Snapshot of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current process environment.
    ///
    /// Variables that are not valid Unicode are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value of `key` if it is set and not empty.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

impl FromIterator<(String, String)> for Environment {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}
