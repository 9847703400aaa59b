//! INI Store Repository
//!
//! Persists the config store at `~/.cdp/config` and the credentials store at
//! `~/.cdp/credentials` (or wherever `EngineConfig` points).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::entities::ConfigStore;
use crate::domain::ports::StoreRepository;
use crate::domain::value_objects::StoreKind;
use crate::error::{CdpError, CdpResult};

/// Written at the top of a credentials file this tool creates.
pub const CREDENTIALS_PREAMBLE: [&str; 3] = [
    "Note on private key format.",
    "We expect the private key to be in a modified PEM",
    "format in which newlines are replaced with \\n.",
];

pub struct IniStoreRepository {
    config_file: PathBuf,
    credentials_file: PathBuf,
}

impl IniStoreRepository {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            config_file: config.config_file.clone(),
            credentials_file: config.credentials_file.clone(),
        }
    }

    pub fn path(&self, kind: StoreKind) -> &Path {
        match kind {
            StoreKind::Config => &self.config_file,
            StoreKind::Credentials => &self.credentials_file,
        }
    }

    fn lock_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        path.with_file_name(name)
    }

    fn write_to_disk(&self, kind: StoreKind, path: &Path, content: &str) -> CdpResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        set_store_permissions(tmp.as_file(), kind)?;
        tmp.persist(path).map_err(|e| CdpError::Io(e.error))?;
        Ok(())
    }
}

impl StoreRepository for IniStoreRepository {
    fn load(&self, kind: StoreKind) -> CdpResult<ConfigStore> {
        let path = self.path(kind);
        if !path.exists() {
            debug!(path = %path.display(), store = %kind, "store file missing, using empty store");
            return Ok(ConfigStore::new());
        }

        let content = fs::read_to_string(path)?;
        ConfigStore::parse(&content).map_err(|e| e.with_path(path))
    }

    fn save(&self, kind: StoreKind, store: &ConfigStore) -> CdpResult<()> {
        let path = self.path(kind);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let lock_path = Self::lock_path(path);
        let lock_file = fs::File::create(&lock_path)?;
        lock_file.lock_exclusive().map_err(|e| CdpError::Lock {
            path: lock_path.clone(),
            message: e.to_string(),
        })?;

        let content = if kind == StoreKind::Credentials
            && !path.exists()
            && store.preamble().is_empty()
        {
            let mut annotated = store.clone();
            annotated.set_preamble(CREDENTIALS_PREAMBLE);
            annotated.to_ini_string()?
        } else {
            store.to_ini_string()?
        };

        let result = self.write_to_disk(kind, path, &content);

        if let Err(e) = lock_file.unlock() {
            debug!(path = %lock_path.display(), error = %e, "unable to release store lock");
        }
        if result.is_ok() {
            info!(path = %path.display(), store = %kind, "wrote store");
        }
        result
    }
}

#[cfg(unix)]
fn set_store_permissions(file: &fs::File, kind: StoreKind) -> CdpResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = match kind {
        StoreKind::Credentials => 0o600,
        StoreKind::Config => 0o644,
    };
    file.set_permissions(fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_store_permissions(_file: &fs::File, _kind: StoreKind) -> CdpResult<()> {
    Ok(())
}
