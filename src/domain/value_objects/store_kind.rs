//! Store kind value object - which persisted store a key belongs to
//!
//! Credential keys live in the shared credentials file; everything else
//! lives in the config file.

/// Keys that are always routed to the credentials store.
pub const CREDENTIAL_KEYS: [&str; 3] = ["cdp_access_key_id", "cdp_private_key", "cdp_access_token"];

/// Key holding the access key id
pub const ACCESS_KEY_ID_KEY: &str = "cdp_access_key_id";

/// Key holding the PEM private key (stored with escaped newlines)
pub const PRIVATE_KEY_KEY: &str = "cdp_private_key";

/// Returns true if `key` is one of the fixed credential keys.
pub fn is_credential_key(key: &str) -> bool {
    CREDENTIAL_KEYS.contains(&key)
}

/// One of the two persisted key-value stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    /// `~/.cdp/config`
    Config,
    /// `~/.cdp/credentials`
    Credentials,
}

impl StoreKind {
    /// Store a key is routed to by default.
    pub fn for_key(key: &str) -> Self {
        if is_credential_key(key) {
            StoreKind::Credentials
        } else {
            StoreKind::Config
        }
    }

    /// The other store.
    pub fn other(self) -> Self {
        match self {
            StoreKind::Config => StoreKind::Credentials,
            StoreKind::Credentials => StoreKind::Config,
        }
    }

    /// Source type label used by `configure list`.
    pub fn source_type(self) -> &'static str {
        match self {
            StoreKind::Config => "config-file",
            StoreKind::Credentials => "shared-credentials-file",
        }
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKind::Config => write!(f, "config"),
            StoreKind::Credentials => write!(f, "credentials"),
        }
    }
}
