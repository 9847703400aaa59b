//! Windows-compatible test environment helpers.
//!
//! On Windows, `dirs::home_dir()` uses the system API, not environment
//! variables like `HOME` or `USERPROFILE`, so setting those in tests has no
//! effect there. `CDP_TEST_HOME` overrides the home directory on every
//! platform.

use std::path::Path;
use std::process::Command;

/// Variables read by `cdp` that must not leak in from the developer's shell.
pub const CDP_ENV_VARS: [&str; 10] = [
    "CDP_DEFAULT_PROFILE",
    "CDP_PROFILE",
    "CDP_CONFIG_FILE",
    "CDP_SHARED_CREDENTIALS_FILE",
    "CDP_ACCESS_KEY_ID",
    "CDP_PRIVATE_KEY",
    "CDP_ACCESS_TOKEN",
    "CDP_CA_BUNDLE",
    "CDP_REGION",
    "RUST_LOG",
];

/// Extension trait for Command to add Windows-compatible home directory setup.
///
/// # Example
///
/// ```ignore
/// use common::windows::WindowsCompatExt;
///
/// Command::new(bin())
///     .with_test_home(&home)
///     .args(["configure", "list"])
///     .output()
///     .unwrap();
/// ```
pub trait WindowsCompatExt {
    /// Point every home lookup at `home` and clear inherited `CDP_*` variables.
    ///
    /// This sets:
    /// - `HOME` (Unix)
    /// - `USERPROFILE` (Windows fallback for some crates)
    /// - `CDP_TEST_HOME` (overrides `dirs::home_dir()` for the store paths)
    fn with_test_home(&mut self, home: &Path) -> &mut Self;
}

impl WindowsCompatExt for Command {
    fn with_test_home(&mut self, home: &Path) -> &mut Self {
        for var in CDP_ENV_VARS {
            self.env_remove(var);
        }
        self.env("HOME", home)
            .env("USERPROFILE", home)
            .env("CDP_TEST_HOME", home)
    }
}
