//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod ini_store;

pub use ini_store::{IniStoreRepository, CREDENTIALS_PREAMBLE};
