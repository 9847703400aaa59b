//! Domain Entities
//!
//! Core objects with identity and lifecycle.

mod config_store;
mod resolved_config;
mod store_pair;

pub use config_store::{check_key, check_section_name, ConfigStore, Section};
pub use resolved_config::{ResolvedConfig, ResolvedValue};
pub use store_pair::{StoreHit, StorePair};
