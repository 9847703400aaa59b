//! cdpcli - configuration and argument resolution for the CDP command line client
//!
//! Merges command-line flags, environment variables, named profiles and the
//! persisted config/credentials files into one set of effective settings
//! per invocation, and validates raw flag input against a declarative
//! option schema.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{resolve_config, ConfigureUseCase, GetOutcome, ResolveUseCase};
pub use config::{EngineConfig, Environment};
pub use domain::entities::{ConfigStore, ResolvedConfig, Section, StorePair};
pub use domain::schema::Schema;
pub use domain::value_objects::{FormFactor, QualifiedName, SectionRef, StoreKind, TypedValue};
pub use error::{CdpError, CdpResult};
pub use infrastructure::IniStoreRepository;
