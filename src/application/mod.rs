//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ConfigureUseCase` - `configure get` / `configure set` against the stores
//! - `ConfigList` - the `configure list` table
//! - `ResolveUseCase` - Builds the `ResolvedConfig` of an invocation

pub mod configure;
pub mod resolve;

pub use configure::{ConfigList, ConfigureUseCase, GetOutcome, SetResult};
pub use resolve::{resolve_config, ResolveUseCase};
