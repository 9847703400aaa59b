//! Domain Layer
//!
//! The resolution engine proper - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Stores and the resolved configuration (ConfigStore, StorePair, ResolvedConfig)
//! - `value_objects/` - Immutable value types (QualifiedName, StoreKind, FormFactor)
//! - `schema/` - Declared CLI options and flag validation
//! - `services/` - Name, profile and value resolution, form-factor inference
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or the process environment
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Persistence goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod schema;
pub mod services;
pub mod value_objects;
