//! Domain Services
//!
//! Pure resolution logic: no file access, no process environment reads.
//! Inputs arrive as loaded stores and an `Environment` snapshot.

pub mod form_factor;
pub mod name_resolver;
pub mod profile_resolver;
pub mod value_chain;

pub use profile_resolver::{active_profile, ActiveProfile, ProfileOrigin};
pub use value_chain::ChainInputs;
