//! Domain Value Objects
//!
//! Immutable value types that represent configuration concepts.

mod config_value;
mod form_factor;
mod qualified_name;
mod section_ref;
mod store_kind;

pub use config_value::{TypedValue, ValueSource};
pub use form_factor::FormFactor;
pub use qualified_name::QualifiedName;
pub use section_ref::SectionRef;
pub use store_kind::{
    is_credential_key, StoreKind, ACCESS_KEY_ID_KEY, CREDENTIAL_KEYS, PRIVATE_KEY_KEY,
};
