//! Configure Use Case
//!
//! The `configure` commands:
//! - `get`: print one stored value addressed by a (possibly qualified) name
//! - `set`: write one value, routing credential keys to the credentials file
//! - `list`: show the effective profile settings and where each came from

mod list;
mod result;
mod use_case;


pub use list::{mask_value, ConfigList, ListRow, LIST_KEYS, NOT_SET};
pub use result::{GetOutcome, SetResult};
pub use use_case::ConfigureUseCase;
