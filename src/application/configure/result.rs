//! Configure result types

use crate::domain::value_objects::{QualifiedName, StoreKind};

/// Outcome of `configure get`
///
/// An absent value is an ordinary outcome, not an error: the CLI reports it
/// through the exit status only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetOutcome {
    Found(String),
    NotFound,
}

impl GetOutcome {
    pub fn value(&self) -> Option<&str> {
        match self {
            GetOutcome::Found(value) => Some(value),
            GetOutcome::NotFound => None,
        }
    }
}

/// Where `configure set` wrote a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetResult {
    pub name: QualifiedName,
    pub store: StoreKind,
    /// Physical section name in `store`
    pub section: String,
}
