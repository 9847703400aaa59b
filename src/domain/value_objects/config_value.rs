//! Typed option values and where they came from

use super::StoreKind;

/// A validated option value.
///
/// `enum` options validate to `String` holding one of the declared choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedValue {
    String(String),
    Integer(i64),
    Boolean(bool),
}

impl TypedValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypedValue::String(s) => f.write_str(s),
            TypedValue::Integer(i) => write!(f, "{}", i),
            TypedValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Which step of the resolution chain supplied a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Given on the command line
    Flag,
    /// Read from the named environment variable
    Env(String),
    /// Read from the active profile's section of a store
    Store(StoreKind),
    /// The option's declared default
    Default,
}

impl ValueSource {
    /// Source type label, as shown by `configure list`.
    pub fn source_type(&self) -> &'static str {
        match self {
            ValueSource::Flag => "manual",
            ValueSource::Env(_) => "env",
            ValueSource::Store(kind) => kind.source_type(),
            ValueSource::Default => "default",
        }
    }
}
