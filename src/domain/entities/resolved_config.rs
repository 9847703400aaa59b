//! ResolvedConfig entity - the effective settings of one invocation
//!
//! Built once by the value resolution chain and never mutated afterwards.
//! Each value remembers where it came from so `configure list` and debug
//! logging can explain it; consumers that only need values can ignore that.

use std::collections::BTreeMap;

use crate::domain::services::profile_resolver::ActiveProfile;
use crate::domain::value_objects::{FormFactor, TypedValue, ValueSource};

/// One resolved value and its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    pub value: TypedValue,
    pub source: ValueSource,
}

impl ResolvedValue {
    pub fn new(value: TypedValue, source: ValueSource) -> Self {
        Self { value, source }
    }
}

/// Destination name → resolved value, plus the invocation's profile and
/// form factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    profile: ActiveProfile,
    values: BTreeMap<String, ResolvedValue>,
    form_factor: FormFactor,
}

impl ResolvedConfig {
    pub fn new(
        profile: ActiveProfile,
        values: BTreeMap<String, ResolvedValue>,
        form_factor: FormFactor,
    ) -> Self {
        Self {
            profile,
            values,
            form_factor,
        }
    }

    pub fn profile(&self) -> &ActiveProfile {
        &self.profile
    }

    pub fn form_factor(&self) -> FormFactor {
        self.form_factor
    }

    pub fn entry(&self, dest: &str) -> Option<&ResolvedValue> {
        self.values.get(dest)
    }

    pub fn get(&self, dest: &str) -> Option<&TypedValue> {
        self.entry(dest).map(|r| &r.value)
    }

    pub fn source(&self, dest: &str) -> Option<&ValueSource> {
        self.entry(dest).map(|r| &r.source)
    }

    pub fn get_str(&self, dest: &str) -> Option<&str> {
        self.get(dest).and_then(TypedValue::as_str)
    }

    pub fn get_integer(&self, dest: &str) -> Option<i64> {
        self.get(dest).and_then(TypedValue::as_integer)
    }

    /// Boolean value of `dest`; absent counts as `false`.
    pub fn is_set(&self, dest: &str) -> bool {
        self.get(dest).and_then(TypedValue::as_bool).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
