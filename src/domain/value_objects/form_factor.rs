//! Form factor value object - public or private control plane

use std::str::FromStr;

/// Operating mode governing default endpoint computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormFactor {
    /// Public cloud control plane (default)
    #[default]
    Public,
    /// Private cloud control plane
    Private,
}

impl FormFactor {
    /// All form factors, in the order they are offered as choices
    pub const ALL: [FormFactor; 2] = [FormFactor::Public, FormFactor::Private];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormFactor::Public => "public",
            FormFactor::Private => "private",
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, FormFactor::Private)
    }
}

impl FromStr for FormFactor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(FormFactor::Public),
            "private" => Ok(FormFactor::Private),
            other => Err(format!(
                "invalid form factor '{}' (valid: public, private)",
                other
            )),
        }
    }
}

impl std::fmt::Display for FormFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
