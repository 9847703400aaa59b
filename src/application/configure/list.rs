//! `configure list` table

use crate::config::EngineConfig;
use crate::domain::entities::ResolvedConfig;
use crate::domain::schema::Schema;
use crate::domain::services::ProfileOrigin;
use crate::domain::value_objects::{is_credential_key, ValueSource};

/// Shown in place of a value nothing supplied.
pub const NOT_SET: &str = "<not set>";

/// Destinations listed after the profile row, in display order.
pub const LIST_KEYS: [&str; 6] = [
    "cdp_access_key_id",
    "cdp_private_key",
    "cdp_region",
    "cdp_endpoint_url",
    "endpoint_url",
    "form_factor",
];

const NONE: &str = "None";
const MAX_VALUE_WIDTH: usize = 30;

/// One line of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub name: String,
    /// Display value, already masked for credentials
    pub value: String,
    pub source_type: String,
    pub source: String,
}

impl ListRow {
    fn not_set(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: NOT_SET.to_string(),
            source_type: NONE.to_string(),
            source: NONE.to_string(),
        }
    }
}

/// Effective profile settings with their origins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigList {
    rows: Vec<ListRow>,
}

impl ConfigList {
    pub fn from_resolved(resolved: &ResolvedConfig, schema: &Schema, config: &EngineConfig) -> Self {
        let mut rows = Vec::with_capacity(LIST_KEYS.len() + 1);

        let profile = resolved.profile();
        rows.push(match &profile.origin {
            ProfileOrigin::Flag => ListRow {
                name: "profile".to_string(),
                value: profile.name.clone(),
                source_type: "manual".to_string(),
                source: "--profile".to_string(),
            },
            ProfileOrigin::Env(var) => ListRow {
                name: "profile".to_string(),
                value: profile.name.clone(),
                source_type: "env".to_string(),
                source: var.clone(),
            },
            ProfileOrigin::Default => ListRow::not_set("profile"),
        });

        for dest in LIST_KEYS {
            let Some(entry) = resolved.entry(dest) else {
                rows.push(ListRow::not_set(dest));
                continue;
            };

            let value = entry.value.to_string();
            let source = match &entry.source {
                ValueSource::Flag => schema
                    .by_dest(dest)
                    .map(|o| o.cli_name())
                    .unwrap_or_else(|| NONE.to_string()),
                ValueSource::Env(var) => var.clone(),
                ValueSource::Store(kind) => config.path_for(*kind).display().to_string(),
                ValueSource::Default => NONE.to_string(),
            };

            rows.push(ListRow {
                name: dest.to_string(),
                value: if is_credential_key(dest) {
                    mask_value(&value)
                } else {
                    value
                },
                source_type: entry.source.source_type().to_string(),
                source,
            });
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    /// Render the table, header included, one row per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format_row("Name", "Value", "Source Type", "Source"));
        out.push_str(&format_row("----", "-----", "-----------", "------"));
        for row in &self.rows {
            out.push_str(&format_row(
                &row.name,
                &row.value,
                &row.source_type,
                &row.source,
            ));
        }
        out
    }
}

/// Sixteen `*` followed by the last four characters.
pub fn mask_value(value: &str) -> String {
    let value = value.trim_end();
    let chars: Vec<char> = value.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}{}", "*".repeat(16), tail)
}

fn truncate(value: &str) -> String {
    if value.chars().count() > MAX_VALUE_WIDTH {
        let head: String = value.chars().take(MAX_VALUE_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        value.to_string()
    }
}

fn format_row(name: &str, value: &str, source_type: &str, source: &str) -> String {
    format!(
        "{:>20} {:>30} {:>24}    {}\n",
        name,
        truncate(value),
        source_type,
        source
    )
}
