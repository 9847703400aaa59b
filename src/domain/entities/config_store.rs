//! ConfigStore entity - an ordered collection of INI sections
//!
//! Domain view of the config and credentials files. Reading and writing the
//! INI text goes through `rust-ini`; file access lives in
//! `infrastructure::repositories`.

use std::path::PathBuf;

use ini::{EscapePolicy, Ini, LineSeparator, ParseOption, WriteOption};

use crate::error::{CdpError, CdpResult};

/// A named section with ordered, unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert or overwrite `key`; an existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered sequence of sections, plus the comment block heading the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    preamble: Vec<String>,
    sections: Vec<Section>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI text.
    ///
    /// Errors carry the 1-based line number; the path is left empty for the
    /// caller to fill in with [`CdpError::with_path`].
    pub fn parse(text: &str) -> CdpResult<Self> {
        let ini = Ini::load_from_str_opt(text, parse_option()).map_err(|e| CdpError::Parse {
            path: PathBuf::new(),
            line: e.line,
            message: e.msg.to_string(),
        })?;

        let mut store = ConfigStore {
            preamble: leading_comments(text),
            sections: Vec::new(),
        };

        for (name, properties) in ini.iter() {
            let Some(name) = name else {
                if !properties.is_empty() {
                    return Err(parse_error(
                        first_pair_before_header(text),
                        "key/value pair found before any section header",
                    ));
                }
                continue;
            };

            let name = name.trim();
            if name.is_empty() {
                return Err(parse_error(
                    line_where(text, |l| l.starts_with('[') && l[1..].trim() == "]"),
                    "empty section name",
                ));
            }

            // A repeated header reopens the earlier section.
            let section = store.ensure_section(name);
            for (key, value) in properties.iter() {
                if key.is_empty() {
                    return Err(parse_error(
                        line_where(text, |l| l.starts_with('=') || l.starts_with(':')),
                        "empty key",
                    ));
                }
                // A line with no separator runs into the next one.
                if key.contains(['\n', '\r']) {
                    return Err(parse_error(
                        line_where(text, |l| key.starts_with(l) && !l.is_empty()),
                        "expected 'key = value'",
                    ));
                }
                section.set(key, value);
            }
        }

        Ok(store)
    }

    /// Serialise back to INI text, sections in their current order.
    pub fn to_ini_string(&self) -> CdpResult<String> {
        let mut ini = Ini::new();
        for section in &self.sections {
            let mut setter = ini.with_section(Some(section.name()));
            for (key, value) in section.iter() {
                setter.set(key, value);
            }
        }

        let mut body = Vec::new();
        ini.write_to_opt(&mut body, write_option())?;

        let mut out = String::new();
        for comment in &self.preamble {
            out.push_str(comment);
            out.push('\n');
        }
        if !self.preamble.is_empty() && !self.sections.is_empty() {
            out.push('\n');
        }
        out.push_str(&String::from_utf8_lossy(&body));
        Ok(out)
    }

    pub fn get_section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn get_section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Existing section, or a new empty one appended at the end.
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        let index = self.position_or_append(name);
        &mut self.sections[index]
    }

    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        let index = self.sections.iter().position(|s| s.name == name)?;
        Some(self.sections.remove(index))
    }

    /// Value of `key` in section `section`, if both exist.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.get_section(section).and_then(|s| s.get(key))
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn preamble(&self) -> &[String] {
        &self.preamble
    }

    /// Replace the leading comment block. Lines without a comment marker
    /// are prefixed with `# `.
    pub fn set_preamble<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.preamble = lines
            .into_iter()
            .map(|line| {
                let line = line.as_ref().trim();
                if line.starts_with('#') || line.starts_with(';') {
                    line.to_string()
                } else {
                    format!("# {}", line).trim_end().to_string()
                }
            })
            .collect();
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.preamble.is_empty()
    }

    fn position_or_append(&mut self, name: &str) -> usize {
        match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        }
    }
}

/// Check that `key` survives a write and a re-read unchanged.
pub fn check_key(key: &str) -> CdpResult<()> {
    let reason = if key.is_empty() {
        Some("the key is empty")
    } else if key.trim() != key {
        Some("the key has leading or trailing whitespace")
    } else if key.contains(['=', ':', '\n', '\r']) {
        Some("the key contains '=', ':' or a line break")
    } else if key.starts_with(['[', '#', ';']) {
        Some("the key starts with '[', '#' or ';'")
    } else {
        None
    };
    reason.map_or(Ok(()), |reason| Err(invalid_name(key, reason)))
}

/// Check that `name` can be written as a `[section]` header.
pub fn check_section_name(name: &str) -> CdpResult<()> {
    let reason = if name.is_empty() {
        Some("the section name is empty")
    } else if name.trim() != name {
        Some("the section name has leading or trailing whitespace")
    } else if name.contains(['[', ']', '\n', '\r']) {
        Some("the section name contains a bracket or a line break")
    } else {
        None
    };
    reason.map_or(Ok(()), |reason| Err(invalid_name(name, reason)))
}

fn invalid_name(name: &str, reason: &str) -> CdpError {
    CdpError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_option() -> ParseOption {
    // Values are taken verbatim: private keys carry literal `\n` sequences.
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

fn write_option() -> WriteOption {
    WriteOption {
        escape_policy: EscapePolicy::Nothing,
        line_separator: LineSeparator::CR,
        kv_separator: " = ",
    }
}

/// Comment lines ahead of the first section header.
fn leading_comments(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take_while(|line| line.starts_with('#') || line.starts_with(';'))
        .map(str::to_string)
        .collect()
}

/// 1-based number of the first trimmed line matching `pred`, 0 if none.
fn line_where(text: &str, pred: impl Fn(&str) -> bool) -> usize {
    text.lines()
        .position(|line| pred(line.trim()))
        .map_or(0, |index| index + 1)
}

fn first_pair_before_header(text: &str) -> usize {
    let header = line_where(text, |l| l.starts_with('['));
    let pair = line_where(text, |l| {
        !l.is_empty() && !l.starts_with('#') && !l.starts_with(';') && !l.starts_with('[')
    });
    if header == 0 || pair < header {
        pair
    } else {
        0
    }
}

fn parse_error(line: usize, message: &str) -> CdpError {
    CdpError::Parse {
        path: PathBuf::new(),
        line,
        message: message.to_string(),
    }
}
