//! Form field schema shared by every admin tab

use crate::error::{ConsoleError, ConsoleResult};
use crate::master::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// `YYYY-MM-DD`
    Date,
    /// `HH:MM`
    Time,
    Flag,
    /// Choice among loaded records, optionally narrowed by another field
    Select {
        source: ResourceKind,
        parent: Option<&'static str>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire-style field name used by `set`/`get`
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn select(name: &'static str, label: &'static str, source: ResourceKind) -> Self {
        Self::new(name, label, FieldKind::Select { source, parent: None })
    }

    pub const fn under(mut self, parent: &'static str) -> Self {
        if let FieldKind::Select { source, .. } = self.kind {
            self.kind = FieldKind::Select {
                source,
                parent: Some(parent),
            };
        }
        self
    }
}

/// Editable form state for one entity
///
/// Values are held as entered; coercion happens when the payload is built.
pub trait Draft: Default + Clone + Send + Sync {
    const ENTITY: &'static str;

    /// Write one field; dependent selections are cleared as needed
    fn set(&mut self, field: &str, value: &str) -> ConsoleResult<()>;

    fn get(&self, field: &str) -> Option<String>;

    fn unknown(field: &str) -> ConsoleError {
        ConsoleError::UnknownField {
            entity: Self::ENTITY,
            field: field.to_string(),
        }
    }
}

/// Checkbox-style input
pub fn parse_flag(label: &str, value: &str) -> ConsoleResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Ok(true),
        "false" | "no" | "n" | "0" | "off" | "" => Ok(false),
        other => Err(ConsoleError::validation(format!(
            "{label} must be yes or no, got `{other}`"
        ))),
    }
}

/// Required integer
pub fn parse_number(label: &str, value: &str) -> ConsoleResult<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| ConsoleError::validation(format!("{label} must be a number")))
}

/// Integer where blank means absent
pub fn parse_optional_number(label: &str, value: &str) -> ConsoleResult<Option<i64>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_number(label, value).map(Some)
}

/// Integer where blank means zero
pub fn parse_count(label: &str, value: &str) -> ConsoleResult<i64> {
    Ok(parse_optional_number(label, value)?.unwrap_or(0))
}

pub fn flag_text(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}
