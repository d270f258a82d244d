// ============================================================================
// Persistence Interface
// Two-method adapter contract between money values and a database driver
// ============================================================================

use crate::numeric::MoneyResult;

/// A dynamically typed value as exchanged with a database driver.
///
/// Drivers hand text columns over as raw bytes; the other variants exist so
/// that adapters can reject them explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalValue {
    /// SQL NULL
    Null,
    /// Raw column bytes
    Bytes(Vec<u8>),
    /// Decoded text (produced by [`Valuer::value`])
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ExternalValue {
    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ExternalValue::Null => "null",
            ExternalValue::Bytes(_) => "bytes",
            ExternalValue::Text(_) => "text",
            ExternalValue::Int(_) => "int",
            ExternalValue::Float(_) => "float",
            ExternalValue::Bool(_) => "bool",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, ExternalValue::Null)
    }

    /// Text content, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExternalValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&[u8]> for ExternalValue {
    fn from(raw: &[u8]) -> Self {
        ExternalValue::Bytes(raw.to_vec())
    }
}

impl From<Vec<u8>> for ExternalValue {
    fn from(raw: Vec<u8>) -> Self {
        ExternalValue::Bytes(raw)
    }
}

impl From<Option<&[u8]>> for ExternalValue {
    fn from(raw: Option<&[u8]>) -> Self {
        raw.map_or(ExternalValue::Null, ExternalValue::from)
    }
}

/// Populate a value from a driver-supplied column.
pub trait Scanner {
    /// Replace `self` with the contents of `value`.
    fn scan(&mut self, value: &ExternalValue) -> MoneyResult<()>;
}

/// Produce the driver-side representation of a value.
pub trait Valuer {
    fn value(&self) -> MoneyResult<ExternalValue>;
}
