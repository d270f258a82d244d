// ============================================================================
// Money Errors
// Error types for money parsing, arithmetic and persistence scanning
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing, adjusting or scanning money values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoneyError {
    /// Literal does not match the money grammar (carries the offending text)
    InvalidFormat(String),
    /// Grammar matched but the numeral could not be represented as cents
    NumericParseFailure(String),
    /// A non-nullable scan received a null external value
    NilNotAllowed,
    /// External value was not a byte sequence (carries the received type)
    WrongExternalType(&'static str),
    /// Checked arithmetic left the i64 cents range
    Overflow,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::InvalidFormat(value) => write!(
                f,
                "invalid format: string does not appear to be a money value: {value:?}"
            ),
            MoneyError::NumericParseFailure(numeral) => {
                write!(f, "numeric parse failure: {numeral:?} is out of range for cents")
            },
            MoneyError::NilNotAllowed => {
                write!(f, "value cannot be null, use NullMoney instead")
            },
            MoneyError::WrongExternalType(kind) => {
                write!(f, "wrong external type: expected bytes, got {kind}")
            },
            MoneyError::Overflow => write!(f, "arithmetic overflow: cents out of range"),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
