// ============================================================================
// Display Configuration
// Presentation formats for money values (persistence stays canonical)
// ============================================================================

use crate::numeric::split_cents;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Negative Style
// ============================================================================

/// How negative amounts are marked in presentation text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NegativeStyle {
    /// `-$5.34`
    LeadingMinus,

    /// `($5.34)`
    /// Note: the money parser does not treat parentheses as negation, so
    /// this form reads back as a positive amount.
    Parentheses,
}

// ============================================================================
// Display Configuration
// ============================================================================

/// Configuration for rendering money as presentation text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Currency marker placed before the amount (e.g. "$")
    pub symbol: String,

    /// Optional thousands separator for the whole part
    /// None means digits are not grouped
    pub thousands_separator: Option<char>,

    /// Negative amount marking
    pub negative_style: NegativeStyle,
}

impl DisplayConfig {
    /// Create a new configuration with the given currency marker
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            thousands_separator: None,
            negative_style: NegativeStyle::LeadingMinus,
        }
    }

    /// Builder method: Set thousands separator
    pub fn with_thousands_separator(mut self, separator: char) -> Self {
        self.thousands_separator = Some(separator);
        self
    }

    /// Builder method: Set negative style
    pub fn with_negative_style(mut self, style: NegativeStyle) -> Self {
        self.negative_style = style;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.symbol.is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }

        if self.symbol.chars().any(is_reserved) {
            return Err("Symbol cannot contain digits, signs or parentheses".to_string());
        }

        if let Some(separator) = self.thousands_separator {
            if is_reserved(separator) {
                return Err("Thousands separator cannot be a digit, sign or parenthesis".to_string());
            }
        }

        Ok(())
    }

    /// Render a cents amount with this configuration.
    pub fn format(&self, cents: i64) -> String {
        let (negative, whole, fraction) = split_cents(cents);
        let whole = match self.thousands_separator {
            Some(separator) => group_digits(whole, separator),
            None => whole.to_string(),
        };
        let body = format!("{}{}.{:02}", self.symbol, whole, fraction);

        match (negative, self.negative_style) {
            (false, _) => body,
            (true, NegativeStyle::LeadingMinus) => format!("-{body}"),
            (true, NegativeStyle::Parentheses) => format!("({body})"),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::canonical()
    }
}

fn is_reserved(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '(' | ')')
}

fn group_digits(whole: u64, separator: char) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl DisplayConfig {
    /// Canonical storage form: `-$1234234.23`
    pub fn canonical() -> Self {
        Self::new("$")
    }

    /// Grouped form: `-$1,234,234.23` (parses back to the same amount)
    pub fn grouped() -> Self {
        Self::new("$").with_thousands_separator(',')
    }

    /// Accounting form: `($1,234,234.23)`
    pub fn accounting() -> Self {
        Self::grouped().with_negative_style(NegativeStyle::Parentheses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Money;

    #[test]
    fn test_canonical_matches_storage_form() {
        for cents in [0, 5, -66, 123423423, -12342342305, i64::MIN, i64::MAX] {
            let m = Money::from_cents(cents);
            assert_eq!(m.format_with(&DisplayConfig::canonical()), m.as_str());
        }
    }

    #[test]
    fn test_grouped() {
        let config = DisplayConfig::grouped();
        assert_eq!(config.format(123423423), "$1,234,234.23");
        assert_eq!(config.format(-12342342300), "-$123,423,423.00");
        assert_eq!(config.format(99999), "$999.99");
        assert_eq!(config.format(100000), "$1,000.00");
        assert_eq!(config.format(0), "$0.00");
    }

    #[test]
    fn test_grouped_parses_back() {
        let config = DisplayConfig::grouped();
        for cents in [0, 1, -100000, 123423423, -12342342305] {
            let text = config.format(cents);
            assert_eq!(Money::parse(&text).unwrap().as_cents(), cents, "text {text:?}");
        }
    }

    #[test]
    fn test_accounting() {
        let config = DisplayConfig::accounting();
        assert_eq!(config.format(-534), "($5.34)");
        assert_eq!(config.format(534), "$5.34");
    }

    #[test]
    fn test_builder_pattern() {
        let config = DisplayConfig::new("USD ")
            .with_thousands_separator(' ')
            .with_negative_style(NegativeStyle::Parentheses);

        assert_eq!(config.thousands_separator, Some(' '));
        assert_eq!(config.format(-123456789), "(USD 1 234 567.89)");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(DisplayConfig::new("").validate().is_err());
        assert!(DisplayConfig::new("$1").validate().is_err());
        assert!(DisplayConfig::grouped()
            .with_thousands_separator('.')
            .validate()
            .is_err());
        assert!(DisplayConfig::default().validate().is_ok());
    }
}
