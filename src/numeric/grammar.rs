// ============================================================================
// Money Grammar
// Literal validation and numeral-to-cents conversion
// ============================================================================
//
// Accepted literals (after thousands separators are stripped):
//   optional `-`, optional `(`, optional `$`, whitespace, optional `-`,
//   whitespace, optional `(`, a numeral with 0-4 fraction digits and at
//   least one digit overall, optional `)`.
//
// Digits and whitespace are ASCII only. Parentheses are tolerated but
// never flip the sign.

use super::errors::{MoneyError, MoneyResult};
use regex::Regex;
use std::sync::OnceLock;

static MONEY_RE: OnceLock<Regex> = OnceLock::new();

/// Number of cents in one currency unit
pub(crate) const CENTS_PER_UNIT: i64 = 100;

/// Fraction digits kept in the cents representation
const CENT_DIGITS: usize = 2;

fn money_grammar() -> &'static Regex {
    MONEY_RE.get_or_init(|| {
        Regex::new(
            r"^-?\(?\$?[\t\n\f\r ]*-?[\t\n\f\r ]*\(?([0-9]*\.[0-9]{1,4}|[0-9]+(\.[0-9]{0,4})?)\)?$",
        )
        .expect("money grammar is a valid regex")
    })
}

/// Check a comma-stripped literal against the money grammar.
pub(crate) fn is_valid_literal(literal: &str) -> bool {
    money_grammar().is_match(literal)
}

/// Extract the numeral from a validated literal.
///
/// Takes the text after the last `$` and drops the parentheses and
/// whitespace the grammar tolerates around it.
pub(crate) fn numeral_segment(literal: &str) -> String {
    let tail = literal.rsplit('$').next().unwrap_or(literal);
    tail.chars()
        .filter(|c| *c != '(' && *c != ')' && !c.is_ascii_whitespace())
        .collect()
}

/// Convert a numeral such as `-10.0599` into cents, truncating toward zero.
///
/// The result is negative when the numeral carries a leading `-` or when
/// `force_negative` is set (a `-` appeared elsewhere in the literal). The
/// magnitude is accumulated unsigned so the full i64 range parses.
pub(crate) fn numeral_to_cents(numeral: &str, force_negative: bool) -> MoneyResult<i64> {
    let failure = || MoneyError::NumericParseFailure(numeral.to_string());

    let (is_negative, unsigned) = match numeral.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, numeral),
    };

    let (int_str, frac_str) = match unsigned.find('.') {
        Some(pos) => (&unsigned[..pos], &unsigned[pos + 1..]),
        None => (unsigned, ""),
    };

    if int_str.is_empty() && frac_str.is_empty() {
        return Err(failure());
    }
    if !int_str.bytes().all(|b| b.is_ascii_digit()) || !frac_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(failure());
    }

    let whole: u64 = if int_str.is_empty() {
        0
    } else {
        int_str.parse().map_err(|_| failure())?
    };

    // Digits past the cent position are discarded, not rounded
    let kept = &frac_str[..frac_str.len().min(CENT_DIGITS)];
    let padded = format!("{kept:0<width$}", width = CENT_DIGITS);
    let fraction: u64 = padded.parse().map_err(|_| failure())?;

    let magnitude = whole
        .checked_mul(CENTS_PER_UNIT as u64)
        .and_then(|scaled| scaled.checked_add(fraction))
        .ok_or_else(failure)?;

    let cents = if is_negative || force_negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    cents.ok_or_else(failure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_documented_forms() {
        for literal in [
            "$10.05",
            "10",
            "-$10",
            "$-10",
            "-10.05",
            "($10.00)",
            "-($10.00)",
            "$ 10.5",
            "- 10",
            ".5",
            "10.",
            "1234234.23",
            "0.1234",
        ] {
            assert!(is_valid_literal(literal), "expected {literal:?} to be valid");
        }
    }

    #[test]
    fn test_rejects_malformed_forms() {
        for literal in [
            "", "$", ".", "-", "abc", "$10.12345", "10-", "$$10", "10 ", "1e5", "(($10))",
            "\u{ff11}\u{ff10}", "$\u{0661}\u{0660}.05", "$\u{a0}10", "-\u{2003}5",
        ] {
            assert!(!is_valid_literal(literal), "expected {literal:?} to be invalid");
        }
    }

    #[test]
    fn test_numeral_segment() {
        assert_eq!(numeral_segment("-$10.05"), "10.05");
        assert_eq!(numeral_segment("$-10"), "-10");
        assert_eq!(numeral_segment("($10.00)"), "10.00");
        assert_eq!(numeral_segment("$ ( 7)"), "7");
        assert_eq!(numeral_segment("-10"), "-10");
    }

    #[test]
    fn test_numeral_to_cents() {
        assert_eq!(numeral_to_cents("10.05", false), Ok(1005));
        assert_eq!(numeral_to_cents("10", false), Ok(1000));
        assert_eq!(numeral_to_cents("-10.05", false), Ok(-1005));
        assert_eq!(numeral_to_cents(".5", false), Ok(50));
        assert_eq!(numeral_to_cents("10.", false), Ok(1000));
        assert_eq!(numeral_to_cents("-0", false), Ok(0));
    }

    #[test]
    fn test_numeral_truncates_extra_precision() {
        assert_eq!(numeral_to_cents("1.2399", false), Ok(123));
        assert_eq!(numeral_to_cents("-1.2399", false), Ok(-123));
        assert_eq!(numeral_to_cents("0.009", false), Ok(0));
    }

    #[test]
    fn test_numeral_out_of_range() {
        let huge = "92233720368547758.08";
        assert_eq!(
            numeral_to_cents(huge, false),
            Err(MoneyError::NumericParseFailure(huge.to_string()))
        );
        assert!(numeral_to_cents("99999999999999999999", false).is_err());
    }

    #[test]
    fn test_numeral_forced_sign() {
        assert_eq!(numeral_to_cents("10.05", true), Ok(-1005));
        assert_eq!(numeral_to_cents("-10.05", true), Ok(-1005));
        assert_eq!(numeral_to_cents("0", true), Ok(0));
    }

    #[test]
    fn test_numeral_full_i64_range() {
        assert_eq!(numeral_to_cents("92233720368547758.08", true), Ok(i64::MIN));
        assert_eq!(numeral_to_cents("-92233720368547758.08", false), Ok(i64::MIN));
        assert_eq!(numeral_to_cents("92233720368547758.07", false), Ok(i64::MAX));
        assert!(numeral_to_cents("92233720368547758.09", true).is_err());
    }

    #[test]
    fn test_numeral_rejects_stray_signs() {
        assert!(numeral_to_cents("--10", false).is_err());
        assert!(numeral_to_cents("", false).is_err());
        assert!(numeral_to_cents(".", false).is_err());
    }
}
