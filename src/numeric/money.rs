// ============================================================================
// Money
// Cents-backed currency value with a cached canonical dollar string
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::grammar::{self, CENTS_PER_UNIT};
use crate::domain::config::DisplayConfig;
use crate::interfaces::{ExternalValue, Scanner, Valuer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace};

/// A currency amount stored as integer cents.
///
/// The canonical text form (`[-]$D.DD`) is cached alongside the cents and
/// recomputed by every mutator, so `as_str()` never formats.
///
/// # Value Range
/// - Minimum: -$92233720368547758.08
/// - Maximum: $92233720368547758.07
/// - Precision: one cent. Literals may carry up to four fraction digits;
///   everything past the second is truncated.
///
/// # Example
/// ```
/// use cents_money::numeric::Money;
///
/// let mut m: Money = "$1,234.5".parse()?;
/// assert_eq!(m.as_cents(), 123450);
/// m.add(-123500);
/// assert_eq!(m.as_str(), "-$0.50");
/// # Ok::<(), cents_money::numeric::MoneyError>(())
/// ```
#[derive(Clone)]
pub struct Money {
    cents: i64,
    display: String,
}

impl Money {
    /// Zero amount (`$0.00`)
    pub fn zero() -> Self {
        Self::from_cents(0)
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an amount in cents. Always succeeds.
    #[inline]
    pub fn from_cents(amount: i64) -> Self {
        Self {
            cents: amount,
            display: render(amount),
        }
    }

    /// Parse a money literal such as `"$10.05"`, `"-1,234.5"` or `"($3)"`.
    ///
    /// # Errors
    /// See [`Money::set_from_string`].
    pub fn parse(amount: &str) -> MoneyResult<Self> {
        let mut money = Self::zero();
        money.set_from_string(amount)?;
        Ok(money)
    }

    /// Create from a `rust_decimal::Decimal` amount in currency units.
    ///
    /// Precision past the cent is truncated toward zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the amount does not fit in i64 cents.
    pub fn from_decimal(amount: rust_decimal::Decimal) -> MoneyResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        amount
            .checked_mul(rust_decimal::Decimal::from(CENTS_PER_UNIT))
            .and_then(|scaled| scaled.trunc().to_i64())
            .map(Self::from_cents)
            .ok_or(MoneyError::Overflow)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Replace the amount with the value of a money literal.
    ///
    /// A literal is negative when it contains a `-` anywhere. Parentheses
    /// are accepted but do not make it negative. On error the receiver is
    /// left untouched.
    ///
    /// # Errors
    /// - `InvalidFormat` if the literal does not match the money grammar
    /// - `NumericParseFailure` if the numeral does not fit in i64 cents
    pub fn set_from_string(&mut self, amount: &str) -> MoneyResult<()> {
        let negative = amount.contains('-');
        let stripped = amount.replace(',', "");

        if !grammar::is_valid_literal(&stripped) {
            debug!(literal = amount, "rejected money literal");
            return Err(MoneyError::InvalidFormat(stripped));
        }

        // The numeral only carries its own sign when `-` sits directly on it
        let cents = grammar::numeral_to_cents(&grammar::numeral_segment(&stripped), negative)?;

        trace!(literal = amount, cents, "parsed money literal");
        self.set_cents(cents);
        Ok(())
    }

    /// Replace the amount with a number of cents.
    #[inline]
    pub fn set_cents(&mut self, amount: i64) {
        self.cents = amount;
        self.display = render(amount);
    }

    /// Add (or, with a negative amount, subtract) cents.
    ///
    /// Wraps around on i64 overflow; use [`Money::checked_add`] when the
    /// operands are not known to be in range.
    #[inline]
    pub fn add(&mut self, amount: i64) {
        self.set_cents(self.cents.wrapping_add(amount));
    }

    /// Checked addition of cents.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_add(&self, amount: i64) -> MoneyResult<Self> {
        self.cents
            .checked_add(amount)
            .map(Self::from_cents)
            .ok_or(MoneyError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Amount in cents, so `$1.20` is `120`.
    #[inline]
    pub const fn as_cents(&self) -> i64 {
        self.cents
    }

    /// Canonical text form, suitable for a database text column.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.display
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.cents == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.cents < 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Convert to `rust_decimal::Decimal` in currency units (scale 2).
    pub fn to_decimal(&self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::new(self.cents, 2)
    }

    /// Render for presentation with a custom [`DisplayConfig`].
    ///
    /// Persistence always uses [`Money::as_str`].
    pub fn format_with(&self, config: &DisplayConfig) -> String {
        config.format(self.cents)
    }
}

// ============================================================================
// Canonical Rendering
// ============================================================================

/// Split cents into sign, whole units and the two-digit fraction.
pub(crate) fn split_cents(cents: i64) -> (bool, u64, u64) {
    let magnitude = cents.unsigned_abs();
    let per_unit = CENTS_PER_UNIT as u64;
    (cents < 0, magnitude / per_unit, magnitude % per_unit)
}

/// Canonical `[-]$D.DD` form of a cents amount.
pub(crate) fn render(cents: i64) -> String {
    let (negative, whole, fraction) = split_cents(cents);
    let sign = if negative { "-" } else { "" };
    format!("{sign}${whole}.{fraction:02}")
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Money {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Money {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cents == other.cents
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.cents.cmp(&other.cents)
    }
}

impl Hash for Money {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cents.hash(state);
    }
}

impl From<i64> for Money {
    #[inline]
    fn from(cents: i64) -> Self {
        Self::from_cents(cents)
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({}, cents={})", self.display, self.cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.display)
    }
}

// ============================================================================
// Persistence Adapter
// ============================================================================

impl Scanner for Money {
    /// Accepts only byte sequences. Any failure clears the receiver to zero.
    fn scan(&mut self, value: &ExternalValue) -> MoneyResult<()> {
        let result = match value {
            ExternalValue::Null => Err(MoneyError::NilNotAllowed),
            ExternalValue::Bytes(raw) => self.set_from_string(&String::from_utf8_lossy(raw)),
            other => Err(MoneyError::WrongExternalType(other.type_name())),
        };

        if let Err(err) = &result {
            debug!(error = %err, "money scan failed");
            self.set_cents(0);
        }
        result
    }
}

impl Valuer for Money {
    fn value(&self) -> MoneyResult<ExternalValue> {
        Ok(ExternalValue::Text(self.display.clone()))
    }
}

// ============================================================================
// Serde (canonical string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Money {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&literal).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
