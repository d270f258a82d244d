// ============================================================================
// NullMoney
// Money that may be SQL NULL
// ============================================================================

use crate::interfaces::{ExternalValue, Scanner, Valuer};
use crate::numeric::{Money, MoneyResult};
use std::fmt;
use tracing::debug;

/// A [`Money`] that may be absent, for nullable columns.
///
/// Valid exactly when it holds a value. The default is invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NullMoney {
    money: Option<Money>,
}

impl NullMoney {
    /// An invalid (null) value.
    pub const fn null() -> Self {
        Self { money: None }
    }

    /// Take ownership of `money` and become valid.
    pub fn set_money(&mut self, money: Money) {
        self.money = Some(money);
    }

    /// Drop any held value and become invalid.
    pub fn clear(&mut self) {
        self.money = None;
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.money.is_some()
    }

    #[inline]
    pub fn money(&self) -> Option<&Money> {
        self.money.as_ref()
    }

    pub fn into_inner(self) -> Option<Money> {
        self.money
    }
}

impl From<Money> for NullMoney {
    fn from(money: Money) -> Self {
        Self { money: Some(money) }
    }
}

impl From<Option<Money>> for NullMoney {
    fn from(money: Option<Money>) -> Self {
        Self { money }
    }
}

impl fmt::Display for NullMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.money {
            Some(money) => fmt::Display::fmt(money, f),
            None => f.pad("NULL"),
        }
    }
}

impl Scanner for NullMoney {
    /// `Null` is a successful scan that leaves the value invalid.
    fn scan(&mut self, value: &ExternalValue) -> MoneyResult<()> {
        if value.is_null() {
            self.clear();
            return Ok(());
        }

        let mut money = Money::zero();
        match money.scan(value) {
            Ok(()) => {
                self.set_money(money);
                Ok(())
            },
            Err(err) => {
                debug!(error = %err, "null money scan failed");
                self.clear();
                Err(err)
            },
        }
    }
}

impl Valuer for NullMoney {
    fn value(&self) -> MoneyResult<ExternalValue> {
        match &self.money {
            Some(money) => money.value(),
            None => Ok(ExternalValue::Null),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NullMoney {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.money, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NullMoney {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Option<Money> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::MoneyError;

    #[test]
    fn test_default_is_invalid() {
        let nm = NullMoney::default();
        assert!(!nm.is_valid());
        assert!(nm.money().is_none());
        assert_eq!(nm.value().unwrap(), ExternalValue::Null);
        assert_eq!(nm.to_string(), "NULL");
    }

    #[test]
    fn test_set_money() {
        let mut nm = NullMoney::null();
        nm.set_money(Money::from_cents(-66));
        assert!(nm.is_valid());
        assert_eq!(nm.money().map(Money::as_cents), Some(-66));
        assert_eq!(nm.value().unwrap(), ExternalValue::Text("-$0.66".to_string()));
    }

    #[test]
    fn test_scan_null() {
        let mut nm = NullMoney::from(Money::from_cents(100));
        nm.scan(&ExternalValue::Null).unwrap();
        assert!(!nm.is_valid());
        assert_eq!(nm.value(), Ok(ExternalValue::Null));
    }

    #[test]
    fn test_scan_bytes() {
        for (raw, cents) in [("$10.05", 1005), ("-$1234234.23", -123423423), ("$0.00", 0)] {
            let mut nm = NullMoney::default();
            nm.scan(&ExternalValue::from(raw.as_bytes())).unwrap();
            assert!(nm.is_valid());
            assert_eq!(nm.money().unwrap().as_cents(), cents);
            assert_eq!(nm.value().unwrap().as_text(), Some(raw));
        }
    }

    #[test]
    fn test_scan_failure_clears() {
        let mut nm = NullMoney::from(Money::from_cents(5));
        let result = nm.scan(&ExternalValue::Bytes(b"five".to_vec()));
        assert!(matches!(result, Err(MoneyError::InvalidFormat(_))));
        assert!(!nm.is_valid());

        let mut nm = NullMoney::from(Money::from_cents(5));
        assert_eq!(
            nm.scan(&ExternalValue::Float(5.0)),
            Err(MoneyError::WrongExternalType("float"))
        );
        assert!(!nm.is_valid());
    }

    #[test]
    fn test_into_inner() {
        let nm: NullMoney = Some(Money::from_cents(7)).into();
        assert_eq!(nm.into_inner(), Some(Money::from_cents(7)));
        assert_eq!(NullMoney::from(None::<Money>).into_inner(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_null_and_value() {
        assert_eq!(serde_json::to_string(&NullMoney::null()).unwrap(), "null");
        let nm: NullMoney = serde_json::from_str("\"$3.10\"").unwrap();
        assert_eq!(nm.money().unwrap().as_cents(), 310);
        let nm: NullMoney = serde_json::from_str("null").unwrap();
        assert!(!nm.is_valid());
    }
}
