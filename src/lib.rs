// ============================================================================
// Cents Money Library
// Fixed-point currency value with canonical dollar strings
// ============================================================================

//! # Cents Money
//!
//! A currency value type that stores amounts as integer cents and renders
//! them as canonical dollar strings.
//!
//! ## Features
//!
//! - **Tolerant parsing** of literals like `"$1,234.50"`, `"-10"`, `"($3)"`
//! - **Canonical rendering** as `[-]$D.DD`, cached on every mutation
//! - **Nullable wrapper** for nullable database columns
//! - **Persistence adapters** that read raw column bytes and write text
//!
//! ## Example
//!
//! ```rust
//! use cents_money::prelude::*;
//!
//! let mut balance = Money::parse("$5.34")?;
//! balance.add(-600);
//! assert_eq!(balance.as_str(), "-$0.66");
//!
//! // Scan a nullable column
//! let mut column = NullMoney::default();
//! column.scan(&ExternalValue::Null)?;
//! assert!(!column.is_valid());
//! assert_eq!(column.value()?, ExternalValue::Null);
//!
//! column.scan(&ExternalValue::Bytes(b"$10.05".to_vec()))?;
//! assert_eq!(column.money().map(Money::as_cents), Some(1005));
//! # Ok::<(), MoneyError>(())
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{DisplayConfig, NegativeStyle, NullMoney};
    pub use crate::interfaces::{ExternalValue, Scanner, Valuer};
    pub use crate::numeric::{Money, MoneyError, MoneyResult};
}

/// Install a `tracing` subscriber that prints to stderr.
///
/// Returns an error if a global subscriber is already set.
#[cfg(feature = "logging")]
pub fn init_logging(
    level: tracing::Level,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
}
