// ============================================================================
// Numeric Module
// Cents-backed currency value with textual parsing and canonical formatting
// ============================================================================
//
// This module provides:
// - Money: i64 cents plus a cached `[-]$D.DD` rendering
// - MoneyError: Error types for parsing, arithmetic and scanning
// - The literal grammar used by Money's parser
//
// Design principles:
// - No floating-point operations
// - Fallible operations return Result (no panics)
// - Canonical text is the only persisted form

mod errors;
mod grammar;
mod money;

pub use errors::{MoneyError, MoneyResult};
pub use money::Money;

pub(crate) use money::split_cents;
