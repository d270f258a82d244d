// ============================================================================
// Interfaces Module
// Contracts between money values and external collaborators
// ============================================================================

pub mod persistence;

pub use persistence::{ExternalValue, Scanner, Valuer};
