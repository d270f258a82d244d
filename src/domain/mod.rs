// ============================================================================
// Domain Models Module
// Nullable money and presentation configuration
// ============================================================================

pub mod config;
pub mod null_money;

pub use config::{DisplayConfig, NegativeStyle};
pub use null_money::NullMoney;
