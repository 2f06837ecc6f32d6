pub mod error;
pub mod rollup;
pub mod types;

pub use error::RollupError;
pub use types::*;

/// Standard result type for all roll-up operations
pub type RollupResult<T> = Result<T, RollupError>;
