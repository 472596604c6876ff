pub mod bonus;
pub mod error;
pub mod evaluate;
pub mod grades;
pub mod rates;
pub mod score;
pub mod targets;
pub mod types;

pub use error::BonusError;
pub use types::*;

/// Standard result type for all bonus-engine operations
pub type BonusEngineResult<T> = Result<T, BonusError>;
