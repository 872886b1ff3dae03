pub mod catalog;
pub mod error;
pub mod rate_math;
pub mod recommend;
pub mod risk;
pub mod types;

pub use error::FingrowError;
pub use types::*;

/// Standard result type for all fingrow operations
pub type FingrowResult<T> = Result<T, FingrowError>;
