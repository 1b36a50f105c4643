//! Domain result type

use super::error::DomainError;

/// Standard result type for domain value construction
pub type Result<T> = std::result::Result<T, DomainError>;
