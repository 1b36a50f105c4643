//! Domain errors

use thiserror::Error;

/// Errors raised while building domain values from raw SIP-stack data.
///
/// Gating and projection never fail; only producers that decode external
/// integers into snapshots can hit these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid {kind} code: {code}")]
    InvalidCode { kind: &'static str, code: i32 },

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl DomainError {
    pub fn invalid_code(kind: &'static str, code: i32) -> Self {
        DomainError::InvalidCode { kind, code }
    }
}
