//! incall - in-call touch controls for a SIP softphone
//!
//! The controls project the state of the current call onto a UI mode
//! (answer/decline locker, live call buttons, or nothing) and act as the
//! single authority deciding which control actions may reach the call
//! service.

pub mod application;
pub mod config;
pub mod domain;
pub mod interface;

// Re-export commonly used types
pub use application::InCallControls;
pub use domain::shared::error::DomainError;
pub use domain::shared::result::Result;
