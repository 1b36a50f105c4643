//! Domain layer - in-call business rules
//!
//! This layer contains:
//! - Value objects: call and media snapshots, UI modes, control actions
//! - Domain services: the call-state to UI-mode projector
//! - Domain events: accepted control actions

pub mod buddy;
pub mod call;
pub mod controls;
pub mod media;
pub mod shared;

// Re-export commonly used types
pub use shared::{DomainError, Result};
