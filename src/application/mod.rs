//! Application layer - drives the in-call controls
//!
//! This layer orchestrates domain objects to fulfill use cases.
//! It's responsible for:
//! - Caching the current UI mode between snapshots
//! - Gating input against that mode
//! - Publishing accepted control actions to the listener
//! - Pushing the resulting view to the renderer

pub mod in_call;
pub mod view;

pub use in_call::{InCallControls, KeyHandling, LockerOutcome, TriggerListener};
pub use view::{ControlsRenderer, ControlsView};
