//! In-call controls bounded context - mode projection and action gating

pub mod action;
pub mod event;
pub mod projector;
pub mod value_object;

pub use action::ControlAction;
pub use event::ControlTriggered;
pub use projector::{CallUiModeProjector, Projection};
pub use value_object::{ControlButton, EnabledMatrix, HardKey, LockerChoice, LockerWidget, UiMode};
