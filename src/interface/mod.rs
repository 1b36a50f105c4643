//! Interface layer - adapters between the platform and the controls
//!
//! This layer handles:
//! - Routing raw input to the controller
//! - Rendering the controls view

pub mod input;
pub mod render;

pub use input::{InputAdapter, InputEvent, InputResult};
pub use render::TracingRenderer;
