//! Raw input routing
//!
//! Buttons, the locker widget and hardware keys are independent sources.
//! The adapter funnels all of them into [`InCallControls`], which decides
//! whether anything is dispatched.

use crate::application::in_call::{InCallControls, KeyHandling};
use crate::domain::controls::{ControlAction, ControlButton, HardKey, LockerChoice};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Input already resolved by the platform widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    Button(ControlButton),
    Locker(LockerChoice),
    Key(HardKey),
}

/// What became of an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Dispatched(ControlAction),
    /// Consumed without effect (rejected by the current mode)
    Dropped {
        /// Locker widget must return to its rest position
        reset_locker: bool,
    },
    /// Not ours; propagate to default platform handling
    Unhandled,
}

pub struct InputAdapter {
    controls: Arc<InCallControls>,
}

impl InputAdapter {
    pub fn new(controls: Arc<InCallControls>) -> Self {
        Self { controls }
    }

    pub fn handle(&self, event: InputEvent) -> InputResult {
        match event {
            InputEvent::Button(button) => match self.controls.on_button(button) {
                Some(action) => InputResult::Dispatched(action),
                None => InputResult::Dropped {
                    reset_locker: false,
                },
            },
            InputEvent::Locker(choice) => {
                let outcome = self.controls.on_locker_choice(choice);
                match outcome.action {
                    Some(action) => InputResult::Dispatched(action),
                    None => InputResult::Dropped {
                        reset_locker: outcome.reset_view,
                    },
                }
            }
            InputEvent::Key(key) => match self.controls.on_key(key) {
                KeyHandling::Handled(action) => InputResult::Dispatched(action),
                KeyHandling::Unhandled => InputResult::Unhandled,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::view::MockControlsRenderer;
    use crate::config::ControlsSettings;
    use crate::domain::call::{CallSessionSnapshot, InvState};
    use crate::domain::shared::value_objects::CallId;

    fn adapter() -> (InputAdapter, Arc<InCallControls>) {
        let mut renderer = MockControlsRenderer::new();
        renderer.expect_render().returning(|_| ());
        let controls = Arc::new(InCallControls::new(
            ControlsSettings::default(),
            Arc::new(renderer),
        ));
        (InputAdapter::new(controls.clone()), controls)
    }

    #[test]
    fn test_routes_by_source() {
        let (adapter, controls) = adapter();
        controls.set_call_state(Some(CallSessionSnapshot::incoming(
            CallId::new(0),
            InvState::Early,
        )));

        assert_eq!(
            adapter.handle(InputEvent::Button(ControlButton::ClearCall)),
            InputResult::Dropped {
                reset_locker: false
            }
        );
        assert_eq!(
            adapter.handle(InputEvent::Locker(LockerChoice::Right)),
            InputResult::Dispatched(ControlAction::DeclineCall)
        );
        assert_eq!(
            adapter.handle(InputEvent::Key(HardKey::Other(3))),
            InputResult::Unhandled
        );
    }

    #[test]
    fn test_event_wire_format() {
        let event: InputEvent =
            serde_json::from_str(r#"{"type":"locker","value":"left"}"#).unwrap();
        assert_eq!(event, InputEvent::Locker(LockerChoice::Left));

        let event: InputEvent =
            serde_json::from_str(r#"{"type":"key","value":{"other":24}}"#).unwrap();
        assert_eq!(event, InputEvent::Key(HardKey::Other(24)));
    }
}
