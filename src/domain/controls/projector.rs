//! Call state to UI mode projection
//!
//! The projector is the single authority on what the in-call surface may do.
//! Input sources (slider, buttons, hardware keys) are independent of each
//! other and may deliver stale gestures, so every action is re-checked here
//! against the mode derived from the latest call snapshot.

use crate::domain::call::{CallSessionSnapshot, InvState};
use crate::domain::controls::action::ControlAction;
use crate::domain::controls::value_object::{EnabledMatrix, HardKey, UiMode};
use crate::domain::media::MediaCapabilitySnapshot;
use serde::{Deserialize, Serialize};

/// Result of projecting a call snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    pub mode: UiMode,
    pub enabled: EnabledMatrix,
}

/// Pure mapping from call/media snapshots to UI mode and enabled buttons
pub struct CallUiModeProjector;

impl CallUiModeProjector {
    /// Derive the UI mode for a call, or for no call at all
    pub fn mode_for(snapshot: Option<&CallSessionSnapshot>) -> UiMode {
        let Some(call) = snapshot else {
            return UiMode::NoAction;
        };

        match call.state() {
            InvState::Null | InvState::Disconnected => UiMode::NoAction,
            InvState::Early if call.is_incoming() => UiMode::Locker,
            InvState::Early => UiMode::Control,
            InvState::Calling | InvState::Connecting | InvState::Confirmed => UiMode::Control,
            // Ringing and not yet answered
            InvState::Incoming => UiMode::Locker,
        }
    }

    /// Project a snapshot into a mode and an enabled matrix.
    ///
    /// Without a media snapshot the routes are assumed available; the media
    /// layer reports capabilities later in the call setup.
    pub fn project(
        snapshot: Option<&CallSessionSnapshot>,
        media: Option<&MediaCapabilitySnapshot>,
        multiple_calls: bool,
    ) -> Projection {
        let mode = Self::mode_for(snapshot);
        Projection {
            mode,
            enabled: Self::enabled_matrix(mode, media, multiple_calls),
        }
    }

    pub fn enabled_matrix(
        mode: UiMode,
        media: Option<&MediaCapabilitySnapshot>,
        multiple_calls: bool,
    ) -> EnabledMatrix {
        let in_call = mode == UiMode::Control;
        let media = media
            .copied()
            .unwrap_or_else(MediaCapabilitySnapshot::all_capable);

        EnabledMatrix {
            mute: in_call && media.can_mute,
            speaker: in_call && media.can_speaker,
            bluetooth: in_call && media.can_bluetooth,
            dialpad: in_call,
            clear_call: in_call,
            add_call: multiple_calls,
        }
    }

    /// Whether `action` may be dispatched while in `mode`
    pub fn request_action(action: ControlAction, mode: UiMode) -> bool {
        match mode {
            UiMode::Locker => action.is_locker_action(),
            UiMode::Control => !action.is_locker_action(),
            UiMode::NoAction => false,
        }
    }

    /// Map a hardware key to an action; `None` leaves the key to the platform
    pub fn map_key(key: HardKey, mode: UiMode) -> Option<ControlAction> {
        match (key, mode) {
            (HardKey::Accept, UiMode::Locker) => Some(ControlAction::TakeCall),
            (HardKey::End, UiMode::Locker) => Some(ControlAction::DeclineCall),
            (HardKey::End, UiMode::Control) => Some(ControlAction::ClearCall),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::CallId;

    fn incoming(state: InvState) -> CallSessionSnapshot {
        CallSessionSnapshot::incoming(CallId::new(0), state)
    }

    fn outgoing(state: InvState) -> CallSessionSnapshot {
        CallSessionSnapshot::outgoing(CallId::new(0), state)
    }

    #[test]
    fn test_no_call_disables_everything() {
        let cases = [
            None,
            Some(incoming(InvState::Null)),
            Some(outgoing(InvState::Disconnected)),
            Some(incoming(InvState::Disconnected)),
        ];
        for case in cases {
            let projection = CallUiModeProjector::project(case.as_ref(), None, false);
            assert_eq!(projection.mode, UiMode::NoAction);
            assert_eq!(projection.enabled, EnabledMatrix::default());
        }
    }

    #[test]
    fn test_add_call_follows_flag_only() {
        let projection = CallUiModeProjector::project(None, None, true);
        assert_eq!(projection.mode, UiMode::NoAction);
        assert!(projection.enabled.add_call);
        assert!(!projection.enabled.clear_call);

        let projection =
            CallUiModeProjector::project(Some(&outgoing(InvState::Confirmed)), None, false);
        assert!(!projection.enabled.add_call);
    }

    #[test]
    fn test_early_depends_on_direction() {
        assert_eq!(
            CallUiModeProjector::mode_for(Some(&incoming(InvState::Early))),
            UiMode::Locker
        );
        assert_eq!(
            CallUiModeProjector::mode_for(Some(&outgoing(InvState::Early))),
            UiMode::Control
        );
    }

    #[test]
    fn test_live_states_are_control() {
        for state in [InvState::Calling, InvState::Connecting, InvState::Confirmed] {
            for call in [incoming(state), outgoing(state)] {
                let projection = CallUiModeProjector::project(Some(&call), None, false);
                assert_eq!(projection.mode, UiMode::Control);
                assert!(projection.enabled.clear_call);
                assert!(projection.enabled.dialpad);
            }
        }
    }

    #[test]
    fn test_ringing_is_locker() {
        let projection = CallUiModeProjector::project(Some(&incoming(InvState::Incoming)), None, false);
        assert_eq!(projection.mode, UiMode::Locker);
        assert!(!projection.enabled.clear_call);
        assert!(!projection.enabled.mute);
    }

    #[test]
    fn test_capability_gates_media_buttons() {
        let media = MediaCapabilitySnapshot {
            can_mute: true,
            can_speaker: true,
            can_bluetooth: false,
            is_bluetooth_on: true,
            ..MediaCapabilitySnapshot::default()
        };
        let projection =
            CallUiModeProjector::project(Some(&outgoing(InvState::Confirmed)), Some(&media), false);
        assert_eq!(projection.mode, UiMode::Control);
        assert!(projection.enabled.mute);
        assert!(projection.enabled.speaker);
        assert!(!projection.enabled.bluetooth);
    }

    #[test]
    fn test_project_is_idempotent() {
        let call = incoming(InvState::Early);
        let media = MediaCapabilitySnapshot::all_capable();
        let first = CallUiModeProjector::project(Some(&call), Some(&media), true);
        let second = CallUiModeProjector::project(Some(&call), Some(&media), true);
        assert_eq!(first, second);
    }

    #[test]
    fn test_locker_gate() {
        assert!(CallUiModeProjector::request_action(ControlAction::TakeCall, UiMode::Locker));
        assert!(CallUiModeProjector::request_action(ControlAction::DeclineCall, UiMode::Locker));
        assert!(!CallUiModeProjector::request_action(ControlAction::MuteOn, UiMode::Locker));
        assert!(!CallUiModeProjector::request_action(ControlAction::ClearCall, UiMode::Locker));
    }

    #[test]
    fn test_control_gate() {
        assert!(!CallUiModeProjector::request_action(ControlAction::TakeCall, UiMode::Control));
        assert!(!CallUiModeProjector::request_action(ControlAction::DeclineCall, UiMode::Control));
        for action in ControlAction::ALL.iter().filter(|a| !a.is_locker_action()) {
            assert!(CallUiModeProjector::request_action(*action, UiMode::Control));
        }
    }

    #[test]
    fn test_no_action_gate_rejects_all() {
        for action in ControlAction::ALL {
            assert!(!CallUiModeProjector::request_action(action, UiMode::NoAction));
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            CallUiModeProjector::map_key(HardKey::Accept, UiMode::Locker),
            Some(ControlAction::TakeCall)
        );
        assert_eq!(CallUiModeProjector::map_key(HardKey::Accept, UiMode::Control), None);
        assert_eq!(
            CallUiModeProjector::map_key(HardKey::End, UiMode::Locker),
            Some(ControlAction::DeclineCall)
        );
        assert_eq!(
            CallUiModeProjector::map_key(HardKey::End, UiMode::Control),
            Some(ControlAction::ClearCall)
        );
        assert_eq!(CallUiModeProjector::map_key(HardKey::End, UiMode::NoAction), None);
        assert_eq!(CallUiModeProjector::map_key(HardKey::Other(24), UiMode::Locker), None);
    }
}
