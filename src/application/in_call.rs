//! In-call controls controller
//!
//! Keeps the UI mode derived from the last call snapshot and uses it to gate
//! every input before a [`ControlTriggered`] event reaches the listener.

use crate::application::view::{ControlsRenderer, ControlsView};
use crate::config::ControlsSettings;
use crate::domain::call::CallSessionSnapshot;
use crate::domain::controls::{
    CallUiModeProjector, ControlAction, ControlButton, ControlTriggered, HardKey, LockerChoice,
    LockerWidget, Projection, UiMode,
};
use crate::domain::media::MediaCapabilitySnapshot;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

/// The single subscriber for accepted control actions
pub type TriggerListener = Arc<dyn Fn(ControlTriggered) + Send + Sync>;

/// Result of a locker (answer/decline widget) choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockerOutcome {
    /// Action dispatched to the listener, if the choice was accepted
    pub action: Option<ControlAction>,
    /// The widget must be returned to its rest position
    pub reset_view: bool,
}

/// Whether a hardware key was consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandling {
    Handled(ControlAction),
    /// Leave the key to the platform's default handling
    Unhandled,
}

#[derive(Debug)]
struct ControlsState {
    mode: UiMode,
    call: Option<CallSessionSnapshot>,
    media: Option<MediaCapabilitySnapshot>,
    dialpad_on: bool,
    view: ControlsView,
}

/// In-call controls
///
/// Shared between input sources and the call/media event callbacks through
/// an `Arc`; all state sits behind one lock and is replaced per snapshot.
pub struct InCallControls {
    settings: ControlsSettings,
    locker_widget: LockerWidget,
    renderer: Arc<dyn ControlsRenderer>,
    state: RwLock<ControlsState>,
    listener: RwLock<Option<TriggerListener>>,
}

impl InCallControls {
    pub fn new(settings: ControlsSettings, renderer: Arc<dyn ControlsRenderer>) -> Self {
        let locker_widget =
            LockerWidget::select(settings.accessibility_enabled, settings.use_alternate_unlocker);
        let view = ControlsView::initial(settings.support_multiple_calls);
        debug!("In-call controls created with {:?} locker", locker_widget);

        Self {
            settings,
            locker_widget,
            renderer,
            // Nothing is actionable until the first call snapshot arrives
            state: RwLock::new(ControlsState {
                mode: UiMode::NoAction,
                call: None,
                media: None,
                dialpad_on: false,
                view,
            }),
            listener: RwLock::new(None),
        }
    }

    /// Register the listener, replacing any previous one
    pub fn set_trigger_listener<F>(&self, listener: F)
    where
        F: Fn(ControlTriggered) + Send + Sync + 'static,
    {
        *self.listener.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(listener));
    }

    pub fn clear_trigger_listener(&self) {
        *self.listener.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Apply a new call snapshot; `None` means no active call
    pub fn set_call_state(&self, call: Option<CallSessionSnapshot>) -> Projection {
        let mut state = self.write_state();
        let projection = CallUiModeProjector::project(
            call.as_ref(),
            state.media.as_ref(),
            self.settings.support_multiple_calls,
        );

        if let Some(call) = call.as_ref() {
            debug!(
                "Call {} is {}, mode {:?}",
                call.call_id(),
                call.state().name(),
                projection.mode
            );
        } else {
            debug!("No active call, mode {:?}", projection.mode);
        }

        if projection.mode == UiMode::NoAction {
            state.dialpad_on = false;
        }
        state.mode = projection.mode;
        state.call = call;
        state.view.apply_projection(&projection);
        self.renderer.render(&state.view);

        projection
    }

    /// Apply a new media capability snapshot
    pub fn set_media_state(&self, media: MediaCapabilitySnapshot) {
        let mut state = self.write_state();
        let enabled = CallUiModeProjector::enabled_matrix(
            state.mode,
            Some(&media),
            self.settings.support_multiple_calls,
        );

        state.media = Some(media);
        state.view.enabled = enabled;
        state.view.apply_media(&media);
        self.renderer.render(&state.view);
    }

    /// Handle the answer/decline widget
    pub fn on_locker_choice(&self, choice: LockerChoice) -> LockerOutcome {
        let action = match choice {
            LockerChoice::Left => ControlAction::TakeCall,
            LockerChoice::Right => ControlAction::DeclineCall,
        };

        // Mode check and gate read the same snapshot
        let event = {
            let state = self.read_state();
            if state.mode != UiMode::Locker {
                warn!("Locker choice {:?} received outside locker mode, ignored", choice);
                return LockerOutcome {
                    action: None,
                    reset_view: false,
                };
            }
            Self::gated_event(&state, action)
        };

        let Some(event) = event else {
            return LockerOutcome {
                action: None,
                reset_view: false,
            };
        };
        self.deliver(event);

        LockerOutcome {
            action: Some(action),
            reset_view: self.locker_widget.needs_reset(),
        }
    }

    /// Handle a press on the button bar
    pub fn on_button(&self, button: ControlButton) -> Option<ControlAction> {
        let event = {
            let mut state = self.write_state();
            if !state.view.enabled.is_enabled(button) {
                debug!("Button {:?} is disabled, press dropped", button);
                return None;
            }

            let action = match button {
                ControlButton::ClearCall => ControlAction::ClearCall,
                ControlButton::Dialpad => ControlAction::dialpad(!state.dialpad_on),
                ControlButton::Mute => ControlAction::mute(!state.view.mute_checked),
                ControlButton::Speaker => ControlAction::speaker(!state.view.speaker_checked),
                ControlButton::Bluetooth => ControlAction::bluetooth(!state.view.bluetooth_checked),
                ControlButton::AddCall => ControlAction::AddCall,
            };

            if !CallUiModeProjector::request_action(action, state.mode) {
                debug!("Action {} rejected in {:?} mode", action.as_str(), state.mode);
                return None;
            }

            match action {
                ControlAction::DialpadOn | ControlAction::DialpadOff => {
                    state.dialpad_on = action == ControlAction::DialpadOn;
                }
                ControlAction::MuteOn | ControlAction::MuteOff => {
                    state.view.mute_checked = action == ControlAction::MuteOn;
                    self.renderer.render(&state.view);
                }
                ControlAction::SpeakerOn | ControlAction::SpeakerOff => {
                    state.view.speaker_checked = action == ControlAction::SpeakerOn;
                    self.renderer.render(&state.view);
                }
                ControlAction::BluetoothOn | ControlAction::BluetoothOff => {
                    state.view.bluetooth_checked = action == ControlAction::BluetoothOn;
                    self.renderer.render(&state.view);
                }
                _ => {}
            }

            ControlTriggered::new(action, state.call)
        };

        let action = event.action;
        self.deliver(event);
        Some(action)
    }

    /// Flip the mute toggle as if the user pressed it
    pub fn toggle_mute(&self) -> Option<ControlAction> {
        self.on_button(ControlButton::Mute)
    }

    /// Handle a hardware key
    pub fn on_key(&self, key: HardKey) -> KeyHandling {
        // Mapping and gating use the mode from a single read
        let event = {
            let state = self.read_state();
            CallUiModeProjector::map_key(key, state.mode)
                .and_then(|action| Self::gated_event(&state, action))
        };

        match event {
            Some(event) => {
                let action = event.action;
                self.deliver(event);
                KeyHandling::Handled(action)
            }
            None => KeyHandling::Unhandled,
        }
    }

    /// Gate `action` against the current mode and deliver it if accepted.
    ///
    /// Rejected actions are dropped without any other effect.
    pub fn dispatch(&self, action: ControlAction) -> bool {
        let event = Self::gated_event(&self.read_state(), action);
        match event {
            Some(event) => {
                self.deliver(event);
                true
            }
            None => false,
        }
    }

    pub fn mode(&self) -> UiMode {
        self.read_state().mode
    }

    /// Current projection, as last computed from the call and media snapshots
    pub fn projection(&self) -> Projection {
        let state = self.read_state();
        Projection {
            mode: state.mode,
            enabled: state.view.enabled,
        }
    }

    pub fn view(&self) -> ControlsView {
        self.read_state().view
    }

    pub fn current_call(&self) -> Option<CallSessionSnapshot> {
        self.read_state().call
    }

    pub fn locker_widget(&self) -> LockerWidget {
        self.locker_widget
    }

    pub fn is_dialpad_on(&self) -> bool {
        self.read_state().dialpad_on
    }

    fn gated_event(state: &ControlsState, action: ControlAction) -> Option<ControlTriggered> {
        if !CallUiModeProjector::request_action(action, state.mode) {
            debug!("Action {} rejected in {:?} mode", action.as_str(), state.mode);
            return None;
        }
        Some(ControlTriggered::new(action, state.call))
    }

    // Invoked without the state lock so the listener may call back in
    fn deliver(&self, event: ControlTriggered) {
        let listener = self
            .listener
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        match (listener, event.call) {
            (Some(listener), Some(call)) => {
                info!("Dispatching {} for call {}", event.action.as_str(), call.call_id());
                listener(event);
            }
            (Some(listener), None) => {
                info!("Dispatching {}", event.action.as_str());
                listener(event);
            }
            (None, _) => debug!("No trigger listener, {} dropped", event.action.as_str()),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ControlsState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ControlsState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
