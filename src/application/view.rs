//! What the rendering layer is asked to show

use crate::domain::controls::{CallUiModeProjector, EnabledMatrix, Projection, UiMode};
use crate::domain::media::MediaCapabilitySnapshot;
use serde::{Deserialize, Serialize};

/// Visibility, enabled and checked state of every in-call control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsView {
    pub mode: UiMode,
    pub locker_visible: bool,
    pub buttons_visible: bool,
    pub enabled: EnabledMatrix,
    pub mute_checked: bool,
    pub speaker_checked: bool,
    pub bluetooth_checked: bool,
}

impl ControlsView {
    /// Start-up view: the "no call" projection, nothing actionable
    pub fn initial(multiple_calls: bool) -> Self {
        let projection = CallUiModeProjector::project(None, None, multiple_calls);
        Self {
            mode: projection.mode,
            locker_visible: projection.mode.shows_locker(),
            buttons_visible: projection.mode.shows_buttons(),
            enabled: projection.enabled,
            mute_checked: false,
            speaker_checked: false,
            bluetooth_checked: false,
        }
    }

    /// Apply a new projection; toggles keep their checked state
    pub fn apply_projection(&mut self, projection: &Projection) {
        self.mode = projection.mode;
        self.locker_visible = projection.mode.shows_locker();
        self.buttons_visible = projection.mode.shows_buttons();
        self.enabled = projection.enabled;
    }

    /// Take the checked state of the toggles from the media layer. A route
    /// the device cannot use never shows as checked.
    pub fn apply_media(&mut self, media: &MediaCapabilitySnapshot) {
        self.mute_checked = media.mute_active();
        self.speaker_checked = media.speaker_active();
        self.bluetooth_checked = media.bluetooth_active();
    }
}

/// Rendering collaborator for the in-call controls.
///
/// Called with the state lock held: implementations must not call back into
/// [`InCallControls`](crate::application::in_call::InCallControls).
#[cfg_attr(test, mockall::automock)]
pub trait ControlsRenderer: Send + Sync {
    fn render(&self, view: &ControlsView);
}
