//! In-call controls value objects

use serde::{Deserialize, Serialize};

/// What the in-call surface presents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiMode {
    /// Only the answer/decline gesture is offered
    Locker,
    /// Live call-management buttons
    Control,
    /// No call; nothing is actionable
    NoAction,
}

impl UiMode {
    pub fn shows_locker(&self) -> bool {
        matches!(self, UiMode::Locker)
    }

    pub fn shows_buttons(&self) -> bool {
        matches!(self, UiMode::Control)
    }
}

/// Enabled/disabled state of every in-call button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnabledMatrix {
    pub mute: bool,
    pub speaker: bool,
    pub bluetooth: bool,
    pub dialpad: bool,
    pub clear_call: bool,
    pub add_call: bool,
}

impl EnabledMatrix {
    pub fn is_enabled(&self, button: ControlButton) -> bool {
        match button {
            ControlButton::Mute => self.mute,
            ControlButton::Speaker => self.speaker,
            ControlButton::Bluetooth => self.bluetooth,
            ControlButton::Dialpad => self.dialpad,
            ControlButton::ClearCall => self.clear_call,
            ControlButton::AddCall => self.add_call,
        }
    }
}

/// Side resolved by the locker widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockerChoice {
    /// Answer
    Left,
    /// Decline
    Right,
}

/// Hardware keys with a call meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardKey {
    /// Green "call" key
    Accept,
    /// Red "end call" key
    End,
    /// Any other key code, left to the platform
    Other(u32),
}

/// Buttons of the in-call button bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlButton {
    ClearCall,
    Dialpad,
    Bluetooth,
    Speaker,
    Mute,
    AddCall,
}

/// Which widget resolves the answer/decline choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockerWidget {
    /// Sliding tab; must be reset after a choice
    Slider,
    /// Plain two-button unlocker
    AlternateUnlocker,
}

impl LockerWidget {
    /// The slider is unusable with accessibility services, and users may opt
    /// out of it.
    pub fn select(accessibility_enabled: bool, use_alternate_unlocker: bool) -> Self {
        if accessibility_enabled || use_alternate_unlocker {
            LockerWidget::AlternateUnlocker
        } else {
            LockerWidget::Slider
        }
    }

    pub fn needs_reset(&self) -> bool {
        matches!(self, LockerWidget::Slider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locker_widget_selection() {
        assert_eq!(LockerWidget::select(false, false), LockerWidget::Slider);
        assert_eq!(LockerWidget::select(true, false), LockerWidget::AlternateUnlocker);
        assert_eq!(LockerWidget::select(false, true), LockerWidget::AlternateUnlocker);
        assert!(LockerWidget::Slider.needs_reset());
        assert!(!LockerWidget::AlternateUnlocker.needs_reset());
    }

    #[test]
    fn test_matrix_lookup() {
        let matrix = EnabledMatrix {
            speaker: true,
            add_call: true,
            ..EnabledMatrix::default()
        };
        assert!(matrix.is_enabled(ControlButton::Speaker));
        assert!(matrix.is_enabled(ControlButton::AddCall));
        assert!(!matrix.is_enabled(ControlButton::Mute));
        assert!(!matrix.is_enabled(ControlButton::ClearCall));
    }

    #[test]
    fn test_mode_visibility() {
        assert!(UiMode::Locker.shows_locker());
        assert!(!UiMode::Locker.shows_buttons());
        assert!(UiMode::Control.shows_buttons());
        assert!(!UiMode::NoAction.shows_locker());
        assert!(!UiMode::NoAction.shows_buttons());
    }
}
