//! Control actions emitted towards the call service

use serde::{Deserialize, Serialize};

/// A symbolic request produced by the in-call controls.
///
/// Built at the moment of a qualifying input, delivered once to the
/// listener and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlAction {
    ClearCall,
    TakeCall,
    DeclineCall,
    DialpadOn,
    DialpadOff,
    MuteOn,
    MuteOff,
    BluetoothOn,
    BluetoothOff,
    SpeakerOn,
    SpeakerOff,
    DetailedDisplay,
    ToggleHold,
    MediaSettings,
    AddCall,
    XferCall,
    StartRecording,
    StopRecording,
}

impl ControlAction {
    pub const ALL: [ControlAction; 18] = [
        ControlAction::ClearCall,
        ControlAction::TakeCall,
        ControlAction::DeclineCall,
        ControlAction::DialpadOn,
        ControlAction::DialpadOff,
        ControlAction::MuteOn,
        ControlAction::MuteOff,
        ControlAction::BluetoothOn,
        ControlAction::BluetoothOff,
        ControlAction::SpeakerOn,
        ControlAction::SpeakerOff,
        ControlAction::DetailedDisplay,
        ControlAction::ToggleHold,
        ControlAction::MediaSettings,
        ControlAction::AddCall,
        ControlAction::XferCall,
        ControlAction::StartRecording,
        ControlAction::StopRecording,
    ];

    /// Answer/decline: only meaningful while a call is ringing
    pub fn is_locker_action(&self) -> bool {
        matches!(self, ControlAction::TakeCall | ControlAction::DeclineCall)
    }

    /// Build the mute action matching a toggle's new checked state
    pub fn mute(on: bool) -> Self {
        if on {
            ControlAction::MuteOn
        } else {
            ControlAction::MuteOff
        }
    }

    pub fn speaker(on: bool) -> Self {
        if on {
            ControlAction::SpeakerOn
        } else {
            ControlAction::SpeakerOff
        }
    }

    pub fn bluetooth(on: bool) -> Self {
        if on {
            ControlAction::BluetoothOn
        } else {
            ControlAction::BluetoothOff
        }
    }

    pub fn dialpad(on: bool) -> Self {
        if on {
            ControlAction::DialpadOn
        } else {
            ControlAction::DialpadOff
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlAction::ClearCall => "clear_call",
            ControlAction::TakeCall => "take_call",
            ControlAction::DeclineCall => "decline_call",
            ControlAction::DialpadOn => "dialpad_on",
            ControlAction::DialpadOff => "dialpad_off",
            ControlAction::MuteOn => "mute_on",
            ControlAction::MuteOff => "mute_off",
            ControlAction::BluetoothOn => "bluetooth_on",
            ControlAction::BluetoothOff => "bluetooth_off",
            ControlAction::SpeakerOn => "speaker_on",
            ControlAction::SpeakerOff => "speaker_off",
            ControlAction::DetailedDisplay => "detailed_display",
            ControlAction::ToggleHold => "toggle_hold",
            ControlAction::MediaSettings => "media_settings",
            ControlAction::AddCall => "add_call",
            ControlAction::XferCall => "xfer_call",
            ControlAction::StartRecording => "start_recording",
            ControlAction::StopRecording => "stop_recording",
        }
    }
}
