//! Media route capabilities and state
//!
//! Audio routing itself lives in the media layer; the in-call controls only
//! read a snapshot of what the device can do and what is currently on.

use serde::{Deserialize, Serialize};

/// Point-in-time read of microphone, speakerphone and bluetooth routing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaCapabilitySnapshot {
    pub can_mute: bool,
    pub can_speaker: bool,
    pub can_bluetooth: bool,
    pub is_muted: bool,
    pub is_speaker_on: bool,
    pub is_bluetooth_on: bool,
}

impl MediaCapabilitySnapshot {
    /// Every route available, nothing switched on
    pub fn all_capable() -> Self {
        Self {
            can_mute: true,
            can_speaker: true,
            can_bluetooth: true,
            ..Self::default()
        }
    }

    /// Mute toggle is usable and currently on
    pub fn mute_active(&self) -> bool {
        self.can_mute && self.is_muted
    }

    pub fn speaker_active(&self) -> bool {
        self.can_speaker && self.is_speaker_on
    }

    pub fn bluetooth_active(&self) -> bool {
        self.can_bluetooth && self.is_bluetooth_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_masks_on_flag() {
        let media = MediaCapabilitySnapshot {
            can_bluetooth: false,
            is_bluetooth_on: true,
            can_mute: true,
            is_muted: true,
            ..MediaCapabilitySnapshot::default()
        };
        assert!(!media.bluetooth_active());
        assert!(media.mute_active());
        assert!(!media.speaker_active());
    }

    #[test]
    fn test_all_capable() {
        let media = MediaCapabilitySnapshot::all_capable();
        assert!(media.can_mute && media.can_speaker && media.can_bluetooth);
        assert!(!media.is_muted);
    }
}
