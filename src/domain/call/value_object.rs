//! Call value objects

use crate::domain::shared::error::DomainError;
use crate::domain::shared::result::Result;
use serde::{Deserialize, Serialize};

/// Call direction as seen from the local user agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    /// Remote party sent the INVITE
    Incoming,
    /// We sent the INVITE
    Outgoing,
}

impl CallDirection {
    pub fn is_incoming(&self) -> bool {
        matches!(self, CallDirection::Incoming)
    }
}

/// INVITE session state reported by the SIP stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvState {
    /// Before INVITE is sent or received
    Null,
    /// After INVITE is sent
    Calling,
    /// After INVITE is received
    Incoming,
    /// After a provisional response with tag
    Early,
    /// After 2xx is sent/received
    Connecting,
    /// After ACK is sent/received
    Confirmed,
    /// Session is terminated
    Disconnected,
}

impl InvState {
    /// Decode the stack's numeric state
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(InvState::Null),
            1 => Ok(InvState::Calling),
            2 => Ok(InvState::Incoming),
            3 => Ok(InvState::Early),
            4 => Ok(InvState::Connecting),
            5 => Ok(InvState::Confirmed),
            6 => Ok(InvState::Disconnected),
            other => Err(DomainError::invalid_code("invite state", other)),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            InvState::Null => 0,
            InvState::Calling => 1,
            InvState::Incoming => 2,
            InvState::Early => 3,
            InvState::Connecting => 4,
            InvState::Confirmed => 5,
            InvState::Disconnected => 6,
        }
    }

    /// No session is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, InvState::Null | InvState::Disconnected)
    }

    pub fn name(&self) -> &'static str {
        match self {
            InvState::Null => "NULL",
            InvState::Calling => "CALLING",
            InvState::Incoming => "INCOMING",
            InvState::Early => "EARLY",
            InvState::Connecting => "CONNECTING",
            InvState::Confirmed => "CONFIRMED",
            InvState::Disconnected => "DISCONNECTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_covers_stack_range() {
        for code in 0..=6 {
            let state = InvState::from_code(code).unwrap();
            assert_eq!(state.code(), code);
        }
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(
            InvState::from_code(7),
            Err(DomainError::InvalidCode {
                kind: "invite state",
                code: 7
            })
        );
        assert!(InvState::from_code(-1).is_err());
    }

    #[test]
    fn test_is_idle() {
        assert!(InvState::Null.is_idle());
        assert!(InvState::Disconnected.is_idle());
        assert!(!InvState::Early.is_idle());
        assert!(!InvState::Confirmed.is_idle());
    }
}
