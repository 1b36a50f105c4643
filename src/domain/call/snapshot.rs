//! Call session snapshot

use crate::domain::call::value_object::{CallDirection, InvState};
use crate::domain::shared::result::Result;
use crate::domain::shared::value_objects::CallId;
use serde::{Deserialize, Serialize};

/// Immutable point-in-time read of a call session owned by the SIP stack.
///
/// "No active call" is expressed as `Option::<CallSessionSnapshot>::None`
/// by callers, never by a special state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSessionSnapshot {
    call_id: CallId,
    state: InvState,
    direction: CallDirection,
}

impl CallSessionSnapshot {
    pub fn new(call_id: CallId, state: InvState, direction: CallDirection) -> Self {
        Self {
            call_id,
            state,
            direction,
        }
    }

    /// Build from the raw values delivered by a stack callback
    pub fn from_raw(call_id: i32, state_code: i32, is_incoming: bool) -> Result<Self> {
        let direction = if is_incoming {
            CallDirection::Incoming
        } else {
            CallDirection::Outgoing
        };
        Ok(Self::new(
            CallId::from_raw(call_id)?,
            InvState::from_code(state_code)?,
            direction,
        ))
    }

    pub fn incoming(call_id: CallId, state: InvState) -> Self {
        Self::new(call_id, state, CallDirection::Incoming)
    }

    pub fn outgoing(call_id: CallId, state: InvState) -> Self {
        Self::new(call_id, state, CallDirection::Outgoing)
    }

    pub fn call_id(&self) -> CallId {
        self.call_id
    }

    pub fn state(&self) -> InvState {
        self.state
    }

    pub fn direction(&self) -> CallDirection {
        self.direction
    }

    pub fn is_incoming(&self) -> bool {
        self.direction.is_incoming()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        let snapshot = CallSessionSnapshot::from_raw(2, 3, true).unwrap();
        assert_eq!(snapshot.call_id(), CallId::new(2));
        assert_eq!(snapshot.state(), InvState::Early);
        assert!(snapshot.is_incoming());
    }

    #[test]
    fn test_from_raw_rejects_malformed() {
        assert!(CallSessionSnapshot::from_raw(-1, 5, false).is_err());
        assert!(CallSessionSnapshot::from_raw(0, 12, false).is_err());
    }

    #[test]
    fn test_serializes_as_plain_record() {
        let snapshot = CallSessionSnapshot::outgoing(CallId::new(1), InvState::Confirmed);
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"call_id": 1, "state": "confirmed", "direction": "outgoing"})
        );
    }
}
