//! In-call controls domain events

use crate::domain::call::CallSessionSnapshot;
use crate::domain::controls::action::ControlAction;
use crate::domain::shared::events::{DomainEvent, EventMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An accepted control action, as handed to the trigger listener
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlTriggered {
    pub metadata: EventMetadata,
    pub action: ControlAction,
    /// Call the action applies to, if one is active
    pub call: Option<CallSessionSnapshot>,
}

impl ControlTriggered {
    pub fn new(action: ControlAction, call: Option<CallSessionSnapshot>) -> Self {
        Self {
            metadata: EventMetadata::new("controls.triggered"),
            action,
            call,
        }
    }
}

impl DomainEvent for ControlTriggered {
    fn event_type(&self) -> &'static str {
        "controls.triggered"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata.occurred_at
    }
}
