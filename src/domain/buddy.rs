//! Buddy presence record
//!
//! A buddy is a remote SIP identity whose presence we monitor through a
//! SUBSCRIBE dialog. The SIP stack reports the buddy as a flat record of
//! integers and strings; [`BuddyState`] is its typed counterpart.

use crate::domain::shared::error::DomainError;
use crate::domain::shared::result::Result;
use crate::domain::shared::value_objects::{BuddyId, SipUri};
use serde::{Deserialize, Serialize};

/// Basic presence status of a buddy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuddyStatus {
    /// Presence not known yet (no NOTIFY received)
    Unknown,
    Online,
    Offline,
}

impl BuddyStatus {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(BuddyStatus::Unknown),
            1 => Ok(BuddyStatus::Online),
            2 => Ok(BuddyStatus::Offline),
            other => Err(DomainError::invalid_code("buddy status", other)),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            BuddyStatus::Unknown => 0,
            BuddyStatus::Online => 1,
            BuddyStatus::Offline => 2,
        }
    }
}

/// State of the presence subscription dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionState {
    Null,
    /// SUBSCRIBE sent
    Sent,
    /// 2xx received
    Accepted,
    /// NOTIFY with pending state received
    Pending,
    /// NOTIFY with active state received
    Active,
    Terminated,
    /// Extension state, see `sub_state_name`
    Unknown,
}

impl SubscriptionState {
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(SubscriptionState::Null),
            1 => Ok(SubscriptionState::Sent),
            2 => Ok(SubscriptionState::Accepted),
            3 => Ok(SubscriptionState::Pending),
            4 => Ok(SubscriptionState::Active),
            5 => Ok(SubscriptionState::Terminated),
            6 => Ok(SubscriptionState::Unknown),
            other => Err(DomainError::invalid_code("subscription state", other)),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            SubscriptionState::Null => 0,
            SubscriptionState::Sent => 1,
            SubscriptionState::Accepted => 2,
            SubscriptionState::Pending => 3,
            SubscriptionState::Active => 4,
            SubscriptionState::Terminated => 5,
            SubscriptionState::Unknown => 6,
        }
    }
}

/// Buddy record exactly as reported by the SIP stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBuddyState {
    pub id: i32,
    pub uri: String,
    pub contact: Option<String>,
    pub status: i32,
    pub status_text: Option<String>,
    pub monitor_presence: bool,
    pub sub_state: i32,
    pub sub_state_name: Option<String>,
    pub sub_term_code: i32,
    pub sub_term_reason: Option<String>,
}

/// Typed buddy presence record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuddyState {
    pub id: BuddyId,
    uri: SipUri,
    /// URI text as the stack reported it, re-emitted on encoding
    reported_uri: String,
    /// Contact URI reported in the last NOTIFY
    pub contact: Option<String>,
    pub status: BuddyStatus,
    pub status_text: Option<String>,
    pub monitor_presence: bool,
    pub sub_state: SubscriptionState,
    pub sub_state_name: Option<String>,
    /// SIP status code that terminated the subscription, 0 if none
    pub sub_term_code: u16,
    pub sub_term_reason: Option<String>,
}

impl BuddyState {
    pub fn new(id: BuddyId, uri: SipUri) -> Self {
        Self {
            id,
            reported_uri: uri.to_string(),
            uri,
            contact: None,
            status: BuddyStatus::Unknown,
            status_text: None,
            monitor_presence: false,
            sub_state: SubscriptionState::Null,
            sub_state_name: None,
            sub_term_code: 0,
            sub_term_reason: None,
        }
    }

    pub fn uri(&self) -> &SipUri {
        &self.uri
    }

    pub fn set_uri(&mut self, uri: SipUri) {
        self.reported_uri = uri.to_string();
        self.uri = uri;
    }

    pub fn is_online(&self) -> bool {
        self.status == BuddyStatus::Online
    }

    /// Presence updates are flowing for this buddy
    pub fn is_subscribed(&self) -> bool {
        self.monitor_presence
            && matches!(
                self.sub_state,
                SubscriptionState::Accepted | SubscriptionState::Pending | SubscriptionState::Active
            )
    }

    /// Free-form status text, falling back to the status name
    pub fn display_status(&self) -> &str {
        match self.status_text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => match self.status {
                BuddyStatus::Unknown => "unknown",
                BuddyStatus::Online => "online",
                BuddyStatus::Offline => "offline",
            },
        }
    }
}

impl TryFrom<RawBuddyState> for BuddyState {
    type Error = DomainError;

    fn try_from(raw: RawBuddyState) -> Result<Self> {
        let id = BuddyId::from_raw(raw.id)?;
        let sub_term_code = u16::try_from(raw.sub_term_code).map_err(|_| {
            DomainError::ValidationError(format!(
                "invalid subscription termination code {}",
                raw.sub_term_code
            ))
        })?;

        Ok(Self {
            id,
            uri: SipUri::parse(&raw.uri)?,
            reported_uri: raw.uri,
            contact: raw.contact,
            status: BuddyStatus::from_code(raw.status)?,
            status_text: raw.status_text,
            monitor_presence: raw.monitor_presence,
            sub_state: SubscriptionState::from_code(raw.sub_state)?,
            sub_state_name: raw.sub_state_name,
            sub_term_code,
            sub_term_reason: raw.sub_term_reason,
        })
    }
}

impl From<&BuddyState> for RawBuddyState {
    fn from(buddy: &BuddyState) -> Self {
        Self {
            id: buddy.id.value(),
            uri: buddy.reported_uri.clone(),
            contact: buddy.contact.clone(),
            status: buddy.status.code(),
            status_text: buddy.status_text.clone(),
            monitor_presence: buddy.monitor_presence,
            sub_state: buddy.sub_state.code(),
            sub_state_name: buddy.sub_state_name.clone(),
            sub_term_code: i32::from(buddy.sub_term_code),
            sub_term_reason: buddy.sub_term_reason.clone(),
        }
    }
}
