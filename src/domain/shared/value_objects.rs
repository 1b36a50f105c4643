//! Shared value objects

use super::error::DomainError;
use super::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Call identifier as allocated by the SIP stack.
///
/// The stack hands out small non-negative slot indexes and uses `-1` for
/// "no call"; the latter is never a valid `CallId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CallId(u32);

impl CallId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Build from the raw stack value, rejecting the invalid-call sentinel
    pub fn from_raw(raw: i32) -> Result<Self> {
        u32::try_from(raw)
            .map(Self)
            .map_err(|_| DomainError::ValidationError(format!("invalid call id {}", raw)))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Buddy identifier in the presence list. Holds the stack's `int` id, so
/// encoding back to the raw record is lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuddyId(i32);

impl BuddyId {
    /// Negative ids are the stack's "no buddy" sentinel
    pub fn from_raw(raw: i32) -> Result<Self> {
        if raw < 0 {
            return Err(DomainError::ValidationError(format!(
                "Invalid buddy id: {}",
                raw
            )));
        }
        Ok(Self(raw))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for BuddyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// SIP URI value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SipUri {
    secure: bool,
    user: String,
    host: String,
    port: Option<u16>,
    params: Option<String>,
}

impl SipUri {
    pub fn new(user: String, host: String, port: Option<u16>) -> Self {
        Self {
            secure: false,
            user,
            host,
            port,
            params: None,
        }
    }

    /// Parse `sip:user@host[:port][;params]`, `sips:` and the `<...>`
    /// bracketed form used in contact headers. IPv6 hosts are written
    /// `[addr]` and stored without the brackets.
    pub fn parse(uri: &str) -> Result<Self> {
        let trimmed = uri.trim();
        let trimmed = trimmed
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .unwrap_or(trimmed);

        let (secure, rest) = if let Some(rest) = trimmed.strip_prefix("sips:") {
            (true, rest)
        } else if let Some(rest) = trimmed.strip_prefix("sip:") {
            (false, rest)
        } else {
            return Err(DomainError::ValidationError(format!(
                "URI must start with 'sip:' or 'sips:': {}",
                uri
            )));
        };

        let (rest, params) = match rest.split_once(';') {
            Some((rest, params)) => (rest, Some(params.to_string())),
            None => (rest, None),
        };

        let invalid = || DomainError::ValidationError(format!("Invalid SIP URI format: {}", uri));

        let (user, host_port) = rest.split_once('@').ok_or_else(invalid)?;
        if user.is_empty() || host_port.is_empty() {
            return Err(invalid());
        }

        let (host, port) = if let Some(bracketed) = host_port.strip_prefix('[') {
            let (host, tail) = bracketed.split_once(']').ok_or_else(invalid)?;
            match tail {
                "" => (host, None),
                _ => {
                    let port = tail.strip_prefix(':').ok_or_else(invalid)?;
                    (host, Some(Self::parse_port(port, uri)?))
                }
            }
        } else {
            match host_port.split_once(':') {
                Some((host, port)) => (host, Some(Self::parse_port(port, uri)?)),
                None => (host_port, None),
            }
        };
        if host.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            secure,
            user: user.to_string(),
            host: host.to_string(),
            port,
            params,
        })
    }

    fn parse_port(port: &str, uri: &str) -> Result<u16> {
        port.parse()
            .map_err(|_| DomainError::ValidationError(format!("Invalid SIP URI port: {}", uri)))
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// URI parameters without the leading `;`, e.g. `transport=tcp`
    pub fn params(&self) -> Option<&str> {
        self.params.as_deref()
    }
}

impl fmt::Display for SipUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = if self.secure { "sips" } else { "sip" };
        write!(f, "{}:{}@", scheme, self.user)?;
        if self.host.contains(':') {
            write!(f, "[{}]", self.host)?;
        } else {
            write!(f, "{}", self.host)?;
        }
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        if let Some(params) = &self.params {
            write!(f, ";{}", params)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_id_rejects_invalid_sentinel() {
        assert_eq!(CallId::from_raw(3).unwrap(), CallId::new(3));
        assert!(CallId::from_raw(-1).is_err());
    }

    #[test]
    fn test_sip_uri_parse() {
        let uri = SipUri::parse("sip:alice@example.com").unwrap();
        assert_eq!(uri.user(), "alice");
        assert_eq!(uri.host(), "example.com");
        assert_eq!(uri.port(), None);
        assert!(!uri.is_secure());

        let uri_with_port = SipUri::parse("<sips:bob@example.com:5061;transport=tls>").unwrap();
        assert_eq!(uri_with_port.user(), "bob");
        assert_eq!(uri_with_port.port(), Some(5061));
        assert!(uri_with_port.is_secure());
        assert_eq!(uri_with_port.params(), Some("transport=tls"));
    }

    #[test]
    fn test_sip_uri_parse_errors() {
        assert!(SipUri::parse("tel:+331234").is_err());
        assert!(SipUri::parse("sip:example.com").is_err());
        assert!(SipUri::parse("sip:alice@example.com:port").is_err());
        assert!(SipUri::parse("sip:alice@[2001:db8::1").is_err());
        assert!(SipUri::parse("sip:alice@[2001:db8::1]5060").is_err());
    }

    #[test]
    fn test_sip_uri_ipv6_host() {
        let uri = SipUri::parse("sip:bob@[2001:db8::1]:5060").unwrap();
        assert_eq!(uri.host(), "2001:db8::1");
        assert_eq!(uri.port(), Some(5060));
        assert_eq!(uri.to_string(), "sip:bob@[2001:db8::1]:5060");

        let no_port = SipUri::parse("sip:bob@[::1]").unwrap();
        assert_eq!(no_port.port(), None);
        assert_eq!(no_port.to_string(), "sip:bob@[::1]");
    }

    #[test]
    fn test_sip_uri_keeps_params() {
        let uri = SipUri::parse("sip:bob@example.com;transport=tcp;lr").unwrap();
        assert_eq!(uri.host(), "example.com");
        assert_eq!(uri.params(), Some("transport=tcp;lr"));
        assert_eq!(uri.to_string(), "sip:bob@example.com;transport=tcp;lr");
    }

    #[test]
    fn test_buddy_id_from_raw() {
        assert_eq!(BuddyId::from_raw(i32::MAX).unwrap().value(), i32::MAX);
        assert!(BuddyId::from_raw(-1).is_err());
    }

    #[test]
    fn test_sip_uri_display() {
        let uri = SipUri::new("alice".to_string(), "example.com".to_string(), None);
        assert_eq!(uri.to_string(), "sip:alice@example.com");

        let uri_with_port = SipUri::new("bob".to_string(), "example.com".to_string(), Some(5060));
        assert_eq!(uri_with_port.to_string(), "sip:bob@example.com:5060");
    }
}
