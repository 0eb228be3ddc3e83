use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuickdeskError;

/// Opaque ticket identifier, as rendered into the page by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        TicketId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        TicketId(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "open"),
            TicketStatus::InProgress => write!(f, "in progress"),
            TicketStatus::Resolved => write!(f, "resolved"),
            TicketStatus::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = QuickdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "in progress" | "in_progress" => Ok(TicketStatus::InProgress),
            "resolved" => Ok(TicketStatus::Resolved),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(QuickdeskError::InvalidStatus(s.to_string())),
        }
    }
}

impl TicketStatus {
    /// Style classifier for the status badge.
    pub fn css_class(&self) -> String {
        status_class(&self.to_string())
    }
}

pub const VALID_STATUSES: &[&str] = &["open", "in progress", "resolved", "closed"];

/// Normalize a status string into its style classifier: lowercase, spaces
/// replaced with hyphens, prefixed with `status-`.
pub fn status_class(status: &str) -> String {
    format!("status-{}", status.to_lowercase().replace(' ', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(TicketStatus::Open.to_string(), "open");
        assert_eq!(TicketStatus::InProgress.to_string(), "in progress");
        assert_eq!(TicketStatus::Resolved.to_string(), "resolved");
        assert_eq!(TicketStatus::Closed.to_string(), "closed");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("open".parse::<TicketStatus>().unwrap(), TicketStatus::Open);
        assert_eq!(
            "in progress".parse::<TicketStatus>().unwrap(),
            TicketStatus::InProgress
        );
        assert_eq!(
            "in_progress".parse::<TicketStatus>().unwrap(),
            TicketStatus::InProgress
        );
        assert_eq!(
            "Closed".parse::<TicketStatus>().unwrap(),
            TicketStatus::Closed
        );
        assert!("wontfix".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn test_status_roundtrip() {
        for s in VALID_STATUSES {
            let status: TicketStatus = s.parse().unwrap();
            assert_eq!(&status.to_string(), s);
        }
    }

    #[test]
    fn test_status_class_normalization() {
        assert_eq!(status_class("closed"), "status-closed");
        assert_eq!(status_class("in progress"), "status-in-progress");
        assert_eq!(status_class("In Progress"), "status-in-progress");
        assert_eq!(TicketStatus::InProgress.css_class(), "status-in-progress");
    }

    #[test]
    fn test_ticket_id_display() {
        let id = TicketId::from("42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_str(), "42");
    }
}
