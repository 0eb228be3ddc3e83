//! Transient notification presenter.
//!
//! Notifications are pushed by the updater and stay visible until they
//! expire. Expiry is driven by the caller passing the current instant into
//! [`NotificationCenter::sweep`], so behavior is testable without sleeping.

use std::time::{Duration, Instant};

/// How long a notification stays visible before it is auto-dismissed.
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created: Instant,
}

impl Notification {
    pub fn new(message: String, kind: NotificationKind) -> Self {
        Self {
            message,
            kind,
            created: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), NotificationKind::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), NotificationKind::Info)
    }

    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created) >= ttl
    }
}

/// Ordered queue of visible notifications.
#[derive(Debug)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_ttl(DISMISS_AFTER)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            ttl,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Drop notifications whose dismiss deadline has passed.
    pub fn sweep(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items.retain(|n| !n.is_expired_at(now, ttl));
    }

    pub fn visible(&self) -> &[Notification] {
        &self.items
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
