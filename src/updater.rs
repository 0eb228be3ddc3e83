//! Optimistic quick-status-update flow.
//!
//! When the user picks a new status, the control is disabled immediately,
//! the new status is posted to the server, and the outcome decides what
//! happens next: on success the badge is reconciled and the control's
//! confirmed value advances; on rejection or transport failure the
//! selection rolls back and an error notification is shown. The control is
//! re-enabled exactly once on every path.
//!
//! Disabling the control is the only single-flight guard, and it is scoped
//! to that control: controls for different tickets update concurrently
//! without interference.

use crate::api::TicketApi;
use crate::error::QuickdeskError;
use crate::notify::{Notification, NotificationCenter};
use crate::types::{TicketId, TicketStatus};

/// Interactive element for selecting a ticket's status.
///
/// `original` is the last server-confirmed status and is the rollback
/// target; `selected` is whatever the user currently sees.
#[derive(Debug, Clone)]
pub struct StatusControl {
    ticket: TicketId,
    original: TicketStatus,
    selected: TicketStatus,
    disabled: bool,
}

impl StatusControl {
    pub fn new(ticket: TicketId, current: TicketStatus) -> Self {
        Self {
            ticket,
            original: current,
            selected: current,
            disabled: false,
        }
    }

    pub fn ticket(&self) -> &TicketId {
        &self.ticket
    }

    /// Last server-confirmed status.
    pub fn original(&self) -> TicketStatus {
        self.original
    }

    /// Status currently shown in the control.
    pub fn selected(&self) -> TicketStatus {
        self.selected
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn confirm(&mut self, status: TicketStatus) {
        self.original = status;
        self.selected = status;
    }

    fn revert(&mut self) {
        self.selected = self.original;
    }
}

/// Read-only projection of a ticket's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    text: String,
    css_class: String,
}

impl StatusBadge {
    pub fn new(status: TicketStatus) -> Self {
        Self {
            text: status.to_string(),
            css_class: status.css_class(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn css_class(&self) -> &str {
        &self.css_class
    }

    fn set(&mut self, status: TicketStatus) {
        self.text = status.to_string();
        self.css_class = status.css_class();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Server confirmed the update; badge and control reflect the new status.
    Applied,
    /// Server rejected the update or the request failed; selection reverted.
    RolledBack,
    /// An update was already in flight for this control.
    Ignored,
}

/// First phase of a status change: disable the control and show the new
/// selection. Returns false if an update is already in flight, in which
/// case the change event is dropped.
pub fn begin_status_change(control: &mut StatusControl, new_status: TicketStatus) -> bool {
    if control.disabled {
        return false;
    }
    control.disabled = true;
    control.selected = new_status;
    true
}

/// Second phase: reconcile UI state with the server's answer and re-enable
/// the control.
pub fn finish_status_change(
    control: &mut StatusControl,
    badge: &mut StatusBadge,
    notices: &mut NotificationCenter,
    new_status: TicketStatus,
    result: Result<(), QuickdeskError>,
) -> UpdateOutcome {
    let outcome = match result {
        Ok(()) => {
            notices.push(Notification::success("Ticket status updated successfully!"));
            badge.set(new_status);
            control.confirm(new_status);
            UpdateOutcome::Applied
        }
        Err(e) => {
            tracing::warn!("status update for ticket {} failed: {}", control.ticket, e);
            let message = if e.is_rejection() {
                "Failed to update ticket status."
            } else {
                "An error occurred while updating the ticket."
            };
            notices.push(Notification::error(message));
            control.revert();
            UpdateOutcome::RolledBack
        }
    };
    control.disabled = false;
    outcome
}

/// Run the full flow against a [`TicketApi`].
pub async fn apply_status_change<A: TicketApi>(
    control: &mut StatusControl,
    badge: &mut StatusBadge,
    new_status: TicketStatus,
    api: &A,
    notices: &mut NotificationCenter,
) -> UpdateOutcome {
    if !begin_status_change(control, new_status) {
        return UpdateOutcome::Ignored;
    }
    let result = api.update_status(control.ticket(), new_status).await;
    finish_status_change(control, badge, notices, new_status, result)
}
