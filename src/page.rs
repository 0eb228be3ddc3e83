//! Page-level registry of interactive ticket elements.
//!
//! The server renders the page with one status control and one badge per
//! ticket; this registry is the explicit equivalent, seeded once at
//! construction and keyed by ticket identifier.

use std::collections::HashMap;

use crate::api::TicketApi;
use crate::error::{QuickdeskError, Result};
use crate::notify::NotificationCenter;
use crate::types::{TicketId, TicketStatus};
use crate::updater::{StatusBadge, StatusControl, UpdateOutcome, apply_status_change};

/// Server-rendered state for one ticket row.
#[derive(Debug, Clone)]
pub struct TicketSeed {
    pub ticket: TicketId,
    pub status: TicketStatus,
}

impl TicketSeed {
    pub fn new(ticket: impl Into<TicketId>, status: TicketStatus) -> Self {
        Self {
            ticket: ticket.into(),
            status,
        }
    }
}

pub struct TicketPage {
    controls: HashMap<TicketId, StatusControl>,
    badges: HashMap<TicketId, StatusBadge>,
    notices: NotificationCenter,
}

impl TicketPage {
    pub fn new(seeds: impl IntoIterator<Item = TicketSeed>) -> Self {
        let mut page = Self {
            controls: HashMap::new(),
            badges: HashMap::new(),
            notices: NotificationCenter::new(),
        };
        for seed in seeds {
            page.register(seed.ticket, seed.status);
        }
        page
    }

    /// Add a control/badge pair for a ticket. Re-registering a ticket
    /// resets its elements to the given status.
    pub fn register(&mut self, ticket: TicketId, status: TicketStatus) {
        self.controls
            .insert(ticket.clone(), StatusControl::new(ticket.clone(), status));
        self.badges.insert(ticket, StatusBadge::new(status));
    }

    pub fn control(&self, ticket: &TicketId) -> Option<&StatusControl> {
        self.controls.get(ticket)
    }

    pub fn badge(&self, ticket: &TicketId) -> Option<&StatusBadge> {
        self.badges.get(ticket)
    }

    pub fn notices(&self) -> &NotificationCenter {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notices
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Handle a change event on a ticket's status control.
    pub async fn change<A: TicketApi>(
        &mut self,
        ticket: &TicketId,
        new_status: TicketStatus,
        api: &A,
    ) -> Result<UpdateOutcome> {
        let control = self
            .controls
            .get_mut(ticket)
            .ok_or_else(|| QuickdeskError::UnknownTicket(ticket.to_string()))?;
        let badge = self
            .badges
            .get_mut(ticket)
            .ok_or_else(|| QuickdeskError::UnknownTicket(ticket.to_string()))?;

        Ok(apply_status_change(control, badge, new_status, api, &mut self.notices).await)
    }
}
