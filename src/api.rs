//! Server interface for ticket status mutations.
//!
//! The server contract is a single REST-style endpoint:
//! `POST {base}/update_ticket/{ticket_id}` with a form-encoded body field
//! `status`. A 2xx response means the update was applied; any other status
//! is a rejection. No response body is consumed.

use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::error::{QuickdeskError, Result};
use crate::types::{TicketId, TicketStatus};

/// Common interface for the ticket endpoint, so tests can substitute a
/// scripted implementation for the HTTP client.
pub trait TicketApi: Send + Sync {
    /// Ask the server to move a ticket to a new status.
    fn update_status(
        &self,
        ticket: &TicketId,
        status: TicketStatus,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// reqwest-backed implementation of [`TicketApi`].
///
/// No request timeout is configured: a stalled request keeps the
/// originating control disabled until the transport gives up.
pub struct HttpTicketApi {
    client: Client,
    base_url: Url,
}

impl HttpTicketApi {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.server.base_url).map_err(|e| {
            QuickdeskError::Config(format!(
                "invalid server base URL '{}': {}",
                config.server.base_url, e
            ))
        })?;
        Ok(Self::new(base_url))
    }

    fn endpoint(&self, ticket: &TicketId) -> Result<Url> {
        self.base_url
            .join(&format!("update_ticket/{}", ticket))
            .map_err(|e| {
                QuickdeskError::Config(format!("cannot build update URL for '{}': {}", ticket, e))
            })
    }
}

impl TicketApi for HttpTicketApi {
    async fn update_status(&self, ticket: &TicketId, status: TicketStatus) -> Result<()> {
        let url = self.endpoint(ticket)?;
        tracing::debug!("posting status '{}' for ticket {}", status, ticket);

        let response = self
            .client
            .post(url)
            .form(&[("status", status.to_string())])
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            tracing::warn!(
                "server rejected status update for ticket {}: HTTP {}",
                ticket,
                response.status()
            );
            Err(QuickdeskError::Rejected(response.status()))
        }
    }
}
