pub mod api;
pub mod config;
pub mod error;
pub mod notify;
pub mod page;
pub mod types;
pub mod updater;

pub use api::{HttpTicketApi, TicketApi};
pub use config::Config;
pub use error::{QuickdeskError, Result};
pub use notify::{DISMISS_AFTER, Notification, NotificationCenter, NotificationKind};
pub use page::{TicketPage, TicketSeed};
pub use types::{TicketId, TicketStatus, VALID_STATUSES, status_class};
pub use updater::{
    StatusBadge, StatusControl, UpdateOutcome, apply_status_change, begin_status_change,
    finish_status_change,
};
