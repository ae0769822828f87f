//! AppMessage enum for async communication within the application.

use crate::error::NetworkError;
use crate::models::RecordSet;
use crate::state::FetchTicket;

/// Messages received from background tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A fetch finished with a record set.
    UsersLoaded {
        ticket: FetchTicket,
        records: RecordSet,
    },
    /// A fetch failed.
    UsersFailed {
        ticket: FetchTicket,
        error: NetworkError,
    },
}
