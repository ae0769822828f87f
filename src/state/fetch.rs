//! Fetch lifecycle tracking.
//!
//! Only the most recent fetch may update the session. Each call to
//! [`FetchStatus::begin`] hands out a new [`FetchTicket`]; completions that
//! carry an older ticket are reported as stale and must be dropped.

use crate::error::NetworkError;

/// Generation number identifying one fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Loading state of the record source.
///
/// `has_loaded` is tracked separately from the record count so that an
/// empty response is distinguishable from "never fetched".
#[derive(Debug, Clone, Default)]
pub struct FetchStatus {
    generation: u64,
    in_flight: Option<FetchTicket>,
    has_loaded: bool,
    last_error: Option<NetworkError>,
}

impl FetchStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding any outstanding one.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        let ticket = FetchTicket(self.generation);
        if let Some(previous) = self.in_flight.replace(ticket) {
            tracing::debug!(
                "Fetch #{} superseded by #{}",
                previous.generation(),
                ticket.generation()
            );
        }
        self.last_error = None;
        ticket
    }

    /// Whether `ticket` belongs to the latest fetch still awaiting a result.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.in_flight == Some(ticket)
    }

    /// Record a successful completion. Returns `false` for stale tickets.
    pub fn succeed(&mut self, ticket: FetchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.in_flight = None;
        self.has_loaded = true;
        self.last_error = None;
        true
    }

    /// Record a failed completion. Returns `false` for stale tickets.
    pub fn fail(&mut self, ticket: FetchTicket, error: NetworkError) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.in_flight = None;
        self.last_error = Some(error);
        true
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    pub fn last_error(&self) -> Option<&NetworkError> {
        self.last_error.as_ref()
    }
}
