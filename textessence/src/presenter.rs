use std::sync::{Mutex, MutexGuard, PoisonError};

use shared::Result;
use shared_http::api::{MembershipQuery, MembershipRecord};
use tracing::{debug, warn};

use crate::context::QueryContext;
use crate::panel::MembershipPanel;
use crate::ports::MembershipSource;

/// Generation number of an issued membership request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A request that has been issued and is waiting for its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub ticket: Ticket,
    pub query: MembershipQuery,
}

/// What happened to a fetch outcome handed to the presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The outcome belonged to the latest request and is now on the panel.
    Applied(MembershipPanel),
    /// A newer request was issued meanwhile; the outcome was dropped.
    Superseded { ticket: Ticket, latest: Ticket },
}

#[derive(Default)]
struct PresenterState {
    issued: u64,
    panel: MembershipPanel,
}

/// Fetches corpus membership on demand and keeps the selection panel in sync.
///
/// Every activation takes a fresh [`Ticket`]. Only the outcome carrying the
/// most recently issued ticket may touch the panel, so overlapping
/// activations settle on the last one the user made no matter which response
/// arrives first.
pub struct MembershipTablePresenter<S> {
    source: S,
    state: Mutex<PresenterState>,
}

impl<S> MembershipTablePresenter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(PresenterState::default()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn panel(&self) -> MembershipPanel {
        self.lock().panel.clone()
    }

    /// Validates the context and reserves the next ticket for it.
    pub fn issue(&self, context: &QueryContext) -> Result<PendingRequest> {
        let query = context.to_query()?;
        let ticket = self.next_ticket();
        debug!(
            "Issued membership request #{} for query {}",
            ticket.get(),
            query.query_key
        );
        Ok(PendingRequest { ticket, query })
    }

    /// Puts a fetch outcome on the panel if `ticket` is still the latest.
    pub fn apply(&self, ticket: Ticket, outcome: Result<Vec<MembershipRecord>>) -> Activation {
        let mut state = self.lock();
        let latest = Ticket(state.issued);
        if ticket != latest {
            debug!(
                "Dropping membership response #{}, request #{} is newer",
                ticket.get(),
                latest.get()
            );
            return Activation::Superseded { ticket, latest };
        }

        match outcome {
            Ok(records) => {
                debug!(
                    "Showing {} corpora for request #{}",
                    records.len(),
                    ticket.get()
                );
                state.panel.show(records);
            }
            Err(error) => {
                warn!("Membership request #{} failed: {}", ticket.get(), error);
                state.panel.fail(&error);
            }
        }
        Activation::Applied(state.panel.clone())
    }

    /// Flips the checkbox of one row, as a click on it would.
    pub fn toggle(&self, index: usize) -> MembershipPanel {
        let mut state = self.lock();
        if !state.panel.toggle(index) {
            warn!("No corpus row at index {}", index);
        }
        state.panel.clone()
    }

    fn next_ticket(&self) -> Ticket {
        let mut state = self.lock();
        state.issued += 1;
        Ticket(state.issued)
    }

    fn lock(&self) -> MutexGuard<'_, PresenterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: MembershipSource> MembershipTablePresenter<S> {
    /// Runs one fetch-and-render cycle for the given context.
    ///
    /// A context without a query key is reported on the panel without
    /// contacting the server. It still counts as the latest activation.
    pub async fn on_trigger_activated(&self, context: &QueryContext) -> Activation {
        let pending = match self.issue(context) {
            Ok(pending) => pending,
            Err(error) => {
                let ticket = self.next_ticket();
                return self.apply(ticket, Err(error));
            }
        };

        let outcome = self.source.fetch_membership(&pending.query).await;
        self.apply(pending.ticket, outcome)
    }
}
