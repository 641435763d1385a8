//! Corpus membership table for the nearest-neighbor dashboard.
//!
//! The [`MembershipTablePresenter`] asks a [`MembershipSource`] which corpora
//! take part in the aggregate neighbor query and projects the answer into a
//! [`MembershipPanel`] that a front end can draw.

pub mod api;
pub mod context;
pub mod panel;
pub mod ports;
pub mod presenter;
pub mod render;

pub use api::ApiClient;
pub use context::{CorpusSelection, QueryContext};
pub use panel::{MembershipPanel, MembershipRow};
pub use ports::MembershipSource;
pub use presenter::{Activation, MembershipTablePresenter, PendingRequest, Ticket};
