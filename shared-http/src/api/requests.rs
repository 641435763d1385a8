use serde::{Deserialize, Serialize};

/// Query parameters of the aggregate membership endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipQuery {
    /// Opaque key of the nearest-neighbor query being viewed
    pub query_key: String,
    /// Comma-joined names of the corpora currently selected
    #[serde(default)]
    pub current_corpora: String,
}

impl MembershipQuery {
    pub fn new(query_key: impl Into<String>, current_corpora: impl Into<String>) -> Self {
        Self {
            query_key: query_key.into(),
            current_corpora: current_corpora.into(),
        }
    }
}
