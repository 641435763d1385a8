use async_trait::async_trait;
use shared::Result;
use shared_http::api::{MembershipQuery, MembershipRecord};

/// Port for looking up corpus membership of an aggregate neighbor query.
///
/// Browser futures are not `Send`, so the wasm build drops that bound.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MembershipSource {
    /// Returns one record per corpus, in the order the server chose.
    async fn fetch_membership(&self, query: &MembershipQuery) -> Result<Vec<MembershipRecord>>;
}
