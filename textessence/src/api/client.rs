use async_trait::async_trait;
use reqwest::Client;
use shared::config::Config;
use shared::{Error, Result};
use shared_http::api::{MembershipQuery, MembershipRecord};
use tracing::{debug, info, warn};

use crate::ports::MembershipSource;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(Config::from_env())
    }

    pub fn with_config(config: Config) -> Self {
        let config = config.resolved(page_origin().as_deref());
        info!("Dashboard API base path: {}", config.script_root);
        Self {
            client: build_client(&config),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &Config) -> Client {
    Client::builder()
        .timeout(config.request_timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
            Client::new()
        })
}

// The browser owns request timeouts on wasm.
#[cfg(target_arch = "wasm32")]
fn build_client(_config: &Config) -> Client {
    Client::new()
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MembershipSource for ApiClient {
    async fn fetch_membership(&self, query: &MembershipQuery) -> Result<Vec<MembershipRecord>> {
        let url = self.config.membership_url();
        debug!(
            "Fetching corpus membership at URL: {} (query_key={}, current_corpora={})",
            url, query.query_key, query.current_corpora
        );

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!("Membership request failed: {}", e);
                Error::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Membership request for {} answered {}", query.query_key, status);
            return Err(Error::Network(format!("server responded with {}", status)));
        }

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read membership response: {}", e);
            Error::Network(e.to_string())
        })?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("Membership response is not a list of records: {}", e);
            Error::MalformedResponse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use shared::config::MEMBERSHIP_ENDPOINT;
    use std::time::Duration;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(script_root: String) -> ApiClient {
        ApiClient::with_config(Config {
            script_root,
            request_timeout: Duration::from_secs(5),
        })
    }

    #[test]
    fn test_site_root_script_root_still_yields_absolute_url() {
        let client = ApiClient::with_config(Config {
            script_root: String::new(),
            request_timeout: Duration::from_secs(5),
        });

        assert!(client.config().is_absolute());
        assert_eq!(
            client.config().membership_url(),
            "http://localhost:5000/_get_aggregate_nearest_neighbors_membership"
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_query_parameters() {
        // Echo the parameters back as corpus names
        let router = Router::new().route(
            MEMBERSHIP_ENDPOINT,
            get(|Query(query): Query<MembershipQuery>| async move {
                Json(vec![
                    MembershipRecord::new(query.query_key, true),
                    MembershipRecord::new(query.current_corpora, false),
                ])
            }),
        );
        let client = client_for(serve(router).await);

        let records = client
            .fetch_membership(&MembershipQuery::new("C0011849", "PubMed,CORD-19"))
            .await
            .unwrap();

        assert_eq!(
            records,
            vec![
                MembershipRecord::new("C0011849", true),
                MembershipRecord::new("PubMed,CORD-19", false),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_preserves_server_order() {
        let router = Router::new().route(
            MEMBERSHIP_ENDPOINT,
            get(|| async {
                r#"[{"Source":"2020-04-10","Checked":0},{"Source":"2020-03-27","Checked":1},{"Source":"2020-04-03","Checked":1}]"#
            }),
        );
        let client = client_for(serve(router).await);

        let records = client
            .fetch_membership(&MembershipQuery::new("C0011849", ""))
            .await
            .unwrap();

        let sources: Vec<&str> = records.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["2020-04-10", "2020-03-27", "2020-04-03"]);
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let router = Router::new().route(MEMBERSHIP_ENDPOINT, get(|| async { "<html>oops</html>" }));
        let client = client_for(serve(router).await);

        let result = client
            .fetch_membership(&MembershipQuery::new("C0011849", ""))
            .await;
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_invalid_checked_flag_is_malformed() {
        let router = Router::new().route(
            MEMBERSHIP_ENDPOINT,
            get(|| async { r#"[{"Source":"PubMed","Checked":7}]"# }),
        );
        let client = client_for(serve(router).await);

        let result = client
            .fetch_membership(&MembershipQuery::new("C0011849", ""))
            .await;
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_error_status_is_network_error() {
        let router = Router::new().route(
            MEMBERSHIP_ENDPOINT,
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = client_for(serve(router).await);

        let result = client
            .fetch_membership(&MembershipQuery::new("C0011849", ""))
            .await;
        match result {
            Err(Error::Network(message)) => assert!(message.contains("500"), "{}", message),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = client_for(format!("http://{}", addr));

        let result = client
            .fetch_membership(&MembershipQuery::new("C0011849", ""))
            .await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
