use std::time::Duration;

use tracing::warn;

/// Endpoint that reports which corpora take part in the aggregate neighbor query.
pub const MEMBERSHIP_ENDPOINT: &str = "/_get_aggregate_nearest_neighbors_membership";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base path of the dashboard server, without a trailing slash.
    ///
    /// Either an absolute URL or a path on the page's own origin (possibly
    /// empty, as when the dashboard is served at `/`).
    pub script_root: String,
    pub request_timeout: Duration,
}

impl Config {
    const DEFAULT_SCRIPT_ROOT: &'static str = "http://localhost:5000";
    const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

    /// Reads the process environment, falling back to values baked in at
    /// build time. The browser build only ever sees the latter.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok().or_else(|| build_time_var(key)))
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let script_root = lookup("TEXTESSENCE_SCRIPT_ROOT")
            .map(|root| normalize_script_root(&root))
            .unwrap_or_else(|| Self::DEFAULT_SCRIPT_ROOT.to_string());

        let timeout_ms = match lookup("TEXTESSENCE_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                warn!(
                    "TEXTESSENCE_REQUEST_TIMEOUT_MS={} is not a number, using {}ms",
                    raw,
                    Self::DEFAULT_REQUEST_TIMEOUT_MS
                );
                Self::DEFAULT_REQUEST_TIMEOUT_MS
            }),
            None => Self::DEFAULT_REQUEST_TIMEOUT_MS,
        };

        Self {
            script_root,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.script_root.contains("://")
    }

    /// Anchors a path-only script root at `origin`.
    ///
    /// Without an origin a relative root cannot be requested, so the default
    /// root is used instead.
    pub fn resolved(mut self, origin: Option<&str>) -> Self {
        if self.is_absolute() {
            return self;
        }
        match origin {
            Some(origin) => {
                self.script_root = format!("{}{}", origin.trim_end_matches('/'), self.script_root);
            }
            None => {
                warn!(
                    "Script root '{}' is relative and no page origin is known, using {}",
                    self.script_root,
                    Self::DEFAULT_SCRIPT_ROOT
                );
                self.script_root = Self::DEFAULT_SCRIPT_ROOT.to_string();
            }
        }
        self
    }

    pub fn membership_url(&self) -> String {
        format!("{}{}", self.script_root, MEMBERSHIP_ENDPOINT)
    }
}

fn normalize_script_root(raw: &str) -> String {
    let root = raw.trim().trim_end_matches('/');
    if root.is_empty() || root.contains("://") || root.starts_with('/') {
        root.to_string()
    } else {
        format!("/{}", root)
    }
}

fn build_time_var(key: &str) -> Option<String> {
    let value = match key {
        "TEXTESSENCE_SCRIPT_ROOT" => option_env!("TEXTESSENCE_SCRIPT_ROOT"),
        "TEXTESSENCE_REQUEST_TIMEOUT_MS" => option_env!("TEXTESSENCE_REQUEST_TIMEOUT_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}
