use serde::{Deserialize, Serialize};

pub const DEFAULT_GRAPHQL_ENDPOINT: &str =
    "https://zone01normandie.org/api/graphql-engine/v1/graphql";
pub const DEFAULT_AUTH_ENDPOINT: &str = "https://zone01normandie.org/api/auth/signin";
pub const DEFAULT_EVENT_PATH: &str = "/rouen/div-01";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// GraphQL endpoint receiving every data query.
    pub graphql_endpoint: String,

    /// Sign-in endpoint (basic auth → bearer token).
    pub auth_endpoint: String,

    /// Organizational path used to filter level and transaction queries
    /// (matched with `_ilike`).
    pub event_path: String,

    /// Per-request timeout on native targets.
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
            event_path: DEFAULT_EVENT_PATH.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
