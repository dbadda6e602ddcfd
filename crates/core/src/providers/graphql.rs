use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::session::Session;
use crate::models::settings::DashboardSettings;
use super::traits::GraphQlTransport;

/// GraphQL-over-HTTP client for the platform's Hasura endpoint.
///
/// - **Auth**: `Authorization: Bearer <token>` on every request.
/// - **Body**: `{ "query": "<document>" }`, no variables.
/// - **Errors**: GraphQL errors come back with HTTP 200 and an `errors` list.
pub struct HttpGraphQlClient {
    client: Client,
    endpoint: String,
}

impl HttpGraphQlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, crate::models::settings::DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self::with_timeout(settings.graphql_endpoint.clone(), settings.request_timeout_secs)
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    fn with_timeout(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// ── GraphQL wire types ──────────────────────────────────────────────

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

/// One entry of a GraphQL `errors` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Raw GraphQL response: `data` and/or `errors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,

    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse {
    /// A response carrying only `data`.
    pub fn from_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    /// A response carrying only an `errors` list.
    pub fn from_errors(messages: &[&str]) -> Self {
        Self {
            data: None,
            errors: Some(
                messages
                    .iter()
                    .map(|m| GraphQlError {
                        message: (*m).to_string(),
                    })
                    .collect(),
            ),
        }
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// All error messages joined with "; ".
    #[must_use]
    pub fn error_summary(&self) -> String {
        self.errors
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Look up a value under `data` by JSON pointer (e.g. `/user/0/firstName`).
    ///
    /// Absent `data` is a `GraphQl` error (carrying the error summary, if any);
    /// an absent or `null` path is `MissingField`.
    pub fn field(&self, pointer: &str) -> Result<&Value, CoreError> {
        let data = self.data.as_ref().filter(|d| !d.is_null()).ok_or_else(|| {
            if self.has_errors() {
                CoreError::GraphQl(self.error_summary())
            } else {
                CoreError::GraphQl("response has no data".into())
            }
        })?;

        match data.pointer(pointer) {
            Some(v) if !v.is_null() => Ok(v),
            _ => Err(CoreError::missing(format!("data{pointer}"))),
        }
    }

    /// Like `field`, but deserializes the value into `T`.
    pub fn field_as<T: DeserializeOwned>(&self, pointer: &str) -> Result<T, CoreError> {
        let value = self.field(pointer)?;
        T::deserialize(value).map_err(|e| {
            CoreError::Deserialization(format!("Failed to decode data{pointer}: {e}"))
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl GraphQlTransport for HttpGraphQlClient {
    fn name(&self) -> &str {
        "GraphQL HTTP"
    }

    async fn execute(
        &self,
        session: &Session,
        query: &str,
    ) -> Result<GraphQlResponse, CoreError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .json(&GraphQlRequest { query })
            .send()
            .await?;

        let status = resp.status();
        resp.json::<GraphQlResponse>().await.map_err(|e| {
            CoreError::Deserialization(format!(
                "Failed to parse GraphQL response (HTTP {}): {e}",
                status.as_u16()
            ))
        })
    }
}
