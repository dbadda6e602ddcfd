use async_trait::async_trait;
use reqwest::{Client, StatusCode};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::session::Session;
use crate::models::settings::DashboardSettings;
use super::traits::AuthProvider;

/// Sign-in endpoint client.
///
/// POSTs with `Authorization: Basic base64(username:password)` and receives
/// the bearer token as a JSON string body. No refresh, no retry.
pub struct HttpAuthProvider {
    client: Client,
    endpoint: String,
}

impl HttpAuthProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, crate::models::settings::DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self::with_timeout(settings.auth_endpoint.clone(), settings.request_timeout_secs)
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
}

/// Map a sign-in HTTP status to the user-facing error.
pub fn sign_in_error(status: StatusCode) -> CoreError {
    if status == StatusCode::UNAUTHORIZED {
        CoreError::InvalidCredentials
    } else {
        CoreError::AuthFailed {
            status: status.as_u16(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AuthProvider for HttpAuthProvider {
    fn name(&self) -> &str {
        "Sign-in HTTP"
    }

    async fn sign_in(&self, username: &str, password: &str) -> Result<Session, CoreError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .basic_auth(username, Some(password))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(sign_in_error(status));
        }

        let token: String = resp.json().await.map_err(|e| {
            CoreError::Deserialization(format!("Failed to parse sign-in token: {e}"))
        })?;

        let token = token.trim();
        if token.is_empty() {
            return Err(CoreError::Deserialization("Sign-in returned an empty token".into()));
        }

        Ok(Session::new(token))
    }
}
