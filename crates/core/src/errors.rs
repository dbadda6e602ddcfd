use thiserror::Error;

/// Unified error type for the entire xp-dashboard-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Authentication ──────────────────────────────────────────────
    #[error("Username or password incorrect")]
    InvalidCredentials,

    #[error("Error code: {status}")]
    AuthFailed { status: u16 },

    #[error("Not authenticated: log in first")]
    NotAuthenticated,

    // ── GraphQL ─────────────────────────────────────────────────────
    #[error("GraphQL query error: {0}")]
    GraphQl(String),

    #[error("Missing field in GraphQL response: {path}")]
    MissingField { path: String },

    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Token storage (native only for files) ───────────────────────
    #[error("Token storage error: {0}")]
    TokenStorage(String),
}

impl CoreError {
    /// Shorthand for a missing response path.
    pub fn missing(path: impl Into<String>) -> Self {
        CoreError::MissingField { path: path.into() }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::TokenStorage(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors carry the full URL; headers (and thus the token) are never included.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
