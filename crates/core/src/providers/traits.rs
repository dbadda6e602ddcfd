use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::session::Session;

use super::graphql::GraphQlResponse;

/// Abstraction over whatever executes a GraphQL query.
///
/// The HTTP client implements this for the real endpoint; tests plug in
/// canned responses. Aggregation code only ever sees this trait.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait GraphQlTransport: Send + Sync {
    /// Human-readable name of this transport (for logs/errors).
    fn name(&self) -> &str;

    /// Execute one query with the session's bearer token.
    ///
    /// A response carrying a GraphQL `errors` list is still `Ok`; callers
    /// decide what a partial result means.
    async fn execute(&self, session: &Session, query: &str)
        -> Result<GraphQlResponse, CoreError>;
}

/// Exchanges user credentials for a bearer session.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AuthProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Sign in with username (or email) and password.
    async fn sign_in(&self, username: &str, password: &str) -> Result<Session, CoreError>;
}
