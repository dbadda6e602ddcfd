pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use models::{
    chart::DashboardCharts,
    session::Session,
    settings::DashboardSettings,
    user::{UserIdentity, UserStats},
};
use providers::{
    auth::HttpAuthProvider,
    graphql::HttpGraphQlClient,
    traits::{AuthProvider, GraphQlTransport},
};
use services::{
    aggregator_service::AggregatorService, chart_service::ChartService,
    render_service::RenderService,
};
use storage::token_store::TokenStore;
use tracing::info;

use errors::CoreError;

/// Main entry point for the XP Dashboard core library.
/// Owns the session lifecycle and all services needed to fetch and draw stats.
#[must_use]
pub struct XpDashboard {
    settings: DashboardSettings,
    transport: Box<dyn GraphQlTransport>,
    auth: Box<dyn AuthProvider>,
    store: Box<dyn TokenStore>,
    session: Option<Session>,
    aggregator: AggregatorService,
    chart_service: ChartService,
    render_service: RenderService,
}

impl std::fmt::Debug for XpDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XpDashboard")
            .field("settings", &self.settings)
            .field("transport", &self.transport.name())
            .field("auth", &self.auth.name())
            .field("logged_in", &self.session.is_some())
            .finish()
    }
}

impl XpDashboard {
    /// Dashboard talking to the configured HTTP endpoints.
    pub fn new(settings: DashboardSettings, store: Box<dyn TokenStore>) -> Self {
        let transport = Box::new(HttpGraphQlClient::from_settings(&settings));
        let auth = Box::new(HttpAuthProvider::from_settings(&settings));
        Self::with_providers(settings, transport, auth, store)
    }

    /// Dashboard with explicit providers (alternate backends, tests).
    pub fn with_providers(
        settings: DashboardSettings,
        transport: Box<dyn GraphQlTransport>,
        auth: Box<dyn AuthProvider>,
        store: Box<dyn TokenStore>,
    ) -> Self {
        Self {
            settings,
            transport,
            auth,
            store,
            session: None,
            aggregator: AggregatorService::new(),
            chart_service: ChartService::new(),
            render_service: RenderService::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    // ── Session lifecycle ───────────────────────────────────────────

    /// Adopt a previously stored token, if there is one.
    /// Returns whether a session is now active. The token is not validated;
    /// use `verify_session` for that.
    pub fn restore_session(&mut self) -> Result<bool, CoreError> {
        if let Some(token) = self.store.load()? {
            self.session = Some(Session::new(token));
        }
        Ok(self.session.is_some())
    }

    /// Sign in and persist the new token.
    /// On failure any existing session is left untouched.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), CoreError> {
        let session = self.auth.sign_in(username, password).await?;
        self.store.save(session.token())?;
        self.session = Some(session);
        info!(user = username, "logged in");
        Ok(())
    }

    /// Drop the session and remove the stored token.
    pub fn logout(&mut self) -> Result<(), CoreError> {
        self.session = None;
        self.store.clear()?;
        info!("logged out");
        Ok(())
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Ask the API who the current token belongs to.
    /// `Ok(None)` without a session or when the token is rejected.
    pub async fn verify_session(&self) -> Result<Option<UserIdentity>, CoreError> {
        match &self.session {
            Some(session) => {
                self.aggregator
                    .verify_session(self.transport.as_ref(), session)
                    .await
            }
            None => Ok(None),
        }
    }

    // ── Stats & rendering ───────────────────────────────────────────

    /// Run the full query sequence for the logged-in user.
    pub async fn fetch_stats(&self) -> Result<UserStats, CoreError> {
        let session = self.session.as_ref().ok_or(CoreError::NotAuthenticated)?;
        self.aggregator
            .fetch_user_stats(self.transport.as_ref(), session, &self.settings.event_path)
            .await
    }

    /// Chart geometry for a stats record. Pure; recomputed on every call.
    #[must_use]
    pub fn charts(&self, stats: &UserStats) -> DashboardCharts {
        self.chart_service.build_dashboard_charts(stats)
    }

    /// Standalone HTML dashboard for a stats record.
    #[must_use]
    pub fn render_html(&self, stats: &UserStats) -> String {
        let charts = self.charts(stats);
        self.render_service.dashboard_html(stats, &charts)
    }
}
