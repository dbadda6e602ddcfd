use clap::{Parser, Subcommand};
use std::path::PathBuf;

use xp_dashboard_core::models::settings::{
    DashboardSettings, DEFAULT_AUTH_ENDPOINT, DEFAULT_EVENT_PATH, DEFAULT_GRAPHQL_ENDPOINT,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "XP dashboard for the zone01 GraphQL API", long_about = None)]
pub struct Args {
    /// File holding the bearer token between runs
    #[arg(long, env = "XP_DASHBOARD_TOKEN_FILE", default_value = ".xp-dashboard-token")]
    pub token_file: PathBuf,

    #[arg(long, env = "XP_DASHBOARD_GRAPHQL_ENDPOINT", default_value = DEFAULT_GRAPHQL_ENDPOINT)]
    pub graphql_endpoint: String,

    #[arg(long, env = "XP_DASHBOARD_AUTH_ENDPOINT", default_value = DEFAULT_AUTH_ENDPOINT)]
    pub auth_endpoint: String,

    /// Event path filter for level and XP queries
    #[arg(long, env = "XP_DASHBOARD_EVENT_PATH", default_value = DEFAULT_EVENT_PATH)]
    pub event_path: String,

    #[arg(long, env = "XP_DASHBOARD_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the token
    Login {
        /// Username or email
        #[arg(long, short)]
        username: String,

        #[arg(long, short, env = "XP_DASHBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored token
    Logout,
    /// Check whether the stored token is still accepted
    Status,
    /// Print name, level, XP and audit ratio
    Show,
    /// Write the dashboard as a standalone HTML file
    Render {
        #[arg(long, short, default_value = "dashboard.html")]
        out: PathBuf,
    },
}

impl Args {
    pub fn settings(&self) -> DashboardSettings {
        DashboardSettings {
            graphql_endpoint: self.graphql_endpoint.clone(),
            auth_endpoint: self.auth_endpoint.clone(),
            event_path: self.event_path.clone(),
            request_timeout_secs: self.timeout_secs,
        }
    }
}
