mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Args, Command};
use xp_dashboard_core::services::chart_service::{format_ratio, format_xp};
use xp_dashboard_core::storage::token_store::FileTokenStore;
use xp_dashboard_core::XpDashboard;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let settings = args.settings();
    info!(endpoint = %settings.graphql_endpoint, event_path = %settings.event_path, "starting");

    let store = FileTokenStore::new(args.token_file.clone());
    let mut dashboard = XpDashboard::new(settings, Box::new(store));
    dashboard
        .restore_session()
        .context("Failed to read stored token")?;

    run(&mut dashboard, args.command).await
}

async fn run(dashboard: &mut XpDashboard, command: Command) -> Result<()> {
    match command {
        Command::Login { username, password } => {
            dashboard.login(&username, &password).await?;
            println!("Logged in as {username}");
        }
        Command::Logout => {
            dashboard.logout()?;
            println!("Logged out");
        }
        Command::Status => match dashboard.verify_session().await? {
            Some(identity) => println!("Logged in as {} (id {})", identity.login, identity.id),
            None if dashboard.is_logged_in() => bail!("Stored token was rejected, log in again"),
            None => bail!("Not logged in"),
        },
        Command::Show => {
            let stats = dashboard.fetch_stats().await?;
            println!("Welcome Back, {}!", stats.first_name);
            println!("{}", stats.full_name());
            println!("Level: {}", stats.level);
            println!("{}", format_xp(stats.total_xp));
            println!("\u{2b06} Gived {}", format_xp(stats.xp_granted));
            println!("\u{2b07} Received {}", format_xp(stats.xp_received));
            println!(
                "Audit Ratio: {}",
                format_ratio(stats.xp_granted, stats.xp_received)
            );
        }
        Command::Render { out } => {
            let stats = dashboard.fetch_stats().await?;
            let html = dashboard.render_html(&stats);
            std::fs::write(&out, html)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            println!("Dashboard written to {}", out.display());
        }
    }
    Ok(())
}
