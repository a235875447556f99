//! Shopdash admin dashboard
//!
//! Fetches the dashboard summary once and prints it to stdout.

mod render;

use std::str::FromStr;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopdash_client::MetricsClient;
use shopdash_core::DashboardShell;
use shopdash_core::charts::TimeRange;
use shopdash_shared::AppConfig;
use shopdash_shared::types::CurrencyFormat;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the rendered dashboard owns stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopdash=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load()?;

    let time_range = TimeRange::from_str(&config.display.time_range).unwrap_or_else(|e| {
        warn!(error = %e, "Falling back to the default time range");
        TimeRange::default()
    });

    let client = MetricsClient::new(&config.api)?;
    info!(endpoint = %client.endpoint(), "Metrics client ready");

    let mut shell = DashboardShell::new(
        config.session.to_session(),
        CurrencyFormat::new(config.display.currency_prefix.clone()),
    )
    .with_time_range(time_range);

    shell.load(&client).await;
    println!("{}", render::render(&shell.view()));

    shell.teardown();
    Ok(())
}
