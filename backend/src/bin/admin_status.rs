//! Print the unprocessed/total contact-request counts, as the bot's admin
//! command does.
//!
//! Reads `API_BASE_URL` (default `http://localhost:8000`) and `ADMIN_ID`.

use anyhow::Context;

use aurumbank_backend::client::{format_summary, ContactStatsClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let base_url =
        std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let admin_id = std::env::var("ADMIN_ID")
        .context("ADMIN_ID must be set")?
        .trim()
        .parse::<i64>()
        .context("ADMIN_ID must be a numeric Telegram user id")?;

    let client = ContactStatsClient::new(&base_url, admin_id)?;
    let summary = client.fetch_summary().await?;

    println!("{}", format_summary(&summary));
    Ok(())
}
