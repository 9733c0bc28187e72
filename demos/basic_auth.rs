//! Basic authentication example
//!
//! Logs in with credentials from the environment and lists a few users
//! and ramps.
//!
//! Run with:
//! ```bash
//! KILLB_ENVIRONMENT=SANDBOX KILLB_EMAIL=you@example.com KILLB_PASSWORD=secret \
//!     KILLB_API_KEY=key cargo run --example basic_auth
//! ```

use killb::models::{RampsQuery, UsersQuery};
use killb::KillbClient;

#[tokio::main]
async fn main() -> killb::Result<()> {
    tracing_subscriber::fmt::init();

    println!("Logging in to KillB...");
    let client = KillbClient::from_env().await?;

    println!("Logged in to {} ({})", client.environment(), client.base_url());
    if let Some(expires_at) = client.session().expires_at().await {
        println!("Token valid until {}", expires_at);
    }

    let users = client
        .users()
        .query(&UsersQuery {
            limit: Some(5),
            ..Default::default()
        })
        .await?;
    println!("\nUsers:\n{}", serde_json::to_string_pretty(&users).unwrap_or_default());

    let ramps = client
        .ramps()
        .query(&RampsQuery {
            limit: Some(5),
            ..Default::default()
        })
        .await?;
    println!("\nRamps ({} pages):", ramps.total_page);
    for ramp in &ramps.ramps {
        println!(
            "  {} {:?} -> {:?} active={}",
            ramp.id, ramp.from_currency, ramp.to_currency, ramp.active
        );
    }

    Ok(())
}
