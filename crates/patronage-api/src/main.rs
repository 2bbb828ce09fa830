//! # Patronage RS
//!
//! Payment, membership and tipping vendor API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export STRIPE_WEBHOOK_SECRET=whsec_...       # optional
//! export PATREON_CLIENT_ID=...                 # optional
//! export PATREON_CLIENT_SECRET=...             # optional
//!
//! # Run the server
//! patronage
//! ```

use patronage_api::{routes, AppConfig, AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(config.json_logs());

    // Initialize application state
    let state = AppState::with_config(config)?;

    print_banner();

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.payments.provider_name());
    info!(
        "Patreon credentials: {}",
        if state.patreon.config().is_configured() { "set" } else { "unset" }
    );

    // Create router
    let app = routes::create_router(state);

    info!("🚀 Patronage starting on http://{}", addr);

    if !is_prod {
        info!("💳 Payment intent: POST http://{}/api/stripe/create-payment-intent", addr);
        info!("🎟  Patreon user: GET http://{}/api/patreon/user?access_token=...", addr);
        info!("☕ Supporters: GET http://{}/api/buymeacoffee/supporters?access_token=...", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

fn print_banner() {
    println!(
        r#"
  ☕ Patronage RS ☕
  ━━━━━━━━━━━━━━━━━━━━━━━
  Stripe · Patreon · Buy Me a Coffee
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
