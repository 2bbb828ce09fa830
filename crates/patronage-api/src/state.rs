//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the payment provider, the stubbed vendor clients, and configuration.

use patronage_bmc::BmcClient;
use patronage_core::BoxedPaymentIntentProvider;
use patronage_patreon::PatreonClient;
use patronage_stripe::StripeIntents;
use std::net::SocketAddr;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Log output format ("pretty" or "json")
    pub log_format: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            log_format: lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .map_err(|e| {
                anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e)
            })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Check if logs should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Card-payment vendor
    pub payments: BoxedPaymentIntentProvider,
    /// Membership vendor
    pub patreon: PatreonClient,
    /// Tipping vendor
    pub bmc: BmcClient,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state from environment variables, with Stripe as the payment provider
    pub fn from_env() -> anyhow::Result<Self> {
        Self::with_config(AppConfig::from_env())
    }

    /// Create state for the given config; vendor credentials still come from the environment
    pub fn with_config(config: AppConfig) -> anyhow::Result<Self> {
        let stripe = StripeIntents::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        let mode = if stripe.config().is_test_mode() {
            "test"
        } else if stripe.config().is_live_mode() {
            "live"
        } else {
            "unknown"
        };
        tracing::info!(mode, "Stripe configured");

        if stripe.config().webhook_secret.is_none() {
            tracing::warn!("STRIPE_WEBHOOK_SECRET not set");
        }

        Ok(Self::new(config, Arc::new(stripe), PatreonClient::from_env()))
    }

    /// Create state with an explicit payment provider
    pub fn new(
        config: AppConfig,
        payments: BoxedPaymentIntentProvider,
        patreon: PatreonClient,
    ) -> Self {
        Self {
            payments,
            patreon,
            bmc: BmcClient::new(),
            config,
        }
    }
}
