//! # Stripe Payment Intents
//!
//! Thin passthrough to the Stripe Payment Intents API.
//! No idempotency key is sent and amounts are not validated.

use crate::config::StripeConfig;
use async_trait::async_trait;
use patronage_core::{
    GatewayError, GatewayResult, PaymentIntent, PaymentIntentProvider, PaymentIntentRequest,
};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

const PROVIDER: &str = "stripe";

/// Stripe Payment Intents client
pub struct StripeIntents {
    config: StripeConfig,
    client: Client,
}

impl StripeIntents {
    /// Create a new client
    pub fn new(config: StripeConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                GatewayError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> GatewayResult<Self> {
        Self::new(StripeConfig::from_env()?)
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Build form data for the Stripe API
    fn form_params(request: &PaymentIntentRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("amount", request.amount.to_string()),
            ("currency", request.currency.clone()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
        ];

        if let Some(ref description) = request.description {
            params.push(("description", description.clone()));
        }

        params
    }
}

#[async_trait]
impl PaymentIntentProvider for StripeIntents {
    #[instrument(
        skip(self, request),
        fields(amount = request.amount, currency = %request.currency)
    )]
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> GatewayResult<PaymentIntent> {
        let url = format!("{}/v1/payment_intents", self.config.api_base_url);
        debug!("Creating Stripe payment intent");

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&Self::form_params(request))
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(GatewayError::provider(PROVIDER, error_response.error.message));
            }

            return Err(GatewayError::provider(
                PROVIDER,
                format!("HTTP {}: {}", status, body),
            ));
        }

        let intent: StripePaymentIntentResponse = serde_json::from_str(&body).map_err(|e| {
            GatewayError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })?;

        let client_secret = intent.client_secret.ok_or_else(|| {
            GatewayError::Serialization("Stripe response has no client_secret".to_string())
        })?;

        info!("Created Stripe payment intent: id={}, status={}", intent.id, intent.status);

        Ok(PaymentIntent {
            id: intent.id,
            client_secret,
            amount: intent.amount,
            currency: intent.currency,
            status: intent.status,
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripePaymentIntentResponse {
    id: String,
    #[serde(default)]
    client_secret: Option<String>,
    amount: i64,
    currency: String,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}
