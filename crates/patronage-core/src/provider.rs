//! # Payment Intent Provider Trait
//!
//! Seam between the HTTP layer and the card-payment vendor.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │        PaymentIntentProvider (trait)         │
//! │  ├── create_payment_intent()                 │
//! │  └── provider_name()                         │
//! └──────────────────────────────────────────────┘
//!                       ▲
//!          ┌────────────┴────────────┐
//!  ┌───────┴────────┐        ┌───────┴───────┐
//!  │ StripeIntents  │        │  test stubs   │
//!  └────────────────┘        └───────────────┘
//! ```

use crate::error::GatewayResult;
use crate::payment::{PaymentIntent, PaymentIntentRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Creates payment intents at a card-payment vendor.
#[async_trait]
pub trait PaymentIntentProvider: Send + Sync {
    /// Create a payment intent for the given amount and currency.
    ///
    /// # Returns
    /// The vendor's intent, including the client secret the browser needs.
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> GatewayResult<PaymentIntent>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedPaymentIntentProvider = Arc<dyn PaymentIntentProvider>;
