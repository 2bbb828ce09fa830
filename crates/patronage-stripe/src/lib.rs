//! # patronage-stripe
//!
//! Stripe integration for patronage-rs.
//!
//! 1. **StripeIntents** - Payment Intents API passthrough
//!    - Amount, currency and description forwarded as given
//!    - Automatic payment methods enabled
//!    - Vendor error message surfaced unchanged
//!
//! 2. **webhook** - Delivery inspection for logging
//!    - Signature header read, not verified
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use patronage_core::{PaymentIntentProvider, PaymentIntentRequest};
//! use patronage_stripe::StripeIntents;
//!
//! let stripe = StripeIntents::from_env()?;
//! let intent = stripe
//!     .create_payment_intent(&PaymentIntentRequest::new(2000))
//!     .await?;
//!
//! // Hand intent.client_secret to Stripe.js
//! ```

pub mod config;
pub mod intents;
pub mod webhook;

// Re-exports
pub use config::StripeConfig;
pub use intents::StripeIntents;
pub use webhook::{inspect as inspect_webhook, EventSummary, WebhookDelivery, SIGNATURE_HEADER};
