//! # patronage-core
//!
//! Core types and traits shared by the patronage-rs vendor crates.
//!
//! This crate provides:
//! - `PaymentIntentProvider` trait for the card-payment vendor
//! - Request/response shapes for payments, memberships and tips
//! - `WebhookAck` returned by every webhook receiver
//! - `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use patronage_core::{PaymentIntentProvider, PaymentIntentRequest};
//!
//! let request = PaymentIntentRequest::new(2000).with_description("Coffee");
//! let intent = provider.create_payment_intent(&request).await?;
//!
//! // Hand intent.client_secret to the browser
//! ```

pub mod error;
pub mod membership;
pub mod payment;
pub mod provider;
pub mod support;
pub mod webhook;

// Re-exports for convenience
pub use error::{GatewayError, GatewayResult};
pub use membership::{PatreonAuth, PatreonTokens, PatreonUserInfo};
pub use payment::{PaymentIntent, PaymentIntentRequest, PaymentIntentResponse};
pub use provider::{BoxedPaymentIntentProvider, PaymentIntentProvider};
pub use support::{BmcResponse, CreatorExtras, Supporter, SupportersList};
pub use webhook::WebhookAck;
