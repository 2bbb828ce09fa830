//! # Stripe Webhook Receipt
//!
//! Stripe deliveries are acknowledged unconditionally. The signature header
//! is read and reported but not verified, and events are not dispatched.
//! `inspect` only pulls out enough of the envelope to trace the delivery.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Header carrying the Stripe signature
pub const SIGNATURE_HEADER: &str = "stripe-signature";

/// Identifying fields of a Stripe event envelope
#[derive(Debug, Clone, PartialEq)]
pub struct EventSummary {
    pub id: String,
    pub event_type: String,
    pub created: Option<DateTime<Utc>>,
}

/// What was observed about one webhook delivery
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookDelivery {
    pub payload_len: usize,
    pub has_signature: bool,
    /// `None` when the body is not a Stripe event envelope
    pub event: Option<EventSummary>,
}

#[derive(Debug, Deserialize)]
struct EventEnvelope {
    id: String,
    #[serde(rename = "type")]
    event_type: String,
    #[serde(default)]
    created: Option<i64>,
}

/// Summarize a delivery for logging
pub fn inspect(payload: &[u8], signature: Option<&str>) -> WebhookDelivery {
    let event = serde_json::from_slice::<EventEnvelope>(payload)
        .ok()
        .map(|envelope| EventSummary {
            id: envelope.id,
            event_type: envelope.event_type,
            created: envelope
                .created
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
        });

    WebhookDelivery {
        payload_len: payload.len(),
        has_signature: signature.is_some_and(|s| !s.is_empty()),
        event,
    }
}
