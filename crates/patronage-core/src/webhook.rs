//! # Webhook Acknowledgement
//!
//! Body returned to a vendor after a webhook delivery.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use serde_json::Value;

const STATUS_SUCCESS: &str = "success";
const MESSAGE_RECEIVED: &str = "Webhook received";

/// Acknowledgement for a webhook delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WebhookAck {
    pub status: String,
    pub message: String,
    /// Echoed payload, omitted when the receiver does not echo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl WebhookAck {
    /// Acknowledge without echoing the payload
    pub fn received() -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: MESSAGE_RECEIVED.to_string(),
            data: None,
        }
    }

    /// Acknowledge and echo the payload back unmodified
    pub fn echo(payload: Value) -> Self {
        Self {
            data: Some(payload),
            ..Self::received()
        }
    }
}
