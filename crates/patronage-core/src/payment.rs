//! # Payment Intent Types
//!
//! Request and response shapes for one-off card payments.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Currency used when the caller does not name one
const DEFAULT_CURRENCY: &str = "usd";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Accepts integers, whole-number floats (`1000.0`) and numeric strings.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a whole amount in the smallest currency unit")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim()
                .parse::<i64>()
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_any(AmountVisitor)
}

/// Payment intent request body
///
/// Amount and currency are forwarded to the vendor as given.
/// Zero or negative amounts are not rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentIntentRequest {
    /// Amount in smallest currency unit (cents for USD)
    #[serde(deserialize_with = "deserialize_amount")]
    #[schema(example = 2000)]
    pub amount: i64,

    /// ISO 4217 code, lowercase
    #[serde(default = "default_currency")]
    #[schema(default = "usd", example = "usd")]
    pub currency: String,

    /// Description shown on the vendor dashboard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PaymentIntentRequest {
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            currency: default_currency(),
            description: None,
        }
    }

    /// Builder: set currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A payment intent as created by the vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentIntent {
    /// Vendor intent ID (pi_...)
    pub id: String,
    /// Secret the browser uses to confirm the payment
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
    /// Vendor status (e.g. "requires_payment_method")
    pub status: String,
}

/// Payment intent response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentIntentResponse {
    pub client_secret: String,
    pub id: String,
}

impl From<PaymentIntent> for PaymentIntentResponse {
    fn from(intent: PaymentIntent) -> Self {
        Self {
            client_secret: intent.client_secret,
            id: intent.id,
        }
    }
}
