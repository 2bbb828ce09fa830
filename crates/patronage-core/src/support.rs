//! # Tipping Types
//!
//! Buy Me a Coffee supporter and summary shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single supporter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Supporter {
    pub supporter_name: String,
    /// Amount paid, in major currency units
    pub support_coffee_price: f64,
    #[serde(default)]
    pub support_email: Option<String>,
    #[serde(default)]
    pub support_message: Option<String>,
}

/// Supporter listing. `total_count` always equals `supporters.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SupportersList {
    pub supporters: Vec<Supporter>,
    pub total_count: usize,
}

impl From<Vec<Supporter>> for SupportersList {
    fn from(supporters: Vec<Supporter>) -> Self {
        let total_count = supporters.len();
        Self {
            supporters,
            total_count,
        }
    }
}

/// Creator-level totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatorExtras {
    pub total_supporters: u64,
    pub total_coffees: u64,
    pub total_revenue: f64,
}

/// Generic envelope used by the tipping endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BmcResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> BmcResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}
