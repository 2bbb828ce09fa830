//! # Membership Types
//!
//! Patreon OAuth and member lookup shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Authorization code exchange request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatreonAuth {
    pub code: String,
    pub redirect_uri: String,
}

/// Token pair returned after an authorization code exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatreonTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime of the access token in seconds
    pub expires_in: i64,
    /// Space-separated scopes
    pub scope: String,
    pub token_type: String,
}

/// Member details for the holder of an access token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatreonUserInfo {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub is_patron: bool,
    #[serde(default)]
    pub patron_status: Option<String>,
}
