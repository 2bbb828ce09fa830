//! # Patreon Client
//!
//! Token exchange and member lookup. Both calls answer with fixed sample
//! data; no request reaches Patreon and the access token is not checked.

use crate::config::PatreonConfig;
use patronage_core::{GatewayResult, PatreonAuth, PatreonTokens, PatreonUserInfo};
use tracing::{debug, instrument};

/// Patreon client returning sample data
#[derive(Debug, Clone, Default)]
pub struct PatreonClient {
    config: PatreonConfig,
}

impl PatreonClient {
    pub fn new(config: PatreonConfig) -> Self {
        Self { config }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(PatreonConfig::from_env())
    }

    pub fn config(&self) -> &PatreonConfig {
        &self.config
    }

    /// Exchange an authorization code for a token pair
    #[instrument(skip(self, auth), fields(redirect_uri = %auth.redirect_uri))]
    pub async fn exchange_code(&self, auth: &PatreonAuth) -> GatewayResult<PatreonTokens> {
        debug!(
            client_id = self.config.client_id.as_deref().unwrap_or("<unset>"),
            "Exchanging Patreon authorization code"
        );

        Ok(PatreonTokens {
            access_token: "mock_access_token".to_string(),
            refresh_token: "mock_refresh_token".to_string(),
            expires_in: 3600,
            scope: "identity campaigns".to_string(),
            token_type: "Bearer".to_string(),
        })
    }

    /// Look up the member behind an access token
    #[instrument(skip_all)]
    pub async fn user_info(&self, _access_token: &str) -> GatewayResult<PatreonUserInfo> {
        debug!("Fetching Patreon user info");

        Ok(PatreonUserInfo {
            id: "12345".to_string(),
            full_name: "John Doe".to_string(),
            email: Some("john.doe@example.com".to_string()),
            is_patron: true,
            patron_status: Some("active_patron".to_string()),
        })
    }
}
