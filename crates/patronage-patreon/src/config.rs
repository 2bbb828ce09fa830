//! # Patreon Configuration
//!
//! OAuth client credentials, loaded from the environment.

use std::env;

/// Patreon OAuth client configuration
#[derive(Clone, Default)]
pub struct PatreonConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl std::fmt::Debug for PatreonConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatreonConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl PatreonConfig {
    /// Load from `PATREON_CLIENT_ID` and `PATREON_CLIENT_SECRET`.
    /// Both are optional.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            client_id: non_empty("PATREON_CLIENT_ID"),
            client_secret: non_empty("PATREON_CLIENT_SECRET"),
        }
    }

    /// Create config with explicit values (for testing)
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
        }
    }

    /// Both credentials present
    pub fn is_configured(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }
}
