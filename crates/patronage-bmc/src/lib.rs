//! # patronage-bmc
//!
//! Buy Me a Coffee supporter listing and creator totals.
//! Both answer with sample data; the access token is accepted as given.

use patronage_core::{BmcResponse, CreatorExtras, GatewayResult, Supporter, SupportersList};
use tracing::{debug, instrument};

/// Buy Me a Coffee client returning sample data
#[derive(Debug, Clone, Default)]
pub struct BmcClient;

impl BmcClient {
    pub fn new() -> Self {
        Self
    }

    /// Supporters of the creator owning the token
    #[instrument(skip_all)]
    pub async fn supporters(&self, _access_token: &str) -> GatewayResult<SupportersList> {
        let list = SupportersList::from(sample_supporters());
        debug!(total = list.total_count, "Fetched Buy Me a Coffee supporters");
        Ok(list)
    }

    /// Creator totals
    #[instrument(skip_all)]
    pub async fn extras(&self, _access_token: &str) -> GatewayResult<BmcResponse<CreatorExtras>> {
        debug!("Fetching Buy Me a Coffee extras");
        Ok(BmcResponse::ok(
            "Extras retrieved successfully",
            CreatorExtras {
                total_supporters: 125,
                total_coffees: 250,
                total_revenue: 1250.0,
            },
        ))
    }
}

fn sample_supporters() -> Vec<Supporter> {
    vec![
        Supporter {
            supporter_name: "Jane Smith".to_string(),
            support_coffee_price: 5.0,
            support_email: Some("jane.smith@example.com".to_string()),
            support_message: Some("Keep up the great work!".to_string()),
        },
        Supporter {
            supporter_name: "Bob Johnson".to_string(),
            support_coffee_price: 10.0,
            support_email: Some("bob.johnson@example.com".to_string()),
            support_message: Some("Love your content!".to_string()),
        },
    ]
}
