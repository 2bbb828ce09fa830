//! OpenAPI document for every mounted route.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use patronage_core::{
    CreatorExtras, PatreonAuth, PatreonTokens, PatreonUserInfo, PaymentIntentRequest,
    PaymentIntentResponse, Supporter, SupportersList, WebhookAck,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Payment Integration API"),
    paths(
        crate::handlers::health,
        crate::handlers::root,
        crate::handlers::create_payment_intent,
        crate::handlers::stripe_webhook,
        crate::handlers::patreon_token,
        crate::handlers::patreon_user,
        crate::handlers::patreon_webhook,
        crate::handlers::bmc_supporters,
        crate::handlers::bmc_extras,
        crate::handlers::bmc_webhook,
    ),
    components(
        schemas(
            ErrorResponse,
            PaymentIntentRequest,
            PaymentIntentResponse,
            PatreonAuth,
            PatreonTokens,
            PatreonUserInfo,
            Supporter,
            SupportersList,
            CreatorExtras,
            WebhookAck,
        )
    ),
    tags(
        (name = "service", description = "Health and service descriptor"),
        (name = "stripe", description = "Card payments"),
        (name = "patreon", description = "Memberships"),
        (name = "buymeacoffee", description = "Tips")
    )
)]
struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
