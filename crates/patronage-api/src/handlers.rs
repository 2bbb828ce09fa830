//! # Request Handlers
//!
//! Axum request handlers, one section per vendor.
//! Each handler is a single-shot mapping from request to response.

use crate::error::{ApiError, ApiResult, ErrorResponse};
use crate::routes::MOUNTS;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    response::IntoResponse,
    Json,
};
use patronage_core::{
    BmcResponse, CreatorExtras, GatewayError, PatreonAuth, PatreonTokens, PatreonUserInfo,
    PaymentIntentRequest, PaymentIntentResponse, SupportersList, WebhookAck,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request Types
// =============================================================================

/// `?access_token=...` query string
#[derive(Debug, Deserialize)]
pub struct AccessTokenQuery {
    pub access_token: String,
}

/// Decode a JSON body. A missing `Content-Type` is read as JSON.
fn parse_json_body<T: DeserializeOwned>(headers: &HeaderMap, body: &[u8]) -> ApiResult<T> {
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        if !is_json_content_type(content_type.to_str().unwrap_or_default()) {
            return Err(GatewayError::InvalidRequest(
                "Expected request with `Content-Type: application/json`".to_string(),
            )
            .into());
        }
    }

    Ok(serde_json::from_slice(body)?)
}

fn is_json_content_type(value: &str) -> bool {
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

// =============================================================================
// Service
// =============================================================================

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/healthz",
    responses((status = 200, description = "Service is up")),
    tag = "service",
)]
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Service descriptor listing the mounted vendor paths
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service name, vendor mounts and docs link")),
    tag = "service",
)]
pub async fn root() -> impl IntoResponse {
    let endpoints: Map<String, Value> = MOUNTS
        .iter()
        .map(|mount| (mount.name.to_string(), Value::String(mount.path.to_string())))
        .collect();

    Json(serde_json::json!({
        "message": "Payment Integration API",
        "endpoints": endpoints,
        "docs": OPENAPI_PATH
    }))
}

/// Where the generated OpenAPI document is served
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::openapi::openapi())
}

// =============================================================================
// Stripe
// =============================================================================

/// Create a payment intent
#[utoipa::path(
    post,
    path = "/api/stripe/create-payment-intent",
    request_body = PaymentIntentRequest,
    responses(
        (status = 200, description = "Payment intent created", body = PaymentIntentResponse),
        (status = 400, description = "Invalid body or vendor failure", body = ErrorResponse),
    ),
    tag = "stripe",
)]
#[instrument(skip(state, headers, body))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<PaymentIntentResponse>> {
    let request: PaymentIntentRequest = parse_json_body(&headers, &body)?;

    info!(
        "Creating payment intent: provider={}, amount={}, currency={}",
        state.payments.provider_name(),
        request.amount,
        request.currency
    );

    let intent = state
        .payments
        .create_payment_intent(&request)
        .await
        .map_err(|e| {
            error!("Failed to create payment intent: {}", e);
            ApiError::from(e)
        })?;

    info!("Created payment intent: {}", intent.id);

    Ok(Json(intent.into()))
}

/// Handle Stripe webhook. The signature is read but never verified.
#[utoipa::path(
    post,
    path = "/api/stripe/webhook",
    request_body(content = Value, description = "Stripe event"),
    params(("stripe-signature" = Option<String>, Header, description = "Stripe signature")),
    responses((status = 200, description = "Delivery acknowledged", body = WebhookAck)),
    tag = "stripe",
)]
#[instrument(skip(headers, body))]
pub async fn stripe_webhook(headers: HeaderMap, body: Bytes) -> Json<WebhookAck> {
    let signature = headers
        .get(patronage_stripe::SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());

    let delivery = patronage_stripe::inspect_webhook(&body, signature);

    if !delivery.has_signature {
        warn!("Stripe webhook without {} header", patronage_stripe::SIGNATURE_HEADER);
    }

    match &delivery.event {
        Some(event) => info!(
            "Received Stripe webhook: type={}, id={}, created={:?}, bytes={}",
            event.event_type, event.id, event.created, delivery.payload_len
        ),
        None => info!("Received Stripe webhook: bytes={}", delivery.payload_len),
    }

    Json(WebhookAck::received())
}

// =============================================================================
// Patreon
// =============================================================================

/// Exchange an authorization code for tokens
#[utoipa::path(
    post,
    path = "/api/patreon/oauth/token",
    request_body = PatreonAuth,
    responses(
        (status = 200, description = "Token pair", body = PatreonTokens),
        (status = 400, description = "Invalid body", body = ErrorResponse),
    ),
    tag = "patreon",
)]
#[instrument(skip(state, headers, body))]
pub async fn patreon_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<PatreonTokens>> {
    let auth: PatreonAuth = parse_json_body(&headers, &body)?;
    let tokens = state.patreon.exchange_code(&auth).await?;
    Ok(Json(tokens))
}

/// Member info for an access token
#[utoipa::path(
    get,
    path = "/api/patreon/user",
    params(("access_token" = String, Query, description = "Patreon access token")),
    responses(
        (status = 200, description = "Member details", body = PatreonUserInfo),
        (status = 400, description = "Missing access token", body = ErrorResponse),
    ),
    tag = "patreon",
)]
#[instrument(skip(state, query))]
pub async fn patreon_user(
    State(state): State<AppState>,
    query: Result<Query<AccessTokenQuery>, QueryRejection>,
) -> ApiResult<Json<PatreonUserInfo>> {
    let Query(query) = query?;
    let user = state.patreon.user_info(&query.access_token).await?;
    Ok(Json(user))
}

/// Handle Patreon webhook
#[utoipa::path(
    post,
    path = "/api/patreon/webhook",
    request_body(content = Value, description = "Any JSON value"),
    responses(
        (status = 200, description = "Payload echoed under `data`", body = WebhookAck),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
    ),
    tag = "patreon",
)]
#[instrument(skip(body))]
pub async fn patreon_webhook(body: Bytes) -> ApiResult<Json<WebhookAck>> {
    echo_webhook("patreon", &body)
}

// =============================================================================
// Buy Me a Coffee
// =============================================================================

/// Supporters of the creator
#[utoipa::path(
    get,
    path = "/api/buymeacoffee/supporters",
    params(("access_token" = String, Query, description = "Buy Me a Coffee access token")),
    responses(
        (status = 200, description = "Supporters and their count", body = SupportersList),
        (status = 400, description = "Missing access token", body = ErrorResponse),
    ),
    tag = "buymeacoffee",
)]
#[instrument(skip(state, query))]
pub async fn bmc_supporters(
    State(state): State<AppState>,
    query: Result<Query<AccessTokenQuery>, QueryRejection>,
) -> ApiResult<Json<SupportersList>> {
    let Query(query) = query?;
    let supporters = state.bmc.supporters(&query.access_token).await?;
    Ok(Json(supporters))
}

/// Creator totals
#[utoipa::path(
    get,
    path = "/api/buymeacoffee/extras",
    params(("access_token" = String, Query, description = "Buy Me a Coffee access token")),
    responses(
        (status = 200, description = "Creator totals", body = BmcResponse<CreatorExtras>),
        (status = 400, description = "Missing access token", body = ErrorResponse),
    ),
    tag = "buymeacoffee",
)]
#[instrument(skip(state, query))]
pub async fn bmc_extras(
    State(state): State<AppState>,
    query: Result<Query<AccessTokenQuery>, QueryRejection>,
) -> ApiResult<Json<BmcResponse<CreatorExtras>>> {
    let Query(query) = query?;
    let extras = state.bmc.extras(&query.access_token).await?;
    Ok(Json(extras))
}

/// Handle Buy Me a Coffee webhook
#[utoipa::path(
    post,
    path = "/api/buymeacoffee/webhook",
    request_body(content = Value, description = "Any JSON value"),
    responses(
        (status = 200, description = "Payload echoed under `data`", body = WebhookAck),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
    ),
    tag = "buymeacoffee",
)]
#[instrument(skip(body))]
pub async fn bmc_webhook(body: Bytes) -> ApiResult<Json<WebhookAck>> {
    echo_webhook("buymeacoffee", &body)
}

/// Parse any JSON body and echo it back under `data`
fn echo_webhook(vendor: &str, body: &[u8]) -> ApiResult<Json<WebhookAck>> {
    let payload: Value = serde_json::from_slice(body)?;
    info!("Received {} webhook: bytes={}", vendor, body.len());
    Ok(Json(WebhookAck::echo(payload)))
}
