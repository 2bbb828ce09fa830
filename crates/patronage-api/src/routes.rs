//! # Routes
//!
//! Axum router configuration for the vendor API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::Request,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info_span;
use uuid::Uuid;

/// A vendor route group and the path it is nested under
pub struct Mount {
    pub name: &'static str,
    pub path: &'static str,
    routes: fn() -> Router<AppState>,
}

/// Mounted vendor route groups. The root descriptor lists these.
pub const MOUNTS: [Mount; 3] = [
    Mount {
        name: "stripe",
        path: "/api/stripe",
        routes: stripe_routes,
    },
    Mount {
        name: "patreon",
        path: "/api/patreon",
        routes: patreon_routes,
    },
    Mount {
        name: "buymeacoffee",
        path: "/api/buymeacoffee",
        routes: bmc_routes,
    },
];

/// Create the main application router
///
/// Routes:
/// - Stripe (`/api/stripe`):
///   - POST /create-payment-intent
///   - POST /webhook
///
/// - Patreon (`/api/patreon`):
///   - POST /oauth/token
///   - GET  /user?access_token=...
///   - POST /webhook
///
/// - Buy Me a Coffee (`/api/buymeacoffee`):
///   - GET  /supporters?access_token=...
///   - GET  /extras?access_token=...
///   - POST /webhook
///
/// - Service:
///   - GET /healthz
///   - GET /
///   - GET /openapi.json
pub fn create_router(state: AppState) -> Router {
    // Mirror any origin and allow credentials
    let cors = CorsLayer::very_permissive();

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        info_span!(
            "http_request",
            request_id = %Uuid::new_v4(),
            method = %request.method(),
            uri = %request.uri(),
        )
    });

    let mut router = Router::new()
        .route("/healthz", get(handlers::health))
        .route("/", get(handlers::root))
        .route(handlers::OPENAPI_PATH, get(handlers::openapi_json));

    for mount in &MOUNTS {
        router = router.nest(mount.path, (mount.routes)());
    }

    router
        // Middleware
        .layer(cors)
        .layer(trace)
        // State
        .with_state(state)
}

fn stripe_routes() -> Router<AppState> {
    Router::new()
        .route("/create-payment-intent", post(handlers::create_payment_intent))
        .route("/webhook", post(handlers::stripe_webhook))
}

fn patreon_routes() -> Router<AppState> {
    Router::new()
        .route("/oauth/token", post(handlers::patreon_token))
        .route("/user", get(handlers::patreon_user))
        .route("/webhook", post(handlers::patreon_webhook))
}

fn bmc_routes() -> Router<AppState> {
    Router::new()
        .route("/supporters", get(handlers::bmc_supporters))
        .route("/extras", get(handlers::bmc_extras))
        .route("/webhook", post(handlers::bmc_webhook))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, StatusCode},
        response::Response,
    };
    use patronage_core::{
        GatewayError, GatewayResult, PaymentIntent, PaymentIntentProvider, PaymentIntentRequest,
    };
    use patronage_patreon::{PatreonClient, PatreonConfig};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// Records requests and either succeeds or fails with a fixed vendor message
    struct StubProvider {
        failure: Option<String>,
        seen: Mutex<Vec<PaymentIntentRequest>>,
    }

    impl StubProvider {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                failure: None,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                failure: Some(message.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl PaymentIntentProvider for StubProvider {
        async fn create_payment_intent(
            &self,
            request: &PaymentIntentRequest,
        ) -> GatewayResult<PaymentIntent> {
            self.seen.lock().unwrap().push(request.clone());

            if let Some(ref message) = self.failure {
                return Err(GatewayError::provider("stub", message.clone()));
            }

            Ok(PaymentIntent {
                id: "pi_stub_1".to_string(),
                client_secret: "pi_stub_1_secret".to_string(),
                amount: request.amount,
                currency: request.currency.clone(),
                status: "requires_payment_method".to_string(),
            })
        }

        fn provider_name(&self) -> &'static str {
            "stub"
        }
    }

    fn app_with(provider: Arc<StubProvider>) -> Router {
        let state = AppState::new(
            Default::default(),
            provider,
            PatreonClient::new(PatreonConfig::new("cid", "secret")),
        );
        create_router(state)
    }

    fn app() -> Router {
        app_with(StubProvider::ok())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response: Response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_raw(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::from(body))
            .unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Service
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn healthz_is_ok() {
        let (status, body) = send(app(), get_req("/healthz")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));

        let (status, body) = send(app(), get_req("/healthz?anything=1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn root_lists_three_mounts() {
        let (status, body) = send(app(), get_req("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Payment Integration API");
        assert_eq!(
            body["endpoints"],
            json!({
                "stripe": "/api/stripe",
                "patreon": "/api/patreon",
                "buymeacoffee": "/api/buymeacoffee"
            })
        );
        assert_eq!(body["docs"], "/openapi.json");
    }

    #[tokio::test]
    async fn openapi_document_lists_vendor_paths() {
        let (status, body) = send(app(), get_req("/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["openapi"].as_str().unwrap().starts_with("3."));

        let paths = body["paths"].as_object().unwrap();
        for (path, method) in [
            ("/api/stripe/create-payment-intent", "post"),
            ("/api/stripe/webhook", "post"),
            ("/api/patreon/oauth/token", "post"),
            ("/api/patreon/user", "get"),
            ("/api/patreon/webhook", "post"),
            ("/api/buymeacoffee/supporters", "get"),
            ("/api/buymeacoffee/extras", "get"),
            ("/api/buymeacoffee/webhook", "post"),
        ] {
            assert!(paths[path].get(method).is_some(), "{} {}", method, path);
        }

        let schemas = body["components"]["schemas"].as_object().unwrap();
        assert!(schemas.contains_key("PaymentIntentRequest"));
        assert!(schemas.contains_key("ErrorResponse"));
    }

    #[tokio::test]
    async fn cors_mirrors_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/stripe/create-payment-intent")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }

    // ───────────────────────────────────────────────────────────────
    // Stripe
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn payment_intent_success() {
        let provider = StubProvider::ok();
        let (status, body) = send(
            app_with(provider.clone()),
            post_json(
                "/api/stripe/create-payment-intent",
                &json!({ "amount": 1500, "description": "Coffee" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "client_secret": "pi_stub_1_secret", "id": "pi_stub_1" }));

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].currency, "usd");
        assert_eq!(seen[0].description.as_deref(), Some("Coffee"));
    }

    #[tokio::test]
    async fn payment_intent_passes_non_positive_amounts() {
        let provider = StubProvider::ok();
        let (status, _) = send(
            app_with(provider.clone()),
            post_json("/api/stripe/create-payment-intent", &json!({ "amount": 0 })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(provider.seen.lock().unwrap()[0].amount, 0);
    }

    #[tokio::test]
    async fn payment_intent_vendor_failure_is_400_with_message() {
        let (status, body) = send(
            app_with(StubProvider::failing("Your card was declined.")),
            post_json("/api/stripe/create-payment-intent", &json!({ "amount": 500 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "detail": "Your card was declined." }));
    }

    #[tokio::test]
    async fn payment_intent_accepts_whole_number_float() {
        let provider = StubProvider::ok();
        let (status, body) = send(
            app_with(provider.clone()),
            post_json("/api/stripe/create-payment-intent", &json!({ "amount": 1000.0 })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "pi_stub_1");
        assert_eq!(provider.seen.lock().unwrap()[0].amount, 1000);
    }

    #[tokio::test]
    async fn payment_intent_without_content_type() {
        let provider = StubProvider::ok();
        let (status, body) = send(
            app_with(provider.clone()),
            post_raw("/api/stripe/create-payment-intent", r#"{"amount":1000}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["client_secret"], "pi_stub_1_secret");
        assert_eq!(provider.seen.lock().unwrap()[0].amount, 1000);
    }

    #[tokio::test]
    async fn payment_intent_rejects_fractional_amount_and_form_body() {
        let (status, body) = send(
            app(),
            post_json("/api/stripe/create-payment-intent", &json!({ "amount": 10.5 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("10.5"));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/stripe/create-payment-intent")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("amount=1000"))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["detail"],
            "Invalid request: Expected request with `Content-Type: application/json`"
        );
    }

    #[tokio::test]
    async fn payment_intent_bad_body_is_400() {
        let (status, body) = send(
            app(),
            post_json("/api/stripe/create-payment-intent", &json!({ "currency": "usd" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("amount"));
    }

    #[tokio::test]
    async fn stripe_webhook_always_succeeds() {
        let expected = json!({ "status": "success", "message": "Webhook received" });

        let (status, body) = send(app(), post_raw("/api/stripe/webhook", "not even json")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/stripe/webhook")
            .header("stripe-signature", "t=1,v1=deadbeef")
            .body(Body::from(r#"{"id":"evt_1","type":"charge.refunded","created":1}"#))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);
    }

    // ───────────────────────────────────────────────────────────────
    // Patreon
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn patreon_token_returns_mock_pair() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/patreon/oauth/token",
                &json!({ "code": "abc", "redirect_uri": "http://localhost:3000/cb" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "access_token": "mock_access_token",
                "refresh_token": "mock_refresh_token",
                "expires_in": 3600,
                "scope": "identity campaigns",
                "token_type": "Bearer"
            })
        );
    }

    #[tokio::test]
    async fn patreon_token_requires_redirect_uri() {
        let (status, body) = send(
            app(),
            post_json("/api/patreon/oauth/token", &json!({ "code": "abc" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn patreon_token_without_content_type() {
        let (status, body) = send(
            app(),
            post_raw(
                "/api/patreon/oauth/token",
                r#"{"code":"abc","redirect_uri":"http://localhost:3000/cb"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["access_token"], "mock_access_token");
    }

    #[tokio::test]
    async fn patreon_user_lookup() {
        let (status, body) = send(app(), get_req("/api/patreon/user?access_token=tok")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "12345");
        assert_eq!(body["full_name"], "John Doe");
        assert_eq!(body["is_patron"], true);
    }

    #[tokio::test]
    async fn missing_access_token_is_400() {
        for uri in [
            "/api/patreon/user",
            "/api/buymeacoffee/supporters",
            "/api/buymeacoffee/extras",
        ] {
            let (status, body) = send(app(), get_req(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert!(body["detail"].is_string(), "{}", uri);
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Buy Me a Coffee
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn supporters_count_matches_entries() {
        let (status, body) = send(
            app(),
            get_req("/api/buymeacoffee/supporters?access_token=tok"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let supporters = body["supporters"].as_array().unwrap();
        assert_eq!(body["total_count"].as_u64().unwrap() as usize, supporters.len());
        assert_eq!(supporters[0]["supporter_name"], "Jane Smith");
    }

    #[tokio::test]
    async fn extras_summary() {
        let (status, body) =
            send(app(), get_req("/api/buymeacoffee/extras?access_token=tok")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Extras retrieved successfully",
                "data": {
                    "total_supporters": 125,
                    "total_coffees": 250,
                    "total_revenue": 1250.0
                }
            })
        );
    }

    // ───────────────────────────────────────────────────────────────
    // Echoing webhooks
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn echo_webhooks_return_payload() {
        let payloads = [
            json!({ "data": { "type": "member" }, "included": [1, 2, 3] }),
            json!([1, "two", null]),
            json!("plain"),
        ];

        for path in ["/api/patreon/webhook", "/api/buymeacoffee/webhook"] {
            for payload in &payloads {
                let (status, body) = send(app(), post_json(path, payload)).await;
                assert_eq!(status, StatusCode::OK);
                assert_eq!(body["status"], "success");
                assert_eq!(body["message"], "Webhook received");
                assert_eq!(&body["data"], payload);
            }
        }
    }

    #[tokio::test]
    async fn echo_webhook_without_content_type() {
        let (status, body) =
            send(app(), post_raw("/api/buymeacoffee/webhook", r#"{"a":1}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({ "a": 1 }));
    }

    #[tokio::test]
    async fn echo_webhook_invalid_json_is_400() {
        let (status, body) = send(app(), post_raw("/api/patreon/webhook", "{nope")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON payload"));
    }
}
