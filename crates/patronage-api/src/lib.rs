//! # patronage-api
//!
//! HTTP API layer for patronage-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Stripe payment-intent passthrough
//! - Patreon and Buy Me a Coffee lookups
//! - Webhook receivers for all three vendors
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/healthz` | Health check |
//! | GET | `/` | Service descriptor |
//! | GET | `/openapi.json` | OpenAPI document |
//! | POST | `/api/stripe/create-payment-intent` | Create payment intent |
//! | POST | `/api/stripe/webhook` | Stripe webhook |
//! | POST | `/api/patreon/oauth/token` | Exchange authorization code |
//! | GET | `/api/patreon/user` | Member info |
//! | POST | `/api/patreon/webhook` | Patreon webhook |
//! | GET | `/api/buymeacoffee/supporters` | Supporters |
//! | GET | `/api/buymeacoffee/extras` | Creator totals |
//! | POST | `/api/buymeacoffee/webhook` | Buy Me a Coffee webhook |
//!
//! Every failure answers 400 with `{"detail": "..."}`.

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
pub use state::{AppConfig, AppState};
