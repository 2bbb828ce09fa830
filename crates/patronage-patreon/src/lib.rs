//! # patronage-patreon
//!
//! Patreon membership endpoints for patronage-rs: authorization code
//! exchange and member lookup, both answered from sample data.

pub mod client;
pub mod config;

pub use client::PatreonClient;
pub use config::PatreonConfig;
