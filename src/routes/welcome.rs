//! Welcome endpoint returning the deployment banner.
//!
//! The payload is fixed per build: the version field comes from the crate
//! version, everything else is a constant describing the deployed stack.

use axum::Json;
use serde::Serialize;

const WELCOME_MESSAGE: &str = "Welcome to AWS CI/CD Pipeline Demo";
const ENVIRONMENT: &str = "production";
const TECHNOLOGY: &str = "Rust Axum + Angular";

/// Welcome payload served at `/`.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub environment: &'static str,
    pub technology: &'static str,
}

/// Welcome handler - always returns 200 with the fixed banner.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
        version: env!("CARGO_PKG_VERSION"),
        environment: ENVIRONMENT,
        technology: TECHNOLOGY,
    })
}
