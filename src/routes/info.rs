//! Service-info endpoint describing the deployed application.
//!
//! Everything here is a fixed descriptive string. The `services` array names
//! the three pipeline stages the deployment runs through; its length and
//! order are part of the API contract.

use axum::Json;
use serde::Serialize;

const APPLICATION: &str = "AWS CI/CD Demo App";
const DESCRIPTION: &str =
    "Rust Axum backend with Angular frontend deployed via AWS CodePipeline";
const BACKEND: &str = "Rust with Axum";
const FRONTEND: &str = "Angular 17";
const PLATFORM: &str = "AWS EC2 (t2.micro)";
const DATABASE: &str = "None (stateless API)";

/// Pipeline stages in execution order
const PIPELINE_SERVICES: [&str; 3] = ["CodePipeline", "CodeBuild", "CodeDeploy"];

/// Service-info payload served at `/api/info`.
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub application: &'static str,
    pub description: &'static str,
    pub backend: &'static str,
    pub frontend: &'static str,
    pub platform: &'static str,
    pub database: &'static str,
    pub services: [&'static str; 3],
}

/// Service-info handler - always returns 200 with the fixed descriptor.
pub async fn info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        application: APPLICATION,
        description: DESCRIPTION,
        backend: BACKEND,
        frontend: FRONTEND,
        platform: PLATFORM,
        database: DATABASE,
        services: PIPELINE_SERVICES,
    })
}
