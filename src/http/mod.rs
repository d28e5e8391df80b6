//! HTTP server module.
//!
//! Plain HTTP serving with graceful shutdown on SIGTERM/SIGINT. TLS
//! termination is the deployment's concern (the pipeline fronts the service
//! with a load balancer).

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
