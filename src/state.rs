//! Shared application state for request handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::memory::MemoryMonitor;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration, the instant the process started
/// (immutable for the process lifetime, used to compute uptime), and the
/// memory monitor backing the health endpoint.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub started_at: DateTime<Utc>,
    pub memory: Arc<dyn MemoryMonitor>,
}

impl AppState {
    /// Creates a new application state from the given configuration, start
    /// instant, and memory monitor.
    pub fn new(
        config: AppConfig,
        started_at: DateTime<Utc>,
        memory: Arc<dyn MemoryMonitor>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            started_at,
            memory,
        }
    }
}
