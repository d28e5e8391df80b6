//! Health endpoint reporting process uptime and memory figures.
//!
//! Uptime derives from the immutable start instant held in [`AppState`];
//! memory figures come from the state's memory monitor. Both drift between
//! calls, so consumers should not expect exact values.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::BYTES_PER_MEGABYTE;
use crate::state::AppState;

/// Health payload served at `/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Wall-clock time at request handling, RFC 3339 UTC
    pub timestamp: String,
    /// Seconds since process start, millisecond precision
    pub uptime: f64,
    pub memory: MemoryReport,
}

/// Memory figures rendered as `"<integer> MB"` strings.
#[derive(Debug, Serialize)]
pub struct MemoryReport {
    pub max: String,
    pub used: String,
    pub free: String,
}

/// Health handler - always returns 200 with live uptime and memory counters.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = Utc::now();
    // Clamped at zero so uptime stays non-negative even if the wall clock
    // steps backwards past the recorded start instant
    let uptime =
        (now.timestamp_millis() - state.started_at.timestamp_millis()).max(0) as f64 / 1000.0;
    let stats = state.memory.stats();

    Json(HealthResponse {
        status: "healthy",
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime,
        memory: MemoryReport {
            max: format_megabytes(stats.max_bytes),
            used: format_megabytes(stats.used_bytes),
            free: format_megabytes(stats.free_bytes),
        },
    })
}

/// Render a byte count as whole megabytes, truncating.
fn format_megabytes(bytes: u64) -> String {
    format!("{} MB", bytes / BYTES_PER_MEGABYTE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, HttpServerConfig, LoggingConfig};
    use crate::memory::{MemoryMonitor, MemoryStats};
    use std::sync::Arc;

    /// Monitor returning canned figures, for asserting exact rendering.
    struct FixedMemory(MemoryStats);

    impl MemoryMonitor for FixedMemory {
        fn stats(&self) -> MemoryStats {
            self.0
        }
    }

    fn state_with(started_at: chrono::DateTime<Utc>, monitor: FixedMemory) -> AppState {
        let config = AppConfig {
            http: HttpServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            logging: LoggingConfig::default(),
        };
        AppState::new(config, started_at, Arc::new(monitor))
    }

    #[test]
    fn test_format_megabytes_truncates() {
        assert_eq!(format_megabytes(0), "0 MB");
        assert_eq!(format_megabytes(BYTES_PER_MEGABYTE - 1), "0 MB");
        assert_eq!(format_megabytes(BYTES_PER_MEGABYTE), "1 MB");
        assert_eq!(format_megabytes(10 * BYTES_PER_MEGABYTE + 17), "10 MB");
    }

    #[tokio::test]
    async fn test_health_reports_canned_memory() {
        let monitor = FixedMemory(MemoryStats {
            max_bytes: 512 * BYTES_PER_MEGABYTE,
            used_bytes: 128 * BYTES_PER_MEGABYTE,
            free_bytes: 384 * BYTES_PER_MEGABYTE,
        });
        let state = state_with(Utc::now(), monitor);

        let Json(response) = health(State(state)).await;

        assert_eq!(response.status, "healthy");
        assert_eq!(response.memory.max, "512 MB");
        assert_eq!(response.memory.used, "128 MB");
        assert_eq!(response.memory.free, "384 MB");
    }

    #[tokio::test]
    async fn test_uptime_clamps_to_zero_on_clock_step() {
        let monitor = FixedMemory(MemoryStats {
            max_bytes: 0,
            used_bytes: 0,
            free_bytes: 0,
        });
        // Start instant in the future, as after a backwards clock step
        let state = state_with(Utc::now() + chrono::Duration::seconds(60), monitor);

        let Json(response) = health(State(state)).await;

        assert_eq!(response.uptime, 0.0);
    }

    #[tokio::test]
    async fn test_timestamp_is_rfc3339_utc() {
        let monitor = FixedMemory(MemoryStats {
            max_bytes: 0,
            used_bytes: 0,
            free_bytes: 0,
        });
        let state = state_with(Utc::now(), monitor);

        let Json(response) = health(State(state)).await;

        let parsed = chrono::DateTime::parse_from_rfc3339(&response.timestamp)
            .expect("timestamp parses as RFC 3339");
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert!(response.timestamp.ends_with('Z'));
    }
}
