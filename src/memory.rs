//! System memory introspection for the health endpoint.
//!
//! Rust has no managed heap to interrogate, so the reported figures are
//! OS-level measurements: `max` is total system memory, `free` is the memory
//! the OS reports as available, and `used` is the difference. The figures are
//! best-effort and vary between calls; callers should treat them as
//! approximate.

use std::sync::Mutex;

use sysinfo::{MemoryRefreshKind, RefreshKind, System};

/// A snapshot of memory counters, in bytes.
#[derive(Debug, Clone, Copy)]
pub struct MemoryStats {
    pub max_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
}

/// Capability interface for reading memory counters.
///
/// The health handler depends on this trait rather than on a concrete
/// mechanism, so the measurement source can be swapped without touching the
/// handler contract.
pub trait MemoryMonitor: Send + Sync {
    /// Take a fresh snapshot of the memory counters.
    fn stats(&self) -> MemoryStats;
}

/// Memory monitor backed by the `sysinfo` crate.
///
/// Refreshing counters mutates the underlying `System`, so it sits behind a
/// mutex. The lock is held only for the refresh-and-read, which completes in
/// microseconds.
pub struct SystemMemoryMonitor {
    sys: Mutex<System>,
}

impl SystemMemoryMonitor {
    /// Create a monitor that refreshes only memory counters.
    pub fn new() -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::everything()),
        );
        Self {
            sys: Mutex::new(sys),
        }
    }
}

impl Default for SystemMemoryMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryMonitor for SystemMemoryMonitor {
    fn stats(&self) -> MemoryStats {
        let mut sys = match self.sys.lock() {
            Ok(guard) => guard,
            // A panic while holding the lock cannot leave the System in a
            // state that breaks a subsequent refresh, so recover the value.
            Err(poisoned) => poisoned.into_inner(),
        };
        sys.refresh_memory();

        let max_bytes = sys.total_memory();
        // available_memory() can exceed total on some platforms due to
        // cache/buffer accounting; clamp so used never underflows
        let free_bytes = sys.available_memory().min(max_bytes);
        let used_bytes = max_bytes.saturating_sub(free_bytes);

        MemoryStats {
            max_bytes,
            used_bytes,
            free_bytes,
        }
    }
}
