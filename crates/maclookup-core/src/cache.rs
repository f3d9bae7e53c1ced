// ── Per-run device cache ──
//
// Serial → last successfully fetched device. Lives exactly as long as the
// `Resolver` that owns it; there is no eviction or TTL, so a run assumes
// switch attributes do not change while it is in progress.

use std::collections::HashMap;

use maclookup_api::Device;

/// Hit/miss counters, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Default)]
pub struct DeviceCache {
    entries: HashMap<String, Device>,
    stats: CacheStats,
}

impl DeviceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a serial, counting the hit or miss.
    pub fn get(&mut self, serial: &str) -> Option<&Device> {
        match self.entries.get(serial) {
            Some(device) => {
                self.stats.hits += 1;
                Some(device)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Store a successful fetch. Failed fetches must never be inserted.
    pub fn insert(&mut self, serial: impl Into<String>, device: Device) {
        self.entries.insert(serial.into(), device);
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
