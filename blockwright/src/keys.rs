use atomic_counter::{AtomicCounter, RelaxedCounter};
use chrono::Utc;

/// Produces document-unique data keys of the `<prefix>_<n>` form the
/// renderer expects. `n` starts at the creation timestamp in milliseconds
/// and grows by at least one per key, so keys never repeat within a
/// document's lifetime.
#[derive(Debug)]
pub struct KeySource {
    base: i64,
    counter: RelaxedCounter,
}

impl KeySource {
    pub fn new() -> Self {
        Self::with_base(Utc::now().timestamp_millis())
    }

    /// Fixed base, for deterministic keys in tests.
    pub fn with_base(base: i64) -> Self {
        Self {
            base,
            counter: RelaxedCounter::new(0),
        }
    }

    pub fn next(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.base + self.counter.inc() as i64)
    }
}

impl Default for KeySource {
    fn default() -> Self {
        Self::new()
    }
}
