use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh book identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Nanoseconds since the Unix epoch, rendered as a decimal string.
///
/// Values are strictly increasing within one generator: if the clock is coarse
/// or steps backwards, the previous value plus one is issued instead.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last: AtomicU64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn now_nanos() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }

    fn next_value(&self, now: u64) -> u64 {
        let mut prev = self.last.load(Ordering::Acquire);
        loop {
            let next = now.max(prev.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> String {
        self.next_value(Self::now_nanos()).to_string()
    }
}
