use crate::time::TimeProvider;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

#[derive(Debug, Clone)]
pub struct MockTimeProvider {
    current_time: Arc<AtomicI64>,
}

impl MockTimeProvider {
    pub fn new(start_time: i64) -> Self {
        Self { current_time: Arc::new(AtomicI64::new(start_time)) }
    }

    pub fn advance_time(&self, seconds: i64) {
        self.current_time.fetch_add(seconds, Ordering::SeqCst);
    }

    pub fn set(&self, new_time: i64) {
        self.current_time.store(new_time, Ordering::SeqCst)
    }
}

impl TimeProvider for MockTimeProvider {
    fn now(&self) -> i64 {
        self.current_time.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_clock_moves_only_when_told() {
        let clock = MockTimeProvider::new(1_000);
        assert_eq!(clock.now(), 1_000);
        clock.advance_time(60);
        assert_eq!(clock.now(), 1_060);
        clock.set(5);
        assert_eq!(clock.now_utc().timestamp(), 5);
    }
}
