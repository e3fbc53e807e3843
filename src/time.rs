use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Debug;

pub trait TimeProvider: Send + Sync + Debug {
    fn now(&self) -> i64; // Returns the current time as a Unix UTC timestamp

    fn now_utc(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.now(), 0).single().unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct RealTimeProvider;

impl TimeProvider for RealTimeProvider {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}
