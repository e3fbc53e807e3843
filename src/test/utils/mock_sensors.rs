use crate::sensors::{ReadingSource, SensorReading};
use mockall::mock;
use std::collections::VecDeque;
use tracing::trace;

mock! {
    pub ReadingSource {}

    impl ReadingSource for ReadingSource {
        fn next_reading(&mut self) -> SensorReading;
    }
}

/// Mock that hands out `reading` on every call and expects exactly `times` calls.
pub fn set_reading_source(reading: SensorReading, times: usize) -> MockReadingSource {
    let mut mock_source = MockReadingSource::new();
    mock_source.expect_next_reading().times(times).returning(move || {
        trace!("Mocked reading {:?}", reading);
        reading
    });
    mock_source
}

/// Replays a fixed list of readings, in order.
#[derive(Debug, Default)]
pub struct FixedReadingSource {
    readings: VecDeque<SensorReading>,
}

impl FixedReadingSource {
    pub fn new(readings: Vec<SensorReading>) -> Self {
        Self { readings: readings.into() }
    }

    pub fn remaining(&self) -> usize {
        self.readings.len()
    }
}

impl ReadingSource for FixedReadingSource {
    /// Panics when the list is exhausted, a test asked for more chips than it set up.
    fn next_reading(&mut self) -> SensorReading {
        self.readings.pop_front().expect("FixedReadingSource ran out of readings")
    }
}
