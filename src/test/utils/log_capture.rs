use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink for asserting on what was logged.
#[derive(Clone, Debug, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn contents(&self) -> String {
        self.buf.lock().map(|buf| String::from_utf8_lossy(&buf).into_owned()).unwrap_or_default()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self.buf.lock().map_err(|_| io::Error::other("log capture poisoned"))?;
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a thread-local subscriber at `filter` and returns what it logged.
pub fn capture_logs<R>(filter: &str, f: impl FnOnce() -> R) -> (R, String) {
    let capture = LogCapture::default();
    let (subscriber, _handle) =
        crate::utils::log_subscriber::<crate::test::utils::mock_time::MockTimeProvider, _>(
            filter,
            None,
            None,
            capture.clone(),
            false,
        );
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture.contents())
}
