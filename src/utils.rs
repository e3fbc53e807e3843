use crate::{error::AppError, time::TimeProvider};
use chrono::{TimeZone, Utc};
use std::{io::IsTerminal, sync::Arc};
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, time::FormatTime, MakeWriter},
    layer::{Layered, SubscriberExt},
    reload,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

pub fn display_time(utc_time: chrono::DateTime<Utc>) -> String {
    let local_time = utc_time.with_timezone(&chrono::Local);
    local_time.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Log timestamps taken from a `TimeProvider` instead of the wall clock.
pub struct ProviderTimeFormatter<T: TimeProvider> {
    pub time_provider: Arc<T>,
}

impl<T: TimeProvider> FormatTime for ProviderTimeFormatter<T> {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let time = Utc.timestamp_opt(self.time_provider.now(), 0).single().unwrap_or_default();
        write!(w, "{}", time.to_rfc3339())
    }
}

struct LocalTimeFormatter;

impl FormatTime for LocalTimeFormatter {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", display_time(Utc::now()))
    }
}

type Filtered = Layered<reload::Layer<EnvFilter, Registry>, Registry>;

/// Lets the filter be swapped once the config file has been read.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogHandle {
    /// Applies `filter` unless the filter came from `RUST_LOG`.
    pub fn set_filter(&self, filter: &str) -> Result<(), AppError> {
        if self.from_env {
            return Ok(());
        }
        let new_filter = EnvFilter::try_new(filter)
            .map_err(|e| AppError::InvalidArgument(format!("log filter '{}': {}", filter, e)))?;
        self.filter.reload(new_filter).map_err(|e| AppError::InvalidArgument(e.to_string()))
    }
}

/// Builds the subscriber without installing it.
///
/// `env_filter` (the content of `RUST_LOG`) wins over `default_filter` when it parses.
pub fn log_subscriber<T, W>(
    default_filter: &str, env_filter: Option<&str>, time_provider: Option<Arc<T>>, writer: W, ansi: bool,
) -> (impl Subscriber + Send + Sync + 'static, LogHandle)
where
    T: TimeProvider + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env = env_filter.and_then(|f| EnvFilter::try_new(f).ok());
    let from_env = env.is_some();
    let filter = env.unwrap_or_else(|| EnvFilter::new(default_filter));
    let (filter_layer, handle) = reload::Layer::new(filter);

    let fmt_layer = fmt::layer().with_writer(writer).with_ansi(ansi);
    let fmt_layer: Box<dyn Layer<Filtered> + Send + Sync> = match time_provider {
        Some(time_provider) => fmt_layer.with_timer(ProviderTimeFormatter { time_provider }).boxed(),
        None => fmt_layer.with_timer(LocalTimeFormatter).boxed(),
    };

    let subscriber = Registry::default().with(filter_layer).with(fmt_layer);
    (subscriber, LogHandle { filter: handle, from_env })
}

/// Installs the global subscriber, logging to stderr.
///
/// Meant to run before argument and config parsing so their warnings are
/// seen; narrow or widen it later with `LogHandle::set_filter`. Calling it
/// again leaves the first subscriber in place.
pub fn start_log<T: TimeProvider + 'static>(default_filter: &str, time_provider: Option<Arc<T>>) -> LogHandle {
    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (subscriber, handle) = log_subscriber(
        default_filter,
        env_filter.as_deref(),
        time_provider,
        std::io::stderr,
        std::io::stderr().is_terminal(),
    );
    _ = subscriber.try_init();
    handle
}
