//! Subscriber setup for the binary. Logging starts before the config file is
//! read, so the filter sits behind a reload handle and is swapped once the
//! configured level is known.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Filter used until a configuration says otherwise.
pub const DEFAULT_LEVEL: &str = "warn";

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Build a fmt subscriber writing to `make_writer`, filtered by a reloadable `filter`.
pub fn subscriber<W>(
    make_writer: W,
    filter: EnvFilter,
) -> (impl tracing::Subscriber + Send + Sync + 'static, FilterHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(make_writer));
    (subscriber, handle)
}

/// Install the global stderr subscriber. `RUST_LOG` wins over [`DEFAULT_LEVEL`].
pub fn init() -> FilterHandle {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let (subscriber, handle) = subscriber(std::io::stderr, filter);
    subscriber.init();
    handle
}

/// Replace the active filter with `level`, a directive already checked by
/// [`AppConfig::validate`](crate::config::AppConfig::validate).
pub fn set_level(handle: &FilterHandle, level: &str) -> Result<(), reload::Error> {
    handle.reload(EnvFilter::new(level))
}
