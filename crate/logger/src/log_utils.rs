use std::sync::Once;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static LOG_INIT: Once = Once::new();

/// Install the global tracing subscriber, once per process.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used, falling back
/// to `info`. A subscriber installed by someone else is left in place.
pub fn log_init(default_filter: Option<&str>) {
    LOG_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter.unwrap_or("info")));
        tracing_setup(filter);
    });
}

fn tracing_setup(filter: EnvFilter) {
    let format = tracing_subscriber::fmt::layer()
        .with_level(true)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true)
        .compact();

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init()
    {
        tracing::debug!("tracing subscriber already installed: {e}");
    }
}
