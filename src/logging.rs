use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a `fmt` subscriber writing to stderr.
///
/// `filter` is an `EnvFilter` directive such as `"info"` or
/// `"payment_patterns=debug"`. An unparsable directive falls back to `warn`.
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init();
}
