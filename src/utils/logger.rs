use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human output.
    Compact,
    /// One JSON object per event, for log collectors.
    Json,
}

/// Directives used when `RUST_LOG` is not set. Dependencies stay at `warn`.
fn fallback_directives(verbose: bool) -> &'static str {
    if verbose {
        "quake_feed=debug,warn"
    } else {
        "quake_feed=info,warn"
    }
}

/// Installs the global subscriber. Everything goes to stderr; stdout is
/// reserved for rendered records.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_directives(verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .json()
                    .flatten_event(true),
            )
            .init(),
    }
}
