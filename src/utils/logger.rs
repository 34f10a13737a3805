use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output for terminals.
    Compact,
    /// One JSON object per event, for log shippers.
    Json,
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "portfolio_site=debug,info"
    } else {
        "portfolio_site=info,warn"
    }
}

/// Installs the global subscriber. Call once, before the first request goes out.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // the two layers sit at different depths of the stack, so each needs its
    // own builder (the subscriber type parameter differs)
    macro_rules! base {
        () => {
            tracing_subscriber::fmt::layer()
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
        };
    }

    // only one of the two layers is ever Some
    let (compact, json) = match format {
        LogFormat::Compact => (Some(base!().with_target(false).compact()), None),
        LogFormat::Json => (None, Some(base!().with_target(true).json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(json)
        .init();
}
