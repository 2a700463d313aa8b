use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directives for console output.
///
/// `RUST_LOG` wins when set. Otherwise `LOG_LEVEL` (default "info") applies to
/// everything except a few chatty dependencies, which are held at warn.
pub(crate) fn console_filter() -> EnvFilter {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},tower_http=warn,hyper=warn,tonic=warn,h2=warn,sqlx=warn",
            log_level
        ))
    })
}

/// Initialize basic console logging.
///
/// Used when the `observability` feature is not compiled in, or when it is
/// but `OBSERVABILITY_ENABLED=false`. Every tracing macro still reaches the
/// console; nothing is written to files or exported.
pub fn init_basic_console_logging() {
    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(console_filter());

    tracing_subscriber::registry().with(console_layer).init();

    // Print initialization message to stderr (bypasses logging system)
    eprintln!(
        "ℹ️  Observability disabled - console logging only (OBSERVABILITY_ENABLED=false or feature not compiled)"
    );
}
