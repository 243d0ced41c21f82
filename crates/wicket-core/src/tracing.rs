use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured stdout tracing. Call once at startup.
/// Uses JSON format with env-filter (`RUST_LOG` env var), falling back to `info`.
///
/// Safe to call multiple times; subsequent calls are silently ignored.
pub fn init_tracing() {
    init_tracing_with("info");
}

/// Like [`init_tracing`], with an explicit directive used when `RUST_LOG` is unset.
pub fn init_tracing_with(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}
