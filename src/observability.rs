use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "warn";
const DEBUG_FILTER: &str = "debug";

/// Initialize diagnostics logging on stderr
///
/// Logs never go to stdout so they cannot interleave with the menu.
pub fn init_logging(debug: bool) {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(console::Term::stderr().is_term())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(create_env_filter(debug))
        .with(fmt_layer)
        .try_init()
        .ok();
}

/// Create an EnvFilter, with RUST_LOG taking precedence
fn create_env_filter(debug: bool) -> EnvFilter {
    let fallback = if debug { DEBUG_FILTER } else { DEFAULT_FILTER };
    let directive = std::env::var("RUST_LOG")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string());

    EnvFilter::try_new(&directive).unwrap_or_else(|_| {
        eprintln!(
            "Failed to parse filter directive: {}. Falling back to default: {}",
            directive, fallback
        );
        EnvFilter::new(fallback)
    })
}
