//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose progress is surfaced in verbose mode
const VERBOSE_TARGETS: &[&str] = &["stock_crew", "agent_workflow"];

/// Filter directive used when `RUST_LOG` is not set
pub fn default_filter(verbose: bool) -> String {
    if verbose {
        let mut directive = String::from("warn");
        for target in VERBOSE_TARGETS {
            directive.push_str(&format!(",{target}=info"));
        }
        directive
    } else {
        "warn".to_string()
    }
}

/// Initialize tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, plus per-stage
/// progress from the pipeline crates when `verbose` is true. Calling this more
/// than once is a no-op.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}
