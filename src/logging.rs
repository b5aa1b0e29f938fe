use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Environment variable holding the log filter; `RUST_LOG` is the fallback
pub const LOG_ENV: &str = "G4_LINT_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Install the stderr tracing subscriber.
///
/// `G4_LINT_LOG` takes precedence over `RUST_LOG`; without either only
/// warnings are logged.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    // A subscriber may already be installed when embedded; keep it
    let _ = SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
