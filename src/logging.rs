use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the `info` default.
///
/// Logs go to stderr so stdout stays usable for `-` outputs.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
