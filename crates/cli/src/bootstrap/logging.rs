use dohhole_domain::Config;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.filter_directives()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.logging.debug)
        .try_init();
}
