use ferrous_walk_domain::{CliOverrides, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    Ok(config)
}

/// Install the stdout subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .init();

    info!(
        level = %config.logging.level,
        roots = config.resolver.root_servers.len(),
        timeout_secs = config.resolver.query_timeout_secs,
        "Configuration loaded"
    );
}
