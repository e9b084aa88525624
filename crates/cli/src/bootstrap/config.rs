use dnsperf_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Call once logging is up; nothing is recorded before `init_logging`.
pub fn log_config_summary(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        servers_file = %config.benchmark.servers_file,
        domains_file = %config.benchmark.domains_file,
        iterations = config.benchmark.iterations,
        store = %config.store.path,
        database = %config.database.path,
        "Configuration loaded"
    );
}
