use dnsperf_domain::config::DatabaseConfig;
use dnsperf_infrastructure::database::create_pool;
use dnsperf_infrastructure::repositories::SqlitePerfRepository;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePerfRepository> {
    let database_url = cfg.url();
    info!("Initializing database: {}", database_url);

    let pool = create_pool(&database_url).await.map_err(|e| {
        error!("Failed to open database {}: {}", database_url, e);
        anyhow::anyhow!(e)
    })?;

    info!("Database initialized successfully");
    Ok(SqlitePerfRepository::new(pool))
}
