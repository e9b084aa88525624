pub mod config;
pub mod database;
pub mod inputs;
pub mod logging;
pub mod store;

pub use config::{load_config, log_config_summary};
pub use database::init_database;
pub use inputs::{load_domains, load_servers};
pub use logging::init_logging;
pub use store::{create_store, open_store};
