pub mod database;
pub mod dns;
pub mod repositories;
pub mod store;
pub mod system;
