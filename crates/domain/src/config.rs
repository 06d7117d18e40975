pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod security;
pub mod server;
pub mod table;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use security::SecurityConfig;
pub use server::ServerConfig;
pub use table::{EmptyResultPolicy, TableConfig};
