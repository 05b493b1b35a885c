//! Configuration module for Netbridge
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP bind address and port
//! - `database`: SQLite location and pool sizing
//! - `logging`: Logging settings
//! - `pagination`: List endpoint defaults
//! - `errors`: Configuration errors

pub mod database;
pub mod errors;
pub mod logging;
pub mod pagination;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use pagination::PaginationConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
