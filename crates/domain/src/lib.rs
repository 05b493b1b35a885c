//! Netbridge Domain Layer
pub mod config;
pub mod errors;
pub mod network;
pub mod pagination;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use network::{Network, NetworkId, NetworkPatch, NewNetwork};
pub use pagination::PageRequest;
