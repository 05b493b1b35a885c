mod network_repository;

pub use network_repository::{NetworkFilter, NetworkRepository};
