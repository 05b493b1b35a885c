mod network_validator;

pub use network_validator::NetworkValidator;
