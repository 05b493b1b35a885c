pub mod action;
pub mod network;

pub use action::ActionResponse;
pub use network::{ListNetworksQuery, NetworkRequest};
