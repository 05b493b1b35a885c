mod create_network;
mod delete_network;
mod get_networks;
mod update_network;

pub use create_network::CreateNetworkUseCase;
pub use delete_network::DeleteNetworkUseCase;
pub use get_networks::{GetNetworksUseCase, NetworkPage};
pub use update_network::UpdateNetworkUseCase;
