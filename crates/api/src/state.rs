use netbridge_application::use_cases::{
    CreateNetworkUseCase, DeleteNetworkUseCase, GetNetworksUseCase, UpdateNetworkUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_networks: Arc<GetNetworksUseCase>,
    pub create_network: Arc<CreateNetworkUseCase>,
    pub update_network: Arc<UpdateNetworkUseCase>,
    pub delete_network: Arc<DeleteNetworkUseCase>,
    /// `page_size` used when a list request does not send one
    pub default_page_size: u32,
}
