use netbridge_api::AppState;
use netbridge_application::services::NetworkValidator;
use netbridge_application::use_cases::{
    CreateNetworkUseCase, DeleteNetworkUseCase, GetNetworksUseCase, UpdateNetworkUseCase,
};
use std::sync::Arc;

use super::Repositories;

pub struct UseCases {
    pub get_networks: Arc<GetNetworksUseCase>,
    pub create_network: Arc<CreateNetworkUseCase>,
    pub update_network: Arc<UpdateNetworkUseCase>,
    pub delete_network: Arc<DeleteNetworkUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        let validator = Arc::new(NetworkValidator::new(repos.network.clone()));

        Self {
            get_networks: Arc::new(GetNetworksUseCase::new(repos.network.clone())),
            create_network: Arc::new(CreateNetworkUseCase::new(
                repos.network.clone(),
                validator.clone(),
            )),
            update_network: Arc::new(UpdateNetworkUseCase::new(
                repos.network.clone(),
                validator,
            )),
            delete_network: Arc::new(DeleteNetworkUseCase::new(repos.network.clone())),
        }
    }

    pub fn into_app_state(self, default_page_size: u32) -> AppState {
        AppState {
            get_networks: self.get_networks,
            create_network: self.create_network,
            update_network: self.update_network,
            delete_network: self.delete_network,
            default_page_size,
        }
    }
}
