pub mod networks;

pub use networks::{
    CreateNetworkUseCase, DeleteNetworkUseCase, GetNetworksUseCase, NetworkPage,
    UpdateNetworkUseCase,
};
