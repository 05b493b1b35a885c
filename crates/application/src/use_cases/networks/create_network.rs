use chrono::Utc;
use netbridge_domain::{DomainError, Network, NetworkId, NewNetwork};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::NetworkRepository;
use crate::services::NetworkValidator;

pub struct CreateNetworkUseCase {
    network_repo: Arc<dyn NetworkRepository>,
    validator: Arc<NetworkValidator>,
}

impl CreateNetworkUseCase {
    pub fn new(network_repo: Arc<dyn NetworkRepository>, validator: Arc<NetworkValidator>) -> Self {
        Self {
            network_repo,
            validator,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, new_network: NewNetwork) -> Result<Network, DomainError> {
        new_network.validate()?;
        self.validator.ensure_unique(&new_network).await?;

        let created_at = Utc::now();
        let network = new_network.into_network(NetworkId::generate_at(created_at), created_at);
        self.network_repo.insert(&network).await?;

        info!(
            network_id = %network.id,
            display_name = %network.display_name,
            node = %network.node,
            interface = %network.interface,
            bridge_name = %network.bridge_name,
            "Network created successfully"
        );

        Ok(network)
    }
}
