use netbridge_domain::{DomainError, NetworkId};
use std::sync::Arc;
use tracing::{info, instrument};

use super::get_networks::not_found;
use crate::ports::NetworkRepository;

pub struct DeleteNetworkUseCase {
    network_repo: Arc<dyn NetworkRepository>,
}

impl DeleteNetworkUseCase {
    pub fn new(network_repo: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: &NetworkId) -> Result<(), DomainError> {
        let network = self
            .network_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        self.network_repo.remove_by_id(&network.id).await?;

        info!(
            network_id = %network.id,
            display_name = %network.display_name,
            "Network deleted successfully"
        );

        Ok(())
    }
}
