use netbridge_domain::{DomainError, Network, NetworkId, NetworkPatch};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::get_networks::not_found;
use crate::ports::NetworkRepository;
use crate::services::NetworkValidator;

/// Use case for updating a network.
///
/// Only the display name of a stored network can change. The patch is merged
/// into the stored record, so `node`, `interface`, `bridgeName`, `id` and
/// `createdAt` are written back unchanged.
pub struct UpdateNetworkUseCase {
    network_repo: Arc<dyn NetworkRepository>,
    validator: Arc<NetworkValidator>,
}

impl UpdateNetworkUseCase {
    pub fn new(network_repo: Arc<dyn NetworkRepository>, validator: Arc<NetworkValidator>) -> Self {
        Self {
            network_repo,
            validator,
        }
    }

    /// # Errors
    ///
    /// * `DomainError::NetworkNotFound` - If the network doesn't exist
    /// * `DomainError::InvalidNetwork` - If the new display name is invalid
    /// * `DomainError::NetworkConflict` - If another network already uses the name
    /// * `DomainError::DatabaseError` - If a database error occurs
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        id: &NetworkId,
        patch: NetworkPatch,
    ) -> Result<Network, DomainError> {
        let mut network = self
            .network_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        patch.validate()?;

        let name = match patch.display_name.as_deref() {
            Some(name) if name != network.display_name => name,
            _ => {
                debug!(network_id = %id, "Patch leaves network unchanged");
                return Ok(network);
            }
        };

        self.validator
            .ensure_display_name_available(name, Some(&network.id))
            .await?;

        let previous_name = network.display_name.clone();
        network.apply(patch);
        self.network_repo.update_by_id(&network).await?;

        info!(
            network_id = %network.id,
            previous_name = %previous_name,
            display_name = %network.display_name,
            "Network updated successfully"
        );

        Ok(network)
    }
}
