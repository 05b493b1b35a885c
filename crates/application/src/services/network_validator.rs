use netbridge_domain::{DomainError, NetworkId, NewNetwork};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{NetworkFilter, NetworkRepository};

/// Uniqueness checks for network records.
///
/// Probes run one after another so that, when several keys collide at once,
/// the reported conflict is always `displayName`, then `(node, interface)`,
/// then `bridgeName`. The store's unique indexes remain the final guard
/// against concurrent writers.
pub struct NetworkValidator {
    network_repo: Arc<dyn NetworkRepository>,
}

impl NetworkValidator {
    pub fn new(network_repo: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repo }
    }

    #[instrument(skip(self, network), fields(display_name = %network.display_name))]
    pub async fn ensure_unique(&self, network: &NewNetwork) -> Result<(), DomainError> {
        self.ensure_display_name_available(&network.display_name, None)
            .await?;

        let filter = NetworkFilter::NodeInterface {
            node: network.node.clone(),
            interface: network.interface.clone(),
        };
        if self.network_repo.find_one(&filter).await?.is_some() {
            return Err(interface_conflict(&network.node, &network.interface));
        }

        let filter = NetworkFilter::BridgeName(network.bridge_name.clone());
        if self.network_repo.find_one(&filter).await?.is_some() {
            return Err(bridge_conflict(&network.bridge_name));
        }

        debug!("Uniqueness probes passed");
        Ok(())
    }

    /// Fails if another record already uses `name`. The record `except` is
    /// allowed to hold it, so renaming a record to its own name is fine.
    #[instrument(skip(self))]
    pub async fn ensure_display_name_available(
        &self,
        name: &str,
        except: Option<&NetworkId>,
    ) -> Result<(), DomainError> {
        let filter = NetworkFilter::DisplayName(name.to_string());
        match self.network_repo.find_one(&filter).await? {
            Some(existing) if Some(&existing.id) != except => Err(display_name_conflict(name)),
            _ => Ok(()),
        }
    }
}

fn display_name_conflict(name: &str) -> DomainError {
    DomainError::NetworkConflict(format!("displayName: {name} already existed"))
}

fn interface_conflict(node: &str, interface: &str) -> DomainError {
    DomainError::NetworkConflict(format!(
        "interface {interface} on the Node {node} has already been used"
    ))
}

fn bridge_conflict(bridge_name: &str) -> DomainError {
    DomainError::NetworkConflict(format!("bridgeName: {bridge_name} already existed"))
}
