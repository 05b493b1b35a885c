#![allow(dead_code)]

use async_trait::async_trait;
use netbridge_application::ports::{NetworkFilter, NetworkRepository};
use netbridge_domain::{DomainError, Network, NetworkId};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock NetworkRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockNetworkRepository {
    networks: Arc<RwLock<Vec<Network>>>,
    probes: Arc<RwLock<Vec<NetworkFilter>>>,
    should_fail: Arc<RwLock<bool>>,
    count_should_fail: Arc<RwLock<bool>>,
}

impl MockNetworkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_networks(networks: Vec<Network>) -> Self {
        let repo = Self::new();
        *repo.networks.write().await = networks;
        repo
    }

    /// Every store call fails with a database error.
    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    /// Only `count` fails.
    pub async fn set_count_should_fail(&self, should_fail: bool) {
        *self.count_should_fail.write().await = should_fail;
    }

    /// Filters passed to `find_one`, in call order.
    pub async fn probes(&self) -> Vec<NetworkFilter> {
        self.probes.read().await.clone()
    }

    pub async fn snapshot(&self) -> Vec<Network> {
        self.networks.read().await.clone()
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("mock store failure".to_string()));
        }
        Ok(())
    }
}

fn collides(a: &Network, b: &Network) -> bool {
    a.display_name == b.display_name
        || a.bridge_name == b.bridge_name
        || (a.node == b.node && a.interface == b.interface)
}

#[async_trait]
impl NetworkRepository for MockNetworkRepository {
    async fn insert(&self, network: &Network) -> Result<(), DomainError> {
        self.check_failure().await?;
        let mut networks = self.networks.write().await;
        if networks.iter().any(|n| n.id == network.id || collides(n, network)) {
            return Err(DomainError::NetworkConflict("duplicate key".to_string()));
        }
        networks.push(network.clone());
        Ok(())
    }

    async fn find_one(&self, filter: &NetworkFilter) -> Result<Option<Network>, DomainError> {
        self.probes.write().await.push(filter.clone());
        self.check_failure().await?;
        Ok(self
            .networks
            .read()
            .await
            .iter()
            .find(|n| filter.matches(n))
            .cloned())
    }

    async fn find_by_id(&self, id: &NetworkId) -> Result<Option<Network>, DomainError> {
        self.check_failure().await?;
        Ok(self
            .networks
            .read()
            .await
            .iter()
            .find(|n| n.id == *id)
            .cloned())
    }

    async fn update_by_id(&self, network: &Network) -> Result<(), DomainError> {
        self.check_failure().await?;
        let mut networks = self.networks.write().await;
        if networks
            .iter()
            .any(|n| n.id != network.id && collides(n, network))
        {
            return Err(DomainError::NetworkConflict("duplicate key".to_string()));
        }
        let slot = networks
            .iter_mut()
            .find(|n| n.id == network.id)
            .ok_or_else(|| DomainError::NetworkNotFound(network.id.to_string()))?;
        *slot = network.clone();
        Ok(())
    }

    async fn remove_by_id(&self, id: &NetworkId) -> Result<(), DomainError> {
        self.check_failure().await?;
        let mut networks = self.networks.write().await;
        let before = networks.len();
        networks.retain(|n| n.id != *id);
        if networks.len() == before {
            return Err(DomainError::NetworkNotFound(id.to_string()));
        }
        Ok(())
    }

    async fn count(&self, filter: &NetworkFilter) -> Result<u64, DomainError> {
        self.check_failure().await?;
        if *self.count_should_fail.read().await {
            return Err(DomainError::DatabaseError("mock count failure".to_string()));
        }
        Ok(self
            .networks
            .read()
            .await
            .iter()
            .filter(|n| filter.matches(n))
            .count() as u64)
    }

    async fn find_page(
        &self,
        filter: &NetworkFilter,
        skip: u64,
        limit: u32,
    ) -> Result<Vec<Network>, DomainError> {
        self.check_failure().await?;
        let mut networks: Vec<Network> = self
            .networks
            .read()
            .await
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect();
        networks.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(networks
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }
}
