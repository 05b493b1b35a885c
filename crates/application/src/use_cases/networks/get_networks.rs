use netbridge_domain::{DomainError, Network, NetworkId, PageRequest};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use crate::ports::{NetworkFilter, NetworkRepository};

/// One page of networks plus the collection totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkPage {
    pub networks: Vec<Network>,
    pub total_count: u64,
    pub total_pages: u64,
}

/// Use case for reading networks.
pub struct GetNetworksUseCase {
    network_repo: Arc<dyn NetworkRepository>,
}

impl GetNetworksUseCase {
    pub fn new(network_repo: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repo }
    }

    /// Lists one page of networks in ascending id order.
    ///
    /// A page past the end is an empty page, not an error. A failure to count
    /// the collection is logged and reported as zero totals; the page itself
    /// is still returned.
    #[instrument(skip(self))]
    pub async fn list(&self, page: PageRequest) -> Result<NetworkPage, DomainError> {
        let networks = self
            .network_repo
            .find_page(&NetworkFilter::All, page.skip(), page.limit())
            .await?;

        let total_count = match self.network_repo.count(&NetworkFilter::All).await {
            Ok(count) => count,
            Err(e) => {
                error!(error = %e, "Failed to count networks");
                0
            }
        };

        debug!(
            returned = networks.len(),
            total_count,
            "Networks page retrieved"
        );

        Ok(NetworkPage {
            networks,
            total_count,
            total_pages: page.total_pages(total_count),
        })
    }

    /// # Errors
    ///
    /// * `DomainError::NetworkNotFound` - If no network has this id
    /// * `DomainError::DatabaseError` - If retrieval fails
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &NetworkId) -> Result<Network, DomainError> {
        self.network_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

pub(super) fn not_found(id: &NetworkId) -> DomainError {
    DomainError::NetworkNotFound(format!("the network: {id} doesn't exist"))
}
