use async_trait::async_trait;
use netbridge_domain::{DomainError, Network, NetworkId};

/// Predicate for probing and listing the network collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkFilter {
    All,
    DisplayName(String),
    NodeInterface { node: String, interface: String },
    BridgeName(String),
}

impl NetworkFilter {
    pub fn matches(&self, network: &Network) -> bool {
        match self {
            Self::All => true,
            Self::DisplayName(name) => network.display_name == *name,
            Self::NodeInterface { node, interface } => {
                network.node == *node && network.interface == *interface
            }
            Self::BridgeName(bridge) => network.bridge_name == *bridge,
        }
    }
}

/// Repository interface for the network collection.
///
/// Implementations own connection handling: every call checks out whatever
/// session it needs and releases it before returning, on success or failure.
#[async_trait]
pub trait NetworkRepository: Send + Sync {
    /// Inserts a fully populated record.
    ///
    /// # Errors
    ///
    /// * `DomainError::NetworkConflict` - If a unique key is already taken
    /// * `DomainError::DatabaseError` - If a database error occurs
    async fn insert(&self, network: &Network) -> Result<(), DomainError>;

    /// Returns the first record matching `filter`, or `None`.
    async fn find_one(&self, filter: &NetworkFilter) -> Result<Option<Network>, DomainError>;

    /// Returns the record with this id, or `None`.
    async fn find_by_id(&self, id: &NetworkId) -> Result<Option<Network>, DomainError>;

    /// Replaces the stored record that has `network.id`.
    ///
    /// # Errors
    ///
    /// * `DomainError::NetworkNotFound` - If no record has this id
    /// * `DomainError::NetworkConflict` - If the new state collides with another record
    /// * `DomainError::DatabaseError` - If a database error occurs
    async fn update_by_id(&self, network: &Network) -> Result<(), DomainError>;

    /// Removes the record with this id.
    ///
    /// # Errors
    ///
    /// * `DomainError::NetworkNotFound` - If no record has this id
    /// * `DomainError::DatabaseError` - If a database error occurs
    async fn remove_by_id(&self, id: &NetworkId) -> Result<(), DomainError>;

    async fn count(&self, filter: &NetworkFilter) -> Result<u64, DomainError>;

    /// Records matching `filter`, ascending by id, after skipping `skip` and
    /// taking at most `limit`.
    async fn find_page(
        &self,
        filter: &NetworkFilter,
        skip: u64,
        limit: u32,
    ) -> Result<Vec<Network>, DomainError>;
}
