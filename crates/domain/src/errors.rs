use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    #[error("Invalid network id: {0}")]
    InvalidNetworkId(String),

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("only DisplayName can be changed")]
    UpdateNotAllowed,

    #[error("Network not found: {0}")]
    NetworkNotFound(String),

    #[error("{0}")]
    NetworkConflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
