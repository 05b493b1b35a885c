use netbridge_domain::{DomainError, NetworkPatch, NewNetwork};
use serde::Deserialize;

/// Record-shaped request body accepted by `POST /networks` and `PUT /networks/{id}`.
///
/// Absent fields decode to their zero value, so a client may send any subset.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkRequest {
    pub id: Option<String>,
    pub display_name: String,
    pub node: String,
    pub interface: String,
    pub bridge_name: String,
    pub created_at: Option<String>,
}

impl NetworkRequest {
    /// Server-assigned fields (`id`, `createdAt`) are dropped.
    pub fn into_new_network(self) -> NewNetwork {
        NewNetwork {
            display_name: self.display_name,
            node: self.node,
            interface: self.interface,
            bridge_name: self.bridge_name,
        }
    }

    fn only_display_name(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().unwrap_or_default().is_empty();
        self.node.is_empty()
            && self.interface.is_empty()
            && self.bridge_name.is_empty()
            && blank(&self.id)
            && blank(&self.created_at)
    }
}

/// A patch may carry `displayName` and nothing else.
impl TryFrom<NetworkRequest> for NetworkPatch {
    type Error = DomainError;

    fn try_from(req: NetworkRequest) -> Result<Self, Self::Error> {
        if !req.only_display_name() {
            return Err(DomainError::UpdateNotAllowed);
        }

        Ok(NetworkPatch {
            display_name: Some(req.display_name).filter(|name| !name.is_empty()),
        })
    }
}

/// Raw `page`/`page_size` query values; parsed by `PageRequest::parse`
/// so that malformed numbers surface as a 400 with a useful message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListNetworksQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}
