use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use crate::errors::DomainError;
use crate::validators::{validate_display_name, validate_link_name, validate_node};

const ID_LEN: usize = 12;
const COUNTER_MASK: u32 = 0x00FF_FFFF;

static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

/// Opaque 12-byte record identifier.
///
/// Layout: 4-byte big-endian Unix seconds, 5 bytes chosen once per process,
/// 3-byte big-endian counter. Ids minted by one process sort in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NetworkId([u8; ID_LEN]);

impl NetworkId {
    pub fn generate() -> Self {
        Self::generate_at(Utc::now())
    }

    pub fn generate_at(now: DateTime<Utc>) -> Self {
        let secs = now.timestamp().clamp(0, u32::MAX as i64) as u32;
        let process = PROCESS_UNIQUE.get_or_init(|| {
            let mut bytes = [0u8; 5];
            fastrand::fill(&mut bytes);
            bytes
        });
        let counter = COUNTER
            .get_or_init(|| AtomicU32::new(fastrand::u32(..)))
            .fetch_add(1, Ordering::Relaxed)
            & COUNTER_MASK;

        let mut bytes = [0u8; ID_LEN];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(process);
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for NetworkId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_LEN * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidNetworkId(format!(
                "'{s}' is not a 24-character hex id"
            )));
        }

        let mut bytes = [0u8; ID_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|e| DomainError::InvalidNetworkId(e.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for NetworkId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NetworkId> for String {
    fn from(id: NetworkId) -> Self {
        id.to_hex()
    }
}

/// A persisted network record: one physical interface plus its bridge on a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: NetworkId,
    pub display_name: String,
    pub node: String,
    pub interface: String,
    pub bridge_name: String,
    pub created_at: DateTime<Utc>,
}

impl Network {
    /// Applies a patch. Only the display name is ever replaced.
    pub fn apply(&mut self, patch: NetworkPatch) {
        if let Some(name) = patch.display_name {
            self.display_name = name;
        }
    }
}

/// Client input for creating a network; `id` and `created_at` are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNetwork {
    pub display_name: String,
    pub node: String,
    pub interface: String,
    pub bridge_name: String,
}

impl NewNetwork {
    pub fn new(
        display_name: impl Into<String>,
        node: impl Into<String>,
        interface: impl Into<String>,
        bridge_name: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            node: node.into(),
            interface: interface.into(),
            bridge_name: bridge_name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_display_name(&self.display_name)
            .and_then(|_| validate_node(&self.node))
            .and_then(|_| validate_link_name("interface", &self.interface))
            .and_then(|_| validate_link_name("bridgeName", &self.bridge_name))
            .map_err(DomainError::InvalidNetwork)
    }

    pub fn into_network(self, id: NetworkId, created_at: DateTime<Utc>) -> Network {
        Network {
            id,
            display_name: self.display_name,
            node: self.node,
            interface: self.interface,
            bridge_name: self.bridge_name,
            created_at,
        }
    }
}

/// The only mutation a stored network accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkPatch {
    pub display_name: Option<String>,
}

impl NetworkPatch {
    pub fn display_name(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.display_name {
            Some(name) => validate_display_name(name).map_err(DomainError::InvalidNetwork),
            None => Ok(()),
        }
    }
}
