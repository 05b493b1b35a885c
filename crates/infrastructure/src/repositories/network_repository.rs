use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use netbridge_application::ports::{NetworkFilter, NetworkRepository};
use netbridge_domain::{DomainError, Network, NetworkId};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type NetworkRow = (String, String, String, String, String, String);

const SELECT_COLUMNS: &str =
    "SELECT id, display_name, node, interface, bridge_name, created_at FROM networks";

pub struct SqliteNetworkRepository {
    pool: SqlitePool,
}

impl SqliteNetworkRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_network(row: NetworkRow) -> Result<Network, DomainError> {
        let (id, display_name, node, interface, bridge_name, created_at) = row;

        let id = id.parse::<NetworkId>().map_err(|e| {
            DomainError::DatabaseError(format!("corrupt network id '{id}': {e}"))
        })?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| {
                DomainError::DatabaseError(format!("corrupt created_at for network {id}: {e}"))
            })?
            .with_timezone(&Utc);

        Ok(Network {
            id,
            display_name,
            node,
            interface,
            bridge_name,
            created_at,
        })
    }

    fn where_clause(filter: &NetworkFilter) -> (&'static str, Vec<String>) {
        match filter {
            NetworkFilter::All => ("", Vec::new()),
            NetworkFilter::DisplayName(name) => (" WHERE display_name = ?", vec![name.clone()]),
            NetworkFilter::NodeInterface { node, interface } => (
                " WHERE node = ? AND interface = ?",
                vec![node.clone(), interface.clone()],
            ),
            NetworkFilter::BridgeName(bridge) => (" WHERE bridge_name = ?", vec![bridge.clone()]),
        }
    }

    /// Translates a unique-index violation into a conflict naming the offending field.
    fn map_write_error(e: sqlx::Error, network: &Network, action: &str) -> DomainError {
        let unique = matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation());
        if !unique {
            error!(error = %e, network_id = %network.id, "Failed to {action} network");
            return DomainError::DatabaseError(e.to_string());
        }

        let message = e.to_string();
        let conflict = if message.contains("networks.display_name") {
            format!("displayName: {} already existed", network.display_name)
        } else if message.contains("networks.node") || message.contains("networks.interface") {
            format!(
                "interface {} on the Node {} has already been used",
                network.interface, network.node
            )
        } else if message.contains("networks.bridge_name") {
            format!("bridgeName: {} already existed", network.bridge_name)
        } else {
            format!("network {} already existed", network.id)
        };
        DomainError::NetworkConflict(conflict)
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl NetworkRepository for SqliteNetworkRepository {
    #[instrument(skip(self, network), fields(network_id = %network.id))]
    async fn insert(&self, network: &Network) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO networks (id, display_name, node, interface, bridge_name, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(network.id.to_hex())
        .bind(&network.display_name)
        .bind(&network.node)
        .bind(&network.interface)
        .bind(&network.bridge_name)
        .bind(format_timestamp(&network.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, network, "insert"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_one(&self, filter: &NetworkFilter) -> Result<Option<Network>, DomainError> {
        let (clause, binds) = Self::where_clause(filter);
        let sql = format!("{SELECT_COLUMNS}{clause} LIMIT 1");

        let mut query = sqlx::query_as::<_, NetworkRow>(&sql);
        for value in binds {
            query = query.bind(value);
        }

        let row = query.fetch_optional(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to probe networks");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_network).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &NetworkId) -> Result<Option<Network>, DomainError> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?");
        let row = sqlx::query_as::<_, NetworkRow>(&sql)
            .bind(id.to_hex())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query network by id");
                DomainError::DatabaseError(e.to_string())
            })?;

        row.map(Self::row_to_network).transpose()
    }

    #[instrument(skip(self, network), fields(network_id = %network.id))]
    async fn update_by_id(&self, network: &Network) -> Result<(), DomainError> {
        // created_at is never rewritten.
        let result = sqlx::query(
            "UPDATE networks SET display_name = ?, node = ?, interface = ?, bridge_name = ?
             WHERE id = ?",
        )
        .bind(&network.display_name)
        .bind(&network.node)
        .bind(&network.interface)
        .bind(&network.bridge_name)
        .bind(network.id.to_hex())
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, network, "update"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NetworkNotFound(format!(
                "the network: {} doesn't exist",
                network.id
            )));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_by_id(&self, id: &NetworkId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM networks WHERE id = ?")
            .bind(id.to_hex())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete network");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NetworkNotFound(format!(
                "the network: {id} doesn't exist"
            )));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: &NetworkFilter) -> Result<u64, DomainError> {
        let (clause, binds) = Self::where_clause(filter);
        let sql = format!("SELECT COUNT(*) FROM networks{clause}");

        let mut query = sqlx::query_as::<_, (i64,)>(&sql);
        for value in binds {
            query = query.bind(value);
        }

        let count = query.fetch_one(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to count networks");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(count.0.max(0) as u64)
    }

    #[instrument(skip(self))]
    async fn find_page(
        &self,
        filter: &NetworkFilter,
        skip: u64,
        limit: u32,
    ) -> Result<Vec<Network>, DomainError> {
        let (clause, binds) = Self::where_clause(filter);
        let sql = format!("{SELECT_COLUMNS}{clause} ORDER BY id ASC LIMIT ? OFFSET ?");

        let mut query = sqlx::query_as::<_, NetworkRow>(&sql);
        for value in binds {
            query = query.bind(value);
        }

        let rows = query
            .bind(i64::from(limit))
            .bind(to_i64(skip))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query networks page");
                DomainError::DatabaseError(e.to_string())
            })?;

        rows.into_iter().map(Self::row_to_network).collect()
    }
}
