use netbridge_application::ports::NetworkRepository;
use netbridge_infrastructure::repositories::SqliteNetworkRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pool: SqlitePool,
    pub network: Arc<dyn NetworkRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            network: Arc::new(SqliteNetworkRepository::new(pool.clone())),
            pool,
        }
    }

    /// Waits for checked-out connections to come back, then closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
