//! Connection pool for SQL Server.

use std::sync::Arc;
use std::time::Duration;

use bb8::Pool;
use bb8_tiberius::ConnectionManager;
use tiberius::Row;
use tracing::{debug, info};

use crate::config::MssqlConfig;
use crate::error::{MssqlError, MssqlResult};

type TiberiusPool = Pool<ConnectionManager>;

/// Pool sizing and timeout configuration.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum number of connections in the pool.
    pub max_connections: usize,
    /// Minimum number of idle connections to keep.
    pub min_connections: usize,
    /// Maximum time to wait for a connection.
    pub connection_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 4,
            min_connections: 1,
            connection_timeout: Duration::from_secs(30),
        }
    }
}

/// A connection pool for SQL Server catalog queries.
#[derive(Clone)]
pub struct MssqlPool {
    inner: TiberiusPool,
    config: Arc<MssqlConfig>,
}

impl MssqlPool {
    /// Create a new connection pool from configuration.
    pub async fn new(config: MssqlConfig) -> MssqlResult<Self> {
        Self::with_pool_config(config, PoolConfig::default()).await
    }

    /// Create a new connection pool with custom pool configuration.
    pub async fn with_pool_config(
        config: MssqlConfig,
        pool_config: PoolConfig,
    ) -> MssqlResult<Self> {
        let tiberius_config = config.to_tiberius_config()?;
        let mgr = ConnectionManager::new(tiberius_config);

        let pool = Pool::builder()
            .max_size(pool_config.max_connections as u32)
            .min_idle(Some(pool_config.min_connections as u32))
            .connection_timeout(pool_config.connection_timeout)
            .build(mgr)
            .await
            .map_err(|e| MssqlError::pool(format!("failed to create pool: {}", e)))?;

        info!(
            host = %config.host,
            port = %config.port,
            database = %config.database,
            "connection pool created"
        );

        Ok(Self {
            inner: pool,
            config: Arc::new(config),
        })
    }

    /// The configuration this pool was created with.
    pub fn config(&self) -> &MssqlConfig {
        &self.config
    }

    /// Execute a query and return all rows of the first result set.
    pub async fn query(
        &self,
        sql: &str,
        params: &[&dyn tiberius::ToSql],
    ) -> MssqlResult<Vec<Row>> {
        debug!(sql = %sql, "executing catalog query");
        let mut client = self.inner.get().await?;
        let stream = client.query(sql, params).await?;
        let rows = stream.into_first_result().await?;
        Ok(rows)
    }

    /// Check that the pool can serve a working connection.
    pub async fn is_healthy(&self) -> bool {
        match self.inner.get().await {
            Ok(mut client) => client.simple_query("SELECT 1").await.is_ok(),
            Err(_) => false,
        }
    }
}
