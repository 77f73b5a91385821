//! Database connection pool management
//!
//! Two MySQL pools, one per datasource, built from the same
//! [`PoolSettings`]. Pools connect lazily so the process can start
//! (and answer `/health`) while either database is down.

use std::str::FromStr;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

use super::session::{Role, SessionFactory};
use crate::config::{redact_password, DatabaseConfig, PoolSettings, Target};

/// Error raised while building the pools.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("invalid {target} database url '{url}': {source}")]
    InvalidUrl {
        target: Target,
        url: String,
        #[source]
        source: sqlx::Error,
    },
}

/// Create a lazily connecting MySQL pool.
///
/// Only the URL is parsed here; no connection is opened until the first
/// acquire. Each connection is pinged before being handed out and is
/// recycled after `settings.recycle_after`.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(Target::Primary, "mysql://root@127.0.0.1/app_db", &PoolSettings::default())?;
/// ```
pub fn create_pool(
    target: Target,
    database_url: &str,
    settings: &PoolSettings,
) -> Result<MySqlPool, PoolError> {
    let options =
        MySqlConnectOptions::from_str(database_url).map_err(|source| PoolError::InvalidUrl {
            target,
            url: redact_password(database_url),
            source,
        })?;

    Ok(MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .idle_timeout(settings.recycle_after)
        .max_lifetime(settings.recycle_after)
        .test_before_acquire(settings.test_before_acquire)
        .connect_lazy_with(options))
}

/// The primary (read-write) and replica (read-only by convention) pools.
///
/// Built once at startup and shared through the application state. The
/// pools share nothing, so exhausting one never blocks the other.
#[derive(Debug, Clone)]
pub struct Datasources {
    pub primary: SessionFactory,
    pub replica: SessionFactory,
}

impl Datasources {
    /// Build both pools from resolved configuration.
    pub fn connect_lazy(config: &DatabaseConfig, settings: &PoolSettings) -> Result<Self, PoolError> {
        let primary = create_pool(Target::Primary, config.url(Target::Primary), settings)?;
        let replica = create_pool(Target::Replica, config.url(Target::Replica), settings)?;

        tracing::info!(
            primary = %redact_password(config.url(Target::Primary)),
            replica = %redact_password(config.url(Target::Replica)),
            max_connections = settings.max_connections,
            recycle_secs = settings.recycle_after.as_secs(),
            "Datasources configured"
        );

        Ok(Self::from_pools(primary, replica))
    }

    /// Wrap already-built pools.
    pub fn from_pools(primary: MySqlPool, replica: MySqlPool) -> Self {
        Self {
            primary: SessionFactory::new(Role::Primary, primary),
            replica: SessionFactory::new(Role::Replica, replica),
        }
    }

    /// Close both pools, waiting for checked-out connections to come back.
    pub async fn close(&self) {
        self.primary.pool().close().await;
        self.replica.pool().close().await;
    }
}
