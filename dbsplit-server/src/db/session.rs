//! Scoped sessions
//!
//! A [`Session`] owns one pooled connection for the length of a request.
//! The connection goes back to its pool when the session is dropped,
//! whether the handler returned normally, bailed out with `?`, or panicked.

use std::fmt;
use std::ops::{Deref, DerefMut};

use sqlx::pool::PoolConnection;
use sqlx::{Connection, MySql, MySqlConnection, MySqlPool, Transaction};

/// Which pool a session was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Read-write
    Primary,
    /// Read-only by convention; nothing stops a write
    Replica,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Replica => "replica",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Hands out sessions bound to one pool.
#[derive(Clone)]
pub struct SessionFactory {
    role: Role,
    pool: MySqlPool,
}

impl SessionFactory {
    pub fn new(role: Role, pool: MySqlPool) -> Self {
        Self { role, pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Check out a connection, waiting up to the pool's acquire timeout.
    pub async fn session(&self) -> Result<Session, sqlx::Error> {
        let conn = self.pool.acquire().await.map_err(|e| {
            tracing::warn!(role = %self.role, error = %e, "Failed to acquire session");
            e
        })?;
        tracing::debug!(role = %self.role, "Session acquired");
        Ok(Session {
            role: self.role,
            conn,
        })
    }
}

impl fmt::Debug for SessionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionFactory")
            .field("role", &self.role)
            .field("size", &self.pool.size())
            .field("idle", &self.pool.num_idle())
            .finish()
    }
}

/// One pooled connection, released on drop.
pub struct Session {
    role: Role,
    conn: PoolConnection<MySql>,
}

impl Session {
    pub fn role(&self) -> Role {
        self.role
    }

    /// Start a transaction on this session's connection.
    ///
    /// Changes only persist after `commit()`; a transaction dropped
    /// without commit is rolled back.
    pub async fn begin(&mut self) -> Result<Transaction<'_, MySql>, sqlx::Error> {
        Connection::begin(&mut *self.conn).await
    }
}

impl Deref for Session {
    type Target = MySqlConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::debug!(role = %self.role, "Session released");
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("role", &self.role).finish()
    }
}
