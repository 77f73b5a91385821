//! Database layer - pools, scoped sessions and repositories
//!
//! # Design Principles
//!
//! - Two independent pools: writes on primary, reads on replica
//! - One session per request, never shared, released on drop
//! - Typed row decoding at the query boundary

pub mod pool;
pub mod repos;
pub mod session;

pub use pool::{create_pool, Datasources, PoolError};
pub use repos::*;
pub use session::{Role, Session, SessionFactory};
