//! dbsplit-server: read/write split HTTP service
//!
//! Writes go to a primary MySQL database, reads go to a replica.
//! Each request takes a scoped session from the pool matching its
//! intent and hands the connection back when the handler returns.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{DatabaseConfig, PoolSettings, Target};
pub use db::{Datasources, Role, Session, SessionFactory};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
