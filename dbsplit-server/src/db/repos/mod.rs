//! Repository implementations for database access
//!
//! Repositories borrow a scoped session rather than a pool, so the
//! caller decides which datasource a query runs against.

pub mod items;

pub use items::{DbError, Item, ItemRepo};
