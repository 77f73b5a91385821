//! Domain models with validation at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod item;
pub mod validation;

pub use item::{ItemName, MAX_ITEM_NAME_LEN};
pub use validation::ValidationError;
