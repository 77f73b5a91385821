//! Item name validation
//!
//! Names are stored in a `VARCHAR(255)` column, so the limit is counted
//! in characters, not bytes.

use super::ValidationError;

/// Maximum length for item names
pub const MAX_ITEM_NAME_LEN: usize = 255;

/// Validated item name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Create a new item name.
    ///
    /// # Rules
    /// - Not empty
    /// - At most 255 characters
    ///
    /// # Example
    /// ```
    /// use dbsplit_server::models::ItemName;
    ///
    /// assert!(ItemName::new("foo").is_ok());
    /// assert!(ItemName::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if s.chars().count() > MAX_ITEM_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_ITEM_NAME_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
