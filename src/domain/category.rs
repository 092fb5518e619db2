//! Category name value object.
//!
//! The underlying store links categories by their underscored form while
//! users read them with spaces. `CategoryName` normalizes on construction
//! so equality, ordering and hashing all work on the linkage form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque, case-sensitive category identifier.
///
/// Spaces are normalized to underscores on construction; `display()` gives
/// back the human-readable form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name, normalizing spaces to underscores.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().replace(' ', "_"))
    }

    /// The raw linkage form (underscored).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The display form (underscores replaced by spaces).
    pub fn display(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CategoryName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
