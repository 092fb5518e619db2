//! Category source port - abstracts the category-membership relation.

use thiserror::Error;

use crate::domain::category::CategoryName;

/// Error raised when the category relation cannot be read.
///
/// The tree builder fails closed on this: the caller renders nothing
/// rather than a truncated tree. No retries happen at this layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("category lookup failed: {message}")]
pub struct DataSourceError {
    pub message: String,
}

impl DataSourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Read-only view of the category-membership relation.
///
/// Lookups are synchronous, blocking calls assumed consistent for the
/// duration of one request. The relation may contain cycles; tolerating
/// them is the traversal's job, not the source's.
pub trait CategorySource {
    /// Direct members of `parent` that are themselves categories,
    /// in alphabetical order.
    fn direct_children(&self, parent: &CategoryName) -> Result<Vec<CategoryName>, DataSourceError>;

    /// Categories that have members but no parent category, in the
    /// source's own deterministic order.
    fn find_roots(&self) -> Result<Vec<CategoryName>, DataSourceError>;
}
