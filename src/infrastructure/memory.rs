//! In-memory category source.
//!
//! Backs tests and the CLI. Children are kept sorted so the port's
//! alphabetical-ordering guarantee holds; root detection mirrors the
//! production store's shape: a root is a category that has members but
//! no parent category.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::domain::category::CategoryName;
use crate::domain::ports::{CategorySource, DataSourceError};
use crate::error::{SelectcatError, SelectcatResult};

/// Adjacency-map implementation of [`CategorySource`].
#[derive(Debug, Clone, Default)]
pub struct MemoryCategorySource {
    children: HashMap<CategoryName, Vec<CategoryName>>,
}

/// On-disk fixture format for the CLI:
///
/// ```toml
/// [categories]
/// Science = ["Astronomy", "Physics"]
/// Astronomy = ["Stars"]
/// ```
#[derive(Debug, Deserialize)]
struct DataFile {
    #[serde(default)]
    categories: HashMap<String, Vec<String>>,
}

impl MemoryCategorySource {
    /// Build from (parent, child) edges. Duplicate edges collapse.
    pub fn from_edges<I, P, C>(edges: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<CategoryName>,
        C: Into<CategoryName>,
    {
        let mut children: HashMap<CategoryName, Vec<CategoryName>> = HashMap::new();
        for (parent, child) in edges {
            children.entry(parent.into()).or_default().push(child.into());
        }
        for list in children.values_mut() {
            list.sort();
            list.dedup();
        }
        Self { children }
    }

    /// Parse the `[categories]` TOML table.
    pub fn from_toml_str(content: &str, file: &Path) -> SelectcatResult<Self> {
        let data: DataFile =
            toml::from_str(content).map_err(|e| SelectcatError::InvalidData {
                file: file.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Self::from_edges(data.categories.into_iter().flat_map(
            |(parent, members)| {
                members
                    .into_iter()
                    .map(move |child| (parent.clone(), child))
            },
        )))
    }

    /// Load a category data file.
    pub fn load(path: &Path) -> SelectcatResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content, path)
    }
}

impl CategorySource for MemoryCategorySource {
    fn direct_children(&self, parent: &CategoryName) -> Result<Vec<CategoryName>, DataSourceError> {
        Ok(self.children.get(parent).cloned().unwrap_or_default())
    }

    fn find_roots(&self) -> Result<Vec<CategoryName>, DataSourceError> {
        let all_children: HashSet<&CategoryName> =
            self.children.values().flatten().collect();

        let mut roots: Vec<CategoryName> = self
            .children
            .keys()
            .filter(|parent| !all_children.contains(*parent))
            .cloned()
            .collect();
        roots.sort();
        Ok(roots)
    }
}
