//! Depth-first traversal over the category-membership relation.
//!
//! Produces the flattened (name, depth) sequence the renderer consumes:
//! pre-order, siblings in the order the source returns them (alphabetical),
//! one entry per distinct category.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::category::CategoryName;
use crate::domain::ports::CategorySource;
use crate::error::SelectcatResult;

use super::entry::TreeEntry;

/// Where a traversal starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSpec {
    /// A single configured root category.
    Explicit(CategoryName),
    /// Ask the source for every parentless category.
    AutoDetect,
}

/// Walks the membership relation into an ordered sequence of [`TreeEntry`].
pub struct TreeBuilder<'a, S: CategorySource + ?Sized> {
    source: &'a S,
}

impl<'a, S: CategorySource + ?Sized> TreeBuilder<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Build the flattened category forest for `root_spec`.
    ///
    /// Roots are emitted at depth 0, each followed by its descendants in
    /// pre-order. When several roots share a descendant, the first emission
    /// wins: the name keeps the depth it was first seen at and is never
    /// repeated. The walk itself still descends through already-emitted
    /// categories, so members reachable only via a later root are not lost.
    pub fn build(&self, root_spec: &RootSpec) -> SelectcatResult<Vec<TreeEntry>> {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();
        let mut path = Vec::new();

        match root_spec {
            RootSpec::Explicit(root) => {
                self.emit(root, 0, &mut entries, &mut seen);
                self.walk(root, 1, &mut path, &mut entries, &mut seen)?;
            }
            RootSpec::AutoDetect => {
                let roots = self.source.find_roots()?;
                debug!(roots = roots.len(), "auto-detected category roots");
                for root in &roots {
                    self.emit(root, 0, &mut entries, &mut seen);
                    self.walk(root, 1, &mut path, &mut entries, &mut seen)?;
                }
            }
        }

        debug!(entries = entries.len(), "flattened category forest");
        Ok(entries)
    }

    fn emit(
        &self,
        name: &CategoryName,
        depth: usize,
        entries: &mut Vec<TreeEntry>,
        seen: &mut HashSet<CategoryName>,
    ) {
        if seen.insert(name.clone()) {
            entries.push(TreeEntry {
                name: name.clone(),
                depth,
            });
        }
    }

    fn walk(
        &self,
        parent: &CategoryName,
        depth: usize,
        path: &mut Vec<CategoryName>,
        entries: &mut Vec<TreeEntry>,
        seen: &mut HashSet<CategoryName>,
    ) -> SelectcatResult<()> {
        path.push(parent.clone());
        for child in self.source.direct_children(parent)? {
            // Survive a category listing itself as its own member
            if child == *parent {
                continue;
            }
            // Longer cycles: never revisit a category already on this path
            if path.contains(&child) {
                continue;
            }
            self.emit(&child, depth, entries, seen);
            self.walk(&child, depth + 1, path, entries, seen)?;
        }
        path.pop();
        Ok(())
    }
}
