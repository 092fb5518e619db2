//! selectcat - selectable category tree for wiki page editing
//!
//! Discovers every category reachable from one or more roots, flattens
//! the hierarchy into a depth-annotated sequence, renders it as a
//! collapsible checkbox tree (or a flat multi-select) with the page's
//! current categories pre-checked, and rebuilds category-link text from
//! the submitted selection on save.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod page;
pub mod tree;
pub mod workflow;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use domain::{CategoryName, CategorySource, DataSourceError};
pub use error::{SelectcatError, SelectcatResult};
pub use infrastructure::MemoryCategorySource;
pub use page::{category_link_text, extract_page_categories};
pub use tree::{render, RenderMode, RenderOptions, RootSpec, TreeBuilder, TreeEntry};
pub use workflow::{
    apply_selection, build_edit_view, should_run, tree_payload, EditView, InsertionSlot,
    Messages, PageContext, SaveAugmentation, SubmissionTarget,
};
