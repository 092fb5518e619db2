//! Application layer
//!
//! Wires the tree, page-text and config pieces into the host's flows:
//!
//! - `conditions` - whether the selector runs for a given page at all
//! - `edit` - build the selector markup for an edit or upload form
//! - `save` - turn a submitted selection back into category-link text
//! - `api` - flattened name -> depth payload for front-end tooling

mod api;
mod conditions;
mod edit;
mod save;

pub use api::tree_payload;
pub use conditions::should_run;
pub use edit::{build_edit_view, EditView, InsertionSlot};
pub use save::{apply_selection, SaveAugmentation, SubmissionTarget};

/// Namespace used for category lookups on upload forms.
pub const UPLOAD_NAMESPACE: &str = "file";

/// Localized strings supplied by the host's message system.
#[derive(Debug, Clone)]
pub struct Messages {
    /// Heading shown above the selection control.
    pub box_title: String,
    /// Localized category-namespace keyword used in links.
    pub category_namespace: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            box_title: "Categories".to_string(),
            category_namespace: "Category".to_string(),
        }
    }
}

/// What the host knows about the page being worked on.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub namespace: String,
    pub is_upload: bool,
    pub is_subpage: bool,
    pub is_section_edit: bool,
}

impl PageContext {
    /// A plain page edit in `namespace`.
    pub fn article(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            is_upload: false,
            is_subpage: false,
            is_section_edit: false,
        }
    }

    /// An upload form view.
    pub fn upload() -> Self {
        Self {
            namespace: UPLOAD_NAMESPACE.to_string(),
            is_upload: true,
            is_subpage: false,
            is_section_edit: false,
        }
    }
}
