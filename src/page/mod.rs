//! Page-text handling: category-link extraction and reconstruction.

pub mod save;
pub mod scan;

pub use save::category_link_text;
pub use scan::extract_page_categories;
