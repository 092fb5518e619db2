//! Edit-view assembly: the selector markup for an edit or upload form.

use std::collections::HashSet;

use tracing::debug;

use crate::config::Config;
use crate::domain::category::CategoryName;
use crate::domain::ports::CategorySource;
use crate::error::SelectcatResult;
use crate::page::scan::extract_page_categories;
use crate::tree::{escape_html, render, RenderOptions, RootSpec, TreeBuilder};

use super::conditions::should_run;
use super::{Messages, PageContext, UPLOAD_NAMESPACE};

/// Where the host splices the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionSlot {
    /// Below the edit form's warning block (inside the form).
    EditFormAfterWarn,
    /// After the upload form's summary field.
    UploadFormAfterSummary,
}

/// Everything the host needs to augment one form view.
#[derive(Debug, Clone)]
pub struct EditView {
    pub slot: InsertionSlot,
    /// HTML fragment for the host's designated slot.
    pub markup: String,
    /// Page text with the extracted category links removed. `None` when
    /// no text was scanned (uploads, or a submitted selection override).
    pub cleaned_text: Option<String>,
}

/// Build the selector for one page view, or `None` when the selector
/// does not run here.
///
/// `submitted` carries an already-submitted selection (e.g. a form
/// round-trip after a preview); when present it replaces text extraction
/// entirely and the page text is left untouched.
pub fn build_edit_view<S: CategorySource + ?Sized>(
    source: &S,
    config: &Config,
    messages: &Messages,
    ctx: &PageContext,
    page_text: &str,
    submitted: Option<&[String]>,
) -> SelectcatResult<Option<EditView>> {
    if !should_run(config, ctx) {
        return Ok(None);
    }

    let lookup_ns = if ctx.is_upload {
        UPLOAD_NAMESPACE
    } else {
        ctx.namespace.as_str()
    };
    let root_spec = match config.root_for(lookup_ns) {
        Some(root) => RootSpec::Explicit(CategoryName::new(root)),
        None => RootSpec::AutoDetect,
    };
    let entries = TreeBuilder::new(source).build(&root_spec)?;

    let (selected, cleaned_text) = if let Some(submitted) = submitted {
        let selected: HashSet<CategoryName> = submitted
            .iter()
            .map(|name| CategoryName::new(name.as_str()))
            .collect();
        (selected, None)
    } else if ctx.is_upload {
        (HashSet::new(), None)
    } else {
        let (selected, cleaned) =
            extract_page_categories(page_text, &messages.category_namespace);
        (selected, Some(cleaned))
    };

    let opts = RenderOptions {
        mode: config.render_mode,
        max_depth: config.max_depth,
        toplevel_selectable: config.toplevel_selectable,
        category_namespace: &messages.category_namespace,
    };

    let title = escape_html(&messages.box_title);
    let (slot, text_before) = if ctx.is_upload {
        (
            InsertionSlot::UploadFormAfterSummary,
            format!(
                "\n</td></tr><tr><td align='right'><label for='wpSelectCategory'>{title}:</label></td><td align='left'>"
            ),
        )
    } else {
        (InsertionSlot::EditFormAfterWarn, format!("<b>{title}</b>:"))
    };

    let mut markup = String::from("<!-- SelectCategory begin -->\n");
    markup.push('\n');
    markup.push_str(&text_before);
    markup.push_str(&render(&entries, &selected, &opts));
    markup.push_str("<!-- SelectCategory end -->\n");

    debug!(
        entries = entries.len(),
        selected = selected.len(),
        "built category selector"
    );

    Ok(Some(EditView {
        slot,
        markup,
        cleaned_text,
    }))
}
