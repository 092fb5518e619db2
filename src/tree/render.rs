//! Single-pass markup emission for the flattened category forest.
//!
//! No tree is materialized: two counters (`level`, `previous_depth`)
//! carried across one forward pass over the entry sequence decide when
//! nesting levels open and close. Output is an HTML fragment the caller
//! splices into the host form.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryName;

use super::entry::TreeEntry;

/// Shape of the emitted selection control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Collapsible checkbox tree (`<ul>`/`<li>` nesting).
    #[default]
    Nested,
    /// One `<select multiple>` with an option per category.
    Flat,
}

/// Presentation knobs for one render call.
#[derive(Debug, Clone)]
pub struct RenderOptions<'a> {
    pub mode: RenderMode,
    /// Levels at or beyond `max_depth - 1` start out collapsed. Values
    /// of zero or below collapse every non-root level.
    pub max_depth: i32,
    /// When false, depth-0 entries get no selection control.
    pub toplevel_selectable: bool,
    /// Localized namespace keyword used in link targets ("Category").
    pub category_namespace: &'a str,
}

/// Render `entries` as markup, marking members of `selected` as checked.
pub fn render(
    entries: &[TreeEntry],
    selected: &HashSet<CategoryName>,
    opts: &RenderOptions<'_>,
) -> String {
    match opts.mode {
        RenderMode::Nested => render_nested(entries, selected, opts),
        RenderMode::Flat => render_flat(entries, selected, opts),
    }
}

fn render_nested(
    entries: &[TreeEntry],
    selected: &HashSet<CategoryName>,
    opts: &RenderOptions<'_>,
) -> String {
    let mut out = String::from("<ul id=\"SelectCategoryList\">\n");
    if entries.is_empty() {
        out.push_str("</ul>\n");
        return out;
    }

    let mut level: i32 = 0;
    let mut previous_depth: i32 = -1;

    for entry in entries {
        let depth = entry.depth as i32;

        while level < depth {
            level += 1;
            if level >= opts.max_depth - 1 {
                out.push_str("<ul style=\"display:none;\">\n");
            } else {
                out.push_str("<ul style=\"display:block;\">\n");
            }
        }
        // Two entries at the same or shallower depth: the previous item
        // is finished before this one starts.
        if depth <= previous_depth {
            out.push_str("</li>\n");
        }
        while level > depth {
            out.push_str("</ul></li>\n");
            level -= 1;
        }

        let collapsed = depth > 0 && depth >= opts.max_depth - 1;
        out.push_str(if collapsed {
            "<li class=\"closed\">"
        } else {
            "<li class=\"open\">"
        });
        if depth > 0 || opts.toplevel_selectable {
            out.push_str("<input type=\"checkbox\" name=\"SelectCategoryList[]\" value=\"");
            out.push_str(&escape_html(entry.name.as_str()));
            out.push_str("\" class=\"checkbox\"");
            if selected.contains(&entry.name) {
                out.push_str(" checked=\"checked\"");
            }
            out.push_str(" />");
        }
        push_link(&mut out, &entry.name, opts.category_namespace);
        out.push('\n');

        previous_depth = depth;
    }

    // Close everything still open, shell included.
    while level > -1 {
        out.push_str("</li></ul>\n");
        level -= 1;
    }

    out
}

fn render_flat(
    entries: &[TreeEntry],
    selected: &HashSet<CategoryName>,
    opts: &RenderOptions<'_>,
) -> String {
    let mut out = String::from(
        "<select multiple=\"multiple\" name=\"SelectCategoryList[]\" id=\"SelectCategoryList\">\n",
    );
    for entry in entries {
        out.push_str("<option value=\"");
        out.push_str(&escape_html(entry.name.as_str()));
        out.push('"');
        if selected.contains(&entry.name) {
            out.push_str(" selected=\"selected\"");
        }
        if entry.depth == 0 && !opts.toplevel_selectable {
            out.push_str(" disabled=\"disabled\"");
        }
        out.push('>');
        for _ in 0..entry.depth {
            out.push_str("&nbsp;&nbsp;");
        }
        out.push_str(&escape_html(&entry.name.display()));
        out.push_str("</option>\n");
    }
    out.push_str("</select>\n");
    out
}

fn push_link(out: &mut String, name: &CategoryName, namespace: &str) {
    let ns = escape_html(namespace);
    let raw = escape_html(name.as_str());
    let display = escape_html(&name.display());
    out.push_str("<a href=\"/wiki/");
    out.push_str(&ns);
    out.push(':');
    out.push_str(&raw);
    out.push_str("\" title=\"");
    out.push_str(&ns);
    out.push(':');
    out.push_str(&display);
    out.push_str("\">");
    out.push_str(&display);
    out.push_str("</a>");
}

/// Escape a string for HTML attribute and text contexts.
///
/// Escapes: ampersand, angle brackets, double and single quotes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
