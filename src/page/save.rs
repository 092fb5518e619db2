//! Save-time reconstruction of category links.
//!
//! The submitted selection replaces whatever links the scan stripped from
//! the text: one link line per submitted name, order preserved. No
//! deduplication happens here; a name submitted twice yields two lines.

/// Build the text appended to the page body (or upload comment) for the
/// submitted category names, using the live localized namespace keyword.
pub fn category_link_text<S: AsRef<str>>(names: &[S], keyword: &str) -> String {
    // Leading newline keeps some distance from the rest of the content.
    let mut text = String::from("\n");
    for name in names {
        text.push_str("\n[[");
        text.push_str(keyword);
        text.push(':');
        text.push_str(name.as_ref());
        text.push_str("]]");
    }
    text
}
