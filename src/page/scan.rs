//! Category-link extraction from free-form page text.
//!
//! Scans line by line for `[[<keyword>:<name>]]` links (optionally carrying
//! a literal `|{{PAGENAME}}` suffix), collects the names and strips the
//! links, passing everything else through unchanged. Running the scan on
//! already-cleaned text finds nothing and leaves the text alone.

use std::collections::HashSet;

use crate::domain::category::CategoryName;

const PAGENAME_SUFFIX: &str = "|{{PAGENAME}}]]";

/// Extract category links from `text`.
///
/// `keyword` is the localized category-namespace keyword; the canonical
/// `category` keyword is always accepted too, both case-insensitively.
/// Returns the found names (spaces normalized to underscores) and the
/// cleaned text with all links removed and the ends trimmed.
pub fn extract_page_categories(text: &str, keyword: &str) -> (HashSet<CategoryName>, String) {
    let mut keywords = vec![keyword.to_lowercase()];
    if !keywords.contains(&"category".to_string()) {
        keywords.push("category".to_string());
    }

    let mut found = HashSet::new();
    let mut clean_lines = Vec::new();
    for line in text.split('\n') {
        let (clean, names) = scan_line(line, &keywords);
        for name in names {
            found.insert(name);
        }
        clean_lines.push(clean);
    }

    (found, clean_lines.join("\n").trim().to_string())
}

/// Strip every category link from one line, returning the cleaned line
/// and the extracted names in order of appearance.
fn scan_line(line: &str, keywords: &[String]) -> (String, Vec<CategoryName>) {
    let mut clean = String::with_capacity(line.len());
    let mut names = Vec::new();
    let mut rest = line;

    while let Some(start) = rest.find("[[") {
        match parse_link(&rest[start + 2..], keywords) {
            Some((name, consumed)) => {
                clean.push_str(&rest[..start]);
                if !name.is_empty() {
                    names.push(CategoryName::new(name));
                }
                rest = &rest[start + 2 + consumed..];
            }
            None => {
                // Not a category link; keep one bracket and rescan from
                // the next character so overlapping candidates still match.
                clean.push_str(&rest[..start + 1]);
                rest = &rest[start + 1..];
            }
        }
    }
    clean.push_str(rest);

    (clean, names)
}

/// Try to parse `<keyword>:<name>]]` or `<keyword>:<name>|{{PAGENAME}}]]`
/// at the start of `text`. Returns the name and the number of bytes
/// consumed.
fn parse_link<'a>(text: &'a str, keywords: &[String]) -> Option<(&'a str, usize)> {
    let colon = text.find(':')?;
    let candidate = &text[..colon];
    if candidate.contains('[') || candidate.contains(']') || candidate.contains('|') {
        return None;
    }
    if !keywords.iter().any(|kw| candidate.to_lowercase() == *kw) {
        return None;
    }

    let after = &text[colon + 1..];
    let name_end = after
        .find(|c| c == '|' || c == ']')
        .unwrap_or(after.len());
    let name = &after[..name_end];
    let tail = &after[name_end..];

    if let Some(stripped) = tail.strip_prefix("]]") {
        let consumed = text.len() - stripped.len();
        return Some((name, consumed));
    }
    if let Some(stripped) = tail.strip_prefix(PAGENAME_SUFFIX) {
        let consumed = text.len() - stripped.len();
        return Some((name, consumed));
    }
    None
}
