//! Property tests for category-link extraction.

use proptest::prelude::*;

use selectcat::{category_link_text, extract_page_categories, CategoryName};

fn body_line() -> impl Strategy<Value = String> {
    // Printable lines that cannot themselves form category links.
    proptest::string::string_regex("[A-Za-z0-9 .,:;'\"()*=-]{0,40}").unwrap()
}

fn category_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9 _]{0,11}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the scan never panics on arbitrary input.
    #[test]
    fn property_scan_never_panics(text in "(?s).{0,512}") {
        let _ = extract_page_categories(&text, "Category");
    }

    /// PROPERTY: scanning already-cleaned text finds nothing and leaves
    /// the text unchanged.
    #[test]
    fn property_scan_is_idempotent(
        body_lines in proptest::collection::vec(body_line(), 0..=6),
        names in proptest::collection::vec(category_name(), 0..=4),
    ) {
        let mut lines = body_lines;
        for name in names {
            lines.push(format!("[[Category:{name}]]"));
        }
        let page = lines.join("\n");

        let (_, once) = extract_page_categories(&page, "Category");
        let (found, twice) = extract_page_categories(&once, "Category");
        prop_assert!(found.is_empty());
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: links appended on save are recovered by the scan, and
    /// the body text survives unharmed.
    #[test]
    fn property_save_scan_round_trip(
        body_lines in proptest::collection::vec(body_line(), 0..=6),
        names in proptest::collection::vec(category_name(), 0..=4),
    ) {
        let body = body_lines.join("\n");
        let page = format!("{body}{}", category_link_text(&names, "Category"));

        let (found, clean) = extract_page_categories(&page, "Category");

        prop_assert_eq!(clean, body.trim());
        for name in &names {
            prop_assert!(found.contains(&CategoryName::new(name.as_str())));
        }
    }
}
