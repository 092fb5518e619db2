//! Property tests for tree building and rendering.

use std::collections::HashSet;

use proptest::prelude::*;

use selectcat::{
    render, CategoryName, CategorySource, MemoryCategorySource, RenderMode, RenderOptions,
    RootSpec, TreeBuilder, TreeEntry,
};

const NAMES: [&str; 6] = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta"];

/// Arbitrary membership relations over a small name universe, cycles
/// and self-loops included.
fn relation() -> impl Strategy<Value = MemoryCategorySource> {
    proptest::collection::vec((0..NAMES.len(), 0..NAMES.len()), 0..=14).prop_map(|pairs| {
        MemoryCategorySource::from_edges(
            pairs
                .into_iter()
                .map(|(parent, child)| (NAMES[parent], NAMES[child])),
        )
    })
}

/// Valid depth sequences: first entry at depth 0, each step raises the
/// depth by at most one.
fn entry_sequence() -> impl Strategy<Value = Vec<TreeEntry>> {
    proptest::collection::vec(0..=2usize, 0..=12).prop_map(|raises| {
        let mut entries = Vec::new();
        let mut depth = 0usize;
        for (i, raise) in raises.iter().copied().enumerate() {
            depth = if i == 0 {
                0
            } else {
                // 0 => drop toward the root, 1 => stay, 2 => one deeper
                match raise {
                    0 => depth.saturating_sub(1),
                    1 => depth,
                    _ => depth + 1,
                }
            };
            entries.push(TreeEntry::new(format!("Cat{i}"), depth));
        }
        entries
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `build` terminates on arbitrary (cyclic) relations and
    /// emits every name at most once.
    #[test]
    fn property_build_terminates_without_duplicates(source in relation()) {
        let entries = TreeBuilder::new(&source)
            .build(&RootSpec::AutoDetect)
            .expect("memory source never fails");

        let names: HashSet<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        prop_assert_eq!(names.len(), entries.len());
    }

    /// PROPERTY: depth rises by at most one between neighbors, and the
    /// sequence starts at a root.
    #[test]
    fn property_build_depth_steps(source in relation()) {
        let entries = TreeBuilder::new(&source)
            .build(&RootSpec::AutoDetect)
            .expect("memory source never fails");

        if let Some(first) = entries.first() {
            prop_assert_eq!(first.depth, 0);
        }
        for pair in entries.windows(2) {
            prop_assert!(pair[1].depth <= pair[0].depth + 1);
        }
    }

    /// PROPERTY: every non-root entry is a direct member of the nearest
    /// preceding entry one level up.
    #[test]
    fn property_build_children_follow_parents(source in relation()) {
        let entries = TreeBuilder::new(&source)
            .build(&RootSpec::AutoDetect)
            .expect("memory source never fails");

        for (i, entry) in entries.iter().enumerate() {
            if entry.depth == 0 {
                continue;
            }
            let parent = entries[..i]
                .iter()
                .rev()
                .find(|e| e.depth + 1 == entry.depth)
                .expect("non-root entries have an emitted parent");
            let children = source
                .direct_children(&parent.name)
                .expect("memory source never fails");
            prop_assert!(children.contains(&entry.name));
        }
    }

    /// PROPERTY: depth-0 entries are exactly the auto-detected roots,
    /// in source order.
    #[test]
    fn property_build_roots_are_depth_zero(source in relation()) {
        let entries = TreeBuilder::new(&source)
            .build(&RootSpec::AutoDetect)
            .expect("memory source never fails");

        let emitted_roots: Vec<&CategoryName> = entries
            .iter()
            .filter(|e| e.depth == 0)
            .map(|e| &e.name)
            .collect();
        let expected = source.find_roots().expect("memory source never fails");
        let expected: Vec<&CategoryName> = expected.iter().collect();
        prop_assert_eq!(emitted_roots, expected);
    }

    /// PROPERTY: nested markup is balanced for any valid entry sequence.
    #[test]
    fn property_render_nested_balanced(
        entries in entry_sequence(),
        max_depth in -2i32..=6,
        toplevel in any::<bool>(),
    ) {
        let opts = RenderOptions {
            mode: RenderMode::Nested,
            max_depth,
            toplevel_selectable: toplevel,
            category_namespace: "Category",
        };
        let out = render(&entries, &HashSet::new(), &opts);

        prop_assert_eq!(out.matches("<ul").count(), out.matches("</ul>").count());
        prop_assert_eq!(out.matches("<li").count(), out.matches("</li>").count());
    }

    /// PROPERTY: flat markup pairs every option tag.
    #[test]
    fn property_render_flat_balanced(
        entries in entry_sequence(),
        toplevel in any::<bool>(),
    ) {
        let opts = RenderOptions {
            mode: RenderMode::Flat,
            max_depth: 10,
            toplevel_selectable: toplevel,
            category_namespace: "Category",
        };
        let out = render(&entries, &HashSet::new(), &opts);

        prop_assert_eq!(out.matches("<option").count(), entries.len());
        prop_assert_eq!(out.matches("</option>").count(), entries.len());
    }
}
