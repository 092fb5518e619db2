//! Configuration type definitions

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SelectcatResult;
use crate::tree::RenderMode;

use super::loader;

/// Feature configuration, normally read from `selectcat.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Namespaces in which the category selector is active.
    #[serde(default = "default_namespaces")]
    pub namespaces: HashMap<String, bool>,

    /// Explicit root category per namespace. A missing entry means the
    /// roots are auto-detected from the relation (expensive).
    #[serde(default)]
    pub roots: HashMap<String, String>,

    /// Whether the selector also runs on subpages.
    #[serde(default)]
    pub enable_subpages: bool,

    /// Whether depth-0 categories get a selection control.
    #[serde(default = "default_toplevel_selectable")]
    pub toplevel_selectable: bool,

    /// Levels at or beyond `max_depth - 1` start out collapsed.
    #[serde(default = "default_max_depth")]
    pub max_depth: i32,

    /// Checkbox tree or flat multi-select.
    #[serde(default)]
    pub render_mode: RenderMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespaces: default_namespaces(),
            roots: HashMap::new(),
            enable_subpages: false,
            toplevel_selectable: default_toplevel_selectable(),
            max_depth: default_max_depth(),
            render_mode: RenderMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, discarding warnings.
    pub fn load(path: &Path) -> SelectcatResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Whether the selector is active in `namespace`.
    pub fn namespace_enabled(&self, namespace: &str) -> bool {
        self.namespaces.get(namespace).copied().unwrap_or(false)
    }

    /// The configured root for `namespace`, if any. An empty value is
    /// treated the same as a missing one: auto-detect.
    pub fn root_for(&self, namespace: &str) -> Option<&str> {
        self.roots
            .get(namespace)
            .map(String::as_str)
            .filter(|root| !root.is_empty())
    }
}

fn default_namespaces() -> HashMap<String, bool> {
    [
        ("main", true),
        ("talk", false),
        ("user", false),
        ("project", true),
        ("file", true),
        ("template", false),
        ("help", true),
        ("category", true),
    ]
    .into_iter()
    .map(|(ns, enabled)| (ns.to_string(), enabled))
    .collect()
}

fn default_toplevel_selectable() -> bool {
    true
}

fn default_max_depth() -> i32 {
    10
}
