//! Read-only tree payload for external front-end tooling.

use serde_json::{Map, Value};

use crate::config::Config;
use crate::domain::category::CategoryName;
use crate::domain::ports::CategorySource;
use crate::error::SelectcatResult;
use crate::tree::{RootSpec, TreeBuilder};

/// The flattened name -> depth mapping for `namespace`, in tree order,
/// with underscores replaced by spaces in keys. `None` when the selector
/// is not active in that namespace.
pub fn tree_payload<S: CategorySource + ?Sized>(
    source: &S,
    config: &Config,
    namespace: &str,
) -> SelectcatResult<Option<Value>> {
    if !config.namespace_enabled(namespace) {
        return Ok(None);
    }

    let root_spec = match config.root_for(namespace) {
        Some(root) => RootSpec::Explicit(CategoryName::new(root)),
        None => RootSpec::AutoDetect,
    };
    let entries = TreeBuilder::new(source).build(&root_spec)?;

    let mut payload = Map::new();
    for entry in &entries {
        payload.insert(entry.name.display(), Value::from(entry.depth as u64));
    }

    Ok(Some(Value::Object(payload)))
}
