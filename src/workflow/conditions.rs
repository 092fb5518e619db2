//! Run conditions for the category selector.

use crate::config::Config;

use super::PageContext;

/// Whether the selector should run at all for this page view.
///
/// Uploads always qualify. Otherwise the page's namespace must be
/// enabled, subpages need `enable_subpages`, and section edits never
/// get a selector (the scan would only see a fragment of the page).
pub fn should_run(config: &Config, ctx: &PageContext) -> bool {
    if ctx.is_upload {
        return true;
    }

    config.namespace_enabled(&ctx.namespace)
        && (!ctx.is_subpage || config.enable_subpages)
        && !ctx.is_section_edit
}
