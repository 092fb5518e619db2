//! Save assembly: route the submitted selection back into the page.

use crate::config::Config;
use crate::page::save::category_link_text;

use super::conditions::should_run;
use super::{Messages, PageContext};

/// Which host field receives the appended link text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionTarget {
    PageBody,
    UploadComment,
}

/// Text to append on save, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveAugmentation {
    pub target: SubmissionTarget,
    pub text: String,
}

/// Build the save-time augmentation, or `None` when the selector does
/// not run for this page. An absent submission list means an empty
/// selection: nothing but spacing is appended.
pub fn apply_selection(
    config: &Config,
    messages: &Messages,
    ctx: &PageContext,
    submitted: Option<&[String]>,
) -> Option<SaveAugmentation> {
    if !should_run(config, ctx) {
        return None;
    }

    let names = submitted.unwrap_or(&[]);
    let text = category_link_text(names, &messages.category_namespace);
    let target = if ctx.is_upload {
        SubmissionTarget::UploadComment
    } else {
        SubmissionTarget::PageBody
    };

    Some(SaveAugmentation { target, text })
}
