//! Output path resolution.

use crate::article::ArticleKind;
use chrono::{DateTime, Datelike, Utc};
use std::path::PathBuf;

/// Directory draft posts and snippets publish under, regardless of date.
const DRAFTS_DIR: &str = "drafts";

/// Resolve an article's output path relative to the destination root.
///
/// Pages land at the root. Draft posts and snippets land under `drafts/`
/// so an unfinished article never occupies a dated slot. Everything else
/// is filed under `YYYY/MM/` taken from the modification date, which is
/// always set by construction.
pub fn output_path(
    kind: ArticleKind,
    draft: bool,
    date_modified: DateTime<Utc>,
    filename: &str,
) -> PathBuf {
    match kind {
        ArticleKind::Page => PathBuf::from(filename),
        ArticleKind::Post | ArticleKind::Snippet => {
            if draft {
                PathBuf::from(DRAFTS_DIR).join(filename)
            } else {
                PathBuf::from(format!(
                    "{:04}/{:02}",
                    date_modified.year(),
                    date_modified.month()
                ))
                .join(filename)
            }
        }
    }
}

/// File name of a tag's index page.
///
/// A tag hidden at every occurrence gets an underscore prefix: the page
/// still exists, but is not casually discoverable.
pub fn tag_index_file_name(name: &str, hidden: bool, extension: &str) -> String {
    if hidden {
        format!("_tag-{name}{extension}")
    } else {
        format!("tag-{name}{extension}")
    }
}
