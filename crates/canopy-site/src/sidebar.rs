//! Sidebar item generation from a directory of Markdown files.
//!
//! Each `.md` file in a scanned directory becomes one sidebar item, with
//! its display text derived from the file name. `index.md` is the
//! directory's landing page and is linked implicitly, so it is never
//! included in generated items.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::nav::NavItem;

/// Titled group of sidebar items, optionally collapsible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    /// Section heading text.
    pub text: String,
    /// Initial collapsed state. Omitted from output when unset, which
    /// renders the section as non-collapsible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Items in this section.
    pub items: Vec<NavItem>,
}

/// Generate sidebar items from a directory of Markdown files.
///
/// Lists `<docs_root>/<dir>`, keeps entries whose name ends in `.md`
/// (excluding `index.md`), and maps each to a [`NavItem`] with
/// `text` derived via [`title_from_slug`] and `link` set to
/// `/<dir>/<basename>`. Items are sorted by file name so output is
/// identical across platforms.
///
/// A missing directory yields an empty list rather than an error.
///
/// # Arguments
///
/// * `docs_root` - Documentation root directory
/// * `dir` - Directory to scan, relative to `docs_root`
///
/// # Errors
///
/// Returns any I/O error from listing an existing directory (e.g.
/// permission failures). These are fatal for configuration evaluation.
pub fn sidebar_items(docs_root: &Path, dir: &str) -> io::Result<Vec<NavItem>> {
    let full_path = docs_root.join(dir);
    if !full_path.exists() {
        debug!(dir, "sidebar directory missing, generating no items");
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(&full_path)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name == "index.md" {
            continue;
        }
        if let Some(base) = name.strip_suffix(".md") {
            names.push(base.to_owned());
        }
    }
    names.sort_unstable();

    debug!(dir, count = names.len(), "generated sidebar items");

    Ok(names
        .into_iter()
        .map(|base| NavItem {
            text: title_from_slug(&base),
            link: format!("/{dir}/{base}"),
        })
        .collect())
}

/// Convert a kebab-case file basename into a title-cased display string.
///
/// Each hyphen-separated word has its first character uppercased; the
/// remaining characters are unchanged. Empty words (from consecutive
/// hyphens) are preserved.
///
/// # Examples
///
/// ```
/// use canopy_site::title_from_slug;
///
/// assert_eq!(title_from_slug("getting-started"), "Getting Started");
/// ```
#[must_use]
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a word, leaving the rest unchanged.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
