//! Identifier normalization shared by categories, anchors, and item files.
//!
//! Two kinds of identifiers flow through the catalog:
//!
//! - **Slugs**: derived from free-text names by [`slugify`]. A bare category
//!   entry like `My Tools` becomes the id `my-tools`.
//! - **Registration keys**: the stem of an item file. `data/ripgrep.yml` is
//!   registered under `ripgrep`, and the item's own `slug` field must match it.
//!
//! ## Slug rules
//!
//! - Input is lowercased first
//! - `a-z`, `0-9`, `-` and `_` are kept
//! - spaces and `/` become `-`
//! - everything else is dropped
//! - leading and trailing `-` are trimmed
//!
//! ```text
//! "My Tools"          → "my-tools"
//! "CI/CD"             → "ci-cd"
//! "C++ & Rust"        → "c--rust"  (dashes are not collapsed)
//! ```

use std::path::Path;

/// Extension of item and metadata files.
pub const YAML_EXTENSION: &str = "yml";

/// Convert free text into an anchor-safe identifier.
///
/// Never fails; input made only of unsupported characters yields `""`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        match c {
            'a'..='z' | '0'..='9' | '-' | '_' => slug.push(c),
            ' ' | '/' => slug.push('-'),
            _ => {}
        }
    }
    slug.trim_matches('-').to_string()
}

/// Registration key for an item file: its stem, if the file is a `.yml` file.
///
/// - `data/ripgrep.yml` → `Some("ripgrep")`
/// - `data/notes.md` → `None`
/// - `data/.yml` → `None`
/// - `data/.draft.yml` → `None` (hidden files never register)
pub fn registration_key(path: &Path) -> Option<String> {
    let is_yaml = path
        .extension()
        .map(|e| e == YAML_EXTENSION)
        .unwrap_or(false);
    if !is_yaml {
        return None;
    }
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty() && !s.starts_with('.'))
}
