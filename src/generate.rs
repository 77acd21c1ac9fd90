//! Markdown document generation.
//!
//! Final stage of the build pipeline. Serializes the validated, grouped
//! catalog into one markdown document and writes it out.
//!
//! ## Document Layout
//!
//! ```text
//! # Awesome List
//!
//! [![Awesome](badge.svg)](https://awesome.re)      ← only if a badge renders
//!
//! A list.
//!
//! ## Contents
//!
//! - [Tools](#tools)                                ← every category, even empty
//! - [Editors](#editors)
//!
//! ## Tools                                         ← non-empty categories only
//!
//! - [Foo](https://foo.com) *[review](…)* - A tool.
//!
//! ---                                              ← only if license, contribute
//!                                                    or footer is set
//! **License**: MIT
//!
//! See [CONTRIBUTING.md](CONTRIBUTING.md) for contribution guidelines.
//!
//! Footer text.
//! ```
//!
//! Rendering is pure and deterministic: all ordering comes from the category
//! list and the pre-sorted sections, never from map iteration.

use crate::group::Grouped;
use crate::types::{Badge, Category, Info, Item};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render the full document.
///
/// With `review_links` set, items with a non-blank `review` URL get a
/// `*[review](url)*` link between the main link and the description.
pub fn render(
    info: &Info,
    categories: &[Category],
    grouped: &Grouped<'_>,
    review_links: bool,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!("# {}", info.name));
    lines.push(String::new());

    let badges = info.effective_badges();
    if !badges.is_empty() {
        let rendered: Vec<String> = badges.iter().map(render_badge).collect();
        lines.push(rendered.join(" "));
        lines.push(String::new());
    }

    lines.push(info.description.trim().to_string());
    lines.push(String::new());

    lines.push("## Contents".to_string());
    lines.push(String::new());
    for category in categories {
        lines.push(format!(
            "- [{}](#{})",
            category.name,
            category.id.to_lowercase()
        ));
    }
    lines.push(String::new());

    for category in categories {
        let Some(items) = grouped.get(&category.id).filter(|items| !items.is_empty()) else {
            continue;
        };
        lines.push(format!("## {}", category.name));
        lines.push(String::new());
        for item in items {
            lines.push(render_item(item, review_links));
        }
        lines.push(String::new());
    }

    lines.extend(render_footer(info));

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

fn render_badge(badge: &Badge) -> String {
    format!("[![Awesome]({})]({})", badge.url, badge.link)
}

fn render_item(item: &Item, review_links: bool) -> String {
    let mut line = format!("- [{}]({})", escape_link_text(&item.name), item.url);
    if review_links && !item.review.trim().is_empty() {
        line.push_str(&format!(" *[review]({})*", item.review));
    }
    line.push_str(" - ");
    line.push_str(&oneliner_suffix(&item.effective_oneliner));
    line
}

fn render_footer(info: &Info) -> Vec<String> {
    let license = info.license.trim();
    let contribute = info.contribute.trim();
    let footer = info.footer.trim();
    if license.is_empty() && contribute.is_empty() && footer.is_empty() {
        return Vec::new();
    }

    let mut lines = vec!["---".to_string(), String::new()];
    if !license.is_empty() {
        lines.push(format!("**License**: {license}"));
        lines.push(String::new());
    }
    if !contribute.is_empty() {
        lines.push(format!(
            "See [{contribute}]({contribute}) for contribution guidelines."
        ));
        lines.push(String::new());
    }
    if !footer.is_empty() {
        lines.push(footer.to_string());
    }
    lines
}

/// Trim a one-liner and make sure it ends with a period.
///
/// - `"hello"` → `"hello."`
/// - `"hello."` → `"hello."`
/// - `"  hi  "` → `"hi."`
/// - `""` → `""`
pub fn oneliner_suffix(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() || text.ends_with('.') {
        text.to_string()
    } else {
        format!("{text}.")
    }
}

/// Escape square brackets so an item name cannot break its link text.
pub fn escape_link_text(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}

/// Write the rendered document, creating the parent directory if needed.
pub fn write_document(path: &Path, document: &str) -> Result<(), GenerateError> {
    let io_error = |source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, document).map_err(io_error)
}
