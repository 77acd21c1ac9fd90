//! Shared test utilities for the awesome-compile test suite.
//!
//! Provides fixture setup, record builders, and lookup helpers that work with
//! catalog data structures (`Info`, `Category`, `Item`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let items = items_map(vec![("foo", item("Foo", "tools"))]);
//! let grouped = group_by_main_category(&Info::default(), &categories, &items);
//! assert_eq!(names(&grouped["tools"]), vec!["Foo"]);
//! ```

use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;

use crate::naming::slugify;
use crate::types::{Category, Info, Item, ItemRecord};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/catalog/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/catalog");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `content` to `dir/relative`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

// =========================================================================
// Builders
// =========================================================================

pub fn info(name: &str, description: &str) -> Info {
    Info {
        name: name.to_string(),
        description: description.to_string(),
        ..Default::default()
    }
}

/// A complete item (name, url, oneliner, main category) with an empty slug.
///
/// Register it with [`items_map`], which fills the slug from the key.
pub fn item(name: &str, main_category: &str) -> Item {
    Item::from_record(
        "",
        ItemRecord {
            name: name.to_string(),
            url: format!("https://example.com/{}", slugify(name)),
            oneliner: format!("{name} does things"),
            main_category: main_category.to_string(),
            ..Default::default()
        },
    )
}

/// Key items by registration key, defaulting empty slugs to the key.
pub fn items_map(entries: Vec<(&str, Item)>) -> HashMap<String, Item> {
    entries
        .into_iter()
        .map(|(key, mut item)| {
            if item.slug.is_empty() {
                item.slug = key.to_string();
            }
            (key.to_string(), item)
        })
        .collect()
}

// =========================================================================
// Lookups and extractors
// =========================================================================

/// Find an item by registration key. Panics if not found.
pub fn find_item<'a>(items: &'a HashMap<String, Item>, key: &str) -> &'a Item {
    items.get(key).unwrap_or_else(|| {
        let keys = item_keys(items);
        panic!("item '{key}' not found. Available: {keys:?}")
    })
}

/// All registration keys, sorted.
pub fn item_keys(items: &HashMap<String, Item>) -> Vec<&str> {
    let mut keys: Vec<&str> = items.keys().map(String::as_str).collect();
    keys.sort();
    keys
}

/// All category ids in declaration order.
pub fn category_ids(categories: &[Category]) -> Vec<&str> {
    categories.iter().map(|c| c.id.as_str()).collect()
}

/// Item names in section order.
pub fn names<'a>(items: &[&'a Item]) -> Vec<&'a str> {
    items.iter().map(|i| i.name.as_str()).collect()
}
