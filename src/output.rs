//! CLI output formatting for all pipeline stages.
//!
//! Output is information-first: categories lead with a positional index and
//! display name, with identifiers and counts as indented context.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Awesome Terminal Tools
//! Categories
//!     001 Search (3 items)
//!         Id: search
//!     002 Editors (0 items)
//!         Id: editors
//! Items: 3
//! ```
//!
//! ## Validation
//!
//! ```text
//! item foo: url is required
//! item foo: main_category "nowhere" is not a declared category
//! 2 validation error(s)
//! ```
//!
//! ## Generate
//!
//! ```text
//! 001 Search → 3 items
//! 002 Editors (empty, omitted)
//! Generated 1 section, 3 items → /work/readme.md
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to the terminal. Format
//! functions are pure: no I/O, no side effects.

use crate::group::Grouped;
use crate::scan::Catalog;
use crate::types::Category;
use crate::validate::ValidationError;
use std::collections::HashSet;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Ids declared more than once, in first-repeat order.
fn duplicate_ids(categories: &[Category]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for category in categories {
        let id = category.id.as_str();
        if !seen.insert(id) && !duplicates.contains(&id) {
            duplicates.push(id);
        }
    }
    duplicates
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format the loaded catalog: categories with main-category item counts.
pub fn format_scan_output(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec![catalog.info.name.clone(), "Categories".to_string()];

    for (i, category) in catalog.categories.iter().enumerate() {
        let count = catalog
            .items
            .values()
            .filter(|item| item.main_category == category.id)
            .count();
        lines.push(format!(
            "    {} {} ({})",
            format_index(i + 1),
            category.name,
            plural(count, "item", "items")
        ));
        lines.push(format!("        Id: {}", category.id));
    }

    for id in duplicate_ids(&catalog.categories) {
        lines.push(format!(
            "Warning: category id {id:?} is declared more than once; its items are listed under each"
        ));
    }

    lines.push(format!("Items: {}", catalog.items.len()));
    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(catalog: &Catalog) {
    for line in format_scan_output(catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// Validation output
// ============================================================================

/// One line per violation followed by a count.
pub fn format_validation_errors(errors: &[ValidationError]) -> Vec<String> {
    let mut lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
    lines.push(format!("{} validation error(s)", errors.len()));
    lines
}

/// Print validation errors to stderr.
pub fn print_validation_errors(errors: &[ValidationError]) {
    for line in format_validation_errors(errors) {
        eprintln!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format the rendered sections and the destination.
pub fn format_generate_output(
    categories: &[Category],
    grouped: &Grouped<'_>,
    output_path: &Path,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut sections = 0;
    let mut items = 0;

    for (i, category) in categories.iter().enumerate() {
        let count = grouped.get(&category.id).map_or(0, Vec::len);
        if count == 0 {
            lines.push(format!(
                "{} {} (empty, omitted)",
                format_index(i + 1),
                category.name
            ));
            continue;
        }
        sections += 1;
        items += count;
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            category.name,
            plural(count, "item", "items")
        ));
    }

    lines.push(format!(
        "Generated {}, {} \u{2192} {}",
        plural(sections, "section", "sections"),
        plural(items, "item", "items"),
        output_path.display()
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(categories: &[Category], grouped: &Grouped<'_>, output_path: &Path) {
    for line in format_generate_output(categories, grouped, output_path) {
        println!("{}", line);
    }
}
