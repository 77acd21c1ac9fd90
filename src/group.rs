//! Grouping and ordering of items into category sections.
//!
//! Stage 3 of the build pipeline. Items are partitioned by `main_category`
//! and each partition is sorted:
//!
//! 1. **Tier**: when `info.position_order` is non-empty, an item's rank is the
//!    index of its `position` in that list. Unknown or empty positions rank
//!    last (`position_order.len()`).
//! 2. **Name**: case-insensitive, ascending.
//!
//! Remaining ties (names equal ignoring case) fall back to the exact name,
//! then slug, then URL, so the order never depends on map iteration.
//!
//! Items whose `main_category` is not a declared category are left out of
//! every partition. Grouping never fails; rejecting such items is the job of
//! [`crate::validate`].

use crate::types::{Category, Info, Item};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Category id → items whose main category it is, in display order.
pub type Grouped<'a> = HashMap<String, Vec<&'a Item>>;

/// Rank of `position` within `order`; unmatched positions rank last.
pub fn tier_rank(order: &[String], position: &str) -> usize {
    if position.is_empty() {
        return order.len();
    }
    order
        .iter()
        .position(|p| p == position)
        .unwrap_or(order.len())
}

/// Total order used within a category section.
pub fn compare_items(order: &[String], a: &Item, b: &Item) -> Ordering {
    tier_rank(order, &a.position)
        .cmp(&tier_rank(order, &b.position))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.slug.cmp(&b.slug))
        .then_with(|| a.url.cmp(&b.url))
}

/// Partition items by main category and sort each partition.
pub fn group_by_main_category<'a>(
    info: &Info,
    categories: &[Category],
    items: &'a HashMap<String, Item>,
) -> Grouped<'a> {
    let declared: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();

    let mut grouped: Grouped<'a> = HashMap::new();
    for item in items.values() {
        if !declared.contains(item.main_category.as_str()) {
            continue;
        }
        grouped
            .entry(item.main_category.clone())
            .or_default()
            .push(item);
    }

    for list in grouped.values_mut() {
        list.sort_by(|a, b| compare_items(&info.position_order, a, b));
    }

    grouped
}
