//! Catalog validation.
//!
//! Checks required fields and cross-references between items and categories.
//! Validation never stops at the first problem: every rule is checked for
//! every item and all violations are returned together, so one CI run shows a
//! contributor everything that needs fixing.
//!
//! ## Rules
//!
//! - `info.name` and `info.description` are required
//! - every category has an id (id-less categories are reported and excluded
//!   from the lookup set below)
//! - every item has `slug`, `name`, `url`, a one-liner (`oneliner` or
//!   `online_description`) and `main_category`
//! - an item's `slug` equals its registration key
//! - `main_category` and every entry of `categories` name a declared category
//!
//! A field counts as missing when it is empty after trimming whitespace.
//! Items are checked in registration-key order so the error list is stable.

use crate::types::{Category, Info, Item};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("info: {field} is required")]
    MissingInfoField { field: &'static str },
    #[error("categories[{index}]: category id is required")]
    MissingCategoryId { index: usize },
    #[error("item {key}: {field} is required")]
    MissingItemField { key: String, field: &'static str },
    #[error("item {key}: slug {slug:?} must match registration key {key:?}")]
    SlugMismatch { key: String, slug: String },
    #[error("item {key}: main_category {category:?} is not a declared category")]
    UnknownMainCategory { key: String, category: String },
    #[error("item {key}: category {category:?} is not a declared category")]
    UnknownCategory { key: String, category: String },
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Check the catalog and return every violation found (empty when valid).
pub fn validate(
    info: &Info,
    categories: &[Category],
    items: &HashMap<String, Item>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if is_blank(&info.name) {
        errors.push(ValidationError::MissingInfoField { field: "name" });
    }
    if is_blank(&info.description) {
        errors.push(ValidationError::MissingInfoField {
            field: "description",
        });
    }

    let mut category_ids = HashSet::new();
    for (index, category) in categories.iter().enumerate() {
        if is_blank(&category.id) {
            errors.push(ValidationError::MissingCategoryId { index });
            continue;
        }
        category_ids.insert(category.id.as_str());
    }

    let mut keys: Vec<&String> = items.keys().collect();
    keys.sort();

    for key in keys {
        let item = &items[key];
        validate_item(key, item, &category_ids, &mut errors);
    }

    errors
}

fn validate_item(
    key: &str,
    item: &Item,
    category_ids: &HashSet<&str>,
    errors: &mut Vec<ValidationError>,
) {
    let missing = |field| ValidationError::MissingItemField {
        key: key.to_string(),
        field,
    };

    if is_blank(&item.slug) {
        errors.push(missing("slug"));
    } else if item.slug != key {
        errors.push(ValidationError::SlugMismatch {
            key: key.to_string(),
            slug: item.slug.clone(),
        });
    }
    if is_blank(&item.name) {
        errors.push(missing("name"));
    }
    if is_blank(&item.url) {
        errors.push(missing("url"));
    }
    if is_blank(&item.effective_oneliner) {
        errors.push(missing("oneliner or online_description"));
    }
    if is_blank(&item.main_category) {
        errors.push(missing("main_category"));
    } else if !category_ids.contains(item.main_category.as_str()) {
        errors.push(ValidationError::UnknownMainCategory {
            key: key.to_string(),
            category: item.main_category.clone(),
        });
    }
    for category in &item.categories {
        if !category_ids.contains(category.as_str()) {
            errors.push(ValidationError::UnknownCategory {
                key: key.to_string(),
                category: category.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::types::ItemRecord;

    fn valid_info() -> Info {
        info("Awesome List", "A list.")
    }

    fn tools() -> Vec<Category> {
        vec![
            Category::new("tools", "Tools"),
            Category::new("libs", "Libraries"),
        ]
    }

    #[test]
    fn valid_catalog_has_no_errors() {
        let items = items_map(vec![("foo", item("Foo", "tools"))]);
        assert!(validate(&valid_info(), &tools(), &items).is_empty());
    }

    #[test]
    fn missing_info_fields_reported() {
        let errors = validate(&Info::default(), &tools(), &HashMap::new());
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingInfoField { field: "name" },
                ValidationError::MissingInfoField {
                    field: "description"
                },
            ]
        );
    }

    #[test]
    fn blank_info_name_is_missing() {
        let errors = validate(&info("   ", "A list."), &tools(), &HashMap::new());
        assert_eq!(
            errors,
            vec![ValidationError::MissingInfoField { field: "name" }]
        );
    }

    #[test]
    fn category_without_id_reported_and_excluded() {
        let categories = vec![Category::new("tools", "Tools"), Category::new("", "Nameless")];
        let items = items_map(vec![("foo", item("Foo", ""))]);
        let errors = validate(&valid_info(), &categories, &items);
        assert!(errors.contains(&ValidationError::MissingCategoryId { index: 1 }));
        assert!(errors.contains(&ValidationError::MissingItemField {
            key: "foo".into(),
            field: "main_category"
        }));
    }

    #[test]
    fn slug_mismatch_names_both_values() {
        let mut foo = item("Foo", "tools");
        foo.slug = "bar".into();
        let items = items_map(vec![("foo", foo)]);
        let errors = validate(&valid_info(), &tools(), &items);
        assert_eq!(
            errors,
            vec![ValidationError::SlugMismatch {
                key: "foo".into(),
                slug: "bar".into()
            }]
        );
        assert_eq!(
            errors[0].to_string(),
            r#"item foo: slug "bar" must match registration key "foo""#
        );
    }

    #[test]
    fn blank_slug_is_missing() {
        let mut foo = item("Foo", "tools");
        foo.slug = " ".into();
        let items = items_map(vec![("foo", foo)]);
        let errors = validate(&valid_info(), &tools(), &items);
        assert_eq!(
            errors,
            vec![ValidationError::MissingItemField {
                key: "foo".into(),
                field: "slug"
            }]
        );
    }

    #[test]
    fn both_descriptions_empty_is_missing_oneliner() {
        let foo = Item::from_record(
            "foo",
            ItemRecord {
                name: "Foo".into(),
                url: "https://foo.com".into(),
                main_category: "tools".into(),
                ..Default::default()
            },
        );
        let items = items_map(vec![("foo", foo)]);
        let errors = validate(&valid_info(), &tools(), &items);
        assert_eq!(
            errors,
            vec![ValidationError::MissingItemField {
                key: "foo".into(),
                field: "oneliner or online_description"
            }]
        );
    }

    #[test]
    fn online_description_satisfies_oneliner_rule() {
        let foo = Item::from_record(
            "foo",
            ItemRecord {
                name: "Foo".into(),
                url: "https://foo.com".into(),
                online_description: "desc".into(),
                main_category: "tools".into(),
                ..Default::default()
            },
        );
        let items = items_map(vec![("foo", foo)]);
        assert!(validate(&valid_info(), &tools(), &items).is_empty());
    }

    #[test]
    fn three_independent_violations_all_reported() {
        let mut foo = item("", "nowhere");
        foo.url = String::new();
        let items = items_map(vec![("foo", foo)]);
        let errors = validate(&valid_info(), &tools(), &items);
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingItemField {
                    key: "foo".into(),
                    field: "name"
                },
                ValidationError::MissingItemField {
                    key: "foo".into(),
                    field: "url"
                },
                ValidationError::UnknownMainCategory {
                    key: "foo".into(),
                    category: "nowhere".into()
                },
            ]
        );
    }

    #[test]
    fn every_unknown_secondary_category_reported() {
        let mut foo = item("Foo", "tools");
        foo.categories = vec!["libs".into(), "ghost".into(), "phantom".into()];
        let items = items_map(vec![("foo", foo)]);
        let errors = validate(&valid_info(), &tools(), &items);
        assert_eq!(
            errors,
            vec![
                ValidationError::UnknownCategory {
                    key: "foo".into(),
                    category: "ghost".into()
                },
                ValidationError::UnknownCategory {
                    key: "foo".into(),
                    category: "phantom".into()
                },
            ]
        );
    }

    #[test]
    fn errors_span_all_items_in_key_order() {
        let items = items_map(vec![
            ("zeta", item("", "tools")),
            ("alpha", item("", "tools")),
            ("mid", item("Mid", "tools")),
        ]);
        let errors = validate(&valid_info(), &tools(), &items);
        let keys: Vec<&str> = errors
            .iter()
            .map(|e| match e {
                ValidationError::MissingItemField { key, .. } => key.as_str(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(keys, vec!["alpha", "zeta"]);
    }

    #[test]
    fn validation_is_repeatable() {
        let items = items_map(vec![
            ("b", item("", "x")),
            ("a", item("", "y")),
            ("c", item("", "z")),
        ]);
        let first = validate(&Info::default(), &tools(), &items);
        let second = validate(&Info::default(), &tools(), &items);
        assert_eq!(first, second);
    }

    #[test]
    fn fixture_catalog_is_valid() {
        let tmp = setup_fixtures();
        let catalog = crate::scan::scan(&tmp.path().join("meta"), &tmp.path().join("data")).unwrap();
        let errors = validate(&catalog.info, &catalog.categories, &catalog.items);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }
}
