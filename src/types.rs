//! Catalog data model shared by every pipeline stage.
//!
//! Loaded once per run and treated as read-only afterwards. Relationships
//! between items and categories are by identifier only: an [`Item`] names its
//! categories by id and never holds a [`Category`].

use crate::naming::slugify;
use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit YAML `null` (`~`) the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single header badge (image URL + link target).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Badge {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
}

impl Badge {
    /// Both URLs are present, so the badge can be rendered.
    pub fn is_complete(&self) -> bool {
        !self.url.trim().is_empty() && !self.link.trim().is_empty()
    }
}

/// Repository-level metadata from `meta/info.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Tier names in display order (`featured`, `popular`, `ordinary`, ...).
    #[serde(deserialize_with = "null_as_default")]
    pub position_order: Vec<String>,
    /// Preferred badge list.
    #[serde(deserialize_with = "null_as_default")]
    pub badges: Vec<Badge>,
    /// Single legacy badge, used only when `badges` yields nothing.
    #[serde(deserialize_with = "null_as_default")]
    pub badge_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub badge_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub license: String,
    /// URL of the contribution guide.
    #[serde(deserialize_with = "null_as_default")]
    pub contribute: String,
    /// Free-form markdown appended at the very end.
    #[serde(deserialize_with = "null_as_default")]
    pub footer: String,
}

impl Info {
    /// Badges to render: complete structured badges, else the legacy pair.
    pub fn effective_badges(&self) -> Vec<Badge> {
        let badges: Vec<Badge> = self
            .badges
            .iter()
            .filter(|b| b.is_complete())
            .cloned()
            .collect();
        if !badges.is_empty() {
            return badges;
        }
        let legacy = Badge {
            url: self.badge_url.clone(),
            link: self.badge_link.clone(),
        };
        if legacy.is_complete() {
            vec![legacy]
        } else {
            Vec::new()
        }
    }
}

/// A named grouping of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Structured form of a category declaration: `{id, name}` with optional id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CategoryRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// One entry of `meta/categories.yml`, as written by the author.
///
/// ```yaml
/// - Command Line            # Bare
/// - name: Editors           # Record, id derived
/// - id: lang                # Record, explicit id
///   name: Languages
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryDecl {
    Bare(String),
    Record(CategoryRecord),
}

impl From<CategoryDecl> for Category {
    fn from(decl: CategoryDecl) -> Self {
        match decl {
            CategoryDecl::Bare(text) => {
                let name = text.trim().to_string();
                Category {
                    id: slugify(&name),
                    name,
                }
            }
            CategoryDecl::Record(record) => {
                let id = if record.id.is_empty() {
                    slugify(&record.name)
                } else {
                    record.id
                };
                Category {
                    id,
                    name: record.name,
                }
            }
        }
    }
}

/// An item file (`data/<key>.yml`) exactly as written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ItemRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub oneliner: String,
    #[serde(deserialize_with = "null_as_default")]
    pub online_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub main_category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    /// Ordering tier, matched against `Info::position_order`.
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub review: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_added: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date_modified: String,
}

/// A catalog entry, resolved from its [`ItemRecord`] at load time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    pub slug: String,
    pub url: String,
    pub oneliner: String,
    pub online_description: String,
    pub description: String,
    pub main_category: String,
    pub categories: Vec<String>,
    pub position: String,
    pub review: String,
    pub date_added: String,
    pub date_modified: String,
    /// `oneliner`, or `online_description` when the oneliner is blank.
    pub effective_oneliner: String,
}

impl Item {
    /// Resolve a record registered under `key`.
    ///
    /// An empty `slug` defaults to `key`; a mismatching non-empty slug is kept
    /// as written so validation can report it.
    pub fn from_record(key: &str, record: ItemRecord) -> Self {
        let effective_oneliner = if record.oneliner.trim().is_empty() {
            record.online_description.clone()
        } else {
            record.oneliner.clone()
        };
        let slug = if record.slug.is_empty() {
            key.to_string()
        } else {
            record.slug
        };
        Item {
            name: record.name,
            slug,
            url: record.url,
            oneliner: record.oneliner,
            online_description: record.online_description,
            description: record.description,
            main_category: record.main_category,
            categories: record.categories,
            position: record.position,
            review: record.review,
            date_added: record.date_added,
            date_modified: record.date_modified,
            effective_oneliner,
        }
    }
}
