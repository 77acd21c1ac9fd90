//! Catalog loading.
//!
//! Stage 1 of the build pipeline. Reads the metadata directory and the item
//! directory into a [`Catalog`] that the later stages consume.
//!
//! ## Directory Structure
//!
//! ```text
//! meta/
//! ├── info.yml              # Title, description, badges, tiers, footer
//! └── categories.yml        # Ordered category declarations
//! data/
//! ├── ripgrep.yml           # One file per item, registered as "ripgrep"
//! ├── fd.yml
//! └── README.md             # Not a .yml file: ignored
//! ```
//!
//! ## Category Declarations
//!
//! Entries may be bare strings or `{id, name}` records. Both are resolved
//! into [`Category`] here; nothing downstream sees the raw form.
//!
//! ```yaml
//! - Command Line            # id: command-line
//! - name: Editors           # id: editors
//! - id: lang                # id: lang
//!   name: Languages
//! ```
//!
//! ## Failure Model
//!
//! Loading is all-or-nothing. An unreadable file, malformed YAML, or a
//! category entry of the wrong shape aborts the whole scan; there are no
//! partial catalogs. Content rules (required fields, dangling category ids)
//! are not checked here, see [`crate::validate`].

use crate::naming;
use crate::types::{Category, CategoryDecl, Info, Item, ItemRecord};
use serde::Serialize;
use serde_yaml::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

pub const INFO_FILE: &str = "info.yml";
pub const CATEGORIES_FILE: &str = "categories.yml";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("{}[{index}]: {message}", path.display())]
    Format {
        path: PathBuf,
        index: usize,
        message: String,
    },
}

/// Everything one run renders: metadata, ordered categories, and items.
///
/// `items` is keyed by registration key and deliberately unordered; all
/// ordering is imposed by [`crate::group`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub info: Info,
    pub categories: Vec<Category>,
    pub items: HashMap<String, Item>,
}

/// Serializable view of a catalog with items sorted by registration key.
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub info: &'a Info,
    pub categories: &'a [Category],
    pub items: BTreeMap<&'a str, &'a Item>,
}

impl Catalog {
    pub fn to_manifest(&self) -> Manifest<'_> {
        Manifest {
            info: &self.info,
            categories: &self.categories,
            items: self.items.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        }
    }
}

/// Load a full catalog from the metadata and item directories.
pub fn scan(meta_dir: &Path, data_dir: &Path) -> Result<Catalog, ScanError> {
    let info = load_info(meta_dir)?;
    let categories = load_categories(meta_dir)?;
    let items = load_items(data_dir)?;
    Ok(Catalog {
        info,
        categories,
        items,
    })
}

/// Read `info.yml` from the metadata directory.
pub fn load_info(meta_dir: &Path) -> Result<Info, ScanError> {
    let path = meta_dir.join(INFO_FILE);
    let src = read_source(&path)?;
    parse_info(&path, &src)
}

/// Read `categories.yml` from the metadata directory.
pub fn load_categories(meta_dir: &Path) -> Result<Vec<Category>, ScanError> {
    let path = meta_dir.join(CATEGORIES_FILE);
    let src = read_source(&path)?;
    parse_categories(&path, &src)
}

/// Read every `*.yml` file directly inside `data_dir`.
///
/// Subdirectories and files with other extensions are skipped. A single
/// unreadable or malformed item fails the whole load.
pub fn load_items(data_dir: &Path) -> Result<HashMap<String, Item>, ScanError> {
    // WalkDir yields nothing for a file root once min_depth excludes it.
    fs::read_dir(data_dir).map_err(|source| ScanError::Io {
        path: data_dir.to_path_buf(),
        source,
    })?;

    let mut items = HashMap::new();
    let walker = WalkDir::new(data_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| ScanError::Io {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| data_dir.to_path_buf()),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(key) = naming::registration_key(entry.path()) else {
            continue;
        };
        let src = read_source(entry.path())?;
        let item = parse_item(entry.path(), &key, &src)?;
        items.insert(key, item);
    }

    Ok(items)
}

/// Parse repository metadata. An empty document is an empty [`Info`].
pub fn parse_info(path: &Path, src: &str) -> Result<Info, ScanError> {
    if src.trim().is_empty() {
        return Ok(Info::default());
    }
    serde_yaml::from_str(src).map_err(|source| yaml_error(path, source))
}

/// Parse an ordered list of category declarations.
///
/// The document must be a sequence. Each entry must be a scalar (bare name)
/// or a mapping (`{id, name}`); anything else is a [`ScanError::Format`]
/// naming the entry's position.
pub fn parse_categories(path: &Path, src: &str) -> Result<Vec<Category>, ScanError> {
    if src.trim().is_empty() {
        return Ok(Vec::new());
    }
    let entries: Vec<Value> =
        serde_yaml::from_str(src).map_err(|source| yaml_error(path, source))?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            category_decl(value)
                .map(Category::from)
                .map_err(|message| ScanError::Format {
                    path: path.to_path_buf(),
                    index,
                    message,
                })
        })
        .collect()
}

/// Parse one item file registered under `key`.
pub fn parse_item(path: &Path, key: &str, src: &str) -> Result<Item, ScanError> {
    let record: ItemRecord = if src.trim().is_empty() {
        ItemRecord::default()
    } else {
        serde_yaml::from_str(src).map_err(|source| yaml_error(path, source))?
    };
    Ok(Item::from_record(key, record))
}

fn category_decl(value: Value) -> Result<CategoryDecl, String> {
    match value {
        Value::String(s) => Ok(CategoryDecl::Bare(s)),
        Value::Number(n) => Ok(CategoryDecl::Bare(n.to_string())),
        Value::Bool(b) => Ok(CategoryDecl::Bare(b.to_string())),
        Value::Mapping(map) => serde_yaml::from_value(Value::Mapping(map))
            .map(CategoryDecl::Record)
            .map_err(|e| e.to_string()),
        _ => Err("expected string or object".to_string()),
    }
}

fn read_source(path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn yaml_error(path: &Path, source: serde_yaml::Error) -> ScanError {
    ScanError::Yaml {
        path: path.to_path_buf(),
        source,
    }
}
