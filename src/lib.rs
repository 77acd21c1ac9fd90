//! # awesome-compile
//!
//! Compiles an "awesome list" style catalog into a single markdown document.
//! Your YAML files are the data source: repository metadata and categories
//! live in `meta/`, and every catalog entry is its own file in `data/`.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Scan      meta/ + data/  →  Catalog              (files → structured data)
//! 2. Validate  Catalog        →  Vec<ValidationError> (all problems at once)
//! 3. Group     Catalog        →  Grouped              (sections, sorted)
//! 4. Generate  Grouped        →  readme.md            (final document)
//! ```
//!
//! Each stage consumes what the previous one produced and builds a new
//! structure; nothing is mutated after loading. Stages 2 to 4 are pure
//! functions, so tests exercise them without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: reads `info.yml`, `categories.yml` and `data/*.yml` into a [`scan::Catalog`] |
//! | [`validate`] | Stage 2: required fields and item → category references, every violation collected |
//! | [`group`] | Stage 3: partitions items by main category, tier + name ordering |
//! | [`generate`] | Stage 4: renders the markdown document and writes it |
//! | [`config`] | Optional `config.yml` run settings (output path, review links) |
//! | [`types`] | Catalog data model (`Info`, `Category`, `Item`) |
//! | [`naming`] | Slug normalization and item registration keys |
//! | [`output`] | CLI output formatting: stage summaries and diagnostics |
//!
//! # Design Decisions
//!
//! ## Collect Every Validation Error
//!
//! The document is usually regenerated in CI after a contributor adds an
//! item. Reporting only the first problem would turn one pull request into a
//! dozen round trips, so validation checks every rule for every item and the
//! run fails once, at the end, with the full list.
//!
//! ## Ordering Is Explicit
//!
//! Items are held in a `HashMap` keyed by registration key, and nothing
//! relies on its iteration order. Section order comes from
//! `categories.yml`; item order comes from [`group::compare_items`], a total
//! order (tier, name, then stable tiebreaks). Rendering the same catalog
//! twice produces byte-identical output.
//!
//! ## Resolve Once at Load Time
//!
//! Category declarations may be bare strings or `{id, name}` records, and an
//! item's one-liner may come from `oneliner` or `online_description`. Both
//! are resolved when the catalog is loaded ([`types::CategoryDecl`],
//! [`types::Item::from_record`]), so validation and rendering only ever see
//! one canonical shape.
//!
//! ## Best-Effort Run Config
//!
//! `config.yml` is an optional overlay. A malformed file is ignored, not
//! reported, exactly as if it were absent.

pub mod config;
pub mod generate;
pub mod group;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
