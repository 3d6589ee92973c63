//! Document model for the content pipeline.
//!
//! A `Document` is one unit of discovered content; the external engine hands
//! the full set over as a JSON manifest, which the driver assembles into a
//! `DocumentSet`. Documents are immutable after discovery: collections borrow
//! them and are recomputed, never edited in place.
//!
//! # Metadata leniency
//!
//! Front-matter is author-written and frequently sloppy. A missing or
//! wrong-typed metadata field never fails the build; it falls back to the
//! field's default (`None` / `false`). The typed [`Metadata`] record makes
//! that rule explicit instead of burying it in an untyped map.

use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use thiserror::Error;

/// Document-level errors, raised only at the discovery boundary.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("duplicate document path in manifest: `{0}`")]
    DuplicatePath(String),
}

// ============================================================================
// Document Kind
// ============================================================================

/// Category of a document, assigned once at discovery time.
///
/// Replaces repeated glob matching against source paths: downstream filters
/// match on this closed enum instead of re-deriving the category from path
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Published article under the posts source tree
    Post,
    /// Article under the drafts source tree
    Draft,
    /// Short-form note
    Note,
    /// Anything else (standalone pages, index pages, kinds this pipeline
    /// does not recognize)
    #[default]
    #[serde(other)]
    Page,
}

impl DocumentKind {
    /// Get the short name for this kind (used in logs)
    #[allow(dead_code)]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Draft => "draft",
            Self::Note => "note",
            Self::Page => "page",
        }
    }

    /// Returns true for kinds that feed the posts collection.
    pub const fn is_post_source(self) -> bool {
        matches!(self, Self::Post | Self::Draft)
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Permalink front-matter value.
///
/// `permalink: false` opts a document out of being listed anywhere,
/// regardless of draft status or environment. A string value is a custom
/// output URL and leaves the document listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Permalink {
    Enabled(bool),
    Custom(String),
}

/// Typed front-matter record for a document.
///
/// | Field      | Missing / wrong-typed |
/// |------------|-----------------------|
/// | `navorder` | `None` (sorts as 0)   |
/// | `date`     | `None` (sorts last)   |
/// | `draft`    | `false`               |
/// | `featured` | `false`               |
/// | `permalink`| `None` (listed)       |
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    /// Position in the navigation collection
    #[serde(default, deserialize_with = "lenient_i64")]
    pub navorder: Option<i64>,

    /// Publication date
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<DateTimeUtc>,

    /// Draft flag; drafts are hidden in production builds
    #[serde(default, deserialize_with = "lenient_bool")]
    pub draft: bool,

    /// Featured flag; feeds the featured-posts collection
    #[serde(default, deserialize_with = "lenient_bool")]
    pub featured: bool,

    /// Permalink override (custom URL, or `false` to unlist)
    #[serde(default, deserialize_with = "lenient_permalink")]
    pub permalink: Option<Permalink>,
}

impl Metadata {
    /// Whether this document may appear in content collections.
    ///
    /// Only an explicit `permalink: false` opts out.
    pub fn is_listed(&self) -> bool {
        !matches!(self.permalink, Some(Permalink::Enabled(false)))
    }
}

// ============================================================================
// Document
// ============================================================================

/// A unit of content discovered by the external engine.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    /// Source path, unique within a build
    pub path: String,

    /// Category assigned at discovery time
    #[serde(default)]
    pub kind: DocumentKind,

    /// Free-form tags (`nav` marks navigation entries)
    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Typed front-matter (manifest key: `data`)
    #[serde(default, alias = "data")]
    pub meta: Metadata,

    /// Raw body, owned exclusively by the document
    #[serde(default)]
    pub content: String,
}

impl Document {
    /// Create a document with empty tags, metadata and content.
    #[allow(dead_code)] // test fixtures
    pub fn new(path: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            path: path.into(),
            kind,
            tags: BTreeSet::new(),
            meta: Metadata::default(),
            content: String::new(),
        }
    }
}

// ============================================================================
// Document Set
// ============================================================================

/// The full discovered document set for one build, in discovery order.
///
/// Construction enforces the path-uniqueness invariant; afterwards the set is
/// read-only and collection derivation only borrows from it.
#[derive(Debug, Default)]
pub struct DocumentSet {
    items: Vec<Document>,
}

impl DocumentSet {
    /// Assemble a set from discovered documents, rejecting duplicate paths.
    pub fn new(items: Vec<Document>) -> Result<Self, DocumentError> {
        let mut seen = BTreeSet::new();
        for doc in &items {
            if !seen.insert(doc.path.as_str()) {
                return Err(DocumentError::DuplicatePath(doc.path.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Iterate documents in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Lenient Deserializers
// ============================================================================
//
// Each goes through `serde_json::Value` so a wrong-typed field degrades to
// the default instead of failing the whole manifest.

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_i64))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTimeUtc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(DateTimeUtc::parse))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false))
}

fn lenient_permalink<'de, D>(deserializer: D) -> Result<Option<Permalink>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(b)) => Some(Permalink::Enabled(b)),
        Some(serde_json::Value::String(s)) => Some(Permalink::Custom(s)),
        _ => None,
    })
}

// ============================================================================
// Tests
// ============================================================================
