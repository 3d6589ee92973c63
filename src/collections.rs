//! Collection derivation: classification and ordering.
//!
//! Each named collection is a pure filter-then-sort pipeline over the full
//! [`DocumentSet`]. The stages are fixed per collection:
//!
//! | Collection | Filter                                             | Order               |
//! |------------|----------------------------------------------------|---------------------|
//! | `nav`      | tagged `nav`                                       | `navorder` ascending|
//! | `posts`    | post/draft kind, listed, drafts hidden in prod     | discovery order     |
//! | `featured` | post kind, `featured: true`                        | date descending     |
//! | `notes`    | note kind                                          | reverse discovery   |
//!
//! Derivation borrows documents and never mutates them; re-running with the
//! same set and environment yields the same result, so callers are free to
//! re-invoke or cache. All sorts are stable to keep output deterministic
//! across runs.

use crate::{
    config::Environment,
    document::{Document, DocumentKind, DocumentSet},
};

// ============================================================================
// Collection Kind
// ============================================================================

/// The named collections derived from the document set.
///
/// Pairs each collection's filter predicate with its order policy, so the
/// driver iterates a closed list of pipeline stages instead of registering
/// callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// Site navigation entries
    Nav,
    /// All listed articles, drafts included outside production
    Posts,
    /// Published articles marked `featured`, newest first
    Featured,
    /// Short-form notes, newest-discovered first
    Notes,
}

impl CollectionKind {
    /// Every collection, in derivation order.
    pub const ALL: [Self; 4] = [Self::Nav, Self::Posts, Self::Featured, Self::Notes];

    /// Get the collection name (used in logs and the collections output)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nav => "nav",
            Self::Posts => "posts",
            Self::Featured => "featured",
            Self::Notes => "notes",
        }
    }

    /// Order policy applied after filtering.
    const fn order(self) -> OrderPolicy {
        match self {
            Self::Nav => OrderPolicy::NavOrder,
            Self::Posts => OrderPolicy::Discovery,
            Self::Featured => OrderPolicy::DateDescending,
            Self::Notes => OrderPolicy::ReverseDiscovery,
        }
    }

    /// Membership predicate for one document.
    ///
    /// Total over any document: missing metadata reads as its default, an
    /// unrecognized kind simply matches no content collection.
    fn includes(self, doc: &Document, env: Environment) -> bool {
        match self {
            Self::Nav => doc.tags.contains("nav"),
            Self::Posts => {
                doc.kind.is_post_source()
                    && doc.meta.is_listed()
                    && !(doc.meta.draft && env.is_production())
            }
            Self::Featured => doc.kind == DocumentKind::Post && doc.meta.featured,
            Self::Notes => doc.kind == DocumentKind::Note,
        }
    }

    /// Derive this collection from the full document set.
    pub fn derive<'a>(self, docs: &'a DocumentSet, env: Environment) -> Vec<&'a Document> {
        let mut items: Vec<&Document> = docs.iter().filter(|doc| self.includes(doc, env)).collect();
        self.order().apply(&mut items);
        items
    }
}

// ============================================================================
// Order Policy
// ============================================================================

/// How a collection is ordered after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderPolicy {
    /// Keep discovery order
    Discovery,
    /// Ascending by `navorder`, missing values sort as 0; stable on ties
    NavOrder,
    /// Descending by `date`, missing dates last; stable on ties
    DateDescending,
    /// Positional reversal of discovery order (not a date sort)
    ReverseDiscovery,
}

impl OrderPolicy {
    fn apply(self, items: &mut Vec<&Document>) {
        match self {
            Self::Discovery => {}
            // `sort_by_key` is stable, so equal navorder keeps discovery order
            Self::NavOrder => items.sort_by_key(|doc| doc.meta.navorder.unwrap_or(0)),
            // `None < Some(_)`, so documents without a date end up last
            Self::DateDescending => items.sort_by(|a, b| b.meta.date.cmp(&a.meta.date)),
            Self::ReverseDiscovery => items.reverse(),
        }
    }
}

// ============================================================================
// Collections
// ============================================================================

/// All derived collections for one build.
///
/// A borrowed view over the document set; recomputed from scratch whenever
/// the set changes.
#[derive(Debug)]
pub struct Collections<'a> {
    pub nav: Vec<&'a Document>,
    pub posts: Vec<&'a Document>,
    pub featured: Vec<&'a Document>,
    pub notes: Vec<&'a Document>,
}

impl<'a> Collections<'a> {
    /// Run every collection pipeline over the document set.
    pub fn derive(docs: &'a DocumentSet, env: Environment) -> Self {
        Self {
            nav: CollectionKind::Nav.derive(docs, env),
            posts: CollectionKind::Posts.derive(docs, env),
            featured: CollectionKind::Featured.derive(docs, env),
            notes: CollectionKind::Notes.derive(docs, env),
        }
    }

    /// Documents of a collection, in final order.
    pub fn get(&self, kind: CollectionKind) -> &[&'a Document] {
        match kind {
            CollectionKind::Nav => &self.nav,
            CollectionKind::Posts => &self.posts,
            CollectionKind::Featured => &self.featured,
            CollectionKind::Notes => &self.notes,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Permalink;
    use crate::utils::date::DateTimeUtc;

    fn doc(path: &str, kind: DocumentKind) -> Document {
        Document::new(path, kind)
    }

    fn nav_doc(path: &str, navorder: Option<i64>) -> Document {
        let mut d = doc(path, DocumentKind::Page);
        d.tags.insert("nav".to_string());
        d.meta.navorder = navorder;
        d
    }

    fn set(docs: Vec<Document>) -> DocumentSet {
        DocumentSet::new(docs).unwrap()
    }

    fn paths<'a>(items: &[&'a Document]) -> Vec<&'a str> {
        items.iter().map(|d| d.path.as_str()).collect()
    }

    #[test]
    fn test_collection_names() {
        assert_eq!(CollectionKind::Nav.name(), "nav");
        assert_eq!(CollectionKind::Posts.name(), "posts");
        assert_eq!(CollectionKind::Featured.name(), "featured");
        assert_eq!(CollectionKind::Notes.name(), "notes");
    }

    // ========================================================================
    // nav
    // ========================================================================

    #[test]
    fn test_nav_filters_on_tag() {
        let docs = set(vec![
            nav_doc("about.md", Some(1)),
            doc("posts/a.md", DocumentKind::Post),
            nav_doc("posts/pinned.md", Some(2)),
        ]);
        let nav = CollectionKind::Nav.derive(&docs, Environment::Development);
        assert_eq!(paths(&nav), vec!["about.md", "posts/pinned.md"]);
    }

    #[test]
    fn test_nav_sorted_by_navorder() {
        let docs = set(vec![
            nav_doc("c.md", Some(3)),
            nav_doc("a.md", Some(1)),
            nav_doc("b.md", Some(2)),
        ]);
        let nav = CollectionKind::Nav.derive(&docs, Environment::Development);
        assert_eq!(paths(&nav), vec!["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn test_nav_equal_navorder_keeps_discovery_order() {
        let docs = set(vec![
            nav_doc("first.md", Some(5)),
            nav_doc("second.md", Some(5)),
            nav_doc("third.md", Some(1)),
        ]);
        let nav = CollectionKind::Nav.derive(&docs, Environment::Development);
        assert_eq!(paths(&nav), vec!["third.md", "first.md", "second.md"]);
    }

    #[test]
    fn test_nav_missing_navorder_sorts_as_zero() {
        let docs = set(vec![
            nav_doc("ordered.md", Some(1)),
            nav_doc("unordered.md", None),
        ]);
        let nav = CollectionKind::Nav.derive(&docs, Environment::Development);
        assert_eq!(paths(&nav), vec!["unordered.md", "ordered.md"]);
    }

    #[test]
    fn test_nav_ignores_environment() {
        let mut d = nav_doc("drafted.md", Some(1));
        d.meta.draft = true;
        let docs = set(vec![d]);
        let nav = CollectionKind::Nav.derive(&docs, Environment::Production);
        assert_eq!(nav.len(), 1);
    }

    // ========================================================================
    // posts
    // ========================================================================

    #[test]
    fn test_posts_include_posts_and_drafts_in_development() {
        let docs = set(vec![
            doc("posts/a.md", DocumentKind::Post),
            doc("drafts/b.md", DocumentKind::Draft),
            doc("notes/c.md", DocumentKind::Note),
            doc("about.md", DocumentKind::Page),
        ]);
        let posts = CollectionKind::Posts.derive(&docs, Environment::Development);
        assert_eq!(paths(&posts), vec!["posts/a.md", "drafts/b.md"]);
    }

    #[test]
    fn test_posts_draft_flag_hidden_in_production_only() {
        let mut draft = doc("posts/wip.md", DocumentKind::Post);
        draft.meta.draft = true;
        let docs = set(vec![doc("posts/done.md", DocumentKind::Post), draft]);

        let dev = CollectionKind::Posts.derive(&docs, Environment::Development);
        assert_eq!(paths(&dev), vec!["posts/done.md", "posts/wip.md"]);

        let prod = CollectionKind::Posts.derive(&docs, Environment::Production);
        assert_eq!(paths(&prod), vec!["posts/done.md"]);
    }

    #[test]
    fn test_posts_permalink_false_excluded_everywhere() {
        let mut unlisted = doc("posts/hidden.md", DocumentKind::Post);
        unlisted.meta.permalink = Some(Permalink::Enabled(false));
        let docs = set(vec![unlisted]);

        for env in [Environment::Development, Environment::Production] {
            assert!(CollectionKind::Posts.derive(&docs, env).is_empty());
        }
    }

    #[test]
    fn test_posts_custom_permalink_included() {
        let mut custom = doc("posts/moved.md", DocumentKind::Post);
        custom.meta.permalink = Some(Permalink::Custom("/elsewhere/".to_string()));
        let docs = set(vec![custom]);
        let posts = CollectionKind::Posts.derive(&docs, Environment::Production);
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn test_posts_keep_discovery_order() {
        let docs = set(vec![
            doc("posts/z.md", DocumentKind::Post),
            doc("posts/a.md", DocumentKind::Post),
            doc("posts/m.md", DocumentKind::Post),
        ]);
        let posts = CollectionKind::Posts.derive(&docs, Environment::Production);
        assert_eq!(paths(&posts), vec!["posts/z.md", "posts/a.md", "posts/m.md"]);
    }

    // ========================================================================
    // featured
    // ========================================================================

    fn featured_doc(path: &str, date: Option<DateTimeUtc>) -> Document {
        let mut d = doc(path, DocumentKind::Post);
        d.meta.featured = true;
        d.meta.date = date;
        d
    }

    #[test]
    fn test_featured_excludes_drafts_and_notes() {
        let mut draft = doc("drafts/d.md", DocumentKind::Draft);
        draft.meta.featured = true;
        let mut note = doc("notes/n.md", DocumentKind::Note);
        note.meta.featured = true;
        let docs = set(vec![
            featured_doc("posts/p.md", None),
            draft,
            note,
            doc("posts/plain.md", DocumentKind::Post),
        ]);
        let featured = CollectionKind::Featured.derive(&docs, Environment::Development);
        assert_eq!(paths(&featured), vec!["posts/p.md"]);
    }

    #[test]
    fn test_featured_sorted_date_descending() {
        let docs = set(vec![
            featured_doc("posts/middle.md", Some(DateTimeUtc::from_ymd(2023, 1, 1))),
            featured_doc("posts/newest.md", Some(DateTimeUtc::from_ymd(2024, 6, 1))),
            featured_doc("posts/oldest.md", Some(DateTimeUtc::from_ymd(2022, 3, 1))),
        ]);
        let featured = CollectionKind::Featured.derive(&docs, Environment::Development);
        assert_eq!(
            paths(&featured),
            vec!["posts/newest.md", "posts/middle.md", "posts/oldest.md"]
        );
    }

    #[test]
    fn test_featured_equal_dates_keep_discovery_order() {
        let date = Some(DateTimeUtc::from_ymd(2024, 1, 1));
        let docs = set(vec![
            featured_doc("posts/first.md", date),
            featured_doc("posts/second.md", date),
        ]);
        let featured = CollectionKind::Featured.derive(&docs, Environment::Development);
        assert_eq!(paths(&featured), vec!["posts/first.md", "posts/second.md"]);
    }

    #[test]
    fn test_featured_missing_date_sorts_last() {
        let docs = set(vec![
            featured_doc("posts/undated.md", None),
            featured_doc("posts/dated.md", Some(DateTimeUtc::from_ymd(2020, 1, 1))),
        ]);
        let featured = CollectionKind::Featured.derive(&docs, Environment::Development);
        assert_eq!(paths(&featured), vec!["posts/dated.md", "posts/undated.md"]);
    }

    // ========================================================================
    // notes
    // ========================================================================

    #[test]
    fn test_notes_reversed_discovery_order() {
        let docs = set(vec![
            doc("notes/a.md", DocumentKind::Note),
            doc("notes/b.md", DocumentKind::Note),
            doc("notes/c.md", DocumentKind::Note),
        ]);
        let notes = CollectionKind::Notes.derive(&docs, Environment::Development);
        assert_eq!(paths(&notes), vec!["notes/c.md", "notes/b.md", "notes/a.md"]);
    }

    #[test]
    fn test_notes_reversal_is_positional_not_chronological() {
        // Reversal flips discovery order even when that order is not
        // date-ordered; a date sort would put the 2024 note first.
        let mut old = doc("notes/old.md", DocumentKind::Note);
        old.meta.date = Some(DateTimeUtc::from_ymd(2020, 1, 1));
        let mut new = doc("notes/new.md", DocumentKind::Note);
        new.meta.date = Some(DateTimeUtc::from_ymd(2024, 1, 1));
        let docs = set(vec![new, old]);

        let notes = CollectionKind::Notes.derive(&docs, Environment::Development);
        assert_eq!(paths(&notes), vec!["notes/old.md", "notes/new.md"]);
    }

    // ========================================================================
    // cross-cutting
    // ========================================================================

    #[test]
    fn test_page_kind_excluded_from_content_collections() {
        let docs = set(vec![doc("misc/readme.md", DocumentKind::Page)]);
        for kind in [
            CollectionKind::Posts,
            CollectionKind::Featured,
            CollectionKind::Notes,
        ] {
            assert!(kind.derive(&docs, Environment::Development).is_empty());
        }
    }

    #[test]
    fn test_derivation_is_repeatable() {
        let mut featured = featured_doc("posts/f.md", Some(DateTimeUtc::from_ymd(2024, 2, 2)));
        featured.tags.insert("nav".to_string());
        let docs = set(vec![
            featured,
            doc("notes/n.md", DocumentKind::Note),
            doc("drafts/d.md", DocumentKind::Draft),
        ]);

        let first = Collections::derive(&docs, Environment::Production);
        let second = Collections::derive(&docs, Environment::Production);
        for kind in CollectionKind::ALL {
            assert_eq!(paths(first.get(kind)), paths(second.get(kind)));
        }
    }

    #[test]
    fn test_collections_derive_all() {
        let mut draft = doc("drafts/d.md", DocumentKind::Draft);
        draft.meta.draft = true;
        let docs = set(vec![
            nav_doc("about.md", Some(1)),
            featured_doc("posts/f.md", Some(DateTimeUtc::from_ymd(2024, 1, 1))),
            draft,
            doc("notes/n.md", DocumentKind::Note),
        ]);

        let collections = Collections::derive(&docs, Environment::Production);
        assert_eq!(paths(&collections.nav), vec!["about.md"]);
        assert_eq!(paths(&collections.posts), vec!["posts/f.md"]);
        assert_eq!(paths(&collections.featured), vec!["posts/f.md"]);
        assert_eq!(paths(&collections.notes), vec!["notes/n.md"]);
    }
}
