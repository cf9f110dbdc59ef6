//! Filter predicate builder.
//!
//! Turns a [`Query`] into a [`RecordPredicate`]: one compiled test over a
//! record. Case folding of the query happens once here, not per record.
//!
//! Matching rules, all `AND`ed together:
//!
//! | Constraint | Active when | Record matches when |
//! |------------|-------------|---------------------|
//! | term | `term` non-empty | term is a case-insensitive substring of title, description, or any tag |
//! | type | `content_type` set | `record.content_type == type` |
//! | category | `category` set | `record.category == category` (exact) |
//! | tags | `tags` non-empty | any (or all, per `tag_match`) requested tag equals a record tag, ignoring case |

use crate::models::{ContentRecord, ContentType, Query, TagMatch};

/// A compiled filter over catalog records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPredicate {
    term: Option<String>,
    content_type: Option<ContentType>,
    category: Option<String>,
    tags: Vec<String>,
    tag_match: TagMatch,
}

impl RecordPredicate {
    /// Returns a predicate that accepts every record.
    #[must_use]
    pub const fn accept_all() -> Self {
        Self {
            term: None,
            content_type: None,
            category: None,
            tags: Vec::new(),
            tag_match: TagMatch::Any,
        }
    }

    /// Tests a record against every active constraint.
    #[must_use]
    pub fn matches(&self, record: &ContentRecord) -> bool {
        self.matches_type(record)
            && self.matches_category(record)
            && self.matches_tags(record)
            && self.matches_term(record)
    }

    /// Returns true if no constraint is active.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.term.is_none()
            && self.content_type.is_none()
            && self.category.is_none()
            && self.tags.is_empty()
    }

    /// Converts the predicate into a plain closure.
    pub fn into_fn(self) -> impl Fn(&ContentRecord) -> bool {
        move |record| self.matches(record)
    }

    fn matches_term(&self, record: &ContentRecord) -> bool {
        let Some(term) = self.term.as_deref() else {
            return true;
        };
        record.title.to_lowercase().contains(term)
            || record.description.to_lowercase().contains(term)
            || record.tags.iter().any(|tag| tag.to_lowercase().contains(term))
    }

    fn matches_type(&self, record: &ContentRecord) -> bool {
        self.content_type
            .is_none_or(|content_type| record.content_type == content_type)
    }

    fn matches_category(&self, record: &ContentRecord) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| record.category == category)
    }

    fn matches_tags(&self, record: &ContentRecord) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        let record_tags: Vec<String> = record.tags.iter().map(|t| t.to_lowercase()).collect();
        let carries = |wanted: &String| record_tags.iter().any(|t| t == wanted);
        match self.tag_match {
            TagMatch::Any => self.tags.iter().any(carries),
            TagMatch::All => self.tags.iter().all(carries),
        }
    }
}

impl Default for RecordPredicate {
    fn default() -> Self {
        Self::accept_all()
    }
}

/// Builds the predicate for a query.
///
/// Absent or empty fields never restrict the result; an empty query yields
/// a predicate that accepts everything.
///
/// # Examples
///
/// ```
/// use stonecat::{ContentRecord, ContentType, Query, build_predicate};
///
/// let record = ContentRecord::new("1", ContentType::Marble, "Carrara Marble")
///     .with_tags(["marble", "italy"]);
/// assert!(build_predicate(&Query::new().with_term("ITALY")).matches(&record));
/// assert!(!build_predicate(&Query::new().with_type(ContentType::Quarry)).matches(&record));
/// ```
#[must_use]
pub fn build_predicate(query: &Query) -> RecordPredicate {
    RecordPredicate {
        term: (!query.term.is_empty()).then(|| query.term.to_lowercase()),
        content_type: query.content_type,
        category: query.category.clone(),
        tags: query.tags.iter().map(|t| t.to_lowercase()).collect(),
        tag_match: query.tag_match,
    }
}
