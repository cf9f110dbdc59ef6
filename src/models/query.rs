//! Query types.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use super::ContentType;
use super::taxonomy::ALL_SENTINEL;

/// How a multi-tag constraint combines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMatch {
    /// Record must carry at least one of the requested tags (default).
    #[default]
    Any,
    /// Record must carry every requested tag.
    All,
}

impl TagMatch {
    /// Returns the mode as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
        }
    }

    /// Parses a tag match mode, returning `None` for unrecognized values.
    #[must_use]
    pub fn try_parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "any" | "or" => Some(Self::Any),
            "all" | "and" => Some(Self::All),
            _ => None,
        }
    }

    /// Parses a tag match mode. Unrecognized values log a warning and fall
    /// back to `Any`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Self::try_parse(s).unwrap_or_else(|| {
            warn!(value = %s, "Unrecognized tag match mode, using any");
            Self::Any
        })
    }
}

impl fmt::Display for TagMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single filter request.
///
/// Every field is optional; an empty query matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    /// Free-text substring; empty means no text constraint.
    pub term: String,
    /// Optional type constraint.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    /// Optional category constraint (exact match).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Required tags; empty means no tag constraint.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// How `tags` combine.
    pub tag_match: TagMatch,
}

impl Query {
    /// Creates an empty query (matches all).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            term: String::new(),
            content_type: None,
            category: None,
            tags: Vec::new(),
            tag_match: TagMatch::Any,
        }
    }

    /// Sets the free-text term.
    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Sets the type constraint.
    #[must_use]
    pub const fn with_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Sets the type constraint from a selector value.
    ///
    /// The `"all"` sentinel and unrecognized values clear the constraint.
    #[must_use]
    pub fn with_type_selector(mut self, selector: &str) -> Self {
        self.content_type = ContentType::from_selector(selector);
        self
    }

    /// Sets the category constraint.
    ///
    /// The `"all"` sentinel and an empty value clear the constraint.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.is_empty() || category == ALL_SENTINEL {
            None
        } else {
            Some(category)
        };
        self
    }

    /// Adds a required tag. Blank tags are ignored.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let trimmed = tag.trim();
        if !trimmed.is_empty() {
            self.tags.push(trimmed.to_string());
        }
        self
    }

    /// Sets how tags combine.
    #[must_use]
    pub const fn with_tag_match(mut self, tag_match: TagMatch) -> Self {
        self.tag_match = tag_match;
        self
    }

    /// Toggles a tag: removes it if present (case-insensitive), adds it otherwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        let needle = tag.trim().to_lowercase();
        if needle.is_empty() {
            return;
        }
        let before = self.tags.len();
        self.tags.retain(|t| t.to_lowercase() != needle);
        if self.tags.len() == before {
            self.tags.push(tag.trim().to_string());
        }
    }

    /// Returns true if the query carries no constraint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
            && self.content_type.is_none()
            && self.category.is_none()
            && self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_query_is_empty() {
        assert!(Query::new().is_empty());
        assert_eq!(Query::new(), Query::default());
    }

    #[test]
    fn test_all_sentinel_clears_constraints() {
        let query = Query::new().with_type_selector("all").with_category("all");
        assert!(query.content_type.is_none());
        assert!(query.category.is_none());
        assert!(query.is_empty());
    }

    #[test]
    fn test_type_selector_parses_known_type() {
        let query = Query::new().with_type_selector("Quarry");
        assert_eq!(query.content_type, Some(ContentType::Quarry));
    }

    #[test]
    fn test_toggle_tag() {
        let mut query = Query::new();
        query.toggle_tag("italy");
        assert_eq!(query.tags, vec!["italy"]);
        query.toggle_tag("ITALY");
        assert!(query.tags.is_empty());
        query.toggle_tag("   ");
        assert!(query.tags.is_empty());
    }

    #[test]
    fn test_tag_match_parse() {
        assert_eq!(TagMatch::parse("all"), TagMatch::All);
        assert_eq!(TagMatch::parse("AND"), TagMatch::All);
        assert_eq!(TagMatch::parse("any"), TagMatch::Any);
        assert_eq!(TagMatch::parse("bogus"), TagMatch::Any);
        assert_eq!(TagMatch::try_parse(" Or "), Some(TagMatch::Any));
        assert_eq!(TagMatch::try_parse("bogus"), None);
    }
}
