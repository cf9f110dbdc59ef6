//! Catalog record types and identifiers.

use serde::Serialize;
use std::fmt;

use super::ContentType;

/// Unique identifier for a catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new record ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Informational, type-specific attributes.
///
/// None of these take part in filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordAttributes {
    /// Stone or material, e.g. "White Carrara Marble".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Historical era, e.g. "Roman (126 AD)".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
    /// Human-readable location, e.g. "Carrara, Italy".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Latitude and longitude in decimal degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<(f64, f64)>,
}

impl RecordAttributes {
    /// Returns true if no attribute is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.material.is_none()
            && self.era.is_none()
            && self.location.is_none()
            && self.coordinates.is_none()
    }
}

/// A validated directory entry.
///
/// Records are only constructed through the ingestion boundary
/// ([`crate::catalog::ingest::RecordValidator`]) or the builder below, so
/// `title` is never empty and `tags` never contains case-insensitive
/// duplicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRecord {
    /// Unique identifier within a dataset.
    pub id: RecordId,
    /// Content type.
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Display name.
    pub title: String,
    /// Free-text summary used for search matching.
    pub description: String,
    /// Single classification label, matched exactly.
    pub category: String,
    /// Free-text labels, matched case-insensitively.
    pub tags: Vec<String>,
    /// Whether the record is shown in the featured tier.
    pub featured: bool,
    /// Informational attributes.
    #[serde(skip_serializing_if = "RecordAttributes::is_empty")]
    pub attributes: RecordAttributes,
}

impl ContentRecord {
    /// Creates a record with the required fields and no tags.
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        content_type: ContentType,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content_type,
            title: title.into(),
            description: String::new(),
            category: String::new(),
            tags: Vec::new(),
            featured: false,
            attributes: RecordAttributes::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Adds a tag, skipping case-insensitive duplicates and blank tags.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let trimmed = tag.trim();
        if !trimmed.is_empty() && !self.has_tag(trimmed) {
            self.tags.push(trimmed.to_string());
        }
        self
    }

    /// Adds several tags.
    #[must_use]
    pub fn with_tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tags.into_iter().fold(self, Self::with_tag)
    }

    /// Sets the featured flag.
    #[must_use]
    pub const fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Sets the informational attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: RecordAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Returns true if the record carries `tag` (case-insensitive).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let needle = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_display() {
        let id = RecordId::new("carrara-1");
        assert_eq!(id.as_str(), "carrara-1");
        assert_eq!(id.to_string(), "carrara-1");
        assert_eq!(RecordId::from("x"), RecordId::from("x".to_string()));
    }

    #[test]
    fn test_with_tags_dedupes_case_insensitively() {
        let record = ContentRecord::new("1", ContentType::Marble, "Carrara Marble")
            .with_tags(["Marble", "italy", "marble", "  ", " Italy "]);
        assert_eq!(record.tags, vec!["Marble", "italy"]);
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let record =
            ContentRecord::new("1", ContentType::Quarry, "Yorkshire Quarry").with_tag("UK");
        assert!(record.has_tag("uk"));
        assert!(record.has_tag("Uk"));
        assert!(!record.has_tag("u"));
    }

    #[test]
    fn test_serialize_uses_type_key() {
        let record = ContentRecord::new("2", ContentType::Company, "Stone Heritage Ltd");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "company");
        assert!(json.get("attributes").is_none());
    }
}
