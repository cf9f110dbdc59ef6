//! Catalog ingestion and validation.
//!
//! Catalog sources hand over loosely shaped [`RawRecord`]s. The
//! [`RecordValidator`] turns them into typed [`ContentRecord`]s, rejecting
//! anything that would break a dataset invariant: unknown content types,
//! empty ids or titles, duplicate ids, out-of-range coordinates.
//!
//! # Field Mapping
//!
//! | Field | Required | Default |
//! |-------|----------|---------|
//! | `id` | Yes (string or integer) | - |
//! | `type` | Yes | - |
//! | `title` (alias `name`) | Yes | - |
//! | `description` | No | `""` |
//! | `category` | No | `""` |
//! | `tags` | No | `[]` |
//! | `featured` (alias `isPinned`) | No | `false` |
//! | `material`, `era`, `location` | No | `None` |
//! | `lat`, `lng` | No, but both or neither | `None` |

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, instrument, warn};

use super::Dataset;
use crate::models::{ContentRecord, ContentType, RecordAttributes, RecordId};
use crate::{Error, Result};

/// Record identifier as found in source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    /// String identifier.
    Text(String),
    /// Numeric identifier.
    Number(i64),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Untyped record shape accepted from catalog sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Record identifier.
    pub id: RawId,
    /// Content type identifier, validated against the taxonomy.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Display name.
    #[serde(alias = "name")]
    pub title: String,
    /// Free-text summary.
    #[serde(default)]
    pub description: String,
    /// Classification label.
    #[serde(default)]
    pub category: String,
    /// Free-text labels.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Featured flag.
    #[serde(default, alias = "isPinned")]
    pub featured: Option<bool>,
    /// Stone or material.
    #[serde(default)]
    pub material: Option<String>,
    /// Historical era.
    #[serde(default)]
    pub era: Option<String>,
    /// Human-readable location.
    #[serde(default)]
    pub location: Option<String>,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub lng: Option<f64>,
}

impl RawRecord {
    /// Creates a raw record with the required fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        content_type: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: RawId::Text(id.into()),
            content_type: content_type.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            tags: Vec::new(),
            featured: None,
            material: None,
            era: None,
            location: None,
            lat: None,
            lng: None,
        }
    }
}

/// A problem found with one source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Zero-based position of the record in the source.
    pub position: usize,
    /// Record id as written in the source.
    pub record_id: String,
    /// Description of the problem.
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record #{} ({}): {}",
            self.position, self.record_id, self.message
        )
    }
}

/// Outcome of ingesting a batch of source records.
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// The validated dataset.
    pub dataset: Dataset,
    /// Records that were skipped (lenient mode only).
    pub issues: Vec<ValidationIssue>,
}

/// Validates raw records at the ingestion boundary.
///
/// In strict mode (the default) the first invalid record fails the whole
/// load. In lenient mode invalid records are skipped and reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordValidator {
    lenient: bool,
}

impl RecordValidator {
    /// Creates a strict validator.
    #[must_use]
    pub const fn new() -> Self {
        Self { lenient: false }
    }

    /// Creates a validator that skips invalid records instead of failing.
    #[must_use]
    pub const fn lenient() -> Self {
        Self { lenient: true }
    }

    /// Returns true if this validator skips invalid records.
    #[must_use]
    pub const fn is_lenient(&self) -> bool {
        self.lenient
    }

    /// Validates a single raw record.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownType`] if `type` is outside the taxonomy
    /// - [`Error::InvalidInput`] for an empty id or title, or bad coordinates
    pub fn validate(&self, raw: RawRecord) -> Result<ContentRecord> {
        let id = raw.id.to_string();
        if id.trim().is_empty() {
            return Err(Error::InvalidInput("record id is empty".to_string()));
        }
        let content_type: ContentType = raw.content_type.parse()?;
        let title = raw.title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput(format!("record '{id}' has an empty title")));
        }

        let coordinates = match (raw.lat, raw.lng) {
            (Some(lat), Some(lng)) => Some(validate_coordinates(&id, lat, lng)?),
            (None, None) => None,
            _ => {
                return Err(Error::InvalidInput(format!(
                    "record '{id}' must set both lat and lng, or neither"
                )));
            },
        };

        let attributes = RecordAttributes {
            material: non_blank(raw.material),
            era: non_blank(raw.era),
            location: non_blank(raw.location),
            coordinates,
        };

        Ok(
            ContentRecord::new(RecordId::new(id.trim()), content_type, title)
                .with_description(raw.description.trim())
                .with_category(raw.category.trim())
                .with_tags(raw.tags)
                .with_featured(raw.featured.unwrap_or(false))
                .with_attributes(attributes),
        )
    }

    /// Validates a batch of raw records into a dataset.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first validation error (including
    /// duplicate ids). Lenient mode never fails.
    #[instrument(skip(self, raws), fields(lenient = self.lenient))]
    pub fn ingest<I>(&self, raws: I) -> Result<IngestReport>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut records = Vec::new();
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for (position, raw) in raws.into_iter().enumerate() {
            let record_id = raw.id.to_string();
            let outcome = self.validate(raw).and_then(|record| {
                if seen.insert(record.id.clone()) {
                    Ok(record)
                } else {
                    Err(Error::InvalidInput(format!("duplicate record id: {}", record.id)))
                }
            });

            match outcome {
                Ok(record) => records.push(record),
                Err(e) if self.lenient => {
                    warn!(position, record_id = %record_id, error = %e, "Skipping invalid catalog record");
                    issues.push(ValidationIssue {
                        position,
                        record_id,
                        message: e.to_string(),
                    });
                },
                Err(e) => return Err(e),
            }
        }

        debug!(accepted = records.len(), skipped = issues.len(), "Catalog ingested");
        let dataset = Dataset::from_records(records)?;
        Ok(IngestReport { dataset, issues })
    }
}

fn validate_coordinates(id: &str, lat: f64, lng: f64) -> Result<(f64, f64)> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(Error::InvalidInput(format!(
            "record '{id}' has out-of-range coordinates ({lat}, {lng})"
        )));
    }
    Ok((lat, lng))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
