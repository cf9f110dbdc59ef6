//! In-memory catalog.
//!
//! A [`Dataset`] is the ordered, read-only collection every query runs
//! against. It is built once at load time, either from a catalog file
//! ([`formats`]) or from the built-in seed data ([`fixtures`]), and never
//! mutated afterwards.

pub mod fixtures;
pub mod formats;
pub mod ingest;

pub use formats::{Format, load_dataset, read_raw_records};
pub use ingest::{IngestReport, RawId, RawRecord, RecordValidator, ValidationIssue};

use crate::config::StonecatConfig;
use crate::models::{ALL_SENTINEL, ContentRecord, RecordId};
use crate::{Error, Result};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Opens the catalog named by `config`, or the seed catalog if none is set.
///
/// # Errors
///
/// Returns an error if the configured catalog cannot be loaded.
pub fn open(config: &StonecatConfig) -> Result<IngestReport> {
    let validator = if config.lenient {
        RecordValidator::lenient()
    } else {
        RecordValidator::new()
    };

    match config.catalog_path.as_deref() {
        Some(path) => load_dataset(path, validator),
        None => {
            debug!("No catalog configured, using seed catalog");
            Ok(IngestReport {
                dataset: fixtures::seed_dataset()?,
                issues: Vec::new(),
            })
        },
    }
}

/// Ordered collection of validated catalog records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<ContentRecord>,
    positions: HashMap<RecordId, usize>,
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a dataset, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if two records share an id, or if a
    /// record has an empty id or title.
    pub fn from_records(records: Vec<ContentRecord>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.id.as_str().trim().is_empty() {
                return Err(Error::InvalidInput(format!(
                    "record at position {position} has an empty id"
                )));
            }
            if record.title.trim().is_empty() {
                return Err(Error::InvalidInput(format!(
                    "record '{}' has an empty title",
                    record.id
                )));
            }
            if positions.insert(record.id.clone(), position).is_some() {
                return Err(Error::InvalidInput(format!(
                    "duplicate record id: {}",
                    record.id
                )));
            }
        }
        Ok(Self { records, positions })
    }

    /// Returns all records in insertion order.
    ///
    /// The iterator borrows the dataset and can be recreated any number of
    /// times without side effects.
    pub fn all(&self) -> std::slice::Iter<'_, ContentRecord> {
        self.records.iter()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ContentRecord] {
        &self.records
    }

    /// Returns the distinct category labels, `"all"` first.
    ///
    /// Labels appear in order of first occurrence. Records without a
    /// category contribute nothing.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut categories = vec![ALL_SENTINEL.to_string()];
        for record in &self.records {
            let category = record.category.as_str();
            if !category.is_empty() && seen.insert(category) {
                categories.push(category.to_string());
            }
        }
        categories
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ContentRecord> {
        self.positions
            .get(&RecordId::new(id))
            .and_then(|&position| self.records.get(position))
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a ContentRecord;
    type IntoIter = std::slice::Iter<'a, ContentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}
