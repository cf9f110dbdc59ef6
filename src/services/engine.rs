//! Filter engine.
//!
//! Applies a [`RecordPredicate`] to a [`Dataset`] with a single linear scan.
//! The result is always a subsequence of the dataset's order: records are
//! never re-sorted, and the dataset is never modified.

use tracing::{debug, instrument};

use super::predicate::{RecordPredicate, build_predicate};
use crate::catalog::Dataset;
use crate::models::{ContentRecord, Query};

/// Read-only filtering over one dataset.
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> FilterEngine<'a> {
    /// Creates an engine over `dataset`.
    #[must_use]
    pub const fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Returns the underlying dataset.
    #[must_use]
    pub const fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Returns the records accepted by `predicate`, in dataset order.
    #[must_use]
    pub fn apply(&self, predicate: &RecordPredicate) -> Vec<&'a ContentRecord> {
        let matches: Vec<&'a ContentRecord> = self
            .dataset
            .all()
            .filter(|record| predicate.matches(record))
            .collect();

        metrics::counter!("stonecat_filter_total").increment(1);
        metrics::counter!("stonecat_filter_matches").increment(matches.len() as u64);
        matches
    }

    /// Builds the predicate for `query` and applies it.
    #[must_use]
    #[instrument(skip(self), fields(records = self.dataset.len()))]
    pub fn search(&self, query: &Query) -> Vec<&'a ContentRecord> {
        let predicate = build_predicate(query);
        let matches = self.apply(&predicate);
        debug!(matched = matches.len(), "Filter applied");
        matches
    }

    /// Counts the records accepted by `predicate` without collecting them.
    #[must_use]
    pub fn count(&self, predicate: &RecordPredicate) -> usize {
        self.dataset
            .all()
            .filter(|record| predicate.matches(record))
            .count()
    }
}

/// Filters `dataset` by `query`, preserving dataset order.
///
/// # Examples
///
/// ```
/// use stonecat::{ContentType, Query, filter_records};
///
/// let dataset = stonecat::catalog::fixtures::seed_dataset()?;
/// let quarries = filter_records(&dataset, &Query::new().with_type(ContentType::Quarry));
/// assert!(quarries.iter().all(|r| r.content_type == ContentType::Quarry));
/// # Ok::<(), stonecat::Error>(())
/// ```
#[must_use]
pub fn filter_records<'a>(dataset: &'a Dataset, query: &Query) -> Vec<&'a ContentRecord> {
    FilterEngine::new(dataset).search(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::seed_dataset;
    use crate::models::ContentType;

    fn ids<'a>(records: &[&'a ContentRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let dataset = seed_dataset().unwrap();
        let all: Vec<&ContentRecord> = dataset.all().collect();
        assert_eq!(filter_records(&dataset, &Query::new()), all);
    }

    #[test]
    fn test_results_keep_dataset_order() {
        let dataset = seed_dataset().unwrap();
        let hits = filter_records(&dataset, &Query::new().with_term("marble"));
        assert_eq!(ids(&hits), vec!["1", "3", "7", "8", "10"]);
    }

    #[test]
    fn test_type_and_tag() {
        let dataset = seed_dataset().unwrap();
        let query = Query::new().with_type(ContentType::Company).with_tag("uk");
        assert_eq!(ids(&filter_records(&dataset, &query)), vec!["4", "6"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let dataset = seed_dataset().unwrap();
        assert!(filter_records(&dataset, &Query::new().with_term("spaceship")).is_empty());
    }

    #[test]
    fn test_count_agrees_with_apply() {
        let dataset = seed_dataset().unwrap();
        let engine = FilterEngine::new(&dataset);
        let predicate = build_predicate(&Query::new().with_category("Logistics"));
        assert_eq!(engine.count(&predicate), engine.apply(&predicate).len());
        assert_eq!(engine.count(&predicate), 2);
    }

    #[test]
    fn test_search_is_deterministic() {
        let dataset = seed_dataset().unwrap();
        let engine = FilterEngine::new(&dataset);
        let query = Query::new().with_term("italy");
        assert_eq!(engine.search(&query), engine.search(&query));
    }
}
