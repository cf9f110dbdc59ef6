//! Two-tier partitioning of filtered results.

use crate::models::{ContentRecord, Partition};

/// Splits `items` into those accepted by `promote` and the rest.
///
/// Every item lands in exactly one bucket, and each bucket keeps the input
/// order.
#[must_use]
pub fn partition_by<T, F>(items: &[T], promote: F) -> Partition<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let mut partition = Partition::new();
    for item in items {
        if promote(item) {
            partition.featured.push(item.clone());
        } else {
            partition.regular.push(item.clone());
        }
    }
    partition
}

/// Splits filtered records into featured and regular buckets.
///
/// # Examples
///
/// ```
/// use stonecat::{Query, filter_records, partition_featured};
///
/// let dataset = stonecat::catalog::fixtures::seed_dataset()?;
/// let hits = filter_records(&dataset, &Query::new());
/// let split = partition_featured(&hits);
/// assert!(split.featured.iter().all(|r| r.featured));
/// assert!(split.regular.iter().all(|r| !r.featured));
/// # Ok::<(), stonecat::Error>(())
/// ```
#[must_use]
pub fn partition_featured<'a>(records: &[&'a ContentRecord]) -> Partition<&'a ContentRecord> {
    partition_by(records, |record| record.featured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentType;

    #[test]
    fn test_partition_featured_keeps_order() {
        let records = [
            ContentRecord::new("1", ContentType::Marble, "A").with_featured(true),
            ContentRecord::new("2", ContentType::Marble, "B"),
            ContentRecord::new("3", ContentType::Marble, "C").with_featured(true),
            ContentRecord::new("4", ContentType::Marble, "D"),
        ];
        let refs: Vec<&ContentRecord> = records.iter().collect();
        let split = partition_featured(&refs);

        let featured: Vec<&str> = split.featured.iter().map(|r| r.id.as_str()).collect();
        let regular: Vec<&str> = split.regular.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(featured, vec!["1", "3"]);
        assert_eq!(regular, vec!["2", "4"]);
        assert_eq!(split.len(), 4);
    }

    #[test]
    fn test_partition_empty_input() {
        let split = partition_featured(&[]);
        assert!(split.is_empty());
    }

    #[test]
    fn test_partition_by_generic() {
        let split = partition_by(&[5, 1, 8, 2], |n| *n > 3);
        assert_eq!(split.featured, vec![5, 8]);
        assert_eq!(split.regular, vec![1, 2]);
    }
}
