//! Filtering services.
//!
//! The query pipeline used by every search surface:
//!
//! | Stage | Function |
//! |-------|----------|
//! | Parse | [`parse_filter_query`] turns search-box text into a [`Query`](crate::Query) |
//! | Build | [`build_predicate`] compiles the query into a [`RecordPredicate`] |
//! | Filter | [`filter_records`] / [`FilterEngine`] apply it to a dataset |
//! | Split | [`partition_featured`] separates featured records for display |
//!
//! The business calculator ([`estimate`]) lives here too.

mod engine;
pub mod estimate;
mod partition;
mod predicate;
mod query_parser;

pub use engine::{FilterEngine, filter_records};
pub use estimate::{Estimate, Material, estimate};
pub use partition::{partition_by, partition_featured};
pub use predicate::{RecordPredicate, build_predicate};
pub use query_parser::{apply_filter_query, parse_filter_query};
