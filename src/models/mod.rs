//! Data models for stonecat.
//!
//! This module contains the core data structures shared by the catalog,
//! the filtering services, and the CLI.

mod partition;
mod query;
mod record;
pub mod taxonomy;

pub use partition::Partition;
pub use query::{Query, TagMatch};
pub use record::{ContentRecord, RecordAttributes, RecordId};
pub use taxonomy::{ALL_SENTINEL, ContentType, DisplayMeta, display_meta_for, types_of};
