//! facemetric-store — Per-user history of face analyses.
//!
//! Records live in a single SQLite table; each analysis is stored with its
//! shape, score, ratios and the source it came from.

pub mod record;
pub mod store;

pub use record::{AnalysisSource, HistoryItem};
pub use store::{HistoryStore, StoreError, DEFAULT_HISTORY_LIMIT};
