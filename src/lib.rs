//! # simgroup
//!
//! Groups items by feature-vector similarity using repeated 1-dimensional
//! sort passes instead of a geometric index or a pairwise distance matrix.
//! Built for datasets too large for O(n²) comparison but small enough to
//! sort repeatedly in memory.
//!
//! ## Quick Start
//!
//! ### As a Command
//!
//! ```bash
//! simgroup --file jpg_levels.json --threshold 20 --adj-threshold 4000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use simgroup::prelude::*;
//!
//! let entries = vec![
//!     ("a.jpg".to_string(), vec![0.0, 10.0]),
//!     ("b.jpg".to_string(), vec![1.0, 11.0]),
//! ];
//! let mut store = RecordStore::from_entries(entries).unwrap();
//! let summary = pipeline::run(&mut store, &GroupingConfig::default()).unwrap();
//! println!("{} groups", summary.groups);
//! ```
//!
//! ## Crate Structure
//!
//! - `simgroup-core` - record store, sort-pass neighbor pooling, adjacency
//!   selection, component labeling
//! - `simgroup` (this crate) - CLI and JSON input glue

pub mod input;

// Re-export core types
pub use simgroup_core::{
    Error, FeatureVector, GroupSummary, GroupingConfig, Record, RecordStore, Result,
};
pub use simgroup_core::pipeline;

pub use input::{load_records, InputError, InputRecord};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_records, pipeline, Error, FeatureVector, GroupSummary, GroupingConfig, InputRecord,
        Record, RecordStore, Result,
    };
}
