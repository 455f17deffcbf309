//! # simgroup Core
//!
//! Core library for the simgroup similarity clusterer.
//!
//! Clusters items described by fixed-length numeric feature vectors into
//! groups of mutual similarity using only repeated 1-dimensional sort
//! passes - no geometric index, no pairwise distance matrix. The pipeline
//! runs three stages over an index-stable record store:
//!
//! - [`pool::pool_neighbors`] - per-dimension sort passes register nearby
//!   records as pooling candidates
//! - [`adjacency::select_adjacent`] - scores pooled candidates by average
//!   per-dimension difference and keeps the closest few
//! - [`label::label_components`] - depth-first traversal of the adjacency
//!   graph assigns group ids and counts populations
//!
//! ## Example
//!
//! ```rust
//! use simgroup_core::{GroupingConfig, RecordStore, pipeline};
//!
//! let entries = vec![
//!     ("a.jpg".to_string(), vec![0.0, 10.0]),
//!     ("b.jpg".to_string(), vec![1.0, 11.0]),
//!     ("c.jpg".to_string(), vec![500.0, 900.0]),
//! ];
//! let mut store = RecordStore::from_entries(entries).unwrap();
//!
//! let config = GroupingConfig::default();
//! let summary = pipeline::run(&mut store, &config).unwrap();
//! assert_eq!(summary.groups, 2);
//! ```

pub mod adjacency;
pub mod error;
pub mod label;
pub mod pipeline;
pub mod pool;
pub mod record;

pub use error::{Error, Result};
pub use label::GroupSummary;
pub use pipeline::GroupingConfig;
pub use record::{FeatureVector, Record, RecordStore};
