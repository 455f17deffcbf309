use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A fixed-length ordered sequence of numeric feature values for one item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    data: Vec<f64>,
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Value at a single dimension
    #[inline]
    pub fn value(&self, dim: usize) -> f64 {
        self.data[dim]
    }

    /// Average absolute per-dimension difference to another vector
    ///
    /// Both vectors must have the same dimension; the store validates this
    /// at load time.
    #[inline]
    pub fn mean_abs_diff(&self, other: &FeatureVector) -> f64 {
        debug_assert_eq!(self.dim(), other.dim());
        let sum: f64 = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        sum / self.dim() as f64
    }
}

/// One item plus the state the pipeline stages attach to it
///
/// `pool` is filled by the pooling engine, `adjacent` by the adjacency
/// selector, and `group` by the component labeler. The index is assigned
/// once at load and never changes.
#[derive(Debug, Clone)]
pub struct Record {
    /// Stable index in `[0, N)`
    pub index: usize,
    /// Identifying label (e.g. a file path) - opaque, passed through
    pub label: String,
    pub features: FeatureVector,
    /// Candidate neighbors found during sort passes, keyed by record index,
    /// with the number of dimension passes that placed each one nearby
    pub pool: AHashMap<usize, u32>,
    /// Final adjacency edges, closest first, at most the configured cap
    pub adjacent: Vec<usize>,
    /// Group id, set once by the labeling pass
    pub group: Option<u32>,
}

/// Index-stable collection of all records for one run
///
/// Sort passes operate on a separate index permutation; the store itself is
/// never reordered, so index-based lookups stay valid across the whole
/// pipeline.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    dim: usize,
}

impl RecordStore {
    /// Build a store from `(label, features)` pairs, assigning dense indices
    ///
    /// The dimension is taken from the first record. Fails on empty input,
    /// on any record whose vector length differs from the first, and on
    /// non-finite feature values.
    pub fn from_entries(entries: Vec<(String, Vec<f64>)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyInput);
        }

        let dim = entries[0].1.len();

        let mut records = Vec::with_capacity(entries.len());
        for (index, (label, features)) in entries.into_iter().enumerate() {
            if features.is_empty() {
                return Err(Error::MissingFeatures(index));
            }
            if features.len() != dim {
                return Err(Error::DimensionMismatch {
                    index,
                    expected: dim,
                    actual: features.len(),
                });
            }
            if let Some(bad) = features.iter().position(|v| !v.is_finite()) {
                return Err(Error::NonFiniteFeature { index, dim: bad });
            }
            records.push(Record {
                index,
                label,
                features: FeatureVector::new(features),
                pool: AHashMap::new(),
                adjacent: Vec::new(),
                group: None,
            });
        }

        Ok(Self { records, dim })
    }

    /// Dimension of every feature vector in the store
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    pub fn record(&self, index: usize) -> &Record {
        &self.records[index]
    }

    #[inline]
    pub(crate) fn record_mut(&mut self, index: usize) -> &mut Record {
        &mut self.records[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn entry(label: &str, features: &[f64]) -> (String, Vec<f64>) {
        (label.to_string(), features.to_vec())
    }

    #[test]
    fn test_mean_abs_diff() {
        let a = FeatureVector::new(vec![0.0, 10.0, 20.0]);
        let b = FeatureVector::new(vec![3.0, 4.0, 20.0]);
        assert!((a.mean_abs_diff(&b) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_entries_assigns_dense_indices() {
        let store = RecordStore::from_entries(vec![
            entry("a.jpg", &[1.0, 2.0]),
            entry("b.jpg", &[3.0, 4.0]),
        ])
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.dim(), 2);
        assert_eq!(store.record(0).index, 0);
        assert_eq!(store.record(1).index, 1);
        assert_eq!(store.record(1).label, "b.jpg");
        assert!(store.record(0).pool.is_empty());
        assert!(store.record(0).group.is_none());
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = RecordStore::from_entries(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_missing_features_rejected() {
        let err = RecordStore::from_entries(vec![entry("a.jpg", &[])]).unwrap_err();
        assert!(matches!(err, Error::MissingFeatures(0)));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let err = RecordStore::from_entries(vec![
            entry("a.jpg", &[1.0, 2.0]),
            entry("b.jpg", &[3.0]),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            Error::DimensionMismatch {
                index: 1,
                expected: 2,
                actual: 1,
            }
        ));
    }

    #[test]
    fn test_non_finite_feature_rejected() {
        let err = RecordStore::from_entries(vec![entry("a.jpg", &[1.0, f64::NAN])]).unwrap_err();
        assert!(matches!(err, Error::NonFiniteFeature { index: 0, dim: 1 }));
    }
}
