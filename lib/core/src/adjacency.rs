//! Adjacency selection over pooled candidates
//!
//! Scores every pooled candidate by the average absolute difference across
//! all dimensions and keeps the closest few as final adjacency edges. The
//! pool hit count only decides membership; it takes no part in scoring.

use ordered_float::OrderedFloat;
use tracing::debug;

use crate::RecordStore;

/// Fill `adjacent` for every record from its pool, in place
///
/// Surviving candidates are ordered ascending by average difference, ties
/// broken by record index so the result does not depend on pool iteration
/// order. Each record keeps at most `adjacencies` edges; a record with an
/// empty pool ends up an isolated node.
pub fn select_adjacent(store: &mut RecordStore, adj_threshold: f64, adjacencies: usize) {
    let count = store.len();
    let mut edges = 0usize;

    for index in 0..count {
        let mut survivors: Vec<(usize, f64)> = Vec::with_capacity(store.record(index).pool.len());

        for (&candidate, _hits) in &store.record(index).pool {
            let avg = store
                .record(index)
                .features
                .mean_abs_diff(&store.record(candidate).features);
            if avg <= adj_threshold {
                survivors.push((candidate, avg));
            }
        }

        survivors.sort_by_key(|&(candidate, avg)| (OrderedFloat(avg), candidate));
        survivors.truncate(adjacencies);

        edges += survivors.len();
        store.record_mut(index).adjacent = survivors.into_iter().map(|(c, _)| c).collect();
    }

    debug!("Selected {} adjacency edges across {} records", edges, count);
}
