//! Neighbor pooling via repeated 1-dimensional sort passes
//!
//! One stable sort pass per feature dimension. In each pass, every record
//! registers the records ranked just before it (within a fixed window) as
//! pooling candidates, provided the per-dimension difference stays within
//! the threshold. Records that are truly close in multi-dimensional space
//! are expected to land near each other in at least some of the passes,
//! which avoids a full O(N²) pairwise comparison.

use tracing::debug;

use crate::RecordStore;

/// Run all sort passes and accumulate pool hit counts in place
///
/// The hit is recorded on the record that comes earlier in the current
/// sorted order only, so the pool relation is asymmetric by construction.
pub fn pool_neighbors(store: &mut RecordStore, pool_size: usize, threshold: f64) {
    let count = store.len();

    // One permutation reused across passes. Stable sorting it repeatedly
    // means ties keep the order of the previous pass, matching the
    // deterministic resort-in-place behavior the pipeline promises.
    let mut order: Vec<usize> = (0..count).collect();

    for d in 0..store.dim() {
        order.sort_by(|&a, &b| {
            store
                .record(a)
                .features
                .value(d)
                .total_cmp(&store.record(b).features.value(d))
        });

        for pos in 1..count {
            let later = order[pos];
            let later_value = store.record(later).features.value(d);
            let window = pos.min(pool_size);

            for prior_pos in (pos - window)..pos {
                let earlier = order[prior_pos];
                // Distinct positions of a permutation can never alias
                assert_ne!(earlier, later, "sort pass paired a record with itself");

                let diff = (store.record(earlier).features.value(d) - later_value).abs();
                if diff > threshold {
                    continue;
                }
                *store.record_mut(earlier).pool.entry(later).or_insert(0) += 1;
            }
        }

        debug!("Pooling pass {} of {} complete", d + 1, store.dim());
    }
}
