//! Component labeling over the adjacency graph
//!
//! Adjacency edges are directional as stored: a record listing a neighbor
//! does not imply the reverse edge exists. The traversal follows outgoing
//! edges only, so groups are reachability components of a directed graph.

use std::collections::BTreeMap;

use tracing::debug;

use crate::RecordStore;

/// End result of the pipeline: how many groups exist and how big each is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    /// Total number of groups created
    pub groups: u32,
    /// Population count per group id
    pub sizes: BTreeMap<u32, usize>,
}

/// Assign every record a group id and count group populations
///
/// Records are visited in index order; each unlabeled record seeds a new
/// group (ids increase monotonically from 1) and an explicit stack-based
/// depth-first traversal labels everything reachable from it. A record that
/// is already labeled is never revisited, which makes cycles harmless.
pub fn label_components(store: &mut RecordStore) -> GroupSummary {
    let mut sizes: BTreeMap<u32, usize> = BTreeMap::new();
    let mut next_group = 1u32;
    let mut stack: Vec<usize> = Vec::new();

    for seed in 0..store.len() {
        if store.record(seed).group.is_some() {
            continue;
        }

        let group = next_group;
        next_group += 1;

        stack.push(seed);
        while let Some(index) = stack.pop() {
            if store.record(index).group.is_some() {
                continue;
            }
            store.record_mut(index).group = Some(group);
            *sizes.entry(group).or_insert(0) += 1;

            for pos in 0..store.record(index).adjacent.len() {
                let next = store.record(index).adjacent[pos];
                if store.record(next).group.is_none() {
                    stack.push(next);
                }
            }
        }
    }

    let groups = next_group - 1;
    debug!("Labeled {} records into {} groups", store.len(), groups);
    GroupSummary { groups, sizes }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store with the given adjacency lists already in place
    fn store_with_adjacency(adjacency: &[&[usize]]) -> RecordStore {
        let entries = (0..adjacency.len())
            .map(|i| (format!("r{}", i), vec![i as f64]))
            .collect();
        let mut store = RecordStore::from_entries(entries).unwrap();
        for (index, adj) in adjacency.iter().enumerate() {
            store.record_mut(index).adjacent = adj.to_vec();
        }
        store
    }

    #[test]
    fn test_every_record_gets_exactly_one_group() {
        let mut store = store_with_adjacency(&[&[1], &[], &[3], &[2], &[]]);
        let summary = label_components(&mut store);

        for r in store.records() {
            assert!(r.group.is_some());
        }
        let total: usize = summary.sizes.values().sum();
        assert_eq!(total, store.len());
    }

    #[test]
    fn test_group_ids_increase_with_seed_index() {
        let mut store = store_with_adjacency(&[&[], &[], &[]]);
        let summary = label_components(&mut store);

        assert_eq!(summary.groups, 3);
        assert_eq!(store.record(0).group, Some(1));
        assert_eq!(store.record(1).group, Some(2));
        assert_eq!(store.record(2).group, Some(3));
    }

    #[test]
    fn test_empty_adjacency_forms_singleton() {
        let mut store = store_with_adjacency(&[&[1], &[0], &[]]);
        let summary = label_components(&mut store);

        assert_eq!(store.record(2).group, Some(2));
        assert_eq!(summary.sizes.get(&2), Some(&1));
    }

    #[test]
    fn test_cycle_is_traversed_once() {
        let mut store = store_with_adjacency(&[&[1], &[2], &[0]]);
        let summary = label_components(&mut store);

        assert_eq!(summary.groups, 1);
        assert_eq!(summary.sizes.get(&1), Some(&3));
    }

    #[test]
    fn test_reachability_follows_outgoing_edges_only() {
        // 2 points at 0, but 0 was already labeled by an earlier seed and
        // nothing points at 2, so 2 ends up in a group of its own
        let mut store = store_with_adjacency(&[&[1], &[], &[0]]);
        let summary = label_components(&mut store);

        assert_eq!(summary.groups, 2);
        assert_eq!(store.record(0).group, Some(1));
        assert_eq!(store.record(1).group, Some(1));
        assert_eq!(store.record(2).group, Some(2));
    }

    #[test]
    fn test_labeling_is_terminal() {
        // A later seed never relabels an already grouped record
        let mut store = store_with_adjacency(&[&[2], &[2], &[]]);
        label_components(&mut store);

        assert_eq!(store.record(2).group, Some(1));
        assert_eq!(store.record(1).group, Some(2));
    }
}
