//! Pipeline driver wiring the three stages in order

use tracing::info;

use crate::{adjacency, label, pool, Error, GroupSummary, RecordStore, Result};

/// Tunables for one grouping run
#[derive(Debug, Clone)]
pub struct GroupingConfig {
    /// Number of nearby records considered per sort pass
    pub pool_size: usize,
    /// Maximum final adjacency edges kept per record
    pub adjacencies: usize,
    /// Maximum per-dimension difference to register a pooled candidate
    pub threshold: f64,
    /// Maximum average difference to accept as a final edge
    pub adj_threshold: f64,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            pool_size: 10,
            adjacencies: 4,
            threshold: 20.0,
            adj_threshold: 4000.0,
        }
    }
}

impl GroupingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.pool_size == 0 {
            return Err(Error::InvalidConfig("pool size must be positive".into()));
        }
        if self.adjacencies == 0 {
            return Err(Error::InvalidConfig(
                "adjacency cap must be positive".into(),
            ));
        }
        if self.threshold < 0.0 {
            return Err(Error::InvalidConfig(
                "pooling threshold must not be negative".into(),
            ));
        }
        if self.adj_threshold < 0.0 {
            return Err(Error::InvalidConfig(
                "adjacency threshold must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Run pooling, adjacency selection, and labeling on a freshly loaded store
pub fn run(store: &mut RecordStore, config: &GroupingConfig) -> Result<GroupSummary> {
    config.validate()?;

    info!(
        "Pooling {} records across {} dimensions (pool size {}, threshold {})",
        store.len(),
        store.dim(),
        config.pool_size,
        config.threshold
    );
    pool::pool_neighbors(store, config.pool_size, config.threshold);

    info!(
        "Selecting up to {} adjacencies per record (threshold {})",
        config.adjacencies, config.adj_threshold
    );
    adjacency::select_adjacent(store, config.adj_threshold, config.adjacencies);

    let summary = label::label_components(store);
    info!("Found {} groups", summary.groups);
    Ok(summary)
}
