//! Prune-then-split driver.

use crate::config::ValidatedConfig;
use crate::types::{PrepResult, RatingTable};

use super::prune::{prune_with_report, PruneReport};
use super::split::split_by_user;

/// Result of a full preparation run.
#[derive(Debug, Clone)]
pub struct PrepOutput {
    pub train: RatingTable,
    pub test: RatingTable,
    pub report: PruneReport,
}

/// Runs pruning followed by the per-user split with one validated configuration.
pub struct PrepPipeline {
    config: ValidatedConfig,
}

impl PrepPipeline {
    /// Create a pipeline.
    pub fn new(config: ValidatedConfig) -> Self {
        Self { config }
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Prune `table`, then split what survives.
    pub fn run(&self, table: &RatingTable) -> PrepResult<PrepOutput> {
        let (pruned, report) = prune_with_report(table, self.config.min_ratings)?;
        let (train, test) = split_by_user(&pruned, self.config.train_ratings_num)?;

        log::info!(
            "prepared {} ratings: {} pruned away, {} train, {} test",
            table.len(),
            table.len() - pruned.len(),
            train.len(),
            test.len()
        );
        Ok(PrepOutput {
            train,
            test,
            report,
        })
    }
}
