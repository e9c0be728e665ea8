//! Preparation engine: pruning, splitting and the pipeline tying them together.

pub mod pipeline;
pub mod prune;
pub mod split;

pub use pipeline::{PrepOutput, PrepPipeline};
pub use prune::{prune, prune_with_report, PassStats, PruneReport};
pub use split::split_by_user;
