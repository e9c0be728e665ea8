//! rating-prep: preparation of ratings datasets for recommender training.
//!
//! Prunes users and items with too few ratings until the table is stable, numbers
//! each user's ratings chronologically, and splits every user's history into an
//! earliest-first train prefix and a test suffix.

pub mod config;
pub mod engine;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{load_config, PrepConfig, ValidatedConfig};
pub use engine::{
    prune, prune_with_report, split_by_user, PassStats, PrepOutput, PrepPipeline, PruneReport,
};
pub use index::index_items;
pub use types::{IndexedRating, PrepError, PrepResult, Rating, RatingTable};
