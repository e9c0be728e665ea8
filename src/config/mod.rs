//! Pipeline configuration.

pub mod loader;

pub use loader::{load_config, PrepConfig, ValidatedConfig, ENV_MIN_RATINGS, ENV_TRAIN_RATINGS};
