//! Configuration loading from TOML text, files and the environment.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{PrepError, PrepResult};

/// Environment variable overriding `min_ratings`.
pub const ENV_MIN_RATINGS: &str = "RATING_PREP_MIN_RATINGS";

/// Environment variable overriding `train_ratings_num`.
pub const ENV_TRAIN_RATINGS: &str = "RATING_PREP_TRAIN_RATINGS";

/// Raw configuration as written by the user. Values are signed so that
/// out-of-range input can be reported instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Minimum ratings a user and an item must both keep.
    #[serde(default = "default_min_ratings")]
    pub min_ratings: i64,
    /// Ratings per user that go into the train split.
    #[serde(default = "default_train_ratings_num")]
    pub train_ratings_num: i64,
}

fn default_min_ratings() -> i64 {
    5
}

fn default_train_ratings_num() -> i64 {
    1
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            min_ratings: default_min_ratings(),
            train_ratings_num: default_train_ratings_num(),
        }
    }
}

/// Configuration whose values passed [`PrepConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub min_ratings: usize,
    pub train_ratings_num: usize,
}

impl PrepConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> PrepResult<Self> {
        toml::from_str(content)
            .map_err(|e| PrepError::Config(format!("Failed to parse config: {e}")))
    }

    /// Override values from [`ENV_MIN_RATINGS`] and [`ENV_TRAIN_RATINGS`].
    pub fn apply_env(self) -> PrepResult<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Override values from any key lookup, e.g. a map in tests.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> PrepResult<Self> {
        if let Some(v) = lookup(ENV_MIN_RATINGS) {
            self.min_ratings = parse_int(ENV_MIN_RATINGS, &v)?;
        }
        if let Some(v) = lookup(ENV_TRAIN_RATINGS) {
            self.train_ratings_num = parse_int(ENV_TRAIN_RATINGS, &v)?;
        }
        Ok(self)
    }

    /// Check ranges and convert to unsigned values.
    pub fn validate(&self) -> PrepResult<ValidatedConfig> {
        if self.min_ratings <= 0 {
            return Err(PrepError::InvalidArgument(format!(
                "min_ratings must be positive, got {}",
                self.min_ratings
            )));
        }
        if self.train_ratings_num < 0 {
            return Err(PrepError::InvalidArgument(format!(
                "train_ratings_num must not be negative, got {}",
                self.train_ratings_num
            )));
        }
        Ok(ValidatedConfig {
            min_ratings: to_usize("min_ratings", self.min_ratings)?,
            train_ratings_num: to_usize("train_ratings_num", self.train_ratings_num)?,
        })
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> PrepResult<PrepConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        PrepError::Io(std::io::Error::other(format!(
            "Failed to read config file {}: {e}",
            path.display()
        )))
    })?;
    PrepConfig::from_toml_str(&content)
}

fn parse_int(key: &str, value: &str) -> PrepResult<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| PrepError::Config(format!("{key} is not an integer: {value:?}")))
}

fn to_usize(name: &str, value: i64) -> PrepResult<usize> {
    usize::try_from(value)
        .map_err(|_| PrepError::InvalidArgument(format!("{name} out of range: {value}")))
}
