//! All data types for the rating-prep library.

pub mod error;
pub mod rating;
pub mod table;

pub use error::{PrepError, PrepResult};
pub use rating::{IndexedRating, Rating};
pub use table::RatingTable;

/// Field names agreed with the external loader.
pub const USER_ID: &str = "user_id";
pub const ITEM_ID: &str = "item_id";
pub const RATING_VALUE: &str = "rating_value";
pub const TIMESTAMP: &str = "timestamp";
