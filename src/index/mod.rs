//! Index structures over rating tables.

pub mod chronological;

pub use chronological::index_items;
