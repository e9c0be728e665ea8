//! Chronological index: per-user 0-based positions in timestamp order.

use crate::types::{IndexedRating, PrepError, PrepResult, RatingTable, TIMESTAMP};

/// Number each user's ratings 0, 1, 2, ... from oldest to newest.
///
/// Rows come back sorted by `(user_id, timestamp)`. The sort is stable, so
/// ratings of one user sharing a timestamp keep their input order; that order is
/// inherited from the caller and carries no meaning of its own.
///
/// Fails with a schema error naming the first input row without a timestamp.
pub fn index_items(table: &RatingTable) -> PrepResult<Vec<IndexedRating>> {
    let mut keyed = Vec::with_capacity(table.len());
    for (row, rating) in table.iter().enumerate() {
        let ts = rating.timestamp.ok_or(PrepError::Schema {
            row,
            field: TIMESTAMP,
        })?;
        keyed.push((ts, rating));
    }

    keyed.sort_by(|(ts_a, a), (ts_b, b)| a.user_id.cmp(&b.user_id).then(ts_a.cmp(ts_b)));

    let mut indexed = Vec::with_capacity(keyed.len());
    let mut prev: Option<&str> = None;
    let mut index = 0;
    for (_, rating) in keyed {
        if prev != Some(rating.user_id.as_str()) {
            index = 0;
            prev = Some(rating.user_id.as_str());
        }
        indexed.push(IndexedRating {
            rating: rating.clone(),
            item_index: index,
        });
        index += 1;
    }
    Ok(indexed)
}
