//! Per-user chronological train/test split.

use crate::index::index_items;
use crate::types::{IndexedRating, PrepResult, RatingTable};

/// Put each user's first `train_ratings_num` ratings (by timestamp) into train
/// and the rest into test.
///
/// Both outputs follow the `(user_id, timestamp)` order of the index and carry
/// plain ratings; the chronological position is not part of either.
pub fn split_by_user(
    table: &RatingTable,
    train_ratings_num: usize,
) -> PrepResult<(RatingTable, RatingTable)> {
    let (train, test): (Vec<IndexedRating>, Vec<IndexedRating>) = index_items(table)?
        .into_iter()
        .partition(|r| r.item_index < train_ratings_num);

    let train: RatingTable = train.into_iter().map(IndexedRating::into_rating).collect();
    let test: RatingTable = test.into_iter().map(IndexedRating::into_rating).collect();

    log::debug!(
        "split {} ratings into {} train / {} test (train_ratings_num = {})",
        table.len(),
        train.len(),
        test.len(),
        train_ratings_num
    );
    Ok((train, test))
}
