//! Iterative removal of vague users and items.

use std::collections::{HashMap, HashSet};

use crate::types::{PrepError, PrepResult, RatingTable};

/// What one pruning pass removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    /// 0-based pass number.
    pub pass: usize,
    /// Users dropped in this pass for having too few ratings.
    pub vague_users: usize,
    /// Items dropped in this pass, counted after the user removal.
    pub vague_items: usize,
    /// Rows removed by this pass.
    pub rows_removed: usize,
}

/// Summary of a pruning run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PruneReport {
    pub passes: Vec<PassStats>,
    pub initial_ratings: usize,
    pub initial_users: usize,
    pub initial_items: usize,
    pub final_ratings: usize,
    pub final_users: usize,
    pub final_items: usize,
}

impl PruneReport {
    /// Share of the input ratings that survived.
    pub fn retained_ratings_fraction(&self) -> f64 {
        fraction(self.final_ratings, self.initial_ratings)
    }

    /// Share of the distinct input users that survived.
    pub fn retained_users_fraction(&self) -> f64 {
        fraction(self.final_users, self.initial_users)
    }

    /// Share of the distinct input items that survived.
    pub fn retained_items_fraction(&self) -> f64 {
        fraction(self.final_items, self.initial_items)
    }

    /// Number of passes the run took, including the final no-op pass.
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }
}

fn fraction(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Drop users and items with fewer than `min_ratings` ratings until none are left.
///
/// Surviving rows keep their input order.
pub fn prune(table: &RatingTable, min_ratings: usize) -> PrepResult<RatingTable> {
    prune_with_report(table, min_ratings).map(|(pruned, _)| pruned)
}

/// Same as [`prune`], also returning what every pass removed.
///
/// Each pass removes vague users first, then recounts items on what is left and
/// removes vague items. The loop stops after a pass that found neither, so the
/// output satisfies both thresholds at once. Every non-final pass removes at
/// least one row, which bounds the number of passes by the table size.
pub fn prune_with_report(
    table: &RatingTable,
    min_ratings: usize,
) -> PrepResult<(RatingTable, PruneReport)> {
    if min_ratings == 0 {
        return Err(PrepError::InvalidArgument(
            "min_ratings must be a positive integer".to_string(),
        ));
    }

    let mut report = PruneReport {
        initial_ratings: table.len(),
        initial_users: table.user_count(),
        initial_items: table.item_count(),
        ..PruneReport::default()
    };

    let mut pruned = table.clone();
    let mut pass = 0;
    loop {
        let before = pruned.len();

        let vague_users = vague_keys(pruned.ratings_per_user(), min_ratings);
        pruned.retain(|r| !vague_users.contains(&r.user_id));

        let vague_items = vague_keys(pruned.ratings_per_item(), min_ratings);
        pruned.retain(|r| !vague_items.contains(&r.item_id));

        log::debug!(
            "prune pass {}: {} vague users, {} vague items, {} rows removed",
            pass,
            vague_users.len(),
            vague_items.len(),
            before - pruned.len()
        );
        report.passes.push(PassStats {
            pass,
            vague_users: vague_users.len(),
            vague_items: vague_items.len(),
            rows_removed: before - pruned.len(),
        });

        if vague_users.is_empty() && vague_items.is_empty() {
            break;
        }
        pass += 1;
    }

    report.final_ratings = pruned.len();
    report.final_users = pruned.user_count();
    report.final_items = pruned.item_count();

    log::info!(
        "pruning converged after {} passes; kept {:.1}% of ratings, {:.1}% of unique items, {:.1}% of unique users",
        report.pass_count(),
        report.retained_ratings_fraction() * 100.0,
        report.retained_items_fraction() * 100.0,
        report.retained_users_fraction() * 100.0
    );

    Ok((pruned, report))
}

/// Keys counted fewer than `min_ratings` times.
fn vague_keys(counts: HashMap<&str, usize>, min_ratings: usize) -> HashSet<String> {
    counts
        .into_iter()
        .filter(|&(_, n)| n < min_ratings)
        .map(|(k, _)| k.to_string())
        .collect()
}
