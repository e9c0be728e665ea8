//! Phase 2 tests: iterative pruning of vague users and items.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rating_prep::{prune, prune_with_report, PrepError, Rating, RatingTable};

// ==================== Helpers ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn pairs(rows: &[(&str, &str)]) -> RatingTable {
    rows.iter().map(|(u, i)| Rating::new(*u, *i, 4.0)).collect()
}

fn key_pairs(table: &RatingTable) -> Vec<(String, String)> {
    table
        .iter()
        .map(|r| (r.user_id.clone(), r.item_id.clone()))
        .collect()
}

/// Random table with a long-tailed user and item distribution.
fn random_table(rng: &mut StdRng, rows: usize, users: usize, items: usize) -> RatingTable {
    (0..rows)
        .map(|i| {
            let u = rng.gen_range(0..users).min(rng.gen_range(0..users));
            let it = rng.gen_range(0..items).min(rng.gen_range(0..items));
            Rating::new(format!("u{u}"), format!("i{it}"), f64::from(rng.gen_range(1u8..=5)))
                .at(i as i64)
        })
        .collect()
}

fn counts<'a>(table: &'a RatingTable, key: impl Fn(&'a Rating) -> &'a str) -> HashMap<&'a str, usize> {
    let mut map = HashMap::new();
    for r in table {
        *map.entry(key(r)).or_insert(0) += 1;
    }
    map
}

// ==================== Tests ====================

#[test]
fn test_drops_vague_user_and_items() {
    init_logger();
    let table = pairs(&[
        ("1", "1"),
        ("1", "2"),
        ("2", "1"),
        ("2", "2"),
        ("7", "1"),
        ("7", "13"),
        ("7", "15"),
    ]);

    let result = prune(&table, 2).unwrap();

    assert_eq!(result.len(), 4);
    let kept = key_pairs(&result);
    assert!(kept.iter().all(|(u, _)| u != "7"));
    assert!(kept.iter().all(|(_, i)| i != "13" && i != "15"));
    assert_eq!(
        kept,
        vec![
            ("1".to_string(), "1".to_string()),
            ("1".to_string(), "2".to_string()),
            ("2".to_string(), "1".to_string()),
            ("2".to_string(), "2".to_string()),
        ]
    );
}

#[test]
fn test_threshold_one_returns_input_unchanged() {
    let mut rng = StdRng::seed_from_u64(11);
    let table = random_table(&mut rng, 300, 40, 60);
    let (result, report) = prune_with_report(&table, 1).unwrap();

    assert_eq!(result, table);
    assert_eq!(report.pass_count(), 1);
    assert_eq!(report.passes[0].rows_removed, 0);
}

#[test]
fn test_zero_threshold_is_invalid() {
    assert!(matches!(
        prune(&pairs(&[("1", "1")]), 0),
        Err(PrepError::InvalidArgument(_))
    ));
}

#[test]
fn test_everything_pruned_returns_empty_table() {
    let table = pairs(&[("1", "a"), ("2", "b"), ("3", "c")]);
    let (result, report) = prune_with_report(&table, 2).unwrap();

    assert!(result.is_empty());
    assert_eq!(report.final_users, 0);
    assert_eq!(report.retained_ratings_fraction(), 0.0);
}

#[test]
fn test_empty_table() {
    assert!(prune(&RatingTable::new(), 5).unwrap().is_empty());
}

#[test]
fn test_fixed_point_on_random_tables() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    for k in 2..=5 {
        let table = random_table(&mut rng, 2_000, 150, 200);
        let result = prune(&table, k).unwrap();

        assert!(counts(&result, |r| r.user_id.as_str()).values().all(|&n| n >= k));
        assert!(counts(&result, |r| r.item_id.as_str()).values().all(|&n| n >= k));
    }
}

#[test]
fn test_output_is_an_ordered_subset() {
    let mut rng = StdRng::seed_from_u64(7);
    let table = random_table(&mut rng, 1_000, 80, 120);
    let result = prune(&table, 3).unwrap();

    // Every surviving row appears in the input, unaltered and in the same order.
    let mut input = table.iter();
    for kept in &result {
        assert!(input.any(|r| r == kept));
    }
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(99);
    let table = random_table(&mut rng, 1_500, 100, 100);
    let once = prune(&table, 3).unwrap();
    let (twice, report) = prune_with_report(&once, 3).unwrap();

    assert_eq!(once, twice);
    assert_eq!(report.pass_count(), 1);
}

#[test]
fn test_report_accounts_for_every_removed_row() {
    let mut rng = StdRng::seed_from_u64(5);
    let table = random_table(&mut rng, 800, 60, 90);
    let (result, report) = prune_with_report(&table, 4).unwrap();

    let removed: usize = report.passes.iter().map(|p| p.rows_removed).sum();
    assert_eq!(removed, table.len() - result.len());
    assert_eq!(report.initial_ratings, table.len());
    assert_eq!(report.final_ratings, result.len());
    assert_eq!(report.final_items, result.item_count());

    let last = report.passes.last().unwrap();
    assert_eq!((last.vague_users, last.vague_items), (0, 0));
}
