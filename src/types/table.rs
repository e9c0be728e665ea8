//! In-memory ratings table exchanged with the external loader.

use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value};

use super::{PrepError, PrepResult, Rating, ITEM_ID, RATING_VALUE, TIMESTAMP, USER_ID};

/// An ordered collection of ratings. Row order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingTable {
    rows: Vec<Rating>,
}

impl RatingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Wrap existing rows.
    pub fn from_rows(rows: Vec<Rating>) -> Self {
        Self { rows }
    }

    /// Parse a JSON array of row objects.
    ///
    /// `user_id` and `item_id` must be strings or integers (integers become their
    /// decimal string), `rating_value` must be numeric and `timestamp`, when
    /// present and not null, must be an integer. The first offending row fails the
    /// whole call; unknown keys are ignored.
    ///
    /// Identifiers are compared as strings after conversion, so `7` and `"7"`
    /// name the same user (or item).
    pub fn from_json_rows(json: &str) -> PrepResult<Self> {
        let objects: Vec<Map<String, Value>> = serde_json::from_str(json)?;
        let rows = objects
            .iter()
            .enumerate()
            .map(|(row, obj)| parse_row(row, obj))
            .collect::<PrepResult<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Serialize the rows back to a JSON array.
    pub fn to_json(&self) -> PrepResult<String> {
        Ok(serde_json::to_string(&self.rows)?)
    }

    /// Append a row.
    pub fn push(&mut self, rating: Rating) {
        self.rows.push(rating);
    }

    /// Keep only the rows matching `keep`, preserving their order.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&Rating) -> bool) {
        self.rows.retain(keep);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrow the rows.
    pub fn rows(&self) -> &[Rating] {
        &self.rows
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Rating> {
        self.rows.iter()
    }

    /// Take ownership of the rows.
    pub fn into_rows(self) -> Vec<Rating> {
        self.rows
    }

    /// Number of ratings per user, built in one pass.
    pub fn ratings_per_user(&self) -> HashMap<&str, usize> {
        count_by(&self.rows, |r| r.user_id.as_str())
    }

    /// Number of ratings per item, built in one pass.
    pub fn ratings_per_item(&self) -> HashMap<&str, usize> {
        count_by(&self.rows, |r| r.item_id.as_str())
    }

    /// Number of distinct users.
    pub fn user_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.user_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Number of distinct items.
    pub fn item_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.item_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

fn count_by<'a>(rows: &'a [Rating], key: impl Fn(&'a Rating) -> &'a str) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for row in rows {
        *counts.entry(key(row)).or_insert(0) += 1;
    }
    counts
}

fn parse_row(row: usize, obj: &Map<String, Value>) -> PrepResult<Rating> {
    let user_id = id_field(row, obj, USER_ID)?;
    let item_id = id_field(row, obj, ITEM_ID)?;
    let rating_value = obj
        .get(RATING_VALUE)
        .and_then(Value::as_f64)
        .ok_or(PrepError::Schema {
            row,
            field: RATING_VALUE,
        })?;
    let timestamp = match obj.get(TIMESTAMP) {
        None | Some(Value::Null) => None,
        Some(v) => Some(v.as_i64().ok_or(PrepError::Schema {
            row,
            field: TIMESTAMP,
        })?),
    };
    Ok(Rating {
        user_id,
        item_id,
        rating_value,
        timestamp,
    })
}

fn id_field(row: usize, obj: &Map<String, Value>, field: &'static str) -> PrepResult<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        _ => Err(PrepError::Schema { row, field }),
    }
}

impl FromIterator<Rating> for RatingTable {
    fn from_iter<I: IntoIterator<Item = Rating>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RatingTable {
    type Item = Rating;
    type IntoIter = std::vec::IntoIter<Rating>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a RatingTable {
    type Item = &'a Rating;
    type IntoIter = std::slice::Iter<'a, Rating>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
