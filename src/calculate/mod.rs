//! Statistics calculation engine.
//!
//! Pure reductions over raw stat rows:
//! - Sums by stat type
//! - Success percentages and rounded averages
//! - Frequency mode and top-N frequency breakdowns
//! - Win/draw/loss classification
//!
//! Every function here is total over its input domain: empty or zero input
//! yields zeros and empty collections, never an error.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{MatchResult, StatRecord, StatTypeId};

/// Sum stat values grouped by stat type. Order-insensitive.
pub fn sum_by_type(records: &[StatRecord]) -> BTreeMap<StatTypeId, i64> {
    let mut sums: BTreeMap<StatTypeId, i64> = BTreeMap::new();
    for record in records {
        *sums.entry(record.stat_type_id).or_default() += record.value;
    }
    sums
}

/// Percentage of successful attempts, rounded to the nearest integer
/// (half away from zero). Zero attempts yields 0, never a division error.
pub fn success_percentage(successful: i64, attempted: i64) -> i64 {
    if attempted <= 0 {
        return 0;
    }
    (successful as f64 / attempted as f64 * 100.0).round() as i64
}

/// Round to a fixed number of decimal places (half away from zero).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Average of a total over a population, rounded. Zero population yields 0.
pub fn average(total: i64, count: u32, decimals: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round_to(total as f64 / count as f64, decimals)
}

/// An occurrence count with its share of the whole, rounded to the
/// nearest integer percent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequency<T> {
    pub value: T,
    pub count: u32,
    pub percentage: i64,
}

/// The most frequent value. Ties break toward the value encountered first
/// in the input sequence; the input is never re-sorted.
pub fn most_common<T: Eq + Hash + Clone>(items: &[T]) -> Option<T> {
    let mut counts: HashMap<&T, (u32, usize)> = HashMap::new();
    for (index, item) in items.iter().enumerate() {
        let entry = counts.entry(item).or_insert((0, index));
        entry.0 += 1;
    }

    counts
        .into_iter()
        .max_by(|a, b| a.1 .0.cmp(&b.1 .0).then(b.1 .1.cmp(&a.1 .1)))
        .map(|(value, _)| value.clone())
}

/// All distinct values with counts and percentages, sorted descending by
/// count. Equal counts keep first-encountered order.
pub fn frequency_distribution<T: Eq + Hash + Clone>(items: &[T]) -> Vec<Frequency<T>> {
    let total = items.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<&T, (u32, usize)> = HashMap::new();
    for (index, item) in items.iter().enumerate() {
        let entry = counts.entry(item).or_insert((0, index));
        entry.0 += 1;
    }

    let mut groups: Vec<(&T, u32, usize)> = counts
        .into_iter()
        .map(|(value, (count, first))| (value, count, first))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    groups
        .into_iter()
        .map(|(value, count, _)| Frequency {
            value: value.clone(),
            count,
            percentage: success_percentage(count as i64, total as i64),
        })
        .collect()
}

/// Top `n` values by frequency. Empty input yields an empty list.
pub fn top_by_frequency<T: Eq + Hash + Clone>(items: &[T], n: usize) -> Vec<Frequency<T>> {
    let mut groups = frequency_distribution(items);
    groups.truncate(n);
    groups
}

/// A match outcome from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

/// Classify a recorded result against which side the team played.
pub fn classify_outcome(result: MatchResult, is_home: bool) -> Outcome {
    match (result, is_home) {
        (MatchResult::Draw, _) => Outcome::Draw,
        (MatchResult::HomeWin, true) | (MatchResult::AwayWin, false) => Outcome::Win,
        (MatchResult::HomeWin, false) | (MatchResult::AwayWin, true) => Outcome::Loss,
    }
}

/// Win rate as an integer percentage. Zero matches yields 0.
pub fn win_rate(wins: u32, total: u32) -> i64 {
    success_percentage(wins as i64, total as i64)
}
