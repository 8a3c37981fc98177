//! Summary statistics over one participant's judge scores.
//!
//! All functions are pure and operate on a score set captured once per
//! ranking computation; computing mean, median, and deviation from
//! different reads of a live sheet could produce an inconsistent row.

use crate::core::{JudgeSlot, ScoreSheet};
use std::cmp::Ordering;

/// Present judge scores in slot order (1, 2, 3).
///
/// An empty result means the participant is unscored and must be dropped
/// from ranking rather than ranked last.
pub fn collect_scores(sheet: &ScoreSheet) -> Vec<f64> {
    JudgeSlot::ALL
        .iter()
        .filter_map(|slot| sheet.score(*slot))
        .collect()
}

/// Arithmetic mean rounded to 2 decimals, or `None` for an empty score set.
///
/// `None` distinguishes "unscored" from "scored zero". The rounded value
/// is both the externally reported mean and the value the ranking
/// comparator uses.
pub fn mean(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: f64 = scores.iter().sum();
    Some(round2(sum / scores.len() as f64))
}

/// Median of a non-empty score set.
///
/// Sorts ascending; odd counts return the middle element, even counts the
/// average of the two middle elements. Callers must check
/// `collect_scores` is non-empty first.
pub fn median(scores: &[f64]) -> f64 {
    debug_assert!(!scores.is_empty(), "median requires a non-empty score set");
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Population standard deviation of a non-empty score set.
///
/// Divides by N, not N-1: the judges present at scoring time are the
/// entire panel, not a sample of one. Same non-empty precondition as
/// [`median`].
pub fn stddev(scores: &[f64]) -> f64 {
    debug_assert!(!scores.is_empty(), "stddev requires a non-empty score set");
    let n = scores.len() as f64;
    let avg: f64 = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|x| (x - avg).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Round to 2 decimal places for external reporting.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
