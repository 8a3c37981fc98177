//! Ranking engine: combines classification and aggregation into ordered
//! per-category standings.
//!
//! A pure pipeline in immutable stages: group → filter → score → sort →
//! limit. Given one consistent snapshot of participants and score sheets,
//! the output is deterministic; the engine holds no state between calls.

use crate::category::{classify::group_roster, Category, CategoryPolicy};
use crate::core::{Participant, ScoreSheet};
use crate::score::aggregate::{collect_scores, mean, median, stddev};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Podium depth: standings are truncated to the top 3.
pub const PODIUM_SIZE: usize = 3;

/// One row of a category's standings. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub participant: Participant,
    /// Mean rounded to 2 decimals; reported externally and compared as-is.
    pub mean: f64,
    /// Median at full precision; the comparator uses it as-is, output
    /// rounds it to 2 decimals.
    #[serde(serialize_with = "serialize_round2")]
    pub median: f64,
    /// Population standard deviation, same precision rule as the median.
    #[serde(serialize_with = "serialize_round2")]
    pub stddev: f64,
}

fn serialize_round2<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(crate::score::aggregate::round2(*value))
}

/// A category's podium on the main board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRanking {
    pub category: Category,
    /// Participants counted toward this category after grouping.
    pub classified: usize,
    pub entries: Vec<RankingEntry>,
}

/// Four-key total order: mean desc, median desc, deviation asc (tighter
/// judge agreement wins a tie), creation order asc (earlier registrant
/// wins whatever survives).
fn compare_entries(a: &RankingEntry, b: &RankingEntry) -> Ordering {
    b.mean
        .partial_cmp(&a.mean)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.median.partial_cmp(&a.median).unwrap_or(Ordering::Equal))
        .then_with(|| a.stddev.partial_cmp(&b.stddev).unwrap_or(Ordering::Equal))
        .then_with(|| a.participant.created.cmp(&b.participant.created))
}

/// Score one participant from their sheet, or `None` when unscored.
///
/// Mean, median, and deviation all come from the same captured score set.
fn score_participant(
    participant: &Participant,
    sheets: &BTreeMap<String, ScoreSheet>,
) -> Option<RankingEntry> {
    let scores = sheets.get(&participant.id).map(collect_scores)?;
    let mean = mean(&scores)?;
    Some(RankingEntry {
        participant: participant.clone(),
        mean,
        median: median(&scores),
        stddev: stddev(&scores),
    })
}

/// Sort entries by the four-key order (pure).
pub fn sort_entries(mut entries: Vec<RankingEntry>) -> Vec<RankingEntry> {
    entries.sort_by(compare_entries);
    entries
}

/// Limit entries to the top N (pure).
pub fn take_top(entries: Vec<RankingEntry>, limit: usize) -> Vec<RankingEntry> {
    entries.into_iter().take(limit).collect()
}

/// True when `category` is eligible for ranking against this roster:
/// on the main board, and populated to at least the merge threshold
/// unless it is the fallback category.
pub fn is_rankable(
    policy: &CategoryPolicy,
    category: Category,
    grouped_roster: &[Participant],
) -> bool {
    if !policy.on_main_board(category) {
        return false;
    }
    let members = members_of(category, grouped_roster).count();
    if members == 0 {
        return false;
    }
    category == policy.fallback || members >= policy.merge_threshold
}

fn members_of<'a>(
    category: Category,
    grouped_roster: &'a [Participant],
) -> impl Iterator<Item = &'a Participant> {
    grouped_roster
        .iter()
        .filter(move |p| Category::parse(&p.category) == Some(category))
}

/// Top-3 standings for one category, or empty when the category is
/// ineligible or nobody in it has been scored.
///
/// Unscored participants are dropped entirely; they do not appear as
/// "last place". A non-empty category where nobody has been scored yields
/// an empty ranking, which is distinct from a category with no
/// participants at all (that one fails the eligibility gate).
pub fn rank(
    category: Category,
    participants: &[Participant],
    sheets: &BTreeMap<String, ScoreSheet>,
    policy: &CategoryPolicy,
) -> Vec<RankingEntry> {
    let grouped = group_roster(policy, participants);
    if !is_rankable(policy, category, &grouped) {
        return Vec::new();
    }
    let scored: Vec<RankingEntry> = members_of(category, &grouped)
        .filter_map(|p| score_participant(p, sheets))
        .collect();
    take_top(sort_entries(scored), PODIUM_SIZE)
}

/// The full main board in canonical category order.
///
/// Categories that fail the eligibility gate, or whose standings come out
/// empty, are omitted.
pub fn rank_all(
    participants: &[Participant],
    sheets: &BTreeMap<String, ScoreSheet>,
    policy: &CategoryPolicy,
) -> Vec<CategoryRanking> {
    let grouped = group_roster(policy, participants);
    Category::ALL
        .iter()
        .filter(|&&category| is_rankable(policy, category, &grouped))
        .filter_map(|&category| {
            let members: Vec<&Participant> = members_of(category, &grouped).collect();
            let scored: Vec<RankingEntry> = members
                .iter()
                .filter_map(|p| score_participant(p, sheets))
                .collect();
            let entries = take_top(sort_entries(scored), PODIUM_SIZE);
            if entries.is_empty() {
                None
            } else {
                Some(CategoryRanking {
                    category,
                    classified: members.len(),
                    entries,
                })
            }
        })
        .collect()
}

/// Side-stage panels: each side-stage category ranked on its own board.
///
/// Uses the same four-key order and podium depth as the main board, but
/// none of its gates: side-stage categories never merge and rank with any
/// number of participants. Categories with nobody registered, or with
/// registrants but no scored entries, are omitted.
pub fn rank_side_stage(
    participants: &[Participant],
    sheets: &BTreeMap<String, ScoreSheet>,
    policy: &CategoryPolicy,
) -> Vec<CategoryRanking> {
    Category::ALL
        .iter()
        .filter(|&&category| policy.is_side_stage(category))
        .filter_map(|&category| {
            let members: Vec<&Participant> = members_of(category, participants).collect();
            if members.is_empty() {
                return None;
            }
            let scored: Vec<RankingEntry> = members
                .iter()
                .filter_map(|p| score_participant(p, sheets))
                .collect();
            let entries = take_top(sort_entries(scored), PODIUM_SIZE);
            if entries.is_empty() {
                None
            } else {
                Some(CategoryRanking {
                    category,
                    classified: members.len(),
                    entries,
                })
            }
        })
        .collect()
}
