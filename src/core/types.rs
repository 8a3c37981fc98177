//! Common type definitions used across the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::score::normalize::{self, RawScore};

/// A registered contest participant.
///
/// Stored records are immutable; the small-category merge rule produces
/// derived copies with a reassigned category and never touches the
/// original (see `category::classify::group_roster`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Opaque unique identifier, also the score sheet key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Raw category string as registered. Parsed through
    /// `Category::parse` at every decision point; unknown strings are
    /// tolerated and simply never rank.
    pub category: String,
    /// Free-text entry label; its meaning depends on the category
    /// (character portrayed, song performed, and so on).
    pub entry: String,
    /// Monotonic insertion stamp. Used only as the final ranking
    /// tie-break: earlier registrants win ties.
    pub created: i64,
    /// Wall-clock registration time, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Participant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        entry: impl Into<String>,
        created: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            entry: entry.into(),
            created,
            created_at: None,
        }
    }

    /// Derived copy registered under a different category. Used by the
    /// grouping rule; the stored record stays untouched.
    pub fn with_category(&self, category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..self.clone()
        }
    }
}

/// One of the three fixed judge positions on a score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JudgeSlot {
    First,
    Second,
    Third,
}

impl JudgeSlot {
    /// Slots in canonical order; `collect_scores` reads them in this order.
    pub const ALL: [JudgeSlot; 3] = [JudgeSlot::First, JudgeSlot::Second, JudgeSlot::Third];

    pub fn index(self) -> usize {
        match self {
            JudgeSlot::First => 0,
            JudgeSlot::Second => 1,
            JudgeSlot::Third => 2,
        }
    }

    /// Display label for score entry and board output.
    pub fn label(self) -> &'static str {
        match self {
            JudgeSlot::First => "Judge 1",
            JudgeSlot::Second => "Judge 2",
            JudgeSlot::Third => "Judge 3",
        }
    }
}

/// Judge scores for one participant, keyed 1:1 by participant id.
///
/// Slots are private: the only write path is [`ScoreSheet::record`], which
/// routes every value through `score::normalize`. That keeps the stored
/// invariant (half-point grid, within [0, 10]) enforced at a single
/// boundary. A sheet with zero filled slots is equivalent to no sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSheet {
    #[serde(deserialize_with = "normalized_slots")]
    slots: [Option<f64>; 3],
    /// Last write time, informational only. Each judge owns a disjoint
    /// slot, so concurrent submissions need no conflict resolution here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `raw` and store it in `slot`, returning the stored value.
    ///
    /// An unparseable raw value clears the slot (the judge "has not
    /// scored yet") and returns `None`.
    pub fn record(&mut self, slot: JudgeSlot, raw: impl Into<RawScore>) -> Option<f64> {
        let value = normalize::normalize(&raw.into());
        self.slots[slot.index()] = value;
        value
    }

    /// Clear a single judge slot.
    pub fn clear(&mut self, slot: JudgeSlot) {
        self.slots[slot.index()] = None;
    }

    /// Read a single judge slot.
    pub fn score(&self, slot: JudgeSlot) -> Option<f64> {
        self.slots[slot.index()]
    }

    /// True when no judge has scored yet.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Re-normalize slots on deserialization so a hand-edited file cannot
/// smuggle an off-grid value past the normalization boundary.
fn normalized_slots<'de, D>(deserializer: D) -> Result<[Option<f64>; 3], D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <[Option<f64>; 3]>::deserialize(deserializer)?;
    Ok(raw.map(|v| v.and_then(normalize::normalize_value)))
}

/// A consistent point-in-time view of the contest.
///
/// The ranking engine takes this by reference per call and retains no
/// handle across calls; the caller owns the store and is responsible for
/// snapshotting participants and scores at the same logical instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContestSnapshot {
    pub participants: Vec<Participant>,
    pub sheets: BTreeMap<String, ScoreSheet>,
}

impl ContestSnapshot {
    pub fn sheet(&self, participant_id: &str) -> Option<&ScoreSheet> {
        self.sheets.get(participant_id)
    }

    /// Record one judge score, creating the sheet on first touch.
    ///
    /// This is the write-back seam for the surrounding application: it is
    /// the snapshot-level wrapper over [`ScoreSheet::record`].
    pub fn record_score(
        &mut self,
        participant_id: &str,
        slot: JudgeSlot,
        raw: impl Into<RawScore>,
    ) -> Option<f64> {
        self.sheets
            .entry(participant_id.to_string())
            .or_default()
            .record(slot, raw)
    }
}
