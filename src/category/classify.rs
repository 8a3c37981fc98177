//! Category membership rules: exclusion, small-category merging, and
//! canonical roster ordering.
//!
//! Classification is a pure function of the current roster. Population
//! counts are exactly what changes the outcome, so nothing here caches a
//! decision across calls.

use super::Category;
use crate::core::Participant;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Policy knobs for classification.
///
/// The defaults reproduce the live event rules; `merge_threshold` and the
/// category sets are policy values, not structural constants, and can be
/// overridden from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPolicy {
    /// Categories excluded from scoring entirely: registration and
    /// presentation only, no score-entry fields, never ranked.
    #[serde(default = "default_excluded")]
    pub excluded: Vec<Category>,

    /// Categories scored on their own side panel and kept off the main
    /// ranking board.
    #[serde(default = "default_side_stage")]
    pub side_stage: Vec<Category>,

    /// Categories folded into the fallback when under-populated.
    #[serde(default = "default_mergeable")]
    pub mergeable: Vec<Category>,

    /// The category absorbing merged participants. Exempt from the
    /// minimum-population ranking gate.
    #[serde(default = "default_fallback")]
    pub fallback: Category,

    /// A mergeable category below this population is merged; at or above
    /// it keeps its own identity. Also the minimum population for a
    /// category to be ranked at all.
    #[serde(default = "default_merge_threshold")]
    pub merge_threshold: usize,
}

fn default_excluded() -> Vec<Category> {
    vec![Category::Cospobre, Category::Infantil, Category::Animeke]
}

fn default_side_stage() -> Vec<Category> {
    vec![Category::KpopSolo, Category::KpopGrupo]
}

fn default_mergeable() -> Vec<Category> {
    vec![Category::Geek, Category::Game, Category::Anime]
}

fn default_fallback() -> Category {
    Category::DesfileLivre
}

fn default_merge_threshold() -> usize {
    3
}

impl Default for CategoryPolicy {
    fn default() -> Self {
        Self {
            excluded: default_excluded(),
            side_stage: default_side_stage(),
            mergeable: default_mergeable(),
            fallback: default_fallback(),
            merge_threshold: default_merge_threshold(),
        }
    }
}

impl CategoryPolicy {
    pub fn is_excluded(&self, category: Category) -> bool {
        self.excluded.contains(&category)
    }

    pub fn is_side_stage(&self, category: Category) -> bool {
        self.side_stage.contains(&category)
    }

    pub fn is_mergeable(&self, category: Category) -> bool {
        self.mergeable.contains(&category)
    }

    /// True when the category belongs on the main ranking board.
    pub fn on_main_board(&self, category: Category) -> bool {
        !self.is_excluded(category) && !self.is_side_stage(category)
    }

    /// Reject policies that cannot produce a coherent board.
    pub fn validate(&self) -> Result<(), String> {
        if self.is_excluded(self.fallback) || self.is_side_stage(self.fallback) {
            return Err(format!(
                "fallback category {} cannot be excluded or side-stage",
                self.fallback
            ));
        }
        if self.is_mergeable(self.fallback) {
            return Err(format!(
                "fallback category {} cannot itself be mergeable",
                self.fallback
            ));
        }
        if self.merge_threshold == 0 {
            return Err("merge_threshold must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Classification outcome for one canonical category against one roster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryDecision {
    pub category: Category,
    /// Where this category's participants appear: itself, or the fallback
    /// when merged.
    pub display_category: Category,
    /// True for categories that never enter scoring or ranking.
    pub excluded_from_scoring: bool,
    /// Set when the category is currently merged.
    pub merge_target: Option<Category>,
}

/// Participants currently registered under `category`.
pub fn population(category: Category, roster: &[Participant]) -> usize {
    roster
        .iter()
        .filter(|p| Category::parse(&p.category) == Some(category))
        .count()
}

/// True when `category` is mergeable and currently under-populated.
fn should_merge(policy: &CategoryPolicy, category: Category, roster: &[Participant]) -> bool {
    policy.is_mergeable(category) && population(category, roster) < policy.merge_threshold
}

/// Where a participant registered under `category` appears for scoring
/// and ranking, given the current roster.
pub fn display_category(
    policy: &CategoryPolicy,
    category: Category,
    roster: &[Participant],
) -> Category {
    if should_merge(policy, category, roster) {
        policy.fallback
    } else {
        category
    }
}

/// Classify every canonical category against the current roster.
///
/// Computed fresh on every call; population counts are what move the
/// merge decisions.
pub fn classify(policy: &CategoryPolicy, roster: &[Participant]) -> Vec<CategoryDecision> {
    Category::ALL
        .iter()
        .map(|&category| {
            let display = display_category(policy, category, roster);
            CategoryDecision {
                category,
                display_category: display,
                excluded_from_scoring: policy.is_excluded(category),
                merge_target: (display != category).then_some(display),
            }
        })
        .collect()
}

/// Derived roster with merged categories reassigned to the fallback.
///
/// Walks categories in canonical order; participants of an
/// under-populated mergeable category are re-labelled as derived copies,
/// and the fallback block (natives plus absorbed participants) lands at
/// the end. Stored records are never mutated. Participants whose category
/// does not parse are carried through unchanged.
pub fn group_roster(policy: &CategoryPolicy, roster: &[Participant]) -> Vec<Participant> {
    let mut grouped = Vec::with_capacity(roster.len());
    let mut fallback_block: Vec<Participant> = roster
        .iter()
        .filter(|p| Category::parse(&p.category) == Some(policy.fallback))
        .cloned()
        .collect();

    for category in Category::ALL {
        if category == policy.fallback {
            continue;
        }
        let members = roster
            .iter()
            .filter(|p| Category::parse(&p.category) == Some(category));
        if should_merge(policy, category, roster) {
            fallback_block.extend(members.map(|p| p.with_category(policy.fallback.name())));
        } else {
            grouped.extend(members.cloned());
        }
    }

    grouped.extend(
        roster
            .iter()
            .filter(|p| Category::parse(&p.category).is_none())
            .cloned(),
    );
    grouped.append(&mut fallback_block);
    grouped
}

/// Roster ordering: canonical category position, then case-insensitive
/// name. Unknown categories sort after all known ones.
pub fn roster_order(a: &Participant, b: &Participant) -> Ordering {
    let pos = |p: &Participant| {
        Category::parse(&p.category)
            .map(Category::position)
            .unwrap_or(usize::MAX)
    };
    pos(a)
        .cmp(&pos(b))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}
