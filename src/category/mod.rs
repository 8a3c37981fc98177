//! Contest categories and classification rules.

pub mod classify;

pub use classify::{
    classify, display_category, group_roster, population, roster_order, CategoryDecision,
    CategoryPolicy,
};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed category set, declared in canonical display order.
///
/// Every sort and iteration over categories uses this order, never an
/// alphabetical or hash-map order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "COSPOBRE")]
    Cospobre,
    #[serde(rename = "INFANTIL")]
    Infantil,
    #[serde(rename = "GEEK")]
    Geek,
    #[serde(rename = "GAME")]
    Game,
    #[serde(rename = "ANIME")]
    Anime,
    #[serde(rename = "DESFILE LIVRE")]
    DesfileLivre,
    #[serde(rename = "APRESENTAÇÃO SOLO OU GRUPO")]
    ApresentacaoSoloOuGrupo,
    #[serde(rename = "ANIMEKÊ")]
    Animeke,
    #[serde(rename = "K-POP SOLO")]
    KpopSolo,
    #[serde(rename = "K-POP GRUPO")]
    KpopGrupo,
}

impl Category {
    /// All categories in canonical display order.
    pub const ALL: [Category; 10] = [
        Category::Cospobre,
        Category::Infantil,
        Category::Geek,
        Category::Game,
        Category::Anime,
        Category::DesfileLivre,
        Category::ApresentacaoSoloOuGrupo,
        Category::Animeke,
        Category::KpopSolo,
        Category::KpopGrupo,
    ];

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Cospobre => "COSPOBRE",
            Category::Infantil => "INFANTIL",
            Category::Geek => "GEEK",
            Category::Game => "GAME",
            Category::Anime => "ANIME",
            Category::DesfileLivre => "DESFILE LIVRE",
            Category::ApresentacaoSoloOuGrupo => "APRESENTAÇÃO SOLO OU GRUPO",
            Category::Animeke => "ANIMEKÊ",
            Category::KpopSolo => "K-POP SOLO",
            Category::KpopGrupo => "K-POP GRUPO",
        }
    }

    /// Position in canonical order.
    pub fn position(self) -> usize {
        Category::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Case-insensitive lookup of a raw category string.
    ///
    /// Unknown strings return `None`; classification treats them as
    /// not-mergeable and not-excluded, and ranking never produces entries
    /// for them. A silent no-op, not an error.
    pub fn parse(raw: &str) -> Option<Category> {
        let upper = raw.trim().to_uppercase();
        Category::ALL.iter().copied().find(|c| c.name() == upper)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
