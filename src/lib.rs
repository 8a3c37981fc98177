// Export modules for library usage
pub mod category;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod ranking;
pub mod score;

// Re-export commonly used types
pub use crate::category::{
    classify, display_category, group_roster, roster_order, Category, CategoryDecision,
    CategoryPolicy,
};
pub use crate::config::PodiumConfig;
pub use crate::core::{ContestSnapshot, JudgeSlot, Participant, ScoreSheet};
pub use crate::errors::PodiumError;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::snapshot::load_snapshot;
pub use crate::ranking::{
    rank, rank_all, rank_side_stage, CategoryRanking, RankingEntry, PODIUM_SIZE,
};
pub use crate::score::{collect_scores, mean, median, normalize, stddev, RawScore};
