pub mod types;

pub use types::{ContestSnapshot, JudgeSlot, Participant, ScoreSheet};
