//! JSON snapshot loading.
//!
//! A snapshot file carries the roster plus raw judge scores keyed by
//! participant id. Score values may be numbers or strings (judges type
//! with a decimal comma); every value passes through the normalization
//! boundary while the snapshot is built, so the in-memory `ScoreSheet`s
//! always satisfy the half-point invariant.
//!
//! Expected shape:
//!
//! ```json
//! {
//!   "participants": [
//!     { "id": "p1", "name": "Ana", "category": "ANIME",
//!       "entry": "Sailor Moon", "created": 100 }
//!   ],
//!   "scores": {
//!     "p1": { "judge_1": 9, "judge_2": "8,5" }
//!   }
//! }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::core::{ContestSnapshot, JudgeSlot, Participant, ScoreSheet};
use crate::errors::PodiumError;
use crate::score::normalize::RawScore;

/// A judge score as it appears on the wire: numeric or text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawScoreField {
    Number(f64),
    Text(String),
}

impl From<RawScoreField> for RawScore {
    fn from(field: RawScoreField) -> Self {
        match field {
            RawScoreField::Number(v) => RawScore::Value(v),
            RawScoreField::Text(s) => RawScore::Text(s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSheet {
    #[serde(default)]
    judge_1: Option<RawScoreField>,
    #[serde(default)]
    judge_2: Option<RawScoreField>,
    #[serde(default)]
    judge_3: Option<RawScoreField>,
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    participants: Vec<Participant>,
    #[serde(default)]
    scores: BTreeMap<String, RawSheet>,
}

/// Load and normalize a contest snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<ContestSnapshot, PodiumError> {
    let file = File::open(path).map_err(|e| PodiumError::io(path, e))?;
    let raw: RawSnapshot =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| PodiumError::Snapshot {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(build_snapshot(raw))
}

fn build_snapshot(raw: RawSnapshot) -> ContestSnapshot {
    let mut sheets = BTreeMap::new();
    for (id, raw_sheet) in raw.scores {
        let mut sheet = ScoreSheet::new();
        let slots = [
            (JudgeSlot::First, raw_sheet.judge_1),
            (JudgeSlot::Second, raw_sheet.judge_2),
            (JudgeSlot::Third, raw_sheet.judge_3),
        ];
        for (slot, field) in slots {
            if let Some(field) = field {
                sheet.record(slot, RawScore::from(field));
            }
        }
        if !sheet.is_empty() {
            sheets.insert(id, sheet);
        } else {
            log::debug!("dropping empty score sheet for participant {id}");
        }
    }
    ContestSnapshot {
        participants: raw.participants,
        sheets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_snapshot(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_and_normalizes_scores() {
        let file = write_snapshot(indoc! {r#"
            {
              "participants": [
                { "id": "p1", "name": "Ana", "category": "ANIME",
                  "entry": "Sailor Moon", "created": 100 }
              ],
              "scores": {
                "p1": { "judge_1": 9, "judge_2": "8,3" }
              }
            }
        "#});

        let snapshot = load_snapshot(file.path()).unwrap();
        assert_eq!(snapshot.participants.len(), 1);
        let sheet = snapshot.sheet("p1").unwrap();
        assert_eq!(sheet.score(JudgeSlot::First), Some(9.0));
        assert_eq!(sheet.score(JudgeSlot::Second), Some(8.5));
        assert_eq!(sheet.score(JudgeSlot::Third), None);
    }

    #[test]
    fn sheet_of_garbage_scores_is_equivalent_to_no_sheet() {
        let file = write_snapshot(indoc! {r#"
            {
              "participants": [
                { "id": "p1", "name": "Ana", "category": "ANIME",
                  "entry": "Sailor Moon", "created": 100 }
              ],
              "scores": {
                "p1": { "judge_1": "n/a" }
              }
            }
        "#});

        let snapshot = load_snapshot(file.path()).unwrap();
        assert!(snapshot.sheet("p1").is_none());
    }

    #[test]
    fn missing_scores_section_is_fine() {
        let file = write_snapshot(indoc! {r#"
            { "participants": [] }
        "#});

        let snapshot = load_snapshot(file.path()).unwrap();
        assert!(snapshot.participants.is_empty());
        assert!(snapshot.sheets.is_empty());
    }

    #[test]
    fn malformed_json_reports_the_path() {
        let file = write_snapshot("{ not json");
        let err = load_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, PodiumError::Snapshot { .. }));
    }
}
