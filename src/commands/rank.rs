use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::category::{classify::group_roster, Category};
use crate::config::PodiumConfig;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::snapshot::load_snapshot;
use crate::ranking::{self, CategoryRanking};

pub struct RankConfig {
    pub snapshot: PathBuf,
    pub config: Option<PathBuf>,
    pub category: Option<String>,
    pub side_stage: bool,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn run(config: RankConfig) -> Result<()> {
    let podium_config = PodiumConfig::load(config.config.as_deref())?;
    let policy = &podium_config.policy;
    let snapshot = load_snapshot(&config.snapshot)?;
    log::info!(
        "loaded {} participants, {} score sheets",
        snapshot.participants.len(),
        snapshot.sheets.len()
    );

    let board: Vec<CategoryRanking> = if config.side_stage {
        ranking::rank_side_stage(&snapshot.participants, &snapshot.sheets, policy)
    } else {
        match &config.category {
            Some(raw) => {
                let category = Category::parse(raw)
                    .with_context(|| format!("unknown category '{raw}'"))?;
                let entries =
                    ranking::rank(category, &snapshot.participants, &snapshot.sheets, policy);
                if entries.is_empty() {
                    log::warn!("category {category} has no rankable entries");
                    Vec::new()
                } else {
                    let grouped = group_roster(policy, &snapshot.participants);
                    let classified = grouped
                        .iter()
                        .filter(|p| Category::parse(&p.category) == Some(category))
                        .count();
                    vec![CategoryRanking {
                        category,
                        classified,
                        entries,
                    }]
                }
            }
            None => ranking::rank_all(&snapshot.participants, &snapshot.sheets, policy),
        }
    };

    let format = resolve_format(config.format, &podium_config);
    let mut writer = create_writer(format, config.output)?;
    writer.write_board(&board)
}

pub(crate) fn resolve_format(flag: Option<OutputFormat>, config: &PodiumConfig) -> OutputFormat {
    flag.unwrap_or(match config.output.default_format.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Terminal,
    })
}
