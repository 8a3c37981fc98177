use anyhow::Result;
use std::path::PathBuf;

use crate::category::classify::{group_roster, roster_order};
use crate::commands::rank::resolve_format;
use crate::config::PodiumConfig;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::snapshot::load_snapshot;

pub struct RosterConfig {
    pub snapshot: PathBuf,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

/// Print the roster as the scoring view sees it: merged categories
/// reassigned, sorted canonically by category then name.
pub fn run(config: RosterConfig) -> Result<()> {
    let podium_config = PodiumConfig::load(config.config.as_deref())?;
    let snapshot = load_snapshot(&config.snapshot)?;

    let mut grouped = group_roster(&podium_config.policy, &snapshot.participants);
    grouped.sort_by(roster_order);

    let format = resolve_format(config.format, &podium_config);
    let mut writer = create_writer(format, config.output)?;
    writer.write_roster(&grouped)
}
