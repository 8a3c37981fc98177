use crate::config::CONFIG_FILE;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Podium Configuration
#
# Category names must match the canonical set exactly.

[policy]
# Categories excluded from scoring entirely (registration only).
excluded = ["COSPOBRE", "INFANTIL", "ANIMEKÊ"]

# Categories scored on their own panel, kept off the main board.
side_stage = ["K-POP SOLO", "K-POP GRUPO"]

# Categories folded into the fallback when under-populated.
mergeable = ["GEEK", "GAME", "ANIME"]

# The absorbing category; exempt from the minimum-population gate.
fallback = "DESFILE LIVRE"

# Minimum population for a category to keep its identity and be ranked.
merge_threshold = 3

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE} configuration file");

    Ok(())
}
