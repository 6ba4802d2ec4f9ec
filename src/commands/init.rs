//! `pathfinder init` command - write a default config file

use std::path::Path;

use crate::cli::Cli;
use pathfinder_core::config::{PathfinderConfig, CONFIG_FILE_NAME};
use pathfinder_core::error::Result;

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path, force: bool) -> Result<()> {
    let path = root.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        pathfinder_core::bail_usage!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let config = PathfinderConfig::default();
    config.save(&path)?;
    tracing::debug!(path = %path.display(), "config written");

    crate::output_by_format!(cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "config": path.display().to_string(),
                "data_dir": config.data_dir,
                "default_map": config.default_map,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        },
        human => {
            if !cli.quiet {
                println!("Wrote {}", path.display());
                println!();
                println!(
                    "Place map files in `{}/` and run `pathfinder show`.",
                    config.data_dir
                );
            }
        }
    );

    Ok(())
}
