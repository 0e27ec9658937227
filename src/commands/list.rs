use std::path::Path;

use anyhow::{anyhow, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::pipeline::load_catalog;

pub fn run(cli: &Cli, prefix: &str) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let config_dir = cli.config.parent().unwrap_or(Path::new("."));

    let set = config
        .icons
        .get(prefix)
        .ok_or_else(|| anyhow!("Icon set '{}' not found in config", prefix))?;
    let catalog = load_catalog(set, config_dir)?;

    println!("{}", format!("Icons ({prefix})").bold());
    println!("{:<30} {:<40} Path", "Name", "Class");
    println!("{}", "-".repeat(90));
    for icon in catalog.iter() {
        let class = format!("{prefix}-{}", icon.name);
        println!("{:<30} {:<40} {}", icon.name, class, icon.path.display());
    }
    println!("\nTotal: {}", catalog.len());

    Ok(())
}
