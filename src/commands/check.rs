use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::pipeline::{self, hash_file};

pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    println!("{} Config is valid ({})", "✓".green(), cli.config.display());

    let config_dir = cli.config.parent().unwrap_or(Path::new("."));
    let stylesheet = pipeline::generate(&config, config_dir)?;

    for warning in &stylesheet.warnings {
        println!("{} {}", "!".yellow(), warning);
    }

    let output_path = config_dir.join(&config.output.path);
    if !output_path.exists() {
        println!(
            "{} No stylesheet found at {}",
            "✗".red(),
            output_path.display()
        );
        bail!("Stylesheet missing. Run `iconmask build` to create it.");
    }

    if hash_file(&output_path)? != stylesheet.hash() {
        println!(
            "{} {} is out of date",
            "✗".red(),
            output_path.display()
        );
        bail!("Stylesheet out of date. Run `iconmask build` to regenerate it.");
    }

    println!("{} Everything is up to date.", "✓".green());
    Ok(())
}
