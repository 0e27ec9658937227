use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::pipeline::{self, Stylesheet};

pub fn run(cli: &Cli, dry_run: bool, strict: bool) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let config_dir = cli.config.parent().unwrap_or(Path::new("."));

    let stylesheet = pipeline::generate(&config, config_dir)?;

    print_summary(&stylesheet);

    for warning in &stylesheet.warnings {
        println!("{} {}", "!".yellow(), warning);
    }

    if strict && !stylesheet.warnings.is_empty() {
        bail!(
            "{} warning(s) with --strict; stylesheet not written",
            stylesheet.warnings.len()
        );
    }

    let output_path = config_dir.join(&config.output.path);

    if dry_run {
        println!(
            "\n{} Dry run — {} not written.",
            "ℹ".blue(),
            output_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(&output_path, &stylesheet.css)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("{} Generated {}", "✓".green(), output_path.display());
    Ok(())
}

fn print_summary(stylesheet: &Stylesheet) {
    for (prefix, count) in &stylesheet.icon_counts {
        println!("  {:<16} {} icons", prefix.bold(), count);
    }
    println!(
        "Scanned {} file(s), generated {} icon rule(s)",
        stylesheet.files_scanned, stylesheet.rules
    );
}
