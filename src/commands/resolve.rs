use std::path::Path;

use anyhow::{anyhow, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::css::{class_selector, render, Block, Rule};
use crate::pipeline::load_catalog;
use crate::resolve::resolve;

pub fn run(cli: &Cli, prefix: &str, reference: &str, json: bool) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let config_dir = cli.config.parent().unwrap_or(Path::new("."));

    let set = config
        .icons
        .get(prefix)
        .ok_or_else(|| anyhow!("Icon set '{}' not found in config", prefix))?;
    let catalog = load_catalog(set, config_dir)?;

    let declarations = resolve(reference, &catalog)?;

    if declarations.is_empty() {
        println!(
            "{} No icon matches '{}' in '{}' (no declarations)",
            "!".yellow(),
            reference,
            prefix
        );
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&declarations)?);
    } else {
        let class = format!("{prefix}-[{reference}]");
        let rule = Rule::new(class_selector(&class), declarations);
        print!("{}", render(&[Block::Rule(rule)]));
    }

    Ok(())
}
