use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::Result;

use crate::breakpoints::debug_blocks;
use crate::catalog::Catalog;
use crate::config::{Config, IconSetConfig};
use crate::registry::{ComponentHost, Generator, IconComponent};
use crate::scan::collect_sources;

pub const HEADER: &str = "/* This file is auto-generated by iconmask. Do not edit manually. */\n";

#[derive(Debug)]
pub struct Stylesheet {
    pub css: String,
    /// Icons available per prefix.
    pub icon_counts: BTreeMap<String, usize>,
    pub files_scanned: usize,
    pub rules: usize,
    pub warnings: Vec<String>,
}

impl Stylesheet {
    pub fn hash(&self) -> String {
        blake3::hash(self.css.as_bytes()).to_hex().to_string()
    }
}

pub fn load_catalog(set: &IconSetConfig, config_dir: &Path) -> Result<Catalog> {
    let dir = config_dir.join(&set.dir);
    if set.transform.is_identity() {
        Catalog::scan(&dir)
    } else {
        Catalog::scan_with(&dir, |name| set.transform.apply(name))
    }
}

/// Catalogs → generator → candidates from content → stylesheet text.
pub fn generate(config: &Config, config_dir: &Path) -> Result<Stylesheet> {
    let mut generator = Generator::new();
    let mut icon_counts = BTreeMap::new();

    for (prefix, set) in &config.icons {
        let catalog = load_catalog(set, config_dir)?;
        icon_counts.insert(prefix.clone(), catalog.len());
        IconComponent::new(prefix.as_str(), catalog).register(&mut generator);
    }

    generator.add_base(debug_blocks(&config.breakpoints));

    let sources = collect_sources(
        config_dir,
        &config.content.paths,
        &config.content.extensions,
    )?;
    let mut candidates = BTreeSet::new();
    for (_, text) in &sources {
        candidates.extend(generator.extract(text));
    }

    let generated = generator.generate(&candidates)?;

    let mut css = String::from(HEADER);
    let body = generated.render();
    if !body.is_empty() {
        css.push('\n');
        css.push_str(&body);
    }

    Ok(Stylesheet {
        css,
        icon_counts,
        files_scanned: sources.len(),
        rules: generated.rules,
        warnings: generated.warnings,
    })
}

pub fn hash_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}
