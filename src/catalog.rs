use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const ICON_EXTENSION: &str = ".svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub path: PathBuf,
}

/// Logical icon name → source file, built once from a flat directory listing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    icons: BTreeMap<String, Icon>,
}

impl Catalog {
    pub fn scan(dir: &Path) -> Result<Self> {
        Self::build(dir, None)
    }

    /// Like [`Catalog::scan`], but every base name goes through `transform`.
    pub fn scan_with<F>(dir: &Path, transform: F) -> Result<Self>
    where
        F: Fn(&str) -> String,
    {
        Self::build(dir, Some(&transform))
    }

    fn build(dir: &Path, transform: Option<&dyn Fn(&str) -> String>) -> Result<Self> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read icon directory {}", dir.display()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to read icon directory {}", dir.display()))?;
            if entry.path().is_dir() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if file_name.ends_with(ICON_EXTENSION) {
                files.push((file_name, entry.path()));
            }
        }

        // Enumeration order is platform dependent; sorting makes the winner of a
        // name collision the last file name in byte order.
        files.sort();

        let mut icons = BTreeMap::new();
        for (file_name, path) in files {
            let base = &file_name[..file_name.len() - ICON_EXTENSION.len()];
            let name = match transform {
                Some(transform) => transform(base),
                None => base.to_string(),
            };
            icons.insert(name.clone(), Icon { name, path });
        }

        Ok(Self { icons })
    }

    pub fn get(&self, name: &str) -> Option<&Icon> {
        self.icons.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Icon> {
        self.icons.values()
    }
}

/// Config-driven name transform: strip a prefix, strip a suffix, then prepend
/// a prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NameTransform {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl NameTransform {
    pub fn is_identity(&self) -> bool {
        self.strip_prefix.is_none() && self.strip_suffix.is_none() && self.prefix.is_none()
    }

    pub fn apply(&self, name: &str) -> String {
        let mut name = name;
        if let Some(prefix) = &self.strip_prefix {
            name = name.strip_prefix(prefix.as_str()).unwrap_or(name);
        }
        if let Some(suffix) = &self.strip_suffix {
            name = name.strip_suffix(suffix.as_str()).unwrap_or(name);
        }
        match &self.prefix {
            Some(prefix) => format!("{prefix}{name}"),
            None => name.to_string(),
        }
    }
}
