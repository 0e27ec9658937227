use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::breakpoints::BreakpointsConfig;
use crate::catalog::NameTransform;

pub const CONFIG_NAME: &str = "iconmask.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default, skip_serializing_if = "ContentConfig::is_default")]
    pub content: ContentConfig,

    /// Icon sets keyed by class prefix: `[icons.lucide]` serves `lucide-*`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub icons: BTreeMap<String, IconSetConfig>,

    #[serde(default, skip_serializing_if = "BreakpointsConfig::is_default")]
    pub breakpoints: BreakpointsConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Generated stylesheet (default: "icons.css")
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Files and directories scanned for class usages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<PathBuf>,

    /// File extensions considered inside directories; empty means all files
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
}

impl ContentConfig {
    fn is_default(&self) -> bool {
        self.paths.is_empty() && self.extensions.is_empty()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct IconSetConfig {
    /// Directory of `.svg` files
    pub dir: PathBuf,

    #[serde(flatten)]
    pub transform: NameTransform,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("icons.css")
}

fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.validate_prefixes()?;
        config.validate_icon_dirs(config_dir)?;

        Ok(config)
    }

    fn validate_prefixes(&self) -> Result<()> {
        for prefix in self.icons.keys() {
            if !is_valid_prefix(prefix) {
                bail!(
                    "Icon set '{}': prefix may only contain letters, digits, '-' and '_'",
                    prefix
                );
            }
        }
        Ok(())
    }

    fn validate_icon_dirs(&self, config_dir: &Path) -> Result<()> {
        for (prefix, set) in &self.icons {
            let full = config_dir.join(&set.dir);
            if !full.is_dir() {
                bail!(
                    "Icon set '{}': icon directory does not exist: {}",
                    prefix,
                    full.display()
                );
            }
        }
        Ok(())
    }

    pub fn default_template() -> String {
        r##"# iconmask configuration

# Generated stylesheet, relative to this file
[output]
path = "assets/css/icons.css"

# Where to look for class usages such as `lucide-settings` or `lucide-[plus,2]`
# [content]
# paths = ["lib", "assets/js"]
# extensions = ["heex", "ex", "html", "js"]   # empty = every file

# Icon sets - the table key is the class prefix
# [icons.lucide]
# dir = "deps/lucide_icons/icons"   # directory of .svg files
# strip_prefix = "icon-"            # optional — removed from file names
# strip_suffix = "-outline"         # optional — removed from file names
# prefix = "ui-"                    # optional — prepended to icon names

# Breakpoint debug indicator (.breakpoint / .container-breakpoint)
# [breakpoints]
# color = "#713f12"
#
# [breakpoints.screens]
# sm = "40rem"
# md = "48rem"
# lg = "64rem"
#
# Containers have to be in rem for the indicator to work
# [breakpoints.containers]
# contact = "15rem"
"##
        .to_string()
    }
}
