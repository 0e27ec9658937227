//! Debug indicator showing the active screen and container breakpoint.
//!
//! Markup such as `<span class="breakpoint"></span>` displays `-` below the
//! smallest threshold and the name of the largest matching threshold above it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::css::{Block, Rule};
use crate::declarations::Declarations;

pub const SCREEN_CLASS: &str = ".breakpoint";
pub const CONTAINER_CLASS: &str = ".container-breakpoint";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BreakpointsConfig {
    /// Indicator text color (default: "#713f12")
    #[serde(default = "default_color")]
    pub color: String,

    /// Screen thresholds, matched with `@media (min-width: …)`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub screens: BTreeMap<String, String>,

    /// Container thresholds, matched with `@container (min-width: …)`.
    /// Values have to be in `rem` for the indicator to work.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub containers: BTreeMap<String, String>,
}

impl Default for BreakpointsConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            screens: BTreeMap::new(),
            containers: BTreeMap::new(),
        }
    }
}

impl BreakpointsConfig {
    pub fn is_default(&self) -> bool {
        self.color == default_color() && self.screens.is_empty() && self.containers.is_empty()
    }
}

fn default_color() -> String {
    "#713f12".to_string()
}

/// Leading number of a measurement such as `"40rem"` or `"22.5rem"`.
/// Strings without one sort as zero.
pub fn threshold_value(threshold: &str) -> f64 {
    let trimmed = threshold.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (c == '-' && i == 0)))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(0.0)
}

/// Thresholds sorted ascending by numeric value; ties keep name order.
pub fn sorted_thresholds(thresholds: &BTreeMap<String, String>) -> Vec<(&str, &str)> {
    let mut entries: Vec<(&str, &str)> = thresholds
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    entries.sort_by(|a, b| threshold_value(a.1).total_cmp(&threshold_value(b.1)));
    entries
}

fn indicator_blocks<F>(
    thresholds: &BTreeMap<String, String>,
    class_name: &str,
    color: &str,
    query: F,
) -> Vec<Block>
where
    F: Fn(&str) -> String,
{
    if thresholds.is_empty() {
        return Vec::new();
    }

    let base: Declarations = [
        ("display", "block"),
        ("color", color),
        ("text-transform", "uppercase"),
        ("content", "\"-\""),
    ]
    .into_iter()
    .collect();

    let mut blocks = vec![Block::Rule(Rule::new(format!("{class_name}:before"), base))];

    for (name, value) in sorted_thresholds(thresholds) {
        let content: Declarations = [("content", format!("\"{name}\""))].into_iter().collect();
        blocks.push(Block::AtRule {
            prelude: query(value),
            rules: vec![Rule::new(format!("{class_name}::before"), content)],
        });
    }

    blocks
}

/// Base blocks for both indicators: screens first, then containers.
///
/// A section without thresholds contributes no blocks at all, not even the
/// `"-"` placeholder rule, so stylesheets without breakpoints stay free of
/// indicator CSS.
pub fn debug_blocks(config: &BreakpointsConfig) -> Vec<Block> {
    let mut blocks = indicator_blocks(&config.screens, SCREEN_CLASS, &config.color, |value| {
        format!("@media (min-width: {value})")
    });
    blocks.extend(indicator_blocks(
        &config.containers,
        CONTAINER_CLASS,
        &config.color,
        |value| format!("@container (min-width: {value})"),
    ));
    blocks
}
