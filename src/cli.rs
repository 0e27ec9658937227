use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::CONFIG_NAME;

#[derive(Parser)]
#[command(
    name = "iconmask",
    about = "Inline SVG icon sets as mask-image CSS utilities"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true, default_value = CONFIG_NAME)]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new iconmask.toml config file
    Init,

    /// Generate the stylesheet
    Build {
        /// Show what would be generated without writing
        #[arg(long)]
        dry_run: bool,

        /// Fail when a class references an unknown icon
        #[arg(long)]
        strict: bool,
    },

    /// Check config validity and whether the stylesheet is up to date
    Check,

    /// List the icons of one icon set
    List {
        /// Class prefix of the icon set (e.g. "lucide")
        prefix: String,
    },

    /// Print the declarations for one icon reference
    Resolve {
        /// Class prefix of the icon set (e.g. "lucide")
        prefix: String,

        /// Icon reference: "settings" or "plus,2"
        reference: String,

        /// Print as a JSON object instead of a CSS block
        #[arg(long)]
        json: bool,
    },
}
