//! Targeted text substitutions on SVG source.
//!
//! The SVG is never parsed. Two scoped rewrites are applied: explicit
//! `width`/`height` attributes are dropped from the root `<svg>` tag, and the
//! first `stroke-width` attribute gets the requested value. An icon without a
//! `stroke-width` attribute is left without one.

use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n|\r").unwrap());
static SVG_OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<svg([^>]*)>").unwrap());
static WIDTH_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\s+width="[^"]*""#).unwrap());
static HEIGHT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+height="[^"]*""#).unwrap());
static STROKE_WIDTH_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sstroke-width="[^"]*""#).unwrap());

/// Collapse the SVG onto one line and apply the attribute rewrites.
pub fn rewrite_svg(content: &str, stroke_width: &str) -> String {
    let single_line = LINE_BREAK.replace_all(content, "");
    let stripped = strip_root_dimensions(&single_line);
    let stroke = format!(r#" stroke-width="{stroke_width}""#);
    STROKE_WIDTH_ATTR
        .replace(&stripped, NoExpand(&stroke))
        .into_owned()
}

fn strip_root_dimensions(content: &str) -> String {
    SVG_OPEN_TAG
        .replacen(content, 1, |caps: &Captures| {
            let attributes = WIDTH_ATTR.replace_all(&caps[1], "");
            let attributes = HEIGHT_ATTR.replace_all(&attributes, "");
            format!("<svg{attributes}>")
        })
        .into_owned()
}
