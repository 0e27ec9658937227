/// Stroke width applied when a reference carries no modifier.
pub const DEFAULT_STROKE_WIDTH: &str = "1.5";

/// A parsed icon reference: `"settings"` or `"plus,2"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconReference<'a> {
    pub name: &'a str,
    pub stroke_width: &'a str,
}

/// Split a reference on its first comma into name and stroke width.
///
/// The stroke width is everything after the first comma, taken verbatim:
/// `"plus,2,3"` yields `"2,3"`, not `"2"`. It is not checked for being
/// numeric.
pub fn parse_reference(value: &str) -> IconReference<'_> {
    match value.split_once(',') {
        Some((name, stroke_width)) => IconReference { name, stroke_width },
        None => IconReference {
            name: value,
            stroke_width: DEFAULT_STROKE_WIDTH,
        },
    }
}
