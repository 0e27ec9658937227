use anyhow::{Context, Result};

use crate::catalog::{Catalog, Icon};
use crate::declarations::{icon_declarations, Declarations};
use crate::reference::{parse_reference, DEFAULT_STROKE_WIDTH};
use crate::rewrite::rewrite_svg;

/// What a point of use hands the resolver.
#[derive(Debug, Clone, Copy)]
pub enum IconValue<'a> {
    /// `"name"` or `"name,strokeWidth"`, looked up in the catalog.
    Reference(&'a str),
    /// A catalog entry, resolved with the default stroke width.
    Icon(&'a Icon),
}

impl<'a> From<&'a str> for IconValue<'a> {
    fn from(value: &'a str) -> Self {
        IconValue::Reference(value)
    }
}

impl<'a> From<&'a Icon> for IconValue<'a> {
    fn from(icon: &'a Icon) -> Self {
        IconValue::Icon(icon)
    }
}

/// Resolve an icon value into its CSS declarations.
///
/// A reference whose name is not in `catalog` yields empty declarations rather
/// than an error. Failing to read a known icon is an error; invalid UTF-8 in
/// its content is replaced rather than rejected.
pub fn resolve<'a>(value: impl Into<IconValue<'a>>, catalog: &Catalog) -> Result<Declarations> {
    let (name, icon, stroke_width) = match value.into() {
        IconValue::Icon(icon) => (icon.name.as_str(), Some(icon), DEFAULT_STROKE_WIDTH),
        IconValue::Reference(value) => {
            let reference = parse_reference(value);
            (
                reference.name,
                catalog.get(reference.name),
                reference.stroke_width,
            )
        }
    };

    let Some(icon) = icon else {
        return Ok(Declarations::empty());
    };

    let bytes = std::fs::read(&icon.path)
        .with_context(|| format!("Failed to read icon: {}", icon.path.display()))?;
    let source = String::from_utf8_lossy(&bytes);
    let content = rewrite_svg(&source, stroke_width);

    Ok(icon_declarations(name, &content))
}
