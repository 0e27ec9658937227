use serde::ser::{Serialize, SerializeMap, Serializer};

pub const CUSTOM_PROPERTY_PREFIX: &str = "--icon-url-";
pub const ICON_SIZE: &str = "1.25rem";

/// Ordered CSS property/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations(Vec<(String, String)>);

impl Declarations {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.push((property.into(), value.into()));
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

impl<P: Into<String>, V: Into<String>> FromIterator<(P, V)> for Declarations {
    fn from_iter<T: IntoIterator<Item = (P, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(p, v)| (p.into(), v.into()))
                .collect(),
        )
    }
}

impl Serialize for Declarations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (property, value) in &self.0 {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

pub fn custom_property_name(icon_name: &str) -> String {
    format!("{CUSTOM_PROPERTY_PREFIX}{icon_name}")
}

/// Declarations that paint `content` (already rewritten SVG text) as a mask
/// filled with the current text color.
pub fn icon_declarations(icon_name: &str, content: &str) -> Declarations {
    let property = custom_property_name(icon_name);
    let reference = format!("var({property})");

    let mut declarations = Declarations::empty();
    declarations.push(
        property.as_str(),
        format!("url('data:image/svg+xml;utf8,{content}')"),
    );
    declarations.push("-webkit-mask", reference.as_str());
    declarations.push("mask", reference);
    declarations.push("mask-repeat", "no-repeat");
    declarations.push("background-color", "currentColor");
    declarations.push("vertical-align", "middle");
    declarations.push("horizontal-align", "middle");
    declarations.push("display", "inline-block");
    declarations.push("width", ICON_SIZE);
    declarations.push("height", ICON_SIZE);
    declarations
}
