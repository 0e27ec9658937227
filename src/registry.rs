use std::collections::BTreeSet;

use anyhow::Result;
use regex::Regex;

use crate::catalog::Catalog;
use crate::css::{class_selector, render, Block, Rule};
use crate::declarations::Declarations;
use crate::resolve::{resolve, IconValue};

// ---------------------------------------------------------------------------
// Registration seam
// ---------------------------------------------------------------------------

/// The value part of a matched class: `lucide-settings` is `Named`,
/// `lucide-[plus,2]` is `Arbitrary`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ComponentValue {
    Named(String),
    Arbitrary(String),
}

/// A family of utility classes sharing one prefix.
pub trait Component {
    fn prefix(&self) -> &str;

    /// Values accepted in the named form.
    fn values(&self) -> Vec<&str>;

    fn resolve(&self, value: &ComponentValue) -> Result<Declarations>;
}

pub trait ComponentHost {
    fn match_component(&mut self, component: Box<dyn Component>);

    fn add_base(&mut self, blocks: Vec<Block>);
}

/// An icon catalog bound to the resolver under one prefix.
#[derive(Debug)]
pub struct IconComponent {
    prefix: String,
    catalog: Catalog,
}

impl IconComponent {
    pub fn new(prefix: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            prefix: prefix.into(),
            catalog,
        }
    }

    pub fn register(self, host: &mut impl ComponentHost) {
        host.match_component(Box::new(self));
    }
}

impl Component for IconComponent {
    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn values(&self) -> Vec<&str> {
        self.catalog.names().collect()
    }

    fn resolve(&self, value: &ComponentValue) -> Result<Declarations> {
        match value {
            ComponentValue::Named(name) => match self.catalog.get(name) {
                Some(icon) => resolve(IconValue::Icon(icon), &self.catalog),
                None => Ok(Declarations::empty()),
            },
            ComponentValue::Arbitrary(reference) => {
                resolve(IconValue::Reference(reference), &self.catalog)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    pub prefix: String,
    pub value: ComponentValue,
}

impl Candidate {
    pub fn named(prefix: &str, name: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            value: ComponentValue::Named(name.to_string()),
        }
    }

    pub fn arbitrary(prefix: &str, value: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            value: ComponentValue::Arbitrary(value.to_string()),
        }
    }

    /// The class as written in markup.
    pub fn class(&self) -> String {
        match &self.value {
            ComponentValue::Named(name) => format!("{}-{}", self.prefix, name),
            ComponentValue::Arbitrary(value) => format!("{}-[{}]", self.prefix, value),
        }
    }
}

#[derive(Debug, Default)]
pub struct Generated {
    pub blocks: Vec<Block>,
    /// Number of rules produced from candidates (base blocks excluded).
    pub rules: usize,
    pub warnings: Vec<String>,
}

impl Generated {
    pub fn render(&self) -> String {
        render(&self.blocks)
    }
}

struct Registered {
    component: Box<dyn Component>,
    pattern: Regex,
}

/// Minimal host: collects components and base blocks, discovers candidates in
/// source text and turns them into rules.
#[derive(Default)]
pub struct Generator {
    components: Vec<Registered>,
    base: Vec<Block>,
}

impl ComponentHost for Generator {
    fn match_component(&mut self, component: Box<dyn Component>) {
        let pattern = candidate_pattern(component.prefix());
        self.components.push(Registered { component, pattern });
    }

    fn add_base(&mut self, blocks: Vec<Block>) {
        self.base.extend(blocks);
    }
}

fn candidate_pattern(prefix: &str) -> Regex {
    // Group 1: arbitrary value, group 2: named value.
    let pattern = format!(
        r#"(?:^|[\s"'`:{{}}(),;>=])(?:{}-(?:\[([^\]\s"'`]+)\]|([A-Za-z0-9_-]+)))"#,
        regex::escape(prefix)
    );
    Regex::new(&pattern).expect("escaped prefix always forms a valid pattern")
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find every class in `source` that a registered component can handle.
    pub fn extract(&self, source: &str) -> BTreeSet<Candidate> {
        let mut candidates = BTreeSet::new();
        for registered in &self.components {
            let prefix = registered.component.prefix();
            let values: BTreeSet<&str> = registered.component.values().into_iter().collect();
            for caps in registered.pattern.captures_iter(source) {
                if let Some(value) = caps.get(1) {
                    candidates.insert(Candidate::arbitrary(prefix, value.as_str()));
                } else if let Some(name) = caps.get(2) {
                    if values.contains(name.as_str()) {
                        candidates.insert(Candidate::named(prefix, name.as_str()));
                    }
                }
            }
        }
        candidates
    }

    pub fn generate(&self, candidates: &BTreeSet<Candidate>) -> Result<Generated> {
        let mut generated = Generated {
            blocks: self.base.clone(),
            ..Default::default()
        };

        for candidate in candidates {
            let Some(registered) = self
                .components
                .iter()
                .find(|r| r.component.prefix() == candidate.prefix)
            else {
                generated.warnings.push(format!(
                    "No component registered for prefix '{}'",
                    candidate.prefix
                ));
                continue;
            };

            let declarations = registered.component.resolve(&candidate.value)?;
            if declarations.is_empty() {
                generated.warnings.push(format!(
                    "Unknown icon in class '{}' (no rule generated)",
                    candidate.class()
                ));
                continue;
            }

            generated
                .blocks
                .push(Block::Rule(Rule::new(class_selector(&candidate.class()), declarations)));
            generated.rules += 1;
        }

        Ok(generated)
    }
}
