use crate::declarations::Declarations;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Declarations,
}

impl Rule {
    pub fn new(selector: impl Into<String>, declarations: Declarations) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Rule(Rule),
    /// `@media …` / `@container …` wrapping nested rules.
    AtRule { prelude: String, rules: Vec<Rule> },
}

/// Escape a class name for use in a selector: `lucide-[plus,2]` becomes
/// `lucide-\[plus\,2\]`.
pub fn escape_class(class: &str) -> String {
    let mut out = String::with_capacity(class.len());
    for (i, c) in class.chars().enumerate() {
        if i == 0 && c.is_ascii_digit() {
            out.push_str(&format!("\\{:x} ", c as u32));
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' || !c.is_ascii() {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}

pub fn class_selector(class: &str) -> String {
    format!(".{}", escape_class(class))
}

fn render_rule(out: &mut String, rule: &Rule, indent: &str) {
    out.push_str(&format!("{indent}{} {{\n", rule.selector));
    for (property, value) in rule.declarations.iter() {
        out.push_str(&format!("{indent}  {property}: {value};\n"));
    }
    out.push_str(&format!("{indent}}}\n"));
}

pub fn render(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match block {
            Block::Rule(rule) => render_rule(&mut out, rule, ""),
            Block::AtRule { prelude, rules } => {
                out.push_str(&format!("{prelude} {{\n"));
                for rule in rules {
                    render_rule(&mut out, rule, "  ");
                }
                out.push_str("}\n");
            }
        }
    }
    out
}
