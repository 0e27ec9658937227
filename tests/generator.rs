use std::collections::BTreeSet;

use iconmask::catalog::Catalog;
use iconmask::css::{escape_class, Block};
use iconmask::registry::{
    Candidate, Component, ComponentHost, ComponentValue, Generator, IconComponent,
};

fn lucide() -> (tempfile::TempDir, Generator) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("plus.svg"),
        r#"<svg width="24" height="24" stroke-width="2"><path d="M5 12h14"/></svg>"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("arrow-left.svg"),
        r#"<svg stroke-width="2"><path d="m12 19-7-7 7-7"/></svg>"#,
    )
    .unwrap();

    let mut generator = Generator::new();
    IconComponent::new("lucide", Catalog::scan(dir.path()).unwrap()).register(&mut generator);
    (dir, generator)
}

#[test]
fn icon_component_exposes_catalog_names() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("plus.svg"), "<svg/>").unwrap();
    let component = IconComponent::new("lucide", Catalog::scan(dir.path()).unwrap());

    assert_eq!(component.prefix(), "lucide");
    assert_eq!(component.values(), vec!["plus"]);
    assert!(component
        .resolve(&ComponentValue::Named("missing".into()))
        .unwrap()
        .is_empty());
}

#[test]
fn extracts_named_and_arbitrary_candidates() {
    let (_dir, generator) = lucide();
    let source = r#"<div class="lucide-plus text-sm"><span class='lucide-[arrow-left,3]'></span></div>"#;

    let candidates = generator.extract(source);
    let expected: BTreeSet<Candidate> = [
        Candidate::named("lucide", "plus"),
        Candidate::arbitrary("lucide", "arrow-left,3"),
    ]
    .into_iter()
    .collect();
    assert_eq!(candidates, expected);
}

#[test]
fn named_candidates_must_be_in_catalog() {
    let (_dir, generator) = lucide();
    let candidates = generator.extract(r#"class="lucide-settings lucide-arrow-left""#);
    assert_eq!(
        candidates.into_iter().collect::<Vec<_>>(),
        vec![Candidate::named("lucide", "arrow-left")]
    );
}

#[test]
fn candidates_start_at_class_boundary() {
    let (_dir, generator) = lucide();
    let candidates = generator.extract("notlucide-plus my-lucide-plus --lucide-plus");
    assert!(candidates.is_empty());

    let candidates = generator.extract("data-active:lucide-plus");
    assert_eq!(candidates.len(), 1);

    let candidates = generator.extract("lucide-plus");
    assert_eq!(candidates.len(), 1);
}

#[test]
fn unknown_arbitrary_icon_is_a_warning() {
    let (_dir, generator) = lucide();
    let candidates = generator.extract(r#"class="lucide-[missing,2] lucide-plus""#);
    let generated = generator.generate(&candidates).unwrap();

    assert_eq!(generated.rules, 1);
    assert_eq!(generated.warnings.len(), 1);
    assert!(generated.warnings[0].contains("lucide-[missing,2]"));
    assert!(!generated.render().contains("missing"));
}

#[test]
fn generates_escaped_rules_in_sorted_order() {
    let (_dir, generator) = lucide();
    let candidates = generator.extract(r#"class="lucide-plus lucide-[plus,2.5]""#);
    let generated = generator.generate(&candidates).unwrap();
    let css = generated.render();

    assert_eq!(generated.rules, 2);
    assert!(generated.warnings.is_empty());

    let named = css.find(".lucide-plus {").unwrap();
    let arbitrary = css.find(r".lucide-\[plus\,2\.5\] {").unwrap();
    assert!(named < arbitrary);

    assert!(css.contains(r#"stroke-width="2.5""#));
    assert!(css.contains(r#"stroke-width="1.5""#));
    assert!(css.contains("  mask: var(--icon-url-plus);\n"));
}

#[test]
fn base_blocks_come_first() {
    let (_dir, mut generator) = lucide();
    let base = Block::Rule(iconmask::css::Rule::new(
        ".breakpoint:before",
        [("display", "block")].into_iter().collect(),
    ));
    generator.add_base(vec![base.clone()]);

    let candidates = generator.extract("lucide-plus");
    let generated = generator.generate(&candidates).unwrap();
    assert_eq!(generated.blocks[0], base);
    assert_eq!(generated.blocks.len(), 2);
    assert_eq!(generated.rules, 1);
}

#[test]
fn candidate_for_unregistered_prefix_is_a_warning() {
    let generator = Generator::new();
    let candidates: BTreeSet<Candidate> = [Candidate::named("feather", "plus")].into_iter().collect();
    let generated = generator.generate(&candidates).unwrap();
    assert_eq!(generated.rules, 0);
    assert_eq!(generated.warnings.len(), 1);
}

#[test]
fn class_escaping() {
    assert_eq!(escape_class("lucide-plus"), "lucide-plus");
    assert_eq!(escape_class("lucide-[plus,2]"), r"lucide-\[plus\,2\]");
    assert_eq!(escape_class("1col"), r"\31 col");
    assert_eq!(escape_class("a:b/c"), r"a\:b\/c");
}

#[test]
fn multiple_prefixes_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("logo.svg"), "<svg/>").unwrap();

    let (_lucide_dir, mut generator) = lucide();
    IconComponent::new("custom", Catalog::scan(dir.path()).unwrap()).register(&mut generator);

    let candidates = generator.extract("custom-logo lucide-logo custom-plus");
    assert_eq!(
        candidates.into_iter().collect::<Vec<_>>(),
        vec![Candidate::named("custom", "logo")]
    );
}
