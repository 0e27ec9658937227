use iconmask::rewrite::rewrite_svg;

const LUCIDE_PLUS: &str = r#"<svg
  xmlns="http://www.w3.org/2000/svg"
  width="24"
  height="24"
  viewBox="0 0 24 24"
  fill="none"
  stroke="currentColor"
  stroke-width="2"
  stroke-linecap="round"
  stroke-linejoin="round"
>
  <path d="M5 12h14" />
  <path d="M12 5v14" />
</svg>
"#;

#[test]
fn strips_dimensions_and_replaces_stroke_width() {
    let content = rewrite_svg(r#"<svg width="24" height="24" stroke-width="2"></svg>"#, "3");
    assert_eq!(content, r#"<svg stroke-width="3"></svg>"#);
    assert!(!content.contains("width=\"24\""));
    assert!(!content.contains("height="));
}

#[test]
fn multi_line_icon_is_collapsed() {
    let content = rewrite_svg(LUCIDE_PLUS, "1.5");
    assert!(!content.contains('\n'));
    assert!(!content.contains('\r'));
    assert!(!content.contains(" width=\"24\""));
    assert!(!content.contains("height="));
    assert!(content.contains(r#"stroke-width="1.5""#));
    assert!(content.contains(r#"viewBox="0 0 24 24""#));
    assert!(content.contains(r#"<path d="M5 12h14" />"#));
}

#[test]
fn every_line_break_form_is_removed() {
    let content = rewrite_svg("<svg>\r\n<g>\n</g>\r</svg>", "2");
    assert_eq!(content, "<svg><g></g></svg>");
}

#[test]
fn missing_stroke_width_is_not_inserted() {
    let content = rewrite_svg(r#"<svg width="24" viewBox="0 0 24 24"><path d="M0 0"/></svg>"#, "3");
    assert_eq!(content, r#"<svg viewBox="0 0 24 24"><path d="M0 0"/></svg>"#);
    assert!(!content.contains("stroke-width"));
}

#[test]
fn only_first_stroke_width_is_replaced() {
    let content = rewrite_svg(
        r#"<svg stroke-width="2"><path stroke-width="4"/></svg>"#,
        "1",
    );
    assert_eq!(content, r#"<svg stroke-width="1"><path stroke-width="4"/></svg>"#);
}

#[test]
fn inner_elements_keep_their_dimensions() {
    let content = rewrite_svg(
        r#"<svg width="24" height="24"><rect width="18" height="18" x="3" y="3"/></svg>"#,
        "2",
    );
    assert_eq!(
        content,
        r#"<svg><rect width="18" height="18" x="3" y="3"/></svg>"#
    );
}

#[test]
fn stroke_width_is_inserted_literally() {
    let content = rewrite_svg(r#"<svg stroke-width="2"></svg>"#, "$1");
    assert_eq!(content, r#"<svg stroke-width="$1"></svg>"#);
}

#[test]
fn rewrite_is_stable() {
    let once = rewrite_svg(LUCIDE_PLUS, "2");
    let twice = rewrite_svg(&once, "2");
    assert_eq!(once, twice);
}
