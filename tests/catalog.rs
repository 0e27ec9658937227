use iconmask::catalog::{Catalog, NameTransform};

fn write(dir: &std::path::Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

#[test]
fn directory_without_svg_files_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "readme.md", "# icons");
    write(dir.path(), "plus.png", "png");
    write(dir.path(), "svg", "no extension");

    let catalog = Catalog::scan(dir.path()).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}

#[test]
fn svg_files_are_keyed_by_base_name() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "plus.svg", "<svg></svg>");
    write(dir.path(), "arrow-left.svg", "<svg></svg>");
    write(dir.path(), "notes.txt", "ignored");

    let catalog = Catalog::scan(dir.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["arrow-left", "plus"]);

    let plus = catalog.get("plus").unwrap();
    assert_eq!(plus.name, "plus");
    assert_eq!(plus.path, dir.path().join("plus.svg"));
}

#[test]
fn subdirectories_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("nested.svg")).unwrap();
    write(dir.path(), "plus.svg", "<svg></svg>");

    let catalog = Catalog::scan(dir.path()).unwrap();
    assert!(catalog.contains("plus"));
    assert!(!catalog.contains("nested"));
}

#[test]
fn transform_is_applied_to_names() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Plus.svg", "<svg></svg>");
    write(dir.path(), "Settings.svg", "<svg></svg>");

    let catalog = Catalog::scan_with(dir.path(), |name| name.to_lowercase()).unwrap();
    assert!(catalog.contains("plus"));
    assert!(catalog.contains("settings"));
    assert!(!catalog.contains("Plus"));
    assert_eq!(catalog.get("plus").unwrap().name, "plus");
}

#[test]
fn colliding_names_keep_last_file_in_sorted_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "plus-outline.svg", "<svg>outline</svg>");
    write(dir.path(), "plus.svg", "<svg>plain</svg>");

    let transform = NameTransform {
        strip_suffix: Some("-outline".into()),
        ..Default::default()
    };
    let catalog = Catalog::scan_with(dir.path(), |name| transform.apply(name)).unwrap();

    assert_eq!(catalog.len(), 1);
    // "plus-outline.svg" < "plus.svg" byte-wise, so plus.svg wins.
    assert_eq!(catalog.get("plus").unwrap().path, dir.path().join("plus.svg"));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::scan(&dir.path().join("missing")).unwrap_err();
    assert!(err.to_string().contains("Failed to read icon directory"));
}

#[test]
fn name_transform_steps() {
    let transform = NameTransform {
        strip_prefix: Some("icon-".into()),
        strip_suffix: Some("-24".into()),
        prefix: Some("ui-".into()),
    };
    assert_eq!(transform.apply("icon-plus-24"), "ui-plus");
    assert_eq!(transform.apply("plus"), "ui-plus");

    let identity = NameTransform::default();
    assert!(identity.is_identity());
    assert_eq!(identity.apply("icon-plus"), "icon-plus");
}
