use std::sync::Arc;

use radial_menu::MenuError;
use radial_menu::menu::ConfigurationFormat;
use radial_menu::store::{ConfigurationStore, SourceFile};

#[test]
fn loads_markdown_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Radial Menu.md");
    std::fs::write(
        &path,
        "# Menu\n\n```yaml\n- editor:focus\n- f: file-explorer:open Files\n```\n",
    )
    .unwrap();

    let store = ConfigurationStore::new();
    let config = store.load(&path).unwrap();
    assert_eq!(config.format, ConfigurationFormat::Markdown);
    assert_eq!(config.actions.len(), 2);
    assert!(!store.is_stale(&path).unwrap());
    assert!(store.reload_if_stale(&path).unwrap().is_none());
}

#[test]
fn rejected_update_keeps_published_tree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.yaml");
    std::fs::write(&path, "- editor:focus\n").unwrap();

    let store = ConfigurationStore::new();
    let good = store.load(&path).unwrap();

    let broken = SourceFile {
        contents: "- editor:focus\n- Just words\n".to_string(),
        modified: None,
    };
    let err = store.apply(&path, &broken).unwrap_err();
    assert!(matches!(err, MenuError::UnknownStringFormat { ref path, .. } if path == "[1]"));
    assert!(Arc::ptr_eq(&good, &store.current().unwrap()));
}

#[test]
fn missing_file_is_a_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigurationStore::new();
    let err = store.load(&dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.code().numeric(), 201);
    assert!(store.current().is_none());
}
