use insta::{assert_json_snapshot, assert_snapshot};

use radial_menu::cli::output::render_tree;
use radial_menu::error::MenuError;
use radial_menu::menu::RadialMenuConfiguration;
use radial_menu::parse::parse_yaml;

fn parse_error(yaml: &str) -> MenuError {
    parse_yaml(yaml).expect_err("document should be rejected")
}

#[test]
fn test_error_unknown_string_format() {
    let err = parse_error("- editor:focus\n- Focus the editor\n");
    assert_snapshot!(err.to_string(), @r#"Unknown string item at `[1]`: "Focus the editor""#);
}

#[test]
fn test_error_missing_group_name() {
    let err = parse_error("- keycode: g\n  items:\n    - editor:focus\n");
    assert_snapshot!(err.to_string(), @"Group at `[0]` has no name");
}

#[test]
fn test_error_ambiguous_tuple_object() {
    let err = parse_error("items:\n  - x:\n      icon: star\n");
    assert_snapshot!(err.to_string(), @"Failed to handle tuple-object `x` at `items[0]`");
}

#[test]
fn test_error_malformed_document() {
    let err = parse_error("true\n");
    assert_snapshot!(
        err.to_string(),
        @"Malformed document: expected a list or a map with `items` at the root, found a boolean"
    );
}

#[test]
fn test_structured_missing_action_id() {
    let err = parse_error("- Group:\n    - {}\n");
    assert_json_snapshot!(err.to_structured(), @r#"
    {
      "code": "MISSING_ACTION_ID",
      "numeric_code": 103,
      "message": "Action at `[0].Group[0]` has no id",
      "suggestion": "Add an `id` (or legacy `command`) field holding a command id such as `editor:focus`",
      "context": {
        "path": "[0].Group[0]"
      },
      "recoverable": true,
      "category": "document"
    }
    "#);
}

#[test]
fn test_tree_rendering() {
    let menu = parse_yaml(
        "\
- command-palette:open
- s: switcher:open Switch files
- w:
    name: Workspace
    items:
      - workspace:close Close tab
      - Split:
          - workspace:split-vertical
          - workspace:split-horizontal
",
    )
    .unwrap();
    assert_snapshot!(render_tree(&menu), @r"
    Radial Menu (3 items)
      command-palette:open
      [s] Switch files (switcher:open)
      [w] Workspace/
        Close tab (workspace:close)
        Split/
          workspace:split-vertical
          workspace:split-horizontal
    ");
}

#[test]
fn test_builtin_tree_head() {
    let config = RadialMenuConfiguration::builtin();
    let tree = render_tree(&config.actions);
    let head: Vec<&str> = tree.lines().take(4).collect();
    assert_snapshot!(head.join("\n"), @r"
    Radial Menu (10 items)
      command-palette:open
      editor:focus
      global-search:open
    ");
}
