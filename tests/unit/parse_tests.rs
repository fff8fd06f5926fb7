//! Table-driven checks of item classification and document parsing.

use radial_menu::error::ErrorCode;
use radial_menu::menu::{Action, ActionGroup, ConfigurationFormat, MenuItem};
use radial_menu::parse::{parse_configuration, parse_markdown, parse_report, parse_yaml};

fn first_item(yaml: &str) -> MenuItem {
    let root = parse_yaml(yaml).unwrap_or_else(|err| panic!("{yaml:?} failed: {err}"));
    assert_eq!(root.items.len(), 1, "expected one item in {yaml:?}");
    root.items.into_iter().next().unwrap()
}

#[test]
fn item_shapes() {
    let cases: Vec<(&str, &str, MenuItem)> = vec![
        (
            "plain string",
            "- editor:focus\n",
            Action::new("editor:focus").into(),
        ),
        (
            "string with display name",
            "- app:go-back Go back\n",
            Action::new("app:go-back").with_name("Go back").into(),
        ),
        ("legacy bare command", "- undo\n", Action::new("undo").into()),
        (
            "keycode tuple",
            "- a: editor:focus Focus Editor\n",
            Action::new("editor:focus")
                .with_name("Focus Editor")
                .with_keycode("a")
                .into(),
        ),
        (
            "bare qualified key",
            "- \"workspace:close\":\n",
            Action::new("workspace:close").into(),
        ),
        (
            "record action",
            "- id: editor:focus\n  name: Focus\n  keycode: f\n",
            Action::new("editor:focus")
                .with_name("Focus")
                .with_keycode("f")
                .into(),
        ),
        (
            "legacy record fields",
            "- command: editor:focus\n  description: Focus\n",
            Action::new("editor:focus").with_name("Focus").into(),
        ),
        (
            "single legacy field keys a command",
            "- command: switcher:open\n",
            Action::new("switcher:open").with_keycode("id").into(),
        ),
        (
            "field name as keycode",
            "- id: editor:focus\n",
            Action::new("editor:focus").with_keycode("id").into(),
        ),
        (
            "field name as keycode for name",
            "- name: editor:focus\n",
            Action::new("editor:focus").with_keycode("name").into(),
        ),
        (
            "field name as group name",
            "- items:\n    - a:b\n",
            ActionGroup::new("items")
                .with_items([Action::new("a:b").into()])
                .into(),
        ),
        (
            "keyed action names itself",
            "- f:\n    id: editor:focus\n    name: Focus\n",
            Action::new("editor:focus")
                .with_name("Focus")
                .with_keycode("f")
                .into(),
        ),
        (
            "keyed action without name",
            "- Focus:\n    id: editor:focus\n    keycode: f\n",
            Action::new("editor:focus")
                .with_name("Focus")
                .with_keycode("f")
                .into(),
        ),
        (
            "named list",
            "- Workspace:\n    - workspace:close\n",
            ActionGroup::new("Workspace")
                .with_items([Action::new("workspace:close").into()])
                .into(),
        ),
        (
            "record group",
            "- name: Files\n  keycode: x\n  items:\n    - file-explorer:open\n",
            ActionGroup::new("Files")
                .with_keycode("x")
                .with_items([Action::new("file-explorer:open").into()])
                .into(),
        ),
        (
            "keyed group with named body",
            "- w:\n    name: Workspace\n    items:\n      - workspace:close\n",
            ActionGroup::new("Workspace")
                .with_keycode("w")
                .with_items([Action::new("workspace:close").into()])
                .into(),
        ),
        (
            "keyed group without name",
            "- Workspace:\n    keycode: w\n    items:\n      - workspace:close\n",
            ActionGroup::new("Workspace")
                .with_keycode("w")
                .with_items([Action::new("workspace:close").into()])
                .into(),
        ),
    ];

    for (label, yaml, expected) in cases {
        assert_eq!(first_item(yaml), expected, "case: {label}");
    }
}

#[test]
fn qualified_key_takes_overrides_from_body() {
    let item = first_item(
        "- \"editor:focus Focus\":\n    keycode: f\n    color: red\n    icon: star\n",
    );
    let action = item.as_action().unwrap();
    assert_eq!(action.id, "editor:focus");
    assert_eq!(action.name.as_deref(), Some("Focus"));
    assert_eq!(action.keycode.as_deref(), Some("f"));
    assert_eq!(action.color.as_deref(), Some("red"));
    assert_eq!(action.icon.as_deref(), Some("star"));
}

#[test]
fn structural_errors() {
    let cases: &[(&str, &str, ErrorCode, &str)] = &[
        (
            "plain words",
            "- Focus editor\n",
            ErrorCode::UnknownStringFormat,
            "`[0]`",
        ),
        (
            "number item",
            "- editor:focus\n- 42\n",
            ErrorCode::UnknownStringFormat,
            "`[1]`",
        ),
        ("null item", "- ~\n", ErrorCode::UnknownStringFormat, "`[0]`"),
        (
            "group without name",
            "- icon: x\n  items:\n    - a:b\n",
            ErrorCode::MissingGroupName,
            "`[0]`",
        ),
        (
            "blank group name",
            "- name: \"  \"\n  items:\n    - a:b\n",
            ErrorCode::MissingGroupName,
            "`[0]`",
        ),
        (
            "record without id",
            "- icon: star\n  color: red\n",
            ErrorCode::MissingActionId,
            "`[0]`",
        ),
        (
            "field name keying plain text",
            "- icon: star\n",
            ErrorCode::UnknownStringFormat,
            "`[0]`",
        ),
        (
            "blank id",
            "- id: \"\"\n  name: Nothing\n",
            ErrorCode::MissingActionId,
            "`[0]`",
        ),
        (
            "unrecognized tuple",
            "- k:\n    icon: star\n",
            ErrorCode::AmbiguousTupleObject,
            "`[0]`",
        ),
        (
            "numeric tuple",
            "- k: 3\n",
            ErrorCode::AmbiguousTupleObject,
            "`[0]`",
        ),
        (
            "scalar root",
            "hello\n",
            ErrorCode::MalformedDocument,
            "found a string",
        ),
        (
            "map root without items",
            "name: Menu\n",
            ErrorCode::MalformedDocument,
            "without `items`",
        ),
        (
            "yaml syntax",
            "- [unclosed\n",
            ErrorCode::YamlSyntax,
            "YAML syntax error",
        ),
        (
            "nested error path",
            "items:\n  - a:b\n  - Workspace:\n      - c:d\n      - nonsense\n",
            ErrorCode::UnknownStringFormat,
            "`items[1].Workspace[1]`",
        ),
    ];

    for (label, yaml, code, fragment) in cases {
        let err = parse_yaml(yaml).expect_err(label);
        assert_eq!(err.code(), *code, "case: {label} ({err})");
        assert!(
            err.to_string().contains(fragment),
            "case: {label}: {err} does not mention {fragment}"
        );
    }
}

#[test]
fn root_map_sets_group_fields() {
    let root =
        parse_yaml("name: Main\nkeycode: m\nicon: home\nitems:\n  - editor:focus\n").unwrap();
    assert_eq!(root.name, "Main");
    assert_eq!(root.keycode.as_deref(), Some("m"));
    assert_eq!(root.icon.as_deref(), Some("home"));
    assert_eq!(root.len(), 1);
}

#[test]
fn root_list_uses_default_name() {
    let root = parse_yaml("- editor:focus\n").unwrap();
    assert_eq!(
        root,
        ActionGroup::root().with_items([Action::new("editor:focus").into()])
    );
}

#[test]
fn format_follows_extension() {
    let cases = [
        ("menu.yaml", ConfigurationFormat::Yaml),
        ("menu.YML", ConfigurationFormat::Yaml),
        ("Radial Menu.md", ConfigurationFormat::Markdown),
        ("menu.yaml.md", ConfigurationFormat::Markdown),
        ("menu", ConfigurationFormat::Markdown),
    ];
    for (filename, format) in cases {
        assert_eq!(
            ConfigurationFormat::from_filename(filename),
            format,
            "{filename}"
        );
    }
}

#[test]
fn markdown_documents() {
    let doc = "# Menu\n\nSome prose.\n\n```js\nconst x = \"a:b\";\n```\n\n```yaml\n- editor:focus\n- Close:\n    - workspace:close\n```\n";
    let config = parse_configuration("Menu.md", doc).unwrap();
    assert_eq!(config.format, ConfigurationFormat::Markdown);
    assert_eq!(config.actions.len(), 2);
    assert_eq!(config.actions.depth(), 1);

    assert_eq!(parse_markdown("no fences here").unwrap(), None);
    let report = parse_report("Menu.md", "```yaml\n- editor:focus\n").unwrap();
    assert!(!report.block_found);
    assert!(report.configuration.actions.is_empty());
}

#[test]
fn empty_groups_warn_but_parse() {
    let report = parse_report("menu.yaml", "- Empty: []\n- name: Odd\n  items: text\n").unwrap();
    let paths: Vec<&str> = report.warnings.iter().map(|w| w.path.as_str()).collect();
    assert_eq!(paths, vec!["[0].Empty", "[1].items"]);
    assert!(
        report
            .configuration
            .actions
            .items
            .iter()
            .all(|item| item.as_group().is_some_and(ActionGroup::is_empty))
    );
}
