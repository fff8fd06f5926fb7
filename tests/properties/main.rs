use std::collections::BTreeMap;

use proptest::prelude::*;

use radial_menu::menu::MenuItem;
use radial_menu::parse::{
    RawMap, RawValue, normalize_aliases, parse_configuration, parse_yaml, split_string_action,
};

fn arb_command_id() -> impl Strategy<Value = String> {
    (r"[a-z][a-z\-]{0,10}", r"[a-z][a-z\-]{0,14}").prop_map(|(ns, cmd)| format!("{ns}:{cmd}"))
}

fn arb_display_name() -> impl Strategy<Value = Option<String>> {
    prop::option::of(r"[A-Z][a-z]{0,8}( [a-z]{1,8}){0,3}")
}

fn arb_field_map() -> impl Strategy<Value = RawMap> {
    let key = prop_oneof![
        Just("id"),
        Just("command"),
        Just("name"),
        Just("description"),
        Just("icon"),
    ];
    prop::collection::btree_map(key, "[a-z:]{1,12}", 0..5).prop_map(|fields: BTreeMap<_, _>| {
        fields
            .into_iter()
            .map(|(k, v)| (k.to_string(), RawValue::String(v)))
            .collect()
    })
}

fn render_menu(entries: &[(String, Option<String>)]) -> String {
    entries
        .iter()
        .map(|(id, name)| match name {
            Some(name) => format!("- {id} {name}\n"),
            None => format!("- {id}\n"),
        })
        .collect()
}

proptest! {
    #[test]
    fn normalization_is_idempotent(map in arb_field_map()) {
        let mut once = map.clone();
        normalize_aliases(&mut once);
        let mut twice = once.clone();
        normalize_aliases(&mut twice);
        prop_assert_eq!(&once, &twice);

        if !map.contains_key("id") {
            prop_assert_eq!(once.get("id"), map.get("command"));
        }
        if !map.contains_key("name") {
            prop_assert_eq!(once.get("name"), map.get("description"));
        }
    }

    #[test]
    fn string_actions_split_head_and_tail(id in arb_command_id(), name in arb_display_name()) {
        let text = match &name {
            Some(name) => format!("{id}   {name}  "),
            None => id.clone(),
        };
        let parsed = split_string_action(&text).unwrap();
        prop_assert_eq!(parsed.id, id);
        prop_assert_eq!(parsed.name, name);
    }

    #[test]
    fn parsing_is_deterministic(
        entries in prop::collection::vec((arb_command_id(), arb_display_name()), 1..12)
    ) {
        let yaml = render_menu(&entries);
        let first = parse_yaml(&yaml).unwrap();
        let second = parse_yaml(&yaml).unwrap();
        prop_assert_eq!(&first, &second);

        prop_assert_eq!(first.items.len(), entries.len());
        for (item, (id, name)) in first.items.iter().zip(&entries) {
            let MenuItem::Action(action) = item else {
                return Err(TestCaseError::fail("expected an action"));
            };
            prop_assert_eq!(&action.id, id);
            prop_assert_eq!(&action.name, name);
        }
    }

    #[test]
    fn markdown_wrapping_preserves_the_tree(
        entries in prop::collection::vec((arb_command_id(), arb_display_name()), 1..8),
        prose in r"[A-Za-z ,.]{0,60}",
    ) {
        let yaml = render_menu(&entries);
        let markdown = format!("# Menu\n\n{prose}\n\n```yaml\n{yaml}```\n\nTrailing notes.\n");

        let direct = parse_configuration("menu.yaml", &yaml).unwrap();
        let wrapped = parse_configuration("menu.md", &markdown).unwrap();
        prop_assert_eq!(direct.actions, wrapped.actions);
    }
}
