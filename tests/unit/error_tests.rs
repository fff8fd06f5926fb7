use std::collections::HashSet;

use radial_menu::error::{ErrorCode, MenuError, StructuredError};

#[test]
fn numeric_codes_are_unique_and_categorized() {
    let codes: Vec<ErrorCode> = ErrorCode::all().collect();
    let numbers: HashSet<u16> = codes.iter().map(ErrorCode::numeric).collect();
    assert_eq!(numbers.len(), codes.len());

    for code in codes {
        let expected = match code.numeric() / 100 {
            1 => "document",
            2 => "source",
            3 => "config",
            _ => "internal",
        };
        assert_eq!(code.category(), expected, "{code}");
        assert!(!code.suggestion().is_empty(), "{code}");
    }
}

#[test]
fn structured_errors_carry_paths() {
    let err = MenuError::AmbiguousTupleObject {
        path: "items[2]".to_string(),
        key: "k".to_string(),
    };
    let structured = StructuredError::from_menu_error(&err);
    assert_eq!(structured.numeric_code, 104);
    assert_eq!(structured.category, "document");
    assert!(structured.recoverable);

    let json = serde_json::to_value(&structured).unwrap();
    assert_eq!(json["code"], "AMBIGUOUS_TUPLE_OBJECT");
    assert_eq!(json["context"]["path"], "items[2]");
    assert_eq!(json["context"]["key"], "k");
}

#[test]
fn structural_classification() {
    assert!(
        MenuError::MissingGroupName {
            path: "[0]".to_string()
        }
        .is_structural()
    );
    assert!(!MenuError::Config("bad".to_string()).is_structural());
}
