use array_kit::{element_at, join_with_config, to_owned_list, ArrayError, JoinConfig, PropertyValue};

#[test]
fn element_at_out_of_range() {
    let array = [10, 20, 30];
    assert_eq!(element_at(&array, 5), Err(ArrayError::IndexOutOfRange { index: 5, len: 3 }));
    insta::assert_snapshot!(
        element_at(&array, 5).unwrap_err().to_string(),
        @"index 5 is out of range for an array of length 3"
    );
}

#[test]
fn element_at_through_option() {
    let vec = vec![1.5, 2.5];
    assert_eq!(element_at(Some(&vec), 1), Ok(2.5));
    assert!(element_at(None::<&Vec<f64>>, 0).is_err());
}

#[test]
fn owned_list_from_absent_supports_append() {
    let mut list = to_owned_list(None::<&[&str]>);
    assert_eq!(list, Vec::<&str>::new());
    list.push("first");
    list.insert(0, "zeroth");
    assert_eq!(list, vec!["zeroth", "first"]);
}

#[test]
fn join_including_empty() {
    let config = JoinConfig::new(",").with_include_null_or_empty(true);
    assert_eq!(join_with_config(Some(&config), ["a", "b"]), "a,b");
}

#[test]
fn join_skipping_null() {
    let config = JoinConfig::new(",").with_include_null_or_empty(false);
    assert_eq!(join_with_config(Some(&config), [Some("a"), Some("b"), None]), "a,b");
}

#[test]
fn join_property_values() {
    let values = vec![
        PropertyValue::from("x"),
        PropertyValue::Null,
        PropertyValue::from(3),
        PropertyValue::from(""),
        PropertyValue::from(vec![1, 2]),
    ];
    let including = JoinConfig::new(" | ");
    let skipping = JoinConfig::new(" | ").with_include_null_or_empty(false);
    insta::assert_snapshot!(join_with_config(Some(&including), &values), @"x | null | 3 |  | [1, 2]");
    insta::assert_snapshot!(join_with_config(Some(&skipping), &values), @"x | 3 | [1, 2]");
}

#[test]
fn join_config_serializes_kebab_case() {
    let config = JoinConfig::new(";").with_include_null_or_empty(false);
    insta::assert_snapshot!(
        serde_json::to_string(&config).unwrap(),
        @r#"{"connector":";","include-null-or-empty":false}"#
    );
}
