use deep_equal::is_equal;
use deep_equal::values::core_values::date::Date;
use deep_equal::values::core_values::exotic::ExoticKind;
use deep_equal::values::realm::Realm;
use deep_equal::values::value_container::{ValueContainer, ValueError};
use serde_json::json;

#[test]
fn nested_arrays() {
    let realm = Realm::new();
    assert!(is_equal(
        &realm.value_from_json(&json!([1, [2, 3]])),
        &realm.value_from_json(&json!([1, [2, 3]]))
    ));
    assert!(!is_equal(
        &realm.value_from_json(&json!([1, [2, 3]])),
        &realm.value_from_json(&json!([1, [2, 4]]))
    ));
    assert!(is_equal(
        &realm.value_from_json(&json!([])),
        &realm.value_from_json(&json!([]))
    ));
}

#[test]
fn length_mismatch() {
    let realm = Realm::new();
    assert!(!is_equal(
        &realm.value_from_json(&json!([1, 2])),
        &realm.value_from_json(&json!([1, 2, 3]))
    ));
    assert!(!is_equal(
        &realm.value_from_json(&json!([null])),
        &realm.value_from_json(&json!([]))
    ));
}

#[test]
fn elements_are_compared_recursively() {
    let realm = Realm::new();
    // both join to "0,[object Object]", so only the recursive check tells them apart
    assert!(!is_equal(
        &realm.value_from_json(&json!([0, {"a": 1}])),
        &realm.value_from_json(&json!([0, {"a": 2}]))
    ));
    assert!(is_equal(
        &realm.value_from_json(&json!([0, {"a": 1}])),
        &realm.value_from_json(&json!([0, {"a": 1}]))
    ));
}

#[test]
fn first_element_is_only_covered_by_joined_text() {
    let realm = Realm::new();
    assert!(is_equal(
        &realm.value_from_json(&json!([{"a": 1}])),
        &realm.value_from_json(&json!([{"a": 2}]))
    ));
    assert!(is_equal(
        &realm.value_from_json(&json!([{"a": 1}, 2])),
        &realm.value_from_json(&json!([{"b": 1}, 2]))
    ));
    assert!(!is_equal(
        &realm.value_from_json(&json!([1])),
        &realm.value_from_json(&json!([2]))
    ));
}

#[test]
fn boxed_elements() {
    let realm = Realm::new();
    let boxed = realm.new_array(vec![
        realm.new_number_object(1).into(),
        "a".into(),
    ]);
    let primitive = realm.new_array(vec![
        1.into(),
        realm.new_string_object("a").into(),
    ]);
    assert!(is_equal(&boxed.into(), &primitive.into()));
}

#[test]
fn holes_differ_from_defined_elements() {
    let realm = Realm::new();
    let sparse: ValueContainer = realm
        .new_sparse_array(vec![Some(1.into()), None])
        .into();
    let with_undefined: ValueContainer = realm
        .new_array(vec![1.into(), ValueContainer::undefined()])
        .into();
    let with_value: ValueContainer =
        realm.new_array(vec![1.into(), 2.into()]).into();

    // all of "1," "1," and "1,2" are compared, the hole fails the element check
    assert!(!is_equal(&sparse, &with_undefined));
    assert!(!is_equal(&with_undefined, &sparse));
    assert!(!is_equal(&sparse, &with_value));
    assert!(is_equal(&with_undefined, &realm
        .new_array(vec![1.into(), ValueContainer::undefined()])
        .into()));
}

#[test]
fn arrays_with_holes_past_index_zero_are_never_equal() {
    let realm = Realm::new();
    let slots = || vec![Some(1.into()), None, Some(3.into())];
    let a: ValueContainer = realm.new_sparse_array(slots()).into();
    let b: ValueContainer = realm.new_sparse_array(slots()).into();

    assert!(!is_equal(&a, &b));
    assert!(is_equal(&a, &a.clone()));
}

#[test]
fn elements_written_later() {
    let realm = Realm::new();
    let a = realm.new_array(vec![]);
    a.try_set_element(2, "c").unwrap();
    a.try_set_element(1, "b").unwrap();
    a.try_set_element(0, "a").unwrap();
    let b = realm.value_from_json(&json!(["a", "b", "c"]));
    assert!(is_equal(&a.clone().into(), &b));

    a.try_delete_element(1).unwrap();
    assert!(!is_equal(&a.into(), &b));
}

#[test]
fn non_index_properties_are_ignored() {
    let realm = Realm::new();
    let a = realm.new_array(vec![1.into(), 2.into()]);
    a.set_property("extra", true);
    let b = realm.new_array(vec![1.into(), 2.into()]);
    assert!(is_equal(&a.into(), &b.into()));
}

#[test]
fn arrays_differ_from_other_types() {
    let realm = Realm::new();
    let array = realm.value_from_json(&json!(["a"]));
    assert!(!is_equal(&array, &"a".into()));
    assert!(!is_equal(&array, &realm.value_from_json(&json!({"0": "a"}))));
    assert!(!is_equal(&array, &realm.new_exotic(ExoticKind::Arguments).into()));
}

#[test]
fn first_elements_are_compared_through_their_text() {
    let realm = Realm::new();
    let single_date = |millis: f64| -> ValueContainer {
        let date = realm.new_date(Date::from_epoch_millis(millis));
        realm.new_array(vec![date.into()]).into()
    };
    let latest = single_date(8.64e15);
    let earliest = single_date(-8.64e15);
    let invalid: ValueContainer = realm
        .new_array(vec![realm.new_date(Date::invalid()).into()])
        .into();

    assert!(is_equal(&latest, &single_date(8.64e15)));
    assert!(!is_equal(&latest, &single_date(8.6e15)));
    assert!(!is_equal(&earliest, &single_date(-8.6e15)));
    assert!(!is_equal(&latest, &invalid));
    assert!(!is_equal(&invalid, &earliest));
}

#[test]
fn element_writes_beyond_the_index_limit_fail() {
    let realm = Realm::new();
    let array = realm.new_array(vec![1.into()]);

    assert_eq!(
        array.try_set_element(usize::MAX, 2),
        Err(ValueError::InvalidArrayIndex(usize::MAX))
    );
    assert_eq!(
        array.try_set_element(4_294_967_295, 2),
        Err(ValueError::InvalidArrayIndex(4_294_967_295))
    );
    assert_eq!(array.to_text(), "1");
    assert_eq!(array.try_set_element(2, 3), Ok(()));
    assert_eq!(array.to_text(), "1,,3");
}
