use deep_equal::is_equal;
use deep_equal::values::core_values::function::{Function, FunctionKind};
use deep_equal::values::realm::Realm;
use deep_equal::values::value_container::ValueContainer;
use indoc::indoc;

fn function(
    realm: &Realm,
    kind: FunctionKind,
    name: &str,
    length: u32,
    source: &str,
) -> ValueContainer {
    realm
        .new_function(Function::new(kind, name, length, source))
        .into()
}

#[test]
fn ordinary_functions_ignore_spacing_before_the_body() {
    let realm = Realm::new();
    let compact = function(
        &realm,
        FunctionKind::Function,
        "add",
        2,
        "function add(a, b){ return a + b; }",
    );
    let spaced = function(
        &realm,
        FunctionKind::Function,
        "add",
        2,
        "function add(a, b)    { return a + b; }",
    );
    let multiline = function(
        &realm,
        FunctionKind::Function,
        "add",
        2,
        indoc! {"
            function add(a, b)
            { return a + b; }"},
    );

    assert!(is_equal(&compact, &spaced));
    assert!(is_equal(&spaced, &compact));
    assert!(is_equal(&compact, &multiline));
}

#[test]
fn ordinary_functions_with_different_bodies() {
    let realm = Realm::new();
    let add = function(&realm, FunctionKind::Function, "f", 2, "function f(a, b) { return a + b; }");
    let sub = function(&realm, FunctionKind::Function, "f", 2, "function f(a, b) { return a - b; }");
    assert!(!is_equal(&add, &sub));
}

#[test]
fn only_the_first_body_delimiter_is_normalized() {
    let realm = Realm::new();
    let a = function(
        &realm,
        FunctionKind::Function,
        "f",
        1,
        "function f(a) { if (a) { return a; } }",
    );
    let b = function(
        &realm,
        FunctionKind::Function,
        "f",
        1,
        "function f(a) { if (a)   { return a; } }",
    );
    assert!(!is_equal(&a, &b));
}

#[test]
fn name_and_length_must_match() {
    let realm = Realm::new();
    let source = "function f(a) { return a; }";
    let f = function(&realm, FunctionKind::Function, "f", 1, source);

    assert!(!is_equal(&f, &function(&realm, FunctionKind::Function, "g", 1, source)));
    assert!(!is_equal(&f, &function(&realm, FunctionKind::Function, "f", 2, source)));
    assert!(is_equal(&f, &function(&realm, FunctionKind::Function, "f", 1, source)));
}

#[test]
fn arrows_require_exact_text() {
    let realm = Realm::new();
    let compact = "(a) => function (b) { return b; }";
    let spaced = "(a) => function (b)   { return b; }";

    let arrow = function(&realm, FunctionKind::Arrow, "", 1, compact);
    assert!(is_equal(&arrow, &function(&realm, FunctionKind::Arrow, "", 1, compact)));
    assert!(!is_equal(&arrow, &function(&realm, FunctionKind::Arrow, "", 1, spaced)));

    // the same sources would be normalized for ordinary functions
    assert!(is_equal(
        &function(&realm, FunctionKind::Function, "", 1, compact),
        &function(&realm, FunctionKind::Function, "", 1, spaced)
    ));
}

#[test]
fn arrows_never_equal_ordinary_functions() {
    let realm = Realm::new();
    let source = "(a) => a";
    assert!(!is_equal(
        &function(&realm, FunctionKind::Arrow, "f", 1, source),
        &function(&realm, FunctionKind::Function, "f", 1, source)
    ));
}

#[test]
fn generators_never_equal_ordinary_functions() {
    let realm = Realm::new();
    let source = "function* g() { yield 1; }";
    let generator = function(&realm, FunctionKind::Generator, "g", 0, source);

    assert!(!is_equal(&generator, &function(&realm, FunctionKind::Function, "g", 0, source)));
    assert!(!is_equal(&function(&realm, FunctionKind::Function, "g", 0, source), &generator));
    assert!(is_equal(&generator, &function(&realm, FunctionKind::Generator, "g", 0, source)));
}

#[test]
fn generators_require_exact_text() {
    let realm = Realm::new();
    assert!(!is_equal(
        &function(&realm, FunctionKind::Generator, "g", 0, "function* g() { yield 1; }"),
        &function(&realm, FunctionKind::Generator, "g", 0, "function* g()  { yield 1; }")
    ));
}

#[test]
fn classes_and_methods() {
    let realm = Realm::new();
    let source = "class Point { constructor(x) { this.x = x; } }";
    let (a, _) = realm.new_class("Point", 1, source);
    let (b, _) = realm.new_class("Point", 1, source);
    let (no_arguments, _) = realm.new_class("Point", 0, source);
    let a: ValueContainer = a.into();
    assert!(is_equal(&a, &b.into()));
    assert!(!is_equal(&a, &no_arguments.into()));

    assert!(is_equal(
        &function(&realm, FunctionKind::Method, "m", 0, "m()  { return 1; }"),
        &function(&realm, FunctionKind::Method, "m", 0, "m() { return 1; }")
    ));
}

#[test]
fn async_functions_are_only_equal_to_themselves() {
    let realm = Realm::new();
    let source = "async function f() { await g(); }";
    let f = function(&realm, FunctionKind::Async, "f", 0, source);

    assert!(is_equal(&f, &f.clone()));
    assert!(!is_equal(&f, &function(&realm, FunctionKind::Async, "f", 0, source)));
    assert!(!is_equal(&f, &function(&realm, FunctionKind::Function, "f", 0, source)));
}

#[test]
fn functions_differ_from_their_source_text() {
    let realm = Realm::new();
    let source = "function f() {}";
    let f = function(&realm, FunctionKind::Function, "f", 0, source);
    assert!(!is_equal(&f, &source.into()));
    assert!(!is_equal(&f, &realm.new_object().into()));
}
