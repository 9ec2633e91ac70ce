//! Property line builder behavior.

use mozvcard_test::rfc::rfc::vcard::build::{PropertyLine, esc};
use mozvcard_test::rfc::rfc::vcard::{Component, FoldWidth, PropertyValue, unfold};

#[test]
fn escaping_examples() {
    assert_eq!(esc("a,b,c"), "a\\,b\\,c");
    assert_eq!(esc(""), "");
}

#[test]
fn no_value_means_absent_whatever_the_params() {
    let line = PropertyLine::new("EMAIL")
        .type_param(["home", "work"])
        .pref(true)
        .param("X-CUSTOM", "yes");

    assert_eq!(line.render(), None);
    assert_eq!(line.render_with(FoldWidth::new(20).unwrap()), None);
}

#[test]
fn address_components_keep_positions() {
    let line = PropertyLine::new("ADR").list_components([
        None,
        None,
        Some("Main St"),
        Some("Springfield"),
        Some("IL"),
        Some("62701"),
        Some("USA"),
    ]);

    assert_eq!(
        line.logical_line().as_deref(),
        Some("ADR:;;Main St;Springfield;IL;62701;USA")
    );
}

#[test]
fn type_parameter_shapes() {
    let many = PropertyLine::new("TEL").type_param(["HOME", "WORK"]);
    assert_eq!(many.params(), ["TYPE=\"HOME,WORK\""]);

    let one = PropertyLine::new("TEL").type_param(["HOME"]);
    assert_eq!(one.params(), ["TYPE=HOME"]);
}

#[test]
fn value_shapes_dispatch() {
    let scalar = PropertyLine::new("NOTE").value(&PropertyValue::Scalar("a,b".into()));
    let list = PropertyLine::new("CATEGORIES")
        .value(&PropertyValue::List(vec!["a,b".into(), "c".into()]));
    let structured = PropertyLine::new("N").value(&PropertyValue::Structured(vec![
        Component::List(vec!["Doe".into(), "Roe".into()]),
        Component::Text("Jane".into()),
        Component::Empty,
    ]));

    assert_eq!(scalar.render().as_deref(), Some("NOTE:a\\,b"));
    assert_eq!(list.render().as_deref(), Some("CATEGORIES:a\\,b,c"));
    assert_eq!(structured.render().as_deref(), Some("N:Doe,Roe;Jane;"));
}

#[test]
fn long_note_folds_and_reassembles() {
    let note = super::helpers::long_note();
    assert_eq!(note.chars().count(), 200);

    let rendered = PropertyLine::new("NOTE").val(note.clone()).render().unwrap();
    let physical: Vec<&str> = rendered.split("\r\n").collect();

    assert!(physical.len() > 1);
    assert!(physical[1..].iter().all(|line| line.starts_with(' ')));

    let expected = format!("NOTE:{}", note.replace(',', "\\,"));
    assert_eq!(unfold(&rendered), expected);
}
