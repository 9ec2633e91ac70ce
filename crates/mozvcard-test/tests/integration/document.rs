//! Whole-document output.

use mozvcard_test::physical_lines;
use mozvcard_test::rfc::rfc::vcard::{FoldWidth, MozContact, VCardWriter, contact_to_vcard, unfold};

use super::helpers::{contact, jane_doe, long_note};

#[test_log::test]
fn jane_doe_document() {
    let output = contact_to_vcard(&jane_doe());
    let lines = physical_lines(&output);

    assert_eq!(lines.first(), Some(&"BEGIN:VCARD"));
    assert_eq!(lines.get(1), Some(&"VERSION:4.0"));
    assert_eq!(lines.last(), Some(&"END:VCARD"));
    assert!(lines.contains(&"N:Doe;Jane;;;"));
    assert!(lines.contains(&"REV:2024-05-01T12:00:00.000Z"));
    for absent in ["ADR", "TEL", "EMAIL"] {
        assert!(!lines.iter().any(|line| line.starts_with(absent)));
    }
}

#[test]
fn empty_contact_is_bare_envelope() {
    assert_eq!(
        contact_to_vcard(&MozContact::default()),
        "BEGIN:VCARD\r\nVERSION:4.0\r\nEND:VCARD\r\n"
    );
}

#[test]
fn every_line_is_crlf_terminated() {
    let output = contact_to_vcard(&jane_doe());

    assert!(output.ends_with("\r\n"));
    assert!(!output.replace("\r\n", "").contains('\n'));
    assert!(!output.replace("\r\n", "").contains('\r'));
}

#[test]
fn long_note_in_document() {
    let note = long_note();
    let json = serde_json::json!({ "note": [note.as_str()] }).to_string();

    let output = contact_to_vcard(&contact(&json));
    let unfolded = unfold(&output);

    assert!(physical_lines(&output).len() > physical_lines(&unfolded).len());
    let expected = format!("NOTE:{}", note.replace(',', "\\,"));
    assert!(unfolded.contains(&expected));
}

#[test]
fn configured_width_applies_to_every_line() {
    let width = FoldWidth::new(24).unwrap();
    let mut record = jane_doe();
    record.note = vec![long_note()];

    let output = VCardWriter::new(width).write(&record);
    for line in physical_lines(&output) {
        assert!(line.chars().count() <= 24, "overlong: {line:?}");
    }
}

#[test]
fn update_timestamp_from_chrono() {
    let updated = chrono::DateTime::parse_from_rfc3339("2023-11-14T22:13:20Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    let record = MozContact {
        updated: Some(updated.into()),
        ..MozContact::default()
    };

    let output = contact_to_vcard(&record);
    assert!(output.contains("REV:2023-11-14T22:13:20.000Z\r\n"));
}

#[test_log::test]
fn loosely_typed_fields_still_convert() {
    let record = contact(
        r#"{"name": ["Jo"], "sex": 1, "nickname": [1, "JD"],
            "tel": [{"value": 5551234, "pref": 1}], "updated": 1714564800000.5,
            "adr": [{"streetAddress": null}], "email": "not-a-list"}"#,
    );
    let output = contact_to_vcard(&record);

    assert_eq!(
        physical_lines(&output),
        [
            "BEGIN:VCARD",
            "VERSION:4.0",
            "FN:Jo",
            "NICKNAME:1,JD",
            "GENDER:1;",
            "TEL;PREF=1:5551234",
            "REV:2024-05-01T12:00:00.000Z",
            "END:VCARD",
        ]
    );
}
