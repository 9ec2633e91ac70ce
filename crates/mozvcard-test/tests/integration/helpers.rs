//! Shared fixtures for integration tests.

use mozvcard_test::rfc::rfc::vcard::MozContact;

/// Builds the contact from the "Jane Doe" scenario: name parts and an
/// update timestamp, nothing else.
pub fn jane_doe() -> MozContact {
    MozContact::from_json(
        r#"{"familyName": ["Doe"], "givenName": ["Jane"], "updated": "2024-05-01T12:00:00Z"}"#,
    )
    .expect("fixture should parse")
}

/// A 200-character note with punctuation scattered through it.
pub fn long_note() -> String {
    let note = "Remember: bring the spare keys, the blue folder; and call ahead. ".repeat(4);
    note.chars().take(200).collect()
}

/// Reads a contact through the JSON provider.
pub fn contact(json: &str) -> MozContact {
    MozContact::from_json(json).expect("fixture should parse")
}
