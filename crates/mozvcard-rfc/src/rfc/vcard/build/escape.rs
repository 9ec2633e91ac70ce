//! vCard value escaping.
//!
//! Only commas are escaped. Semicolons and colons are structural
//! delimiters placed by the property line builder itself.

use crate::rfc::vcard::core::{Component, PropertyValue};

/// Escapes every comma in `value` as `\,`.
#[must_use]
pub fn esc(value: &str) -> String {
    value.replace(',', "\\,")
}

/// Escapes each item and joins them with bare commas.
#[must_use]
pub fn escape_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| esc(item.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Escapes one structured component.
#[must_use]
pub fn escape_component(component: &Component) -> String {
    match component {
        Component::Empty => String::new(),
        Component::Text(s) => esc(s),
        Component::List(items) => escape_list(items),
    }
}

/// Renders a raw value to its escaped wire form.
#[must_use]
pub fn encode_value(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Scalar(s) => esc(s),
        PropertyValue::List(items) => escape_list(items),
        PropertyValue::Structured(components) => components
            .iter()
            .map(escape_component)
            .collect::<Vec<_>>()
            .join(";"),
    }
}
