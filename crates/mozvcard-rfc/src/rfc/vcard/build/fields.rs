//! Maps mozContact fields to property lines.
//!
//! Each mapper depends only on the contact it is given. Missing or
//! malformed data produces no line instead of an error.

use super::line::PropertyLine;
use crate::rfc::vcard::core::{Component, ContactField, ContactTelField, DateLike, MozContact};

type FieldMapper = fn(&MozContact) -> Vec<PropertyLine>;

/// Property mappers in output order.
const FIELD_MAPPERS: &[(&str, FieldMapper)] = &[
    ("FN", formatted_name),
    ("N", structured_name),
    ("NICKNAME", nickname),
    ("PHOTO", photo),
    ("BDAY", birthday),
    ("ANNIVERSARY", anniversary),
    ("GENDER", gender),
    ("ADR", address),
    ("TEL", telephone),
    ("EMAIL", email),
    ("IMPP", impp),
    ("URL", url),
    ("TITLE", title),
    ("ORG", organization),
    ("CATEGORIES", categories),
    ("NOTE", note),
    ("KEY", key),
    ("REV", revision),
    ("UID", uid),
];

/// Builds every property line for `contact`, in output order.
///
/// Lines may still be absent; the assembler drops those on render.
#[must_use]
pub fn property_lines(contact: &MozContact) -> Vec<PropertyLine> {
    FIELD_MAPPERS
        .iter()
        .flat_map(|(property, mapper)| {
            let lines = mapper(contact);
            if lines.is_empty() {
                tracing::trace!(property, "Field not present, omitting");
            }
            lines
        })
        .collect()
}

fn formatted_name(contact: &MozContact) -> Vec<PropertyLine> {
    let display = contact.name.first().cloned().unwrap_or_else(|| {
        contact
            .given_name
            .iter()
            .chain(&contact.family_name)
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    });

    single(PropertyLine::new("FN").val(display))
}

fn structured_name(contact: &MozContact) -> Vec<PropertyLine> {
    // family;given;additional;prefixes;suffixes
    let parts = [
        &contact.family_name,
        &contact.given_name,
        &contact.additional_name,
        &contact.honorific_prefix,
        &contact.honorific_suffix,
    ];
    if parts.iter().all(|part| part.is_empty()) {
        return Vec::new();
    }

    single(
        PropertyLine::new("N")
            .list_components(parts.map(|part| Component::from(part.as_slice()))),
    )
}

fn nickname(contact: &MozContact) -> Vec<PropertyLine> {
    single(PropertyLine::new("NICKNAME").text_list(&contact.nickname))
}

fn photo(contact: &MozContact) -> Vec<PropertyLine> {
    contact
        .photo
        .iter()
        .map(|uri| PropertyLine::new("PHOTO").uri(uri))
        .collect()
}

fn birthday(contact: &MozContact) -> Vec<PropertyLine> {
    date_line("BDAY", contact.bday.as_ref())
}

fn anniversary(contact: &MozContact) -> Vec<PropertyLine> {
    date_line("ANNIVERSARY", contact.anniversary.as_ref())
}

fn gender(contact: &MozContact) -> Vec<PropertyLine> {
    let sex = Component::from(contact.sex.as_deref());
    let identity = Component::from(contact.gender_identity.as_deref());
    if sex.is_empty() && identity.is_empty() {
        return Vec::new();
    }

    single(PropertyLine::new("GENDER").list_components([sex, identity]))
}

fn address(contact: &MozContact) -> Vec<PropertyLine> {
    // POBox;Extended;Street;Locality;Region;PostalCode;Country
    contact
        .adr
        .iter()
        .filter_map(|adr| {
            let parts = [
                &adr.street_address,
                &adr.locality,
                &adr.region,
                &adr.postal_code,
                &adr.country_name,
            ]
            .map(|part| Component::from(part.as_deref()));
            if parts.iter().all(Component::is_empty) {
                tracing::debug!("Blank address entry, omitting");
                return None;
            }

            let [street, locality, region, postal_code, country] = parts;
            Some(
                PropertyLine::new("ADR")
                    .type_param(&adr.types)
                    .pref(adr.pref)
                    .list_components([
                        Component::Empty,
                        Component::Empty,
                        street,
                        locality,
                        region,
                        postal_code,
                        country,
                    ]),
            )
        })
        .collect()
}

fn telephone(contact: &MozContact) -> Vec<PropertyLine> {
    contact
        .tel
        .iter()
        .map(|ContactTelField { types, pref, value, carrier }| {
            PropertyLine::new("TEL")
                .type_param(types)
                .pref(*pref)
                .param("X-CARRIER", carrier.as_deref())
                .val(value)
        })
        .collect()
}

fn email(contact: &MozContact) -> Vec<PropertyLine> {
    typed_lines("EMAIL", &contact.email)
}

fn impp(contact: &MozContact) -> Vec<PropertyLine> {
    typed_lines("IMPP", &contact.impp)
}

fn url(contact: &MozContact) -> Vec<PropertyLine> {
    typed_lines("URL", &contact.url)
}

fn title(contact: &MozContact) -> Vec<PropertyLine> {
    text_lines("TITLE", &contact.job_title)
}

fn organization(contact: &MozContact) -> Vec<PropertyLine> {
    text_lines("ORG", &contact.org)
}

fn categories(contact: &MozContact) -> Vec<PropertyLine> {
    single(PropertyLine::new("CATEGORIES").text_list(&contact.category))
}

fn note(contact: &MozContact) -> Vec<PropertyLine> {
    text_lines("NOTE", &contact.note)
}

fn key(contact: &MozContact) -> Vec<PropertyLine> {
    contact
        .key
        .iter()
        .map(|key| PropertyLine::new("KEY").uri(key))
        .collect()
}

fn revision(contact: &MozContact) -> Vec<PropertyLine> {
    date_line("REV", contact.updated.as_ref())
}

fn uid(contact: &MozContact) -> Vec<PropertyLine> {
    contact
        .id
        .iter()
        .map(|id| PropertyLine::new("UID").val(id))
        .collect()
}

fn single(line: PropertyLine) -> Vec<PropertyLine> {
    if line.is_absent() { Vec::new() } else { vec![line] }
}

fn text_lines(name: &str, values: &[String]) -> Vec<PropertyLine> {
    values
        .iter()
        .map(|value| PropertyLine::new(name).val(value))
        .collect()
}

fn typed_lines(name: &str, fields: &[ContactField]) -> Vec<PropertyLine> {
    fields
        .iter()
        .map(|field| {
            PropertyLine::new(name)
                .type_param(&field.types)
                .pref(field.pref)
                .val(&field.value)
        })
        .collect()
}

fn date_line(name: &str, date: Option<&DateLike>) -> Vec<PropertyLine> {
    let Some(date) = date else {
        return Vec::new();
    };

    match date.to_iso_string() {
        Some(iso) => vec![PropertyLine::new(name).val(iso)],
        None => {
            tracing::warn!(property = name, value = ?date, "Unparseable date, omitting");
            Vec::new()
        }
    }
}
