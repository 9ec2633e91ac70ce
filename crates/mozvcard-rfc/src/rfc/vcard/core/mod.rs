//! Core vCard types: property value shapes and the contact record.

mod contact;
mod lenient;
mod value;

pub use contact::{
    ContactAddress, ContactField, ContactTelField, DateLike, MozContact, parse_contacts,
};
pub use value::{Component, PropertyValue};
