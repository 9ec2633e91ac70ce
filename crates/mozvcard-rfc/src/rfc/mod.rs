//! Standards-facing encoders.

pub mod vcard;
