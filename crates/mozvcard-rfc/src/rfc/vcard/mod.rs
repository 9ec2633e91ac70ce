//! vCard 4.0 output (RFC 6350).
//!
//! Converts mozContact-shaped records into vCard text. Parsing vCard back
//! into records is not supported.
//!
//! ## Usage
//!
//! ```rust
//! use mozvcard_rfc::rfc::vcard::{MozContact, contact_to_vcard};
//!
//! let contact = MozContact::from_json(
//!     r#"{"familyName": ["Doe"], "givenName": ["Jane"], "updated": "2024-05-01T12:00:00Z"}"#,
//! )
//! .unwrap();
//!
//! let output = contact_to_vcard(&contact);
//! assert!(output.contains("N:Doe;Jane;;;\r\n"));
//! assert!(output.contains("REV:2024-05-01T12:00:00.000Z\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Value shapes and the contact record
//! - [`build`] - Folding, escaping, property lines and documents

pub mod build;
pub mod core;


// Re-export commonly used types
pub use build::{FoldWidth, PropertyLine, VCardWriter, contact_to_vcard, fold, unfold};
pub use self::core::{Component, DateLike, MozContact, PropertyValue, parse_contacts};
