//! vCard serialization (RFC 6350).
//!
//! ## Features
//!
//! - Line folding at a configurable column width (78 by default) that
//!   prefers punctuation boundaries
//! - Comma escaping for text values and text lists
//! - Property line builder with parameters and structured values
//! - mozContact field mapping and document assembly

mod escape;
mod fields;
mod fold;
mod line;
mod serializer;

pub use escape::{encode_value, esc, escape_component, escape_list};
pub use fields::property_lines;
pub use fold::{FoldWidth, fold, fold_with, unfold};
pub use line::{ParamValue, PropertyLine};
pub use serializer::{VCardWriter, contact_to_vcard};
