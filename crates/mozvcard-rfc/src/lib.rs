//! vCard 4.0 line encoding and mozContact conversion.

pub mod error;
pub mod rfc;
