//! Integration tests for folding, property lines and document output.
//!
//! ## Running Tests
//!
//! ```sh
//! cargo test -p mozvcard-test --test vcard_integration
//! ```

mod helpers;
mod document;
mod folding;
mod property_line;
