//! Shared building blocks for the mozContact to vCard converter.
//!
//! Holds the error type, wire constants and configuration loading used by
//! the other workspace crates.

pub mod config;
pub mod constants;
pub mod error;
