#![allow(clippy::doc_markdown)]
//! Integration tests for mozContact to vCard conversion.
//!
//! These tests drive the public API of the workspace crates the same way
//! the `mozvcard` binary does.

mod integration;
