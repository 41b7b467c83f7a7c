//! Tabular format tests
//!
//! Cross-format import equivalence and round-trip properties.

mod import;
mod roundtrip;
