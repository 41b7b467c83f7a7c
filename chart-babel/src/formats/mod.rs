//! Format implementations
//!
//! One module per supported grammar. Each implements the [`Format`] trait
//! and is registered by `FormatRegistry::with_defaults`.
//!
//! [`Format`]: crate::format::Format

pub mod csv;
pub mod html;
pub mod json;
pub mod markdown;
pub mod sql;
pub mod tsv;
pub mod txt;
pub mod xml;
pub mod yaml;
