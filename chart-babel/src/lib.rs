//! Multi-format ingestion and export for chart data
//!
//!     This crate provides a uniform interface for turning raw text (files,
//!     clipboard pastes, URL responses) into canonical chart data, and for
//!     exporting that data back out to various text formats.
//!
//!     TLDR: For format authors:
//!         - Where a mature crate exists for a format, babel leans on it (comrak for
//!           Markdown, html5ever for HTML, csv for CSV) and only adapts its output
//!           into the canonical model. Hand-rolled parsing is reserved for formats
//!           that are really just line conventions (TXT, SQL result tables).
//!         - Parsers produce the canonical model, never ad-hoc structures. The
//!           normalization rules (header row, label column, padding) live in
//!           common/ so every tabular parser behaves identically.
//!         - Each format module carries its own unit tests against small inline
//!           inputs; cross-format behavior (detection, round trips, sessions) is
//!           tested under tests/.
//!
//! Architecture
//!
//!     The goal here is to split what is common to every format out of the
//!     format modules. The canonical model (./model.rs) plays the role of the
//!     intermediate representation: every parser targets it, every exporter
//!     reads from it, and validation (./validate.rs) is the single gate data
//!     must pass before any consumer sees it. Shared mechanics (numeric
//!     coercion, grid-to-table normalization, delimited serialization) live in
//!     ./common/mod.rs so format modules stay focused on their own syntax.
//!
//!     This is a pure lib, that is, it powers the chart CLI but is shell
//!     agnostic: no code here supposes a shell environment, be it std print,
//!     env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── model.rs                # Canonical chart data shapes
//!     ├── validate.rs             # JSON -> model conversion and invariant checks
//!     ├── format.rs               # FormatId and the Format trait
//!     ├── registry.rs             # FormatRegistry for discovery and dispatch
//!     ├── detect.rs               # Content sniffing and delimiter detection
//!     ├── formats
//!     │   └── <format>
//!     │       └── mod.rs          # Parser and/or serializer implementation
//!     ├── session.rs              # Current data + bounded undo history
//!     ├── source.rs               # File and URL entry points
//!     ├── common                  # Shared parsing/serialization mechanics
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── mod.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so
//!     these are included from tests/lib.rs.
//!
//! Core Algorithms
//!
//!     The trickiest part of the work is that most inputs arrive untyped: a
//!     clipboard paste could be CSV, TSV, a Markdown table or an ASCII result
//!     table. Detection (./detect.rs) resolves this with a fixed trial order,
//!     and delimiter sniffing picks the separator by counting candidates on
//!     the first line. Both orders are part of the contract: the same input
//!     always resolves the same way, and explicit hints always win over
//!     sniffing.
//!
//!     The second shared algorithm is grid normalization
//!     (common::rows_to_table): every tabular format reduces to rows of cells,
//!     and one function turns those rows into labels and aligned datasets,
//!     padding short rows and naming blank headers. Format modules never
//!     reimplement this.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait.
//!     Formats have parse() and/or serialize() methods, a stable FormatId, a
//!     description and file extensions. See the trait def [./format.rs].
//!     - Format trait: uniform interface for all formats
//!     - FormatRegistry: centralized discovery and dispatch, keyed by FormatId
//!     - Format implementations: one module per format under ./formats/
//!
//!     JSON is the privileged format: it is the only one that can represent
//!     all four canonical shapes (tabular, hierarchy, flow, word list), so it
//!     is both the wire format and the lossless round-trip format. Every
//!     other format is tabular-only, which means exporting a hierarchy to CSV
//!     is a NotSupported error rather than a lossy flattening.
//!
//! Library Choices
//!
//!     Where the format has real grammar we use the ecosystem parser rather
//!     than writing one: comrak for Markdown tables (the separator row is
//!     grammar, not data), html5ever + rcdom for HTML (clipboard markup is
//!     reliably malformed), csv for quoted/escaped CSV, roxmltree for XML.
//!     TSV, TXT and SQL result tables are line conventions rather than
//!     grammars, so those parsers are deliberately small and local. The YAML
//!     module is a subset recognizer for the one document shape chart data
//!     uses, not a general YAML parser.

pub mod common;
pub mod detect;
pub mod error;
pub mod format;
pub mod formats;
pub mod model;
pub mod registry;
pub mod session;
pub mod source;
pub mod validate;

pub use error::FormatError;
pub use format::{Format, FormatId};
pub use model::{ChartData, Dataset, FlowGraph, Table, TreeNode, WordList};
pub use registry::FormatRegistry;
pub use session::Session;
