//! Reconciliation of raw extraction output into the content model.
//!
//! Raw analysis output is inconsistent: tables arrive as flat cell
//! lists with gaps and spans, font metadata is frequently missing, and
//! serialized table markup re-enters the pipeline as untrusted text.
//! The components here normalize all of that into the well-formed,
//! ordered model, degrading per-block instead of aborting — a missing
//! or malformed table never terminates document processing.

mod builder;
mod font_runs;
mod grid;
mod markup;
mod options;

pub use builder::ContentModelBuilder;
pub use font_runs::FontRunExtractor;
pub use grid::TableReconstructor;
pub use markup::{
    escape_cell, unescape_cell, write_markup_table, MarkupTableParser, TableScan,
};
pub use options::BuildOptions;
