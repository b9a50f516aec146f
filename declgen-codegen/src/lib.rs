//! Shared code generation building blocks for declgen.
//!
//! Language-specific generators (e.g. `declgen-typescript`) assemble their
//! output text through [`CodeBuilder`], configured with an [`Indent`] style.

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
