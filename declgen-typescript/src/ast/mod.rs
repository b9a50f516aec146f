//! TypeScript declaration AST.
//!
//! Nodes are assembled once by a schema walker, append-only, then serialized
//! in a single pass. Insertion order is preserved verbatim in the output.

mod accessors;
mod command;
mod fns;
mod imports;
mod interface;
mod member;
mod tree;
mod types;

pub use accessors::{Config, Status};
pub use command::Command;
pub use fns::Function;
pub use imports::ImportStatement;
pub use interface::{Interface, MainClass};
pub use member::Member;
pub use tree::Tree;
pub use types::{Type, UnionMember};

use std::fmt;

use declgen_codegen::CodeBuilder;

/// A node in the declaration tree.
///
/// `serialize` is pure: it has no side effects, and repeat calls on an
/// unmodified tree return byte-identical text.
pub trait Node: fmt::Debug {
    /// Render this node to its declaration text.
    fn serialize(&self) -> String;
}

/// Render a block body: each child's serialization gets the block's
/// terminator appended, every line is indented one level, and the result is
/// framed so the body starts on its own line and the closing brace returns
/// to the parent's column. An empty block renders as an empty body.
pub(crate) fn render_tree(children: &[Box<dyn Node>], terminator: char) -> String {
    if children.is_empty() {
        return String::new();
    }
    let mut builder = CodeBuilder::typescript().indent();
    for child in children {
        builder = builder.lines(&format!("{}{}", child.serialize(), terminator));
    }
    format!("\n{}", builder.build())
}
