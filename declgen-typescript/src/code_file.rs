//! Whole-file composition.

use declgen_codegen::CodeBuilder;

use crate::ast::{ImportStatement, Node};
use crate::root::Root;

/// The complete generated declaration file: the import header followed by
/// every top-level declaration, ending with exactly one newline.
#[derive(Debug)]
pub struct DeclarationFile {
    import: ImportStatement,
    root: Root,
}

impl DeclarationFile {
    pub fn new(import: ImportStatement, root: Root) -> Self {
        Self { import, root }
    }

    /// Render the file text, ready to be written verbatim to disk.
    pub fn render(&self) -> String {
        let builder = CodeBuilder::typescript().lines(&self.import.serialize());
        let body = self.root.serialize();
        if body.is_empty() {
            builder.build()
        } else {
            builder.blank().lines(&body).build()
        }
    }
}
