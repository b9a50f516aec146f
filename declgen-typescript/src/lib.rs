//! TypeScript declaration generator for device command/config/status
//! schemas.
//!
//! This crate builds an in-memory tree describing a device's command,
//! configuration, and status directory, then serializes that tree into
//! statically-typed TypeScript declarations. A schema walker populates a
//! [`Root`] through [`Root::add_interface`] and [`Root::add_main`], attaches
//! [`Config`], [`Status`], [`Command`], [`Member`], and [`Tree`] nodes, and
//! finally serializes once to obtain the output text.
//!
//! Serialization is pure and deterministic: repeat calls on an unmodified
//! tree return byte-identical text, so generated files can be diffed and
//! committed as build artifacts.
//!
//! ```
//! use declgen_typescript::{
//!     Config, DeclarationFile, ImportStatement, MainClass, Member, Root,
//! };
//!
//! let mut root = Root::new();
//! root.add_main(MainClass::default())?;
//! let config = root.add_interface("DeviceConfig")?;
//! config.add_child(Config::new("Volume", "number"));
//! root.main_mut()?
//!     .add_child(Member::new("Config", "DeviceConfig").required());
//!
//! let file = DeclarationFile::new(ImportStatement::default(), root);
//! print!("{}", file.render());
//! # Ok::<(), declgen_typescript::Error>(())
//! ```

pub mod ast;
mod code_file;
mod error;
mod naming;
mod root;

pub use ast::{
    Command, Config, Function, ImportStatement, Interface, MainClass, Member, Node, Status, Tree,
    Type, UnionMember,
};
pub use code_file::DeclarationFile;
pub use error::{Error, Result};
pub use root::Root;
