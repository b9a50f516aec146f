//! Accessor expansion for configuration and status entries.
//!
//! A `(name, valuespace)` pair expands into the conventional accessor
//! methods in a fixed order: `get`, `set` (writable entries only), `on`,
//! `once`. The `on`/`once` handler receives the current value.

use super::Node;
use super::command::Command;
use super::fns::Function;
use super::tree::Tree;
use super::types::Type;

fn accessor_tree(name: String, value: Type, writable: bool) -> Tree {
    let handler = Function::new("handler").arg("value", value.clone());
    let mut tree = Tree::new(name);
    tree.add_child(Command::new("get").returns(value.clone()));
    if writable {
        tree.add_child(Command::new("set").param(value));
    }
    tree.add_child(Function::new("on").arg("handler", handler.clone()));
    tree.add_child(Function::new("once").arg("handler", handler));
    tree
}

/// A writable configuration entry: `get`, `set`, `on`, `once`.
#[derive(Debug)]
pub struct Config {
    tree: Tree,
}

impl Config {
    pub fn new(name: impl Into<String>, valuespace: impl Into<Type>) -> Self {
        Self {
            tree: accessor_tree(name.into(), valuespace.into(), true),
        }
    }
}

impl Node for Config {
    fn serialize(&self) -> String {
        self.tree.serialize()
    }
}

/// A read-only status entry: `get`, `on`, `once`.
#[derive(Debug)]
pub struct Status {
    tree: Tree,
}

impl Status {
    pub fn new(name: impl Into<String>, valuespace: impl Into<Type>) -> Self {
        Self {
            tree: accessor_tree(name.into(), valuespace.into(), false),
        }
    }
}

impl Node for Status {
    fn serialize(&self) -> String {
        self.tree.serialize()
    }
}
