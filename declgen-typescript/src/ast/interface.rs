//! Top-level interface blocks and the singleton main class.

use super::{Node, render_tree};

/// A named top-level type block. Children render as semicolon-terminated
/// interface members, in insertion order.
#[derive(Debug)]
pub struct Interface {
    name: String,
    children: Vec<Box<dyn Node>>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a child node.
    pub fn add_child(&mut self, child: impl Node + 'static) -> &mut Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append an ordered batch of child nodes.
    pub fn add_children(&mut self, children: Vec<Box<dyn Node>>) -> &mut Self {
        self.children.extend(children);
        self
    }
}

impl Node for Interface {
    fn serialize(&self) -> String {
        format!(
            "export interface {} {{{}}}",
            self.name,
            render_tree(&self.children, ';')
        )
    }
}

/// The one connectable root type of a generated file.
///
/// Emits a concrete class extending the configured base identifier, a
/// default export of that class, a `connect` export bound to the generic
/// connection factory, and then the interface block whose members
/// declaration-merge into the class.
#[derive(Debug)]
pub struct MainClass {
    interface: Interface,
    base: String,
}

impl MainClass {
    pub const DEFAULT_NAME: &'static str = "TypedDevice";
    pub const DEFAULT_BASE: &'static str = "Device";

    pub fn new(name: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            interface: Interface::new(name),
            base: base.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.interface.name()
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Append a child node to the merged interface block.
    pub fn add_child(&mut self, child: impl Node + 'static) -> &mut Self {
        self.interface.add_child(child);
        self
    }

    /// Append an ordered batch of child nodes.
    pub fn add_children(&mut self, children: Vec<Box<dyn Node>>) -> &mut Self {
        self.interface.add_children(children);
        self
    }
}

impl Default for MainClass {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME, Self::DEFAULT_BASE)
    }
}

impl Node for MainClass {
    fn serialize(&self) -> String {
        let name = self.interface.name();
        format!(
            "export class {name} extends {base} {{}}\n\
             export default {name};\n\
             export const connect = connectGen({name});\n\
             \n\
             {body}",
            name = name,
            base = self.base,
            body = self.interface.serialize(),
        )
    }
}
