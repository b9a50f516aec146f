//! The top-level container and its uniqueness invariants.

use crate::ast::{Interface, MainClass, Node};
use crate::error::{Error, Result};

#[derive(Debug)]
enum TopLevel {
    Interface(Interface),
    Main(MainClass),
}

impl TopLevel {
    fn name(&self) -> &str {
        match self {
            Self::Interface(interface) => interface.name(),
            Self::Main(main) => main.name(),
        }
    }

    fn serialize(&self) -> String {
        match self {
            Self::Interface(interface) => interface.serialize(),
            Self::Main(main) => main.serialize(),
        }
    }
}

/// Owner of every top-level declaration in a generated file.
///
/// Interface names are unique within a root (case-sensitive). The main
/// class name participates in the same set, since its interface block
/// declaration-merges with any interface of the same name. At most one main
/// class may be registered.
#[derive(Debug, Default)]
pub struct Root {
    children: Vec<TopLevel>,
}

impl Root {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new named interface and return it for population.
    pub fn add_interface(&mut self, name: impl Into<String>) -> Result<&mut Interface> {
        let name = name.into();
        self.check_name(&name)?;
        self.children.push(TopLevel::Interface(Interface::new(name)));
        match self.children.last_mut() {
            Some(TopLevel::Interface(interface)) => Ok(interface),
            _ => unreachable!("an interface was just pushed"),
        }
    }

    /// Register the main class. A second registration fails regardless of
    /// the argument.
    pub fn add_main(&mut self, main: MainClass) -> Result<&mut MainClass> {
        if self
            .children
            .iter()
            .any(|child| matches!(child, TopLevel::Main(_)))
        {
            return Err(Error::DuplicateMain);
        }
        self.check_name(main.name())?;
        self.children.push(TopLevel::Main(main));
        match self.children.last_mut() {
            Some(TopLevel::Main(main)) => Ok(main),
            _ => unreachable!("the main class was just pushed"),
        }
    }

    /// Look up the registered main class for further population.
    pub fn main_mut(&mut self) -> Result<&mut MainClass> {
        self.children
            .iter_mut()
            .find_map(|child| match child {
                TopLevel::Main(main) => Some(main),
                _ => None,
            })
            .ok_or(Error::MissingMain)
    }

    fn check_name(&self, name: &str) -> Result<()> {
        if self.children.iter().any(|child| child.name() == name) {
            return Err(Error::DuplicateInterface {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

impl Node for Root {
    /// Top-level declarations joined by one blank line, in registration
    /// order. An empty root serializes to the empty string.
    fn serialize(&self) -> String {
        self.children
            .iter()
            .map(TopLevel::serialize)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
