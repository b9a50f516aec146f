//! Typed function signatures.

use super::Node;
use super::types::Type;
use crate::naming::member_key;

/// A named function signature: ordered arguments and a return type
/// (defaulting to `void`).
///
/// The same signature renders two ways: [`Function::declaration`] when it
/// stands as a typed member (`on(handler: ...): void`) and
/// [`Function::lambda`] when it stands in value position as a function type
/// (`(value: string) => void`). [`Type::Function`] renders the lambda form.
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    args: Vec<(String, Type)>,
    ret: Type,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            ret: Type::plain("void"),
        }
    }

    /// Append a named argument.
    pub fn arg(mut self, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        self.args.push((name.into(), ty.into()));
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: impl Into<Type>) -> Self {
        self.ret = ty.into();
        self
    }

    fn params(&self) -> String {
        self.args
            .iter()
            .map(|(name, ty)| format!("{}: {}", name, ty.type_text()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Member-declaration form: `name(args): Ret`.
    pub fn declaration(&self) -> String {
        format!(
            "{}({}): {}",
            member_key(&self.name),
            self.params(),
            self.ret.type_text()
        )
    }

    /// Value-position form: `(args) => Ret`.
    pub fn lambda(&self) -> String {
        format!("({}) => {}", self.params(), self.ret.type_text())
    }
}

impl Node for Function {
    fn serialize(&self) -> String {
        self.declaration()
    }
}
