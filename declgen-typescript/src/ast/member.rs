//! Typed fields.

use super::Node;
use super::types::Type;
use crate::naming::member_key;

/// A named field with a type. Members are optional unless marked required.
#[derive(Debug, Clone)]
pub struct Member {
    name: String,
    ty: Type,
    required: bool,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: false,
        }
    }

    /// Mark this member as required, dropping the `?` suffix.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl Node for Member {
    fn serialize(&self) -> String {
        let optional = if self.required { "" } else { "?" };
        format!(
            "{}{}: {}",
            member_key(&self.name),
            optional,
            self.ty.type_text()
        )
    }
}
