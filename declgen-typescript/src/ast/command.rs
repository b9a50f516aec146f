//! Typed async operations.

use super::Node;
use super::types::Type;
use crate::naming::member_key;

/// A named async operation: an optional parameter type and an optional
/// return type. Always renders as a method returning a `Promise`; an unset
/// return type widens to `any`.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    params: Option<Type>,
    retval: Option<Type>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: None,
            retval: None,
        }
    }

    /// Set the parameter type, rendered as a single `args` parameter.
    pub fn param(mut self, ty: impl Into<Type>) -> Self {
        self.params = Some(ty.into());
        self
    }

    /// Set the resolved value type of the returned `Promise`.
    pub fn returns(mut self, ty: impl Into<Type>) -> Self {
        self.retval = Some(ty.into());
        self
    }
}

impl Node for Command {
    fn serialize(&self) -> String {
        let args = self
            .params
            .as_ref()
            .map(|ty| format!("args: {}", ty.type_text()))
            .unwrap_or_default();
        let retval = self
            .retval
            .as_ref()
            .map_or_else(|| "any".to_string(), Type::type_text);
        format!("{}({}): Promise<{}>", member_key(&self.name), args, retval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_command() {
        let c = Command::new("Reboot");
        assert_eq!(c.serialize(), "Reboot(): Promise<any>");
    }

    #[test]
    fn test_command_with_param() {
        let c = Command::new("set").param("number");
        assert_eq!(c.serialize(), "set(args: number): Promise<any>");
    }

    #[test]
    fn test_command_with_return_type() {
        let c = Command::new("get").returns("string");
        assert_eq!(c.serialize(), "get(): Promise<string>");
    }

    #[test]
    fn test_command_with_union_param() {
        let c = Command::new("Play").param(Type::literal(["Alert", "Ring"]));
        assert_eq!(c.serialize(), "Play(args: 'Alert' | 'Ring'): Promise<any>");
    }

    #[test]
    fn test_non_identifier_command_name_is_quoted() {
        let c = Command::new("3D");
        assert_eq!(c.serialize(), "\"3D\"(): Promise<any>");
    }
}
