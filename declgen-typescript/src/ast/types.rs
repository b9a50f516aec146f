//! The type algebra: plain type names, lists, unions, and function types.

use super::fns::Function;

/// Anything that can report its own TypeScript type text.
#[derive(Debug, Clone)]
pub enum Type {
    /// A literal type-text string, returned verbatim.
    Plain(String),
    /// An array of the element type.
    List(Box<Type>),
    /// A union of member types, joined with `|`.
    Literal(Vec<Type>),
    /// A function type, rendered in lambda form.
    Function(Box<Function>),
}

impl Type {
    /// A plain type from its literal text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// An array of the element type.
    pub fn list(element: impl Into<Type>) -> Self {
        Self::List(Box::new(element.into()))
    }

    /// A union over the given members. Raw strings become single-quoted
    /// string-literal types.
    pub fn literal<I>(members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<UnionMember>,
    {
        Self::Literal(
            members
                .into_iter()
                .map(|member| member.into().into_type())
                .collect(),
        )
    }

    /// Render this type's text.
    pub fn type_text(&self) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::List(element) => {
                let text = element.type_text();
                // Union and function elements need grouping parentheses:
                // their own renderings do not add them, and both `|` and
                // `=>` bind looser than the array suffix.
                if matches!(**element, Self::Literal(_) | Self::Function(_)) {
                    format!("({})[]", text)
                } else {
                    format!("{}[]", text)
                }
            }
            Self::Literal(members) => {
                if members.is_empty() {
                    // An empty union has no direct spelling; `never` is its
                    // canonical type.
                    "never".to_string()
                } else {
                    members
                        .iter()
                        .map(Type::type_text)
                        .collect::<Vec<_>>()
                        .join(" | ")
                }
            }
            Self::Function(function) => function.lambda(),
        }
    }
}

impl From<&str> for Type {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for Type {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl From<Function> for Type {
    fn from(function: Function) -> Self {
        Self::Function(Box::new(function))
    }
}

/// A union member: either a full type, or a raw string that becomes a
/// single-quoted string-literal type.
#[derive(Debug, Clone)]
pub enum UnionMember {
    Type(Type),
    Raw(String),
}

impl UnionMember {
    pub(crate) fn into_type(self) -> Type {
        match self {
            Self::Type(ty) => ty,
            Self::Raw(text) => Type::Plain(format!("'{}'", text)),
        }
    }
}

impl From<Type> for UnionMember {
    fn from(ty: Type) -> Self {
        Self::Type(ty)
    }
}

impl From<&str> for UnionMember {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}

impl From<String> for UnionMember {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        assert_eq!(Type::plain("string").type_text(), "string");
    }

    #[test]
    fn test_list_of_plain_has_no_parentheses() {
        assert_eq!(Type::list("number").type_text(), "number[]");
    }

    #[test]
    fn test_list_of_literal_is_parenthesized() {
        let ty = Type::list(Type::literal(["a", "b"]));
        assert_eq!(ty.type_text(), "('a' | 'b')[]");
    }

    #[test]
    fn test_literal_quotes_raw_strings() {
        let ty = Type::literal(["On", "Off"]);
        assert_eq!(ty.type_text(), "'On' | 'Off'");
    }

    #[test]
    fn test_literal_accepts_nested_types() {
        let ty = Type::literal([
            UnionMember::from("Auto"),
            UnionMember::from(Type::plain("number")),
        ]);
        assert_eq!(ty.type_text(), "'Auto' | number");
    }

    #[test]
    fn test_empty_literal_renders_never() {
        let ty = Type::literal(Vec::<UnionMember>::new());
        assert_eq!(ty.type_text(), "never");
    }

    #[test]
    fn test_list_of_function_is_parenthesized() {
        let ty = Type::list(Type::from(Function::new("handler").arg("value", "string")));
        assert_eq!(ty.type_text(), "((value: string) => void)[]");
    }

    #[test]
    fn test_list_of_list() {
        let ty = Type::list(Type::list("string"));
        assert_eq!(ty.type_text(), "string[][]");
    }

    #[test]
    fn test_function_type_renders_lambda() {
        let ty = Type::from(Function::new("handler").arg("value", "string"));
        assert_eq!(ty.type_text(), "(value: string) => void");
    }
}
