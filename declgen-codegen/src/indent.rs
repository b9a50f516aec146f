//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width per level.
    Spaces(u8),
    /// One tab character per level.
    Tab,
}

impl Indent {
    /// 2-space indentation, the house style for generated TypeScript.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Write one indentation level into the buffer.
    pub(crate) fn push_to(&self, buffer: &mut String) {
        match self {
            Self::Spaces(width) => {
                for _ in 0..*width {
                    buffer.push(' ');
                }
            }
            Self::Tab => buffer.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_push_to() {
        let mut buffer = String::new();
        Indent::Spaces(2).push_to(&mut buffer);
        assert_eq!(buffer, "  ");
    }

    #[test]
    fn test_tab_push_to() {
        let mut buffer = String::new();
        Indent::Tab.push_to(&mut buffer);
        assert_eq!(buffer, "\t");
    }

    #[test]
    fn test_default_is_typescript() {
        assert_eq!(Indent::default(), Indent::TYPESCRIPT);
    }
}
