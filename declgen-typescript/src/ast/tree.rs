//! Named nested object types.

use super::{Node, render_tree};
use crate::naming::member_key;

/// A named nested block. Children render as comma-terminated object-type
/// members, in insertion order.
#[derive(Debug)]
pub struct Tree {
    name: String,
    children: Vec<Box<dyn Node>>,
}

impl Tree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
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

impl Node for Tree {
    fn serialize(&self) -> String {
        format!(
            "{}: {{{}}}",
            member_key(&self.name),
            render_tree(&self.children, ',')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::Member;
    use super::*;

    #[test]
    fn test_empty_tree() {
        assert_eq!(Tree::new("Audio").serialize(), "Audio: {}");
    }

    #[test]
    fn test_tree_members_are_comma_terminated() {
        let mut tree = Tree::new("Audio");
        tree.add_child(Member::new("Volume", "number").required())
            .add_child(Member::new("Muted", "boolean").required());
        assert_eq!(
            tree.serialize(),
            "Audio: {\n  Volume: number,\n  Muted: boolean,\n}"
        );
    }

    #[test]
    fn test_nested_trees_indent() {
        let mut inner = Tree::new("Output");
        inner.add_child(Member::new("Level", "number").required());
        let mut tree = Tree::new("Audio");
        tree.add_child(inner);
        assert_eq!(
            tree.serialize(),
            "Audio: {\n  Output: {\n    Level: number,\n  },\n}"
        );
    }

    #[test]
    fn test_add_children_preserves_order() {
        let mut tree = Tree::new("T");
        tree.add_children(vec![
            Box::new(Member::new("b", "number").required()),
            Box::new(Member::new("a", "string").required()),
        ]);
        assert_eq!(tree.serialize(), "T: {\n  b: number,\n  a: string,\n}");
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let mut tree = Tree::new("Audio");
        tree.add_child(Member::new("Volume", "number"));
        assert_eq!(tree.serialize(), tree.serialize());
    }
}
