use std::iter::FusedIterator;

use super::Node;

pub struct IterPreorder<'a, T> {
    stack: Vec<Node<'a, T>>,
}

impl<'a, T> IterPreorder<'a, T> {
    pub(super) fn new(root: Option<Node<'a, T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

// See: https://www.geeksforgeeks.org/iterative-preorder-traversal/
impl<'a, T> Iterator for IterPreorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.value())
    }
}

impl<'a, T> FusedIterator for IterPreorder<'a, T> {}
