use std::iter::FusedIterator;

use super::Node;

pub struct IterInorder<'a, T> {
    stack: Vec<Node<'a, T>>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, T> IterInorder<'a, T> {
    pub(super) fn new(root: Option<Node<'a, T>>) -> Self {
        let mut iter = Self {stack: Vec::new()};
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Node<'a, T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}
