use std::iter::FusedIterator;

use super::Node;

pub struct IterPostorder<'a, T> {
    stack: Vec<Node<'a, T>>,
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl<'a, T> IterPostorder<'a, T> {
    pub(super) fn new(root: Option<Node<'a, T>>) -> Self {
        let mut stack = Vec::new();
        let mut current = root;
        while let Some(node) = current {
            stack.extend(node.right());
            stack.push(node);

            current = node.left();
        }

        Self {stack}
    }
}

/// Compares two nodes of the same tree by position only
fn same_node<T>(left: Option<&Node<T>>, right: &Node<T>) -> bool {
    left.map(|left| left.ptr() == right.ptr())
        // default to not equal
        .unwrap_or(false)
}

impl<'a, T> Iterator for IterPostorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.stack.pop() {
            // If the top of the stack is the current node's right child
            match node.right() {
                Some(right) if same_node(self.stack.last(), &right) => {
                    // Remove right from stack
                    self.stack.pop();

                    // Push the current node back onto the stack
                    self.stack.push(node);

                    node = right;
                },

                _ => return Some(node.value()),
            }

            loop {
                self.stack.extend(node.right());
                self.stack.push(node);

                match node.left() {
                    Some(left) => {
                        node = left;
                    },

                    None => break,
                }
            }
        }

        None
    }
}

impl<'a, T> FusedIterator for IterPostorder<'a, T> {}
