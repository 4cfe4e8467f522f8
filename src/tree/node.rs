use std::ptr;
use std::fmt;

use crate::slab::{Ptr, Slab};

use super::{InnerNode, IterInorder, IterPostorder, IterPreorder};

/// A single node of the binary search tree
///
/// Every node is also the root of a subtree. Min/max queries and traversals on a `Node` only
/// consider that subtree.
pub struct Node<'a, T> {
    nodes: &'a Slab<InnerNode<T>>,
    ptr: Ptr,
    node: &'a InnerNode<T>,
}

impl<'a, T> Clone for Node<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Node<'a, T> {}

impl<'a, T> fmt::Debug for Node<'a, T>
    where T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the values of the children, so degenerate trees don't recurse
        f.debug_struct("Node")
            .field("value", self.value())
            .field("left", &self.left().map(|left| left.value()))
            .field("right", &self.right().map(|right| right.value()))
            .finish()
    }
}

impl<'a, T: PartialEq> PartialEq for Node<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        // Values are unique within a tree, so two nodes of the same tree with equal values are the
        // same node. Checking the pointers first skips the comparison in the common case.
        let ptr_eq = ptr::eq(self.nodes, other.nodes) && self.ptr == other.ptr;
        ptr_eq || self.value().eq(other.value())
    }
}

impl<'a, T: Eq> Eq for Node<'a, T> {}

impl<'a, T> Node<'a, T> {
    /// Creates a new `Node`, or returns `None` if `ptr` is null
    pub(super) fn new(nodes: &'a Slab<InnerNode<T>>, ptr: Ptr) -> Option<Self> {
        let node = nodes.get(ptr)?;
        Some(Self {nodes, ptr, node})
    }

    /// The position of this node in the arena of its tree
    pub(super) fn ptr(&self) -> Ptr {
        self.ptr
    }

    /// Returns the value of this node
    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        !self.node.left.is_null()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        !self.node.right.is_null()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<Self> {
        Self::new(self.nodes, self.node.left)
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<Self> {
        Self::new(self.nodes, self.node.right)
    }

    /// Returns the node that holds this node as a child, or `None` for the root
    pub fn parent(&self) -> Option<Self> {
        Self::new(self.nodes, self.node.parent)
    }

    /// Returns the number of parent links between this node and the root
    ///
    /// The root is at level 0.
    ///
    /// Time complexity: `O(depth)`
    pub fn level(&self) -> usize {
        let mut level = 0;
        let mut current = self.parent();
        while let Some(node) = current {
            level += 1;
            current = node.parent();
        }
        level
    }

    /// Returns the smallest value in the subtree rooted at this node
    pub fn find_min(&self) -> &'a T {
        let mut current = *self;
        while let Some(left) = current.left() {
            current = left;
        }
        current.value()
    }

    /// Returns the largest value in the subtree rooted at this node
    pub fn find_max(&self) -> &'a T {
        let mut current = *self;
        while let Some(right) = current.right() {
            current = right;
        }
        current.value()
    }

    /// Performs a pre-order traversal of the subtree rooted at this node
    pub fn iter_preorder(&self) -> IterPreorder<'a, T> {
        IterPreorder::new(Some(*self))
    }

    /// Performs an in-order traversal of the subtree rooted at this node
    pub fn iter_inorder(&self) -> IterInorder<'a, T> {
        IterInorder::new(Some(*self))
    }

    /// Performs a post-order traversal of the subtree rooted at this node
    pub fn iter_postorder(&self) -> IterPostorder<'a, T> {
        IterPostorder::new(Some(*self))
    }

    pub fn in_order_traversal(&self) -> Vec<&'a T> {
        self.iter_inorder().collect()
    }

    pub fn pre_order_traversal(&self) -> Vec<&'a T> {
        self.iter_preorder().collect()
    }

    pub fn post_order_traversal(&self) -> Vec<&'a T> {
        self.iter_postorder().collect()
    }
}
