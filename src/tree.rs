mod node;
mod preorder;
mod inorder;
mod postorder;
mod display;

pub use node::*;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;
pub use display::DEFAULT_INDENT;

use std::fmt;
use std::mem;
use std::cmp::Ordering;
use std::borrow::Borrow;
use std::iter::FromIterator;

use tracing::trace;

use crate::slab::{Ptr, Slab};

#[derive(Debug, Clone)]
struct InnerNode<T> {
    value: T,
    /// Back-reference to the node holding this node as a child, or null for the root
    ///
    /// Only used for navigating upwards. The slab is the sole owner of every node.
    parent: Ptr,
    left: Ptr,
    right: Ptr,
}

impl<T> InnerNode<T> {
    fn new(value: T, parent: Ptr) -> Self {
        Self {
            value,
            parent,
            left: Ptr::null(),
            right: Ptr::null(),
        }
    }
}

/// An unbalanced binary search tree (BST)
///
/// BST properties: For each node with value `v`:
/// - The value of each node in the left subtree is less than `v`
/// - The value of each node in the right subtree is greater than `v`
///
/// Duplicate values are not allowed. Inserting a value that already exists in the tree does not
/// modify the tree.
///
/// The tree never rebalances, so its shape depends entirely on the order of insertions and
/// deletions. Nodes are stored in an arena and refer to their children and their parent by index.
#[derive(Clone)]
pub struct OrderedBinaryTree<T> {
    nodes: Slab<InnerNode<T>>,
    root: Ptr,
}

impl<T> Default for OrderedBinaryTree<T> {
    fn default() -> Self {
        Self {
            nodes: Default::default(),
            root: Ptr::null(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedBinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter_inorder()).finish()
    }
}

impl<T: PartialEq> PartialEq for OrderedBinaryTree<T> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees built from the same values in a different order have different shapes. The
        // in-order traversal is the same for both, so that is what gets compared.
        self.len() == other.len() && self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<T: Eq> Eq for OrderedBinaryTree<T> {}

impl<T> OrderedBinaryTree<T> {
    /// Creates an empty tree
    ///
    /// The tree is initially created with a capacity of 0, so it will not allocate until it is
    /// first inserted into.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedBinaryTree;
    /// let mut tree: OrderedBinaryTree<i32> = OrderedBinaryTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree that can hold at least `capacity` nodes without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: Ptr::null(),
        }
    }

    /// Returns the number of nodes in the tree
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no root
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.nodes.is_empty(), self.root.is_null());
        self.root.is_null()
    }

    /// Returns the number of nodes the tree can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves capacity for at least `additional` more nodes
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional)
    }

    /// Shrinks the capacity of the tree as much as possible
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit()
    }

    /// Removes every node from the tree
    ///
    /// Note that this method has no effect on the allocated capacity of the tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = Ptr::null();
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant to be used for implementing custom traversals and for
    /// inspecting the shape of the tree.
    pub fn root(&self) -> Option<Node<T>> {
        Node::new(&self.nodes, self.root)
    }

    /// Returns the smallest value in the tree, or `None` if the tree is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::ordtree;
    ///
    /// let tree = ordtree![5, 3, 8, 1];
    /// assert_eq!(tree.find_min(), Some(&1));
    /// ```
    pub fn find_min(&self) -> Option<&T> {
        self.root().map(|root| root.find_min())
    }

    /// Returns the largest value in the tree, or `None` if the tree is empty
    pub fn find_max(&self) -> Option<&T> {
        self.root().map(|root| root.find_max())
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<T> {
        IterPreorder::new(self.root())
    }

    /// Performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> IterInorder<T> {
        IterInorder::new(self.root())
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<T> {
        IterPostorder::new(self.root())
    }

    /// Returns the values of the tree in ascending order (left, current, right)
    pub fn in_order_traversal(&self) -> Vec<&T> {
        self.iter_inorder().collect()
    }

    /// Returns the values of the tree in pre-order (current, left, right)
    ///
    /// Inserting these values in this order into an empty tree reproduces the same shape.
    pub fn pre_order_traversal(&self) -> Vec<&T> {
        self.iter_preorder().collect()
    }

    /// Returns the values of the tree in post-order (left, right, current)
    pub fn post_order_traversal(&self) -> Vec<&T> {
        self.iter_postorder().collect()
    }

    /// Returns the index of the leftmost node of the subtree rooted at `ptr`
    fn subtree_min(&self, mut ptr: Ptr) -> Ptr {
        while let Some(left) = self.nodes[ptr].left.non_null() {
            ptr = left;
        }
        ptr
    }

    /// Detaches the node at `ptr` from the tree and returns its value
    ///
    /// The node must have at most one child. That child (or nothing) takes its place in the slot
    /// of its parent.
    fn unlink(&mut self, ptr: Ptr) -> T {
        let node = self.nodes.remove(ptr)
            .expect("bug: unlinking a node that is not in the tree");
        debug_assert!(node.left.is_null() || node.right.is_null());

        let child = if node.left.is_null() { node.right } else { node.left };
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = node.parent;
        }
        self.replace_child(node.parent, ptr, child);

        node.value
    }

    /// Re-links `new` into the slot of `parent` that currently holds `old`
    ///
    /// A null `parent` means `old` was the root.
    fn replace_child(&mut self, parent: Ptr, old: Ptr, new: Ptr) {
        trace!(?parent, ?old, ?new, "relinking subtree");
        match self.nodes.get_mut(parent) {
            None => self.root = new,
            Some(parent) if parent.left == old => parent.left = new,
            Some(parent) => {
                debug_assert_eq!(parent.right, old);
                parent.right = new;
            },
        }
    }

    /// Removes the node at `ptr`, returning the value it held
    fn delete_node(&mut self, ptr: Ptr) -> T {
        let node = &self.nodes[ptr];
        if node.left.is_null() || node.right.is_null() {
            trace!(?ptr, "deleting node with at most one child");
            return self.unlink(ptr);
        }

        // Two children: the in-order successor (minimum of the right subtree) moves into this
        // node and its own node is removed instead. The successor has no left child.
        let successor = self.subtree_min(node.right);
        trace!(?ptr, ?successor, "deleting node with two children");
        let successor_value = self.unlink(successor);
        mem::replace(&mut self.nodes[ptr].value, successor_value)
    }
}

impl<T: Ord> OrderedBinaryTree<T> {
    /// Builds a tree from a sequence of values
    ///
    /// The first value becomes the root and the remaining values are inserted in sequence order.
    /// An empty sequence yields `None` rather than an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedBinaryTree;
    ///
    /// let tree = OrderedBinaryTree::build_from_sequence(vec![5, 3, 8]).unwrap();
    /// assert_eq!(tree.root().map(|root| *root.value()), Some(5));
    ///
    /// assert!(OrderedBinaryTree::<i32>::build_from_sequence(Vec::new()).is_none());
    /// ```
    pub fn build_from_sequence<I>(values: I) -> Option<Self>
        where I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        let first = values.next()?;

        let mut tree = Self::new();
        tree.insert(first);
        tree.extend(values);
        Some(tree)
    }

    /// Inserts a new value into the tree
    ///
    /// If the tree did not have this value present, a new leaf is linked in and `true` is
    /// returned. If the value was already present, the tree is not modified and `false` is
    /// returned.
    ///
    /// Time complexity: `O(depth)`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedBinaryTree;
    ///
    /// let mut tree = OrderedBinaryTree::new();
    /// assert!(tree.insert(37));
    /// assert!(!tree.insert(37));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut current = match self.root.non_null() {
            Some(root) => root,
            None => {
                self.root = self.nodes.push(InnerNode::new(value, Ptr::null()));
                trace!(ptr = ?self.root, "inserted root");
                return true;
            },
        };

        loop {
            let node = &self.nodes[current];
            match value.cmp(&node.value) {
                Ordering::Less => match node.left.non_null() {
                    Some(left) => current = left,
                    // Value not found, insert where we stopped
                    None => {
                        let ptr = self.nodes.push(InnerNode::new(value, current));
                        self.nodes[current].left = ptr;
                        trace!(?ptr, parent = ?current, "inserted left leaf");
                        return true;
                    },
                },

                Ordering::Greater => match node.right.non_null() {
                    Some(right) => current = right,
                    None => {
                        let ptr = self.nodes.push(InnerNode::new(value, current));
                        self.nodes[current].right = ptr;
                        trace!(?ptr, parent = ?current, "inserted right leaf");
                        return true;
                    },
                },

                Ordering::Equal => return false,
            }
        }
    }

    /// Returns the index of the node holding `value`, if any
    fn find<Q>(&self, value: &Q) -> Option<Ptr>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root.non_null();
        while let Some(ptr) = current {
            let node = &self.nodes[ptr];
            match value.cmp(node.value.borrow()) {
                Ordering::Less => current = node.left.non_null(),
                Ordering::Greater => current = node.right.non_null(),
                Ordering::Equal => return Some(ptr),
            }
        }

        None
    }

    /// Returns `true` if the tree contains the specified value
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering on the
    /// borrowed form must match the ordering on the value type.
    ///
    /// Time complexity: `O(depth)`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedBinaryTree;
    ///
    /// let mut tree = OrderedBinaryTree::new();
    /// tree.insert(String::from("abc"));
    /// assert!(tree.search("abc"));
    /// assert!(!tree.search("def"));
    /// ```
    pub fn search<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.find(value).is_some()
    }

    /// Returns a reference to the value in the tree equal to the given one, if any
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.find(value).map(|ptr| &self.nodes[ptr].value)
    }

    /// Deletes a value from the tree and returns the root of the resulting tree
    ///
    /// A node with no children is simply removed. A node with one child is replaced by that child.
    /// A node with two children takes the value of its in-order successor (the minimum of its
    /// right subtree), and the successor's node is removed from the right subtree instead.
    ///
    /// Deleting a value that is not in the tree does nothing. The returned root is `None` once
    /// the last node has been deleted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::ordtree;
    ///
    /// let mut tree = ordtree![5, 3, 8, 1, 4, 7, 9];
    /// let root = tree.delete(&5).unwrap();
    /// assert_eq!(*root.value(), 7);
    /// ```
    pub fn delete<Q>(&mut self, value: &Q) -> Option<Node<T>>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.take(value);
        self.root()
    }

    /// Removes a value from the tree. Returns whether the value was present in the tree.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the value in the tree, if any, that is equal to the given one
    ///
    /// Uses the same procedure as `delete`, so the resulting shape is identical.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedBinaryTree;
    ///
    /// let mut tree = OrderedBinaryTree::new();
    /// tree.insert(String::from("abc"));
    /// assert_eq!(tree.take("abc"), Some(String::from("abc")));
    /// assert_eq!(tree.take("def"), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let ptr = self.find(value)?;
        Some(self.delete_node(ptr))
    }
}

impl<T: Ord> Extend<T> for OrderedBinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedBinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
