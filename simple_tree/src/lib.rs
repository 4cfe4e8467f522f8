//! A "simple" unbalanced binary search tree that uses `Box` for internal storage, rather than
//! arena allocating the nodes
//!
//! Deletion is written as recursive functions over owned subtrees that return the new root of the
//! subtree they were given. Used to test the `ordtree` crate.

use std::cmp::Ordering;
use std::borrow::Borrow;
use std::iter::FromIterator;

mod node;
mod preorder;
mod inorder;
mod postorder;

pub use node::Node;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;

use node::Link;

#[derive(Debug, Clone)]
pub struct SimpleTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for SimpleTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T: PartialEq> PartialEq for SimpleTree<T> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees with the same values may have different shapes, so compare the sorted order
        self.len() == other.len() && self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<T: Eq> Eq for SimpleTree<T> {}

impl<T> SimpleTree<T> {
    /// Creates an empty `SimpleTree`
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_tree::SimpleTree;
    /// let tree: SimpleTree<i32> = SimpleTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values in the tree
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Returns the smallest value in the tree, or `None` if the tree is empty
    pub fn find_min(&self) -> Option<&T> {
        self.root().map(Node::find_min)
    }

    /// Returns the largest value in the tree, or `None` if the tree is empty
    pub fn find_max(&self) -> Option<&T> {
        self.root().map(Node::find_max)
    }

    /// Clears the tree, removing all values
    pub fn clear(&mut self) {
        *self = Self::new();
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

    /// Returns the root node of the tree, or `None` if the tree is empty
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord> SimpleTree<T> {
    /// Returns true if the tree contains the given value
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_tree::SimpleTree;
    ///
    /// let tree: SimpleTree<_> = vec![2, 1, 3].into_iter().collect();
    /// assert!(tree.search(&3));
    /// assert!(!tree.search(&4));
    /// ```
    pub fn search<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(node.value().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return true,
            }
        }

        false
    }

    /// Inserts a value into the tree as a new leaf
    ///
    /// Returns `false` and leaves the tree unchanged if the value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = node::insert(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a value from the tree and returns it, or `None` if it was not present
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_tree::SimpleTree;
    ///
    /// let mut tree: SimpleTree<_> = vec![5, 3, 8].into_iter().collect();
    /// assert_eq!(tree.take(&5), Some(5));
    /// assert_eq!(tree.take(&5), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut removed = None;
        self.root = node::delete(self.root.take(), value, &mut removed);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Removes a value from the tree, returning true if it was present
    pub fn remove<Q>(&mut self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes a value from the tree and returns the resulting root, or `None` if the tree is now
    /// empty
    ///
    /// Removing a value that is not present leaves the tree unchanged.
    pub fn delete<Q>(&mut self, value: &Q) -> Option<&Node<T>>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.take(value);
        self.root()
    }
}

impl<T: Ord> Extend<T> for SimpleTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SimpleTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeSet;

    use rand::prelude::*;

    #[test]
    fn traversals() {
        // Create the following tree:
        //      4
        //   2     5
        // 1   3
        let tree: SimpleTree<_> = vec![4, 5, 2, 3, 1].into_iter().collect();

        let values: Vec<_> = tree.iter_preorder().copied().collect();
        assert_eq!(&values, &[4, 2, 1, 3, 5]);

        let values: Vec<_> = tree.iter_inorder().copied().collect();
        assert_eq!(&values, &[1, 2, 3, 4, 5]);

        let values: Vec<_> = tree.iter_postorder().copied().collect();
        assert_eq!(&values, &[1, 3, 2, 5, 4]);
    }

    #[test]
    fn delete_returns_new_root() {
        let mut tree: SimpleTree<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();

        // Two children, replaced by the in-order successor
        assert_eq!(tree.delete(&5).map(|root| *root.value()), Some(7));
        let values: Vec<_> = tree.iter_preorder().copied().collect();
        assert_eq!(&values, &[7, 3, 1, 4, 8, 9]);

        // Leaf
        tree.delete(&1);
        // One child
        tree.delete(&8);
        let values: Vec<_> = tree.iter_preorder().copied().collect();
        assert_eq!(&values, &[7, 3, 4, 9]);
        assert_eq!(tree.len(), 4);

        // Missing value
        assert_eq!(tree.delete(&100).map(|root| *root.value()), Some(7));
        assert_eq!(tree.len(), 4);

        for value in &[7, 3, 4] {
            assert!(tree.remove(value));
        }
        assert_eq!(tree.delete(&9), None);
        assert!(tree.is_empty());
    }

    #[test]
    fn successor_deep_in_right_subtree() {
        let mut tree: SimpleTree<_> = vec![50, 30, 70, 60, 80, 65, 62].into_iter().collect();
        assert_eq!(tree.take(&50), Some(50));

        let values: Vec<_> = tree.iter_preorder().copied().collect();
        assert_eq!(&values, &[60, 30, 70, 65, 62, 80]);
    }

    #[test]
    fn test_random_operations() {
        cfg_if::cfg_if! {
            if #[cfg(miri)] {
                const TEST_CASES: usize = 16;
                const OPERATIONS: usize = 24;

                (0..TEST_CASES).into_iter().for_each(|_| test_case());

            } else {
                use rayon::prelude::*;

                const TEST_CASES: usize = 1024;
                const OPERATIONS: usize = 128;

                (0..TEST_CASES).into_par_iter().for_each(|_| test_case());
            }
        }

        fn test_case() {
            let mut tree = SimpleTree::new();
            // Compare against a BTreeSet
            let mut expected = BTreeSet::new();

            let mut rng = rand::thread_rng();
            for _ in 0..rng.gen_range(OPERATIONS..=OPERATIONS*2) {
                assert_eq!(tree.is_empty(), expected.is_empty());
                assert_eq!(tree.len(), expected.len());

                let value = rng.gen_range(0..=64);
                match rng.gen_range(1..=100) {
                    1..=20 => assert_eq!(tree.search(&value), expected.contains(&value)),
                    21..=65 => assert_eq!(tree.insert(value), expected.insert(value)),
                    66..=100 => assert_eq!(tree.take(&value), expected.take(&value)),
                    _ => unreachable!(),
                }

                assert_eq!(tree.find_min(), expected.iter().next());
                assert_eq!(tree.find_max(), expected.iter().next_back());
            }

            assert!(tree.iter_inorder().eq(expected.iter()));
        }
    }
}
