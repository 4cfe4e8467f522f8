use std::mem;
use std::cmp::Ordering;
use std::borrow::Borrow;

/// An owned link to a subtree
pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns the smallest value in the subtree rooted at this node
    pub fn find_min(&self) -> &T {
        match self.left() {
            Some(left) => left.find_min(),
            None => &self.value,
        }
    }

    /// Returns the largest value in the subtree rooted at this node
    pub fn find_max(&self) -> &T {
        match self.right() {
            Some(right) => right.find_max(),
            None => &self.value,
        }
    }
}

/// Inserts `value` into the subtree stored in `link`, creating a leaf where the descent ends
///
/// Returns `false` if the value was already present.
pub(crate) fn insert<T: Ord>(link: &mut Link<T>, value: T) -> bool {
    match link {
        None => {
            *link = Some(Box::new(Node::new(value)));
            true
        },
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, value),
            Ordering::Greater => insert(&mut node.right, value),
            Ordering::Equal => false,
        },
    }
}

/// Deletes `value` from `subtree` and returns the root of the resulting subtree
///
/// The removed value is stored in `removed`. A node with two children takes the value of the
/// minimum of its right subtree, which is then deleted from that subtree.
pub(crate) fn delete<T, Q>(subtree: Link<T>, value: &Q, removed: &mut Option<T>) -> Link<T>
    where T: Borrow<Q>,
          Q: Ord + ?Sized,
{
    let mut node = subtree?;
    match value.cmp(node.value.borrow()) {
        Ordering::Less => {
            node.left = delete(node.left.take(), value, removed);
            Some(node)
        },

        Ordering::Greater => {
            node.right = delete(node.right.take(), value, removed);
            Some(node)
        },

        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => {
                *removed = Some(node.value);
                None
            },

            (Some(child), None) | (None, Some(child)) => {
                *removed = Some(node.value);
                Some(child)
            },

            (Some(left), Some(right)) => {
                let (right, successor) = delete_min(right);
                *removed = Some(mem::replace(&mut node.value, successor));
                node.left = Some(left);
                node.right = right;
                Some(node)
            },
        },
    }
}

/// Deletes the minimum of `node`'s subtree, returning the resulting subtree and the minimum
fn delete_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        Some(left) => {
            let (left, min) = delete_min(left);
            node.left = left;
            (Some(node), min)
        },

        None => {
            let Node {value, right, ..} = *node;
            (right, value)
        },
    }
}
