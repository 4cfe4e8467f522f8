//! Classic pointer-based data structures: an unbalanced binary search tree, a singly linked list
//! and a doubly linked list.

use std::fmt;

mod slab;
mod error;

pub mod tree;
pub mod slist;
pub mod dlist;

pub use error::{ListError, ListResult};
pub use tree::OrderedBinaryTree;
pub use slist::SinglyLinkedList;
pub use dlist::DoublyLinkedList;

/// Writes the elements of a list as `[a, b, c]`, or `empty` if there are none
pub(crate) fn display_list<'a, T, I>(f: &mut fmt::Formatter<'_>, iter: I) -> fmt::Result
    where T: fmt::Display + 'a,
          I: IntoIterator<Item = &'a T>,
{
    let mut iter = iter.into_iter().peekable();
    if iter.peek().is_none() {
        return write!(f, "empty");
    }

    write!(f, "[")?;
    for (i, value) in iter.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    write!(f, "]")
}

/// Creates an `OrderedBinaryTree` by inserting the given values in order
///
/// The first value becomes the root.
///
/// ```
/// use ordtree::ordtree;
///
/// let tree = ordtree![5, 3, 8];
/// assert_eq!(tree.pre_order_traversal(), [&5, &3, &8]);
/// ```
#[macro_export]
macro_rules! ordtree {
    (@single $($x:tt)*) => (());
    (@count $($rest:expr),*) => (<[()]>::len(&[$($crate::ordtree!(@single $rest)),*]));

    ($($value:expr,)+) => { $crate::ordtree!($($value),+) };
    ($($value:expr),*) => {
        {
            let _cap = $crate::ordtree!(@count $($value),*);
            let mut _tree = $crate::OrderedBinaryTree::with_capacity(_cap);
            $(
                let _ = _tree.insert($value);
            )*
            _tree
        }
    };
}

/// Creates a `SinglyLinkedList` containing the given values
#[macro_export]
macro_rules! slist {
    ($($value:expr,)+) => { $crate::slist!($($value),+) };
    ($($value:expr),*) => {
        {
            let mut _list = $crate::SinglyLinkedList::new();
            $(
                _list.insert_at_end($value);
            )*
            _list
        }
    };
}

/// Creates a `DoublyLinkedList` containing the given values
#[macro_export]
macro_rules! dlist {
    ($($value:expr,)+) => { $crate::dlist!($($value),+) };
    ($($value:expr),*) => {
        {
            let _cap = $crate::ordtree!(@count $($value),*);
            let mut _list = $crate::DoublyLinkedList::with_capacity(_cap);
            $(
                _list.insert_at_end($value);
            )*
            _list
        }
    };
}
