//! A singly linked list where each element owns the next one

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::iter::{FromIterator, FusedIterator};

use tracing::debug;

use crate::error::{check_index, ListError, ListResult};

type Link<T> = Option<Box<Element<T>>>;

struct Element<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list
///
/// Operations that locate an element by value act on the first element equal to the given value.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self {
            head: None,
            len: 0,
        }
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Dropping the head would drop the whole chain recursively, so unlink one element at a time
        let mut current = self.head.take();
        while let Some(mut element) = current {
            current = element.next.take();
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::display_list(f, self.iter())
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::SinglyLinkedList;
    /// let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements in the list
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list has no elements
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.len == 0, self.head.is_none());
        self.len == 0
    }

    /// Returns the link at position `index`, i.e. the `next` field of element `index - 1` or the
    /// head when `index` is 0
    ///
    /// `index` must be at most `len`.
    fn link_mut(&mut self, index: usize) -> &mut Link<T> {
        debug_assert!(index <= self.len);
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut().expect("bug: list is shorter than its length").next;
        }
        link
    }

    /// Links a new element into `link`, pushing the element currently there back by one position
    fn link_in(link: &mut Link<T>, value: T) {
        let next = link.take();
        *link = Some(Box::new(Element {value, next}));
    }

    /// Returns the index of the first element equal to `value`
    fn position(&self, value: &T) -> Option<usize>
        where T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Returns a reference to the element at `index`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{slist, ListError};
    ///
    /// let list = slist!["a", "b"];
    /// assert_eq!(list.get(1), Ok(&"b"));
    /// assert_eq!(list.get(2), Err(ListError::IndexOutOfRange {index: 2, len: 2}));
    /// ```
    pub fn get(&self, index: usize) -> ListResult<&T> {
        check_index(index, self.len)?;
        self.iter().nth(index).ok_or(ListError::IndexOutOfRange {index, len: self.len})
    }

    /// Returns a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> ListResult<&mut T> {
        check_index(index, self.len)?;
        let len = self.len;
        self.link_mut(index)
            .as_mut()
            .map(|element| &mut element.value)
            .ok_or(ListError::IndexOutOfRange {index, len})
    }

    /// Replaces the element at `index`, returning the previous value
    pub fn set(&mut self, index: usize, value: T) -> ListResult<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Inserts a value at the start of the list
    pub fn insert_at_start(&mut self, value: T) {
        Self::link_in(&mut self.head, value);
        self.len += 1;
    }

    /// Inserts a value at the end of the list
    ///
    /// Time complexity: `O(n)`
    pub fn insert_at_end(&mut self, value: T) {
        let len = self.len;
        Self::link_in(self.link_mut(len), value);
        self.len += 1;
    }

    /// Inserts a value so that it ends up at position `index`
    ///
    /// `index` must refer to an existing element. Use `insert_at_end` to append.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::slist;
    ///
    /// let mut list = slist![1, 3];
    /// list.insert_at_index(1, 2).unwrap();
    /// assert_eq!(list, slist![1, 2, 3]);
    /// assert!(list.insert_at_index(3, 4).is_err());
    /// ```
    pub fn insert_at_index(&mut self, index: usize, value: T) -> ListResult<()> {
        check_index(index, self.len)?;
        Self::link_in(self.link_mut(index), value);
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` right before the first element equal to `existing`
    ///
    /// Returns `false` and leaves the list unchanged if no element is equal to `existing`.
    pub fn insert_before(&mut self, value: T, existing: &T) -> bool
        where T: PartialEq,
    {
        match self.position(existing) {
            Some(index) => {
                Self::link_in(self.link_mut(index), value);
                self.len += 1;
                true
            },
            None => {
                debug!("insert_before: reference element is not in the list");
                false
            },
        }
    }

    /// Inserts `value` right after the first element equal to `existing`
    ///
    /// Returns `false` and leaves the list unchanged if no element is equal to `existing`.
    pub fn insert_after(&mut self, value: T, existing: &T) -> bool
        where T: PartialEq,
    {
        match self.position(existing) {
            Some(index) => {
                Self::link_in(self.link_mut(index + 1), value);
                self.len += 1;
                true
            },
            None => {
                debug!("insert_after: reference element is not in the list");
                false
            },
        }
    }

    /// Replaces the entire contents of the list with `values`
    ///
    /// An empty range is rejected and the list is left unchanged.
    pub fn replace_range<I>(&mut self, values: I) -> ListResult<()>
        where I: IntoIterator<Item = T>,
    {
        let replacement: Self = values.into_iter().collect();
        if replacement.is_empty() {
            return Err(ListError::EmptyRange);
        }

        *self = replacement;
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the list is empty
    pub fn delete_at_start(&mut self) -> Option<T> {
        let element = self.head.take()?;
        let Element {value, next} = *element;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Removes the last element and returns it, or `None` if the list is empty
    ///
    /// Time complexity: `O(n)`
    pub fn delete_at_end(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.delete_at_index(last).ok()
    }

    /// Removes the element at `index` and returns it
    pub fn delete_at_index(&mut self, index: usize) -> ListResult<T> {
        check_index(index, self.len)?;

        let link = self.link_mut(index);
        let element = link.take().expect("bug: list is shorter than its length");
        let Element {value, next} = *element;
        *link = next;
        self.len -= 1;

        Ok(value)
    }

    /// Removes the first element equal to `value`. Returns whether such an element was found.
    pub fn delete_by_value(&mut self, value: &T) -> bool
        where T: PartialEq,
    {
        match self.position(value) {
            Some(index) => self.delete_at_index(index).is_ok(),
            None => {
                debug!("delete_by_value: element is not in the list");
                false
            },
        }
    }

    /// Removes every element from the list
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns references to all of the elements in order, or `None` if the list is empty
    pub fn elements(&self) -> Option<Vec<&T>> {
        if self.is_empty() {
            None
        } else {
            Some(self.iter().collect())
        }
    }

    /// Returns an iterator over the elements of the list, front to back
    pub fn iter(&self) -> Iter<T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let len = self.len;
        let mut added = 0;
        let mut link = self.link_mut(len);
        for value in iter {
            let element = link.insert(Box::new(Element {value, next: None}));
            link = &mut element.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Element<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.next?;
        self.next = element.next.as_deref();
        self.remaining -= 1;
        Some(&element.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}
