//! A doubly linked list stored in an arena
//!
//! Each element refers to both of its neighbours by index. The arena owns every element, so the
//! backward links never keep an element alive.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::iter::{FromIterator, FusedIterator};

use tracing::{debug, trace};

use crate::error::{check_index, ListError, ListResult};
use crate::slab::{Ptr, Slab};

#[derive(Debug, Clone)]
struct Element<T> {
    value: T,
    prev: Ptr,
    next: Ptr,
}

/// A doubly linked list
///
/// Positional operations walk from whichever end of the list is closer to the requested index.
/// Operations that locate an element by value act on the first element equal to the given value.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    elements: Slab<Element<T>>,
    head: Ptr,
    tail: Ptr,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self {
            elements: Slab::default(),
            head: Ptr::null(),
            tail: Ptr::null(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::display_list(f, self.iter())
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list
    ///
    /// The list is initially created with a capacity of 0, so it will not allocate until it is
    /// first inserted into.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list that can hold at least `capacity` elements without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Slab::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Returns the number of elements in the list
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the list has no elements
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.elements.is_empty(), self.head.is_null());
        self.head.is_null()
    }

    /// Returns the number of elements the list can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Reserves capacity for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional)
    }

    /// Shrinks the capacity of the list as much as possible
    pub fn shrink_to_fit(&mut self) {
        self.elements.shrink_to_fit()
    }

    /// Returns the index of the element at position `index`
    ///
    /// `index` must be less than `len`.
    fn ptr_at(&self, index: usize) -> Ptr {
        debug_assert!(index < self.len());

        if index < self.len() / 2 {
            let mut ptr = self.head;
            for _ in 0..index {
                ptr = self.elements[ptr].next;
            }
            ptr
        } else {
            let mut ptr = self.tail;
            for _ in index + 1..self.len() {
                ptr = self.elements[ptr].prev;
            }
            ptr
        }
    }

    /// Returns the index of the first element equal to `value`
    fn find(&self, value: &T) -> Option<Ptr>
        where T: PartialEq,
    {
        let mut current = self.head.non_null();
        while let Some(ptr) = current {
            let element = &self.elements[ptr];
            if element.value == *value {
                return Some(ptr);
            }
            current = element.next.non_null();
        }
        None
    }

    /// Links a new element between `prev` and `next`, either of which may be null
    fn link_between(&mut self, prev: Ptr, next: Ptr, value: T) -> Ptr {
        let ptr = self.elements.push(Element {value, prev, next});
        trace!(?ptr, ?prev, ?next, "linked element");

        match self.elements.get_mut(prev) {
            Some(element) => element.next = ptr,
            None => self.head = ptr,
        }
        match self.elements.get_mut(next) {
            Some(element) => element.prev = ptr,
            None => self.tail = ptr,
        }

        ptr
    }

    /// Links a new element right before the element at `at`
    fn link_before(&mut self, at: Ptr, value: T) {
        let prev = self.elements[at].prev;
        self.link_between(prev, at, value);
    }

    /// Links a new element right after the element at `at`
    fn link_after(&mut self, at: Ptr, value: T) {
        let next = self.elements[at].next;
        self.link_between(at, next, value);
    }

    /// Removes the element at `ptr`, joining its neighbours
    fn unlink(&mut self, ptr: Ptr) -> T {
        let Element {value, prev, next} = self.elements.remove(ptr)
            .expect("bug: unlinking an element that is not in the list");
        trace!(?ptr, ?prev, ?next, "unlinked element");

        match self.elements.get_mut(prev) {
            Some(element) => element.next = next,
            None => self.head = next,
        }
        match self.elements.get_mut(next) {
            Some(element) => element.prev = prev,
            None => self.tail = prev,
        }

        value
    }

    /// Returns a reference to the element at `index`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{dlist, ListError};
    ///
    /// let list = dlist!["a", "b"];
    /// assert_eq!(list.get(1), Ok(&"b"));
    /// assert_eq!(list.get(2), Err(ListError::IndexOutOfRange {index: 2, len: 2}));
    /// ```
    pub fn get(&self, index: usize) -> ListResult<&T> {
        check_index(index, self.len())?;
        Ok(&self.elements[self.ptr_at(index)].value)
    }

    /// Returns a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> ListResult<&mut T> {
        check_index(index, self.len())?;
        let ptr = self.ptr_at(index);
        Ok(&mut self.elements[ptr].value)
    }

    /// Replaces the element at `index`, returning the previous value
    pub fn set(&mut self, index: usize, value: T) -> ListResult<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Inserts a value at the start of the list
    ///
    /// Time complexity: `O(1)`
    pub fn insert_at_start(&mut self, value: T) {
        let head = self.head;
        self.link_between(Ptr::null(), head, value);
    }

    /// Inserts a value at the end of the list
    ///
    /// Time complexity: `O(1)`
    pub fn insert_at_end(&mut self, value: T) {
        let tail = self.tail;
        self.link_between(tail, Ptr::null(), value);
    }

    /// Inserts a value so that it ends up at position `index`
    ///
    /// `index` must refer to an existing element. Use `insert_at_end` to append.
    pub fn insert_at_index(&mut self, index: usize, value: T) -> ListResult<()> {
        check_index(index, self.len())?;
        let at = self.ptr_at(index);
        self.link_before(at, value);
        Ok(())
    }

    /// Inserts `value` right before the first element equal to `existing`
    ///
    /// Returns `false` and leaves the list unchanged if no element is equal to `existing`.
    pub fn insert_before(&mut self, value: T, existing: &T) -> bool
        where T: PartialEq,
    {
        match self.find(existing) {
            Some(at) => {
                self.link_before(at, value);
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
        match self.find(existing) {
            Some(at) => {
                self.link_after(at, value);
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
    ///
    /// Time complexity: `O(1)`
    pub fn delete_at_start(&mut self) -> Option<T> {
        let head = self.head.non_null()?;
        Some(self.unlink(head))
    }

    /// Removes the last element and returns it, or `None` if the list is empty
    ///
    /// Time complexity: `O(1)`
    pub fn delete_at_end(&mut self) -> Option<T> {
        let tail = self.tail.non_null()?;
        Some(self.unlink(tail))
    }

    /// Removes the element at `index` and returns it
    pub fn delete_at_index(&mut self, index: usize) -> ListResult<T> {
        check_index(index, self.len())?;
        let ptr = self.ptr_at(index);
        Ok(self.unlink(ptr))
    }

    /// Removes the first element equal to `value`. Returns whether such an element was found.
    pub fn delete_by_value(&mut self, value: &T) -> bool
        where T: PartialEq,
    {
        match self.find(value) {
            Some(ptr) => {
                self.unlink(ptr);
                true
            },
            None => {
                debug!("delete_by_value: element is not in the list");
                false
            },
        }
    }

    /// Removes every element from the list
    ///
    /// Note that this method has no effect on the allocated capacity of the list.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.head = Ptr::null();
        self.tail = Ptr::null();
    }

    /// Returns references to all of the elements in order, or `None` if the list is empty
    pub fn elements(&self) -> Option<Vec<&T>> {
        if self.is_empty() {
            None
        } else {
            Some(self.iter().collect())
        }
    }

    /// Returns an iterator over the elements of the list
    ///
    /// The iterator can be walked from both ends.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            elements: &self.elements,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_at_end(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    elements: &'a Slab<Element<T>>,
    front: Ptr,
    back: Ptr,
    /// Stops the two ends from walking past each other
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let element = &self.elements[self.front];
        self.front = element.next;
        self.remaining -= 1;
        Some(&element.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let element = &self.elements[self.back];
        self.back = element.prev;
        self.remaining -= 1;
        Some(&element.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}
