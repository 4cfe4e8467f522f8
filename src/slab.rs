use std::mem;
use std::ops::{Index, IndexMut};

#[cfg(test)]
use static_assertions::const_assert_eq;

/// An index into a slab, or "null"
///
/// This type is essentially `Option<usize>`. The value usize::MAX is
/// reserved to represent `None` or "null".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Ptr(usize);

// Nodes store three of these, so keep them as small as a plain index
#[cfg(test)]
const_assert_eq!(mem::size_of::<Ptr>(), mem::size_of::<usize>());
// Using `Option<usize>` directly would use more space.
#[cfg(test)]
const_assert_eq!(mem::size_of::<Option<usize>>(), 2 * mem::size_of::<usize>());

impl Default for Ptr {
    #[inline(always)]
    fn default() -> Self {
        Self::null()
    }
}

impl Ptr {
    #[inline(always)]
    pub fn null() -> Self {
        Ptr(usize::MAX)
    }

    // Methods on this type must be `#[inline]` to help the compiler see that the `Option` values
    // are only intermediate values used to make writing code easier. Instead of checking for `None`
    // and then `usize::MAX`, we want the compiler to just check the latter.
    #[inline(always)]
    pub fn into_index(self) -> Option<usize> {
        let Ptr(index) = self;
        if index == usize::MAX {
            None
        } else {
            Some(index)
        }
    }

    /// Returns `None` for the null pointer, or `Some(self)` otherwise
    #[inline(always)]
    pub fn non_null(self) -> Option<Self> {
        if self.is_null() {
            None
        } else {
            Some(self)
        }
    }

    #[inline(always)]
    pub fn is_null(self) -> bool {
        self.0 == usize::MAX
    }
}

#[derive(Debug, Clone)]
enum Entry<T> {
    Occupied(T),
    /// An item in the free list
    ///
    /// `next` is the index of the next entry in the free list or `Ptr::null()` if this is the last
    /// entry in the free list
    Free { next: Ptr },
}

/// An allocation primitive similar to `Vec`, but implemented to reuse space from removed entries.
///
/// Items are kept contiguously in memory, but indexes are not shifted when an individual item is
/// removed. Instead of always pushing items after the previously pushed item, this data structure
/// will reuse space from previously removed entries when possible. This makes removal cheaper than
/// a standard `Vec<T>` and keeps every `Ptr` handed out by `push` stable until it is removed.
#[derive(Debug, Clone)]
pub struct Slab<T> {
    items: Vec<Entry<T>>,
    /// The index of the first entry in the free list or Ptr::null() if the free list is empty
    ///
    /// The free list is a linked list stored in `items` that is used as a stack to track which
    /// entries have space that can be reused in calls to `push`.
    free_list_head: Ptr,
    /// The length of the free list
    free_len: usize,
}

impl<T> Default for Slab<T> {
    fn default() -> Self {
        Self {
            items: Vec::default(),
            free_list_head: Ptr::null(),
            free_len: 0,
        }
    }
}

impl<T> Slab<T> {
    /// Creates an empty slab
    ///
    /// The slab is initially created with a capacity of 0, so it will not allocate until it is
    /// first inserted into.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty slab with the specified capacity.
    ///
    /// The slab will be able to hold at least `capacity` elements without reallocating. If
    /// `capacity` is 0, the slab will not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Returns the number of entries in the slab that contain values
    ///
    /// This is the number of items pushed minus the number of items removed
    pub fn len(&self) -> usize {
        self.items.len() - self.free_len
    }

    /// Returns true if the slab is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the slab can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns a reference to the value at `ptr`, or `None` if `ptr` is null, out of bounds or
    /// refers to a removed entry
    pub fn get(&self, ptr: Ptr) -> Option<&T> {
        match self.items.get(ptr.into_index()?)? {
            Entry::Occupied(value) => Some(value),
            Entry::Free {..} => None,
        }
    }

    /// Returns a mutable reference to the value at `ptr`, or `None` if `ptr` is null, out of
    /// bounds or refers to a removed entry
    pub fn get_mut(&mut self, ptr: Ptr) -> Option<&mut T> {
        match self.items.get_mut(ptr.into_index()?)? {
            Entry::Occupied(value) => Some(value),
            Entry::Free {..} => None,
        }
    }

    /// Pushes a value into the slab and returns the index at which it was inserted.
    ///
    /// The item may be inserted at the end of the list, or in the space from an item was previously
    /// removed.
    pub fn push(&mut self, value: T) -> Ptr {
        // Check if we can reuse some space from the free list
        if let Some(free_list_head) = self.free_list_head.into_index() {
            let entry = &mut self.items[free_list_head];
            let next_free = match *entry {
                Entry::Free {next} => next,
                Entry::Occupied(_) => unreachable!("bug: occupied entry on the free list"),
            };

            // Update the free list to point to the next free list entry
            self.free_list_head = next_free;
            self.free_len -= 1;

            *entry = Entry::Occupied(value);

            return Ptr(free_list_head);
        }

        let index = self.items.len();
        // Since we store `Ptr` internally, we can't have usize::MAX as a valid index into the slab
        if index >= usize::MAX {
            panic!("cannot have more than usize::MAX - 1 entries in slab");
        }

        self.items.push(Entry::Occupied(value));

        Ptr(index)
    }

    /// Removes an item from the slab, returning its value, or `None` if there was no value at
    /// `ptr`.
    ///
    /// The space for the item will be reused in future calls to `push`. This does not move or
    /// modify any other entries in the slab. Their indexes remain the same and can still be used.
    pub fn remove(&mut self, ptr: Ptr) -> Option<T> {
        let index = ptr.into_index()?;
        let entry = self.items.get_mut(index)?;
        if let Entry::Free {..} = entry {
            return None;
        }

        // Retrieve the value in this entry by swapping in a free entry
        let prev_entry = mem::replace(entry, Entry::Free {next: self.free_list_head});
        self.free_list_head = ptr;
        self.free_len += 1;

        match prev_entry {
            Entry::Occupied(value) => Some(value),
            Entry::Free {..} => unreachable!(),
        }
    }

    /// Clears the slab, removing all values.
    ///
    /// Note that this method has no effect on the allocated capacity of the slab.
    ///
    /// This invalidates all previous indexes returned from `push`.
    pub fn clear(&mut self) {
        self.items.clear();
        self.free_list_head = Ptr::null();
        self.free_len = 0;
    }

    /// Reserves capacity for at least `additional` more elements to be inserted in the slab.
    pub fn reserve(&mut self, additional: usize) {
        // Free entries will be reused before growing `items`
        let needed = additional.saturating_sub(self.free_len);
        self.items.reserve(needed);
    }

    /// Shrinks the capacity of the slab as much as possible without moving any values
    pub fn shrink_to_fit(&mut self) {
        if self.is_empty() {
            self.clear();
        }
        self.items.shrink_to_fit();
    }
}

impl<T> Index<Ptr> for Slab<T> {
    type Output = T;

    fn index(&self, ptr: Ptr) -> &T {
        self.get(ptr).expect("bug: index does not refer to an occupied slab entry")
    }
}

impl<T> IndexMut<Ptr> for Slab<T> {
    fn index_mut(&mut self, ptr: Ptr) -> &mut T {
        self.get_mut(ptr).expect("bug: index does not refer to an occupied slab entry")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slab_push_get() {
        let mut slab = Slab::new();
        assert!(slab.is_empty());

        let a = slab.push("a");
        let b = slab.push("b");
        assert_eq!(slab.len(), 2);
        assert_eq!(slab.get(a), Some(&"a"));
        assert_eq!(slab[b], "b");
        assert_eq!(slab.get(Ptr::null()), None);
    }

    #[test]
    fn slab_remove_reuses_space() {
        let mut slab = Slab::new();
        let a = slab.push(1);
        let b = slab.push(2);
        let c = slab.push(3);

        assert_eq!(slab.remove(b), Some(2));
        // Removing twice is a no-op
        assert_eq!(slab.remove(b), None);
        assert_eq!(slab.get(b), None);
        assert_eq!(slab.len(), 2);

        // Other entries are not moved
        assert_eq!(slab[a], 1);
        assert_eq!(slab[c], 3);

        // The freed slot is used before growing
        let d = slab.push(4);
        assert_eq!(d, b);
        assert_eq!(slab.len(), 3);
        assert_eq!(slab[d], 4);
    }

    #[test]
    fn slab_free_list_is_a_stack() {
        let mut slab = Slab::new();
        let ptrs: Vec<_> = (0..5).map(|i| slab.push(i)).collect();

        slab.remove(ptrs[1]);
        slab.remove(ptrs[3]);

        // Most recently freed first
        assert_eq!(slab.push(10), ptrs[3]);
        assert_eq!(slab.push(11), ptrs[1]);
        // Free list exhausted, so this one is appended
        assert_eq!(slab.push(12), Ptr(5));
    }

    #[test]
    fn slab_clear() {
        let mut slab = Slab::with_capacity(8);
        for i in 0..8 {
            slab.push(i);
        }
        let capacity = slab.capacity();
        slab.clear();
        assert!(slab.is_empty());
        assert_eq!(slab.capacity(), capacity);
        assert_eq!(slab.push(42), Ptr(0));
    }

    #[test]
    fn slab_capacity_survives_remove_and_push() {
        let mut slab = Slab::with_capacity(16);
        let ptrs: Vec<_> = (0..10).map(|i| slab.push(i)).collect();
        let capacity = slab.capacity();
        assert!(capacity >= 16);

        // The freed entry is reused, so nothing is reallocated
        slab.remove(ptrs[4]);
        assert_eq!(slab.capacity(), capacity);
        assert_eq!(slab.push(42), ptrs[4]);
        assert_eq!(slab.capacity(), capacity);

        // Free entries count towards the reservation
        slab.remove(ptrs[0]);
        slab.reserve(20);
        assert!(slab.capacity() >= slab.len() + 20);
    }

    #[test]
    #[should_panic(expected = "bug: index does not refer to an occupied slab entry")]
    fn slab_index_removed() {
        let mut slab = Slab::new();
        let a = slab.push(1);
        slab.remove(a);
        let _ = slab[a];
    }
}
