//! Fixed-capacity double-ended ring buffer that overwrites on overflow.
//!
//! [`RingBuffer`] keeps its elements in a boxed slice of `capacity` slots and
//! tracks the live window with a `start` cursor, an `end` cursor (one past the
//! tail) and a `length` counter.  The window may wrap past the end of the slice;
//! `wrap_add` and `wrap_sub` do the modular arithmetic.
//!
//! # Overflow
//! Inserting into a full buffer never fails.  A tail-side insertion evicts the
//! front element and a front-side insertion evicts the tail element, so the
//! buffer always holds the `capacity` most recent insertions from that side.
//!
//! # Pseudo-code Implementation
//!
//! ```text
//! // 1. Tail insert (push_back)
//! if length == capacity: evict front
//! slots[end] = item
//! end = (end + 1) % capacity
//! length += 1
//!
//! // 2. Tail remove (pop_back)
//! end = (end + capacity - 1) % capacity
//! length -= 1
//! return copy of slots[end]      // slot keeps the stale value
//!
//! // 3. Front insert (push_front)
//! if length == capacity: evict tail
//! start = (start + capacity - 1) % capacity
//! slots[start] = item
//! length += 1
//!
//! // 4. Front remove (pop_front)
//! item = copy of slots[start]    // slot keeps the stale value
//! start = (start + 1) % capacity
//! length -= 1
//! return item
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::RingBufferError;

/// A circular buffer of fixed capacity supporting insertion and removal at both ends.
///
/// Invariants maintained by every operation:
/// - `end == (start + length) % capacity`
/// - `0 <= length <= capacity`
/// - the live elements, front to back, are `slots[start]`, `slots[(start + 1) % capacity]`,
///   … for `length` entries.  Every other slot is either never written (`None`) or
///   holds a stale value left by a removal; stale values are only ever read by the
///   `Display` rendering.
///
/// ```
/// use ring_buffer::RingBuffer;
///
/// let mut ring = RingBuffer::new(3);
/// ring.push([1, 2, 3, 4]);
/// assert_eq!(ring.to_vec(), vec![2, 3, 4]);
///
/// ring.unshift([0]);
/// assert_eq!(ring.to_vec(), vec![0, 2, 3]);
/// ```
#[derive(Clone)]
pub struct RingBuffer<T> {
    start: usize,
    end: usize,
    length: usize,
    slots: Box<[Option<T>]>,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer with room for `capacity` elements.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.  Use [`try_new`](RingBuffer::try_new) to get an
    /// error instead.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(buffer) => buffer,
            Err(err) => panic!("RingBuffer::new: {err}"),
        }
    }

    /// Creates an empty buffer with room for `capacity` elements, or
    /// [`RingBufferError::ZeroCapacity`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, RingBufferError> {
        if capacity == 0 {
            return Err(RingBufferError::ZeroCapacity);
        }
        rb_debug!("new ring buffer with capacity {}", capacity);
        Ok(Self {
            start: 0,
            end: 0,
            length: 0,
            slots: (0..capacity).map(|_| None).collect(),
        })
    }

    /// Builds a full buffer whose capacity is `items.len()` and whose front-to-back
    /// order is the order of `items`.
    ///
    /// The elements are moved, not cloned.  Returns [`RingBufferError::ZeroCapacity`]
    /// for an empty vector.
    pub fn from_vec(items: Vec<T>) -> Result<Self, RingBufferError> {
        if items.is_empty() {
            return Err(RingBufferError::ZeroCapacity);
        }
        let length = items.len();
        rb_debug!("ring buffer from sequence of {} elements", length);
        Ok(Self {
            start: 0,
            end: 0,
            length,
            slots: items.into_iter().map(Some).collect(),
        })
    }

    /// Number of slots, fixed at construction.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` if the next insertion will evict an element.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.length == self.capacity()
    }

    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        (idx + add) % self.capacity()
    }

    #[inline(always)]
    fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        (idx + self.capacity() - sub) % self.capacity()
    }

    /// Returns a shared reference to the element at logical `index` (0 is the front),
    /// or `None` if `index >= len()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.length {
            self.slots[self.wrap_add(self.start, index)].as_ref()
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.length {
            let real_idx = self.wrap_add(self.start, index);
            self.slots[real_idx].as_mut()
        } else {
            None
        }
    }

    /// Returns a shared reference to the front element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a shared reference to the tail element, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        match self.length.checked_sub(1) {
            Some(last) => self.get(last),
            None => None,
        }
    }

    /// Returns an exclusive reference to the front element, or `None` if empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns an exclusive reference to the tail element, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.length.checked_sub(1) {
            Some(last) => self.get_mut(last),
            None => None,
        }
    }

    /// Appends `item` at the tail.  If the buffer is full the front element is
    /// evicted first and returned.
    pub fn push_back(&mut self, item: T) -> Option<T> {
        let evicted = if self.is_full() {
            rb_trace!("full at start {}, evicting front", self.start);
            self.evict_front()
        } else {
            None
        };
        self.slots[self.end] = Some(item);
        self.end = self.wrap_add(self.end, 1);
        self.length += 1;
        evicted
    }

    /// Prepends `item` at the front.  If the buffer is full the tail element is
    /// evicted first and returned.
    pub fn push_front(&mut self, item: T) -> Option<T> {
        let evicted = if self.is_full() {
            rb_trace!("full at end {}, evicting tail", self.end);
            self.evict_back()
        } else {
            None
        };
        self.start = self.wrap_sub(self.start, 1);
        self.slots[self.start] = Some(item);
        self.length += 1;
        evicted
    }

    /// Moves the front element out of a full buffer.  The vacated slot is the one
    /// the following tail write lands on (`end == start` when full).
    fn evict_front(&mut self) -> Option<T> {
        let item = self.slots[self.start].take();
        self.start = self.wrap_add(self.start, 1);
        self.length -= 1;
        item
    }

    /// Moves the tail element out of a full buffer.  The vacated slot is the one
    /// the following front write lands on.
    fn evict_back(&mut self) -> Option<T> {
        self.end = self.wrap_sub(self.end, 1);
        self.length -= 1;
        self.slots[self.end].take()
    }

    /// Appends every element of `items` at the tail, in order.
    ///
    /// Elements evicted by overflow are dropped; only the last `capacity()` pushed
    /// elements survive.
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut ring = RingBuffer::new(3);
    /// ring.push(["1", "2", "3", "4"]);
    ///
    /// let mut drained = String::new();
    /// while !ring.is_empty() {
    ///     drained += ring.pop();
    /// }
    /// assert_eq!(drained, "432");
    /// ```
    pub fn push<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        for item in items {
            self.push_back(item);
        }
        self
    }

    /// Prepends every element of `items` at the front, in order, so the last element
    /// of `items` becomes the new front.
    ///
    /// Elements evicted by overflow (from the tail) are dropped.
    ///
    /// ```
    /// use ring_buffer::RingBuffer;
    ///
    /// let mut ring = RingBuffer::new(3);
    /// ring.unshift(["4", "3", "2", "1"]);
    /// assert_eq!(ring.to_vec(), vec!["1", "2", "3"]);
    /// ```
    pub fn unshift<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        for item in items {
            self.push_front(item);
        }
        self
    }

    /// Drops every element, stale ones included, and resets both cursors to slot 0.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.start = 0;
        self.end = 0;
        self.length = 0;
    }

    /// Replaces every element with `f(element)`, front to back.
    ///
    /// If `f` panics the buffer is cleared before the panic propagates.
    pub fn map<F: FnMut(T) -> T>(&mut self, f: F) -> &mut Self {
        self.map_in_order(false, f)
    }

    /// Replaces every element with `f(element)`, back to front.
    ///
    /// If `f` panics the buffer is cleared before the panic propagates.
    pub fn map_rev<F: FnMut(T) -> T>(&mut self, f: F) -> &mut Self {
        self.map_in_order(true, f)
    }

    fn map_in_order<F: FnMut(T) -> T>(&mut self, reverse: bool, mut f: F) -> &mut Self {
        {
            let mut guard = ClearOnUnwind {
                ring: &mut *self,
                armed: true,
            };
            let (start, length) = (guard.ring.start, guard.ring.length);
            for i in 0..length {
                let offset = if reverse { length - 1 - i } else { i };
                let real_idx = guard.ring.wrap_add(start, offset);
                let slot = &mut guard.ring.slots[real_idx];
                *slot = slot.take().map(&mut f);
            }
            guard.armed = false;
        }
        self
    }

    /// Calls `f` on every element, front to back.
    pub fn each<F: FnMut(&T)>(&self, f: F) -> &Self {
        self.iter().for_each(f);
        self
    }

    /// Calls `f` on every element, back to front.
    pub fn each_rev<F: FnMut(&T)>(&self, f: F) -> &Self {
        self.iter().rev().for_each(f);
        self
    }

    /// Front-to-back iterator over shared references.
    pub fn iter(&self) -> Iter<'_, T> {
        let (head, tail) = self.as_slices();
        Iter {
            head: head.iter(),
            tail: tail.iter(),
        }
    }

    /// Front-to-back iterator over exclusive references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (head, tail) = self.as_mut_slices();
        IterMut {
            head: head.iter_mut(),
            tail: tail.iter_mut(),
        }
    }

    /// Copies the live elements, front to back, into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the buffer and returns its live elements, front to back.
    pub fn into_vec(self) -> Vec<T> {
        let mut slots = self.slots.into_vec();
        slots.rotate_left(self.start);
        slots.into_iter().take(self.length).flatten().collect()
    }

    /// Splits the live window into the part running up to the end of storage and
    /// the part that wrapped around to slot 0.
    fn as_slices(&self) -> (&[Option<T>], &[Option<T>]) {
        if self.start + self.length <= self.capacity() {
            (&self.slots[self.start..self.start + self.length], &[])
        } else {
            let (wrapped, head) = self.slots.split_at(self.start);
            (head, &wrapped[..self.length - head.len()])
        }
    }

    fn as_mut_slices(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        let (start, length) = (self.start, self.length);
        if start + length <= self.capacity() {
            (&mut self.slots[start..start + length], &mut [])
        } else {
            let (wrapped, head) = self.slots.split_at_mut(start);
            let tail_len = length - head.len();
            (head, &mut wrapped[..tail_len])
        }
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Removes and returns the tail element, or `None` if empty.
    ///
    /// The slot keeps a stale copy of the value until it is overwritten; it is
    /// outside the live window and only shows up in the `Display` rendering.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.length == 0 {
            return None;
        }
        self.end = self.wrap_sub(self.end, 1);
        self.length -= 1;
        self.slots[self.end].clone()
    }

    /// Removes and returns the front element, or `None` if empty.
    ///
    /// Like [`pop_back`](RingBuffer::pop_back), the slot keeps a stale copy.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.length == 0 {
            return None;
        }
        let item = self.slots[self.start].clone();
        self.start = self.wrap_add(self.start, 1);
        self.length -= 1;
        item
    }

    /// Removes and returns the tail element.
    ///
    /// # Panics
    /// Panics if the buffer is empty.  [`pop_back`](RingBuffer::pop_back) is the
    /// non-panicking form.
    pub fn pop(&mut self) -> T {
        match self.pop_back() {
            Some(item) => item,
            None => panic!("RingBuffer::pop on an empty buffer"),
        }
    }

    /// Removes and returns the front element.
    ///
    /// # Panics
    /// Panics if the buffer is empty.  [`pop_front`](RingBuffer::pop_front) is the
    /// non-panicking form.
    pub fn shift(&mut self) -> T {
        match self.pop_front() {
            Some(item) => item,
            None => panic!("RingBuffer::shift on an empty buffer"),
        }
    }
}

/// Empties the buffer if a `map` callback unwinds, so no slot inside the live
/// window is left without a value.
struct ClearOnUnwind<'a, T> {
    ring: &'a mut RingBuffer<T>,
    armed: bool,
}

impl<T> Drop for ClearOnUnwind<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            self.ring.clear();
        }
    }
}

// ─── Iterators ────────────────────────────────────────────────────────────────

/// Borrowing iterator returned by [`RingBuffer::iter`].
pub struct Iter<'a, T> {
    head: slice::Iter<'a, Option<T>>,
    tail: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.head
            .next()
            .or_else(|| self.tail.next())
            .and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.head.len() + self.tail.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tail
            .next_back()
            .or_else(|| self.head.next_back())
            .and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`RingBuffer::iter_mut`].
pub struct IterMut<'a, T> {
    head: slice::IterMut<'a, Option<T>>,
    tail: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.head
            .next()
            .or_else(|| self.tail.next())
            .and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.head.len() + self.tail.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tail
            .next_back()
            .or_else(|| self.head.next_back())
            .and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the live elements, front to back.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

// ─── Trait impls ──────────────────────────────────────────────────────────────

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push(iter);
    }
}

impl<T> TryFrom<Vec<T>> for RingBuffer<T> {
    type Error = RingBufferError;

    fn try_from(items: Vec<T>) -> Result<Self, RingBufferError> {
        Self::from_vec(items)
    }
}

impl<T> From<RingBuffer<T>> for Vec<T> {
    fn from(buffer: RingBuffer<T>) -> Self {
        buffer.into_vec()
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.length, index
            ),
        }
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.length;
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                length, index
            ),
        }
    }
}

/// Compares live contents only; capacity and cursor positions are ignored.
impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

/// Diagnostic rendering of the raw storage, in slot order rather than logical order.
///
/// Slots that were never written print as an empty string.  Slots vacated by a
/// removal still print the stale value they held:
///
/// ```
/// use ring_buffer::RingBuffer;
///
/// let mut ring = RingBuffer::new(3);
/// ring.push(["a", "b"]);
/// assert_eq!(ring.to_string(), "RingBuffer{start: 0, end: 2, lines: [a b ], length: 2}");
///
/// ring.pop();
/// assert_eq!(ring.to_string(), "RingBuffer{start: 0, end: 1, lines: [a b ], length: 1}");
/// ```
impl<T: fmt::Display> fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RingBuffer{{start: {}, end: {}, lines: [", self.start, self.end)?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if let Some(item) = slot {
                write!(f, "{item}")?;
            }
        }
        write!(f, "], length: {}}}", self.length)
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("slots", &self.slots)
            .field("length", &self.length)
            .finish()
    }
}
