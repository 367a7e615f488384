//! A [`SplitDeque`] is a double-ended queue built from two cooperating growable
//! arrays instead of a ring buffer.
//!
//! The `front` partition stores the first half of the sequence in reverse
//! physical order, so pushing or popping the logical first element is a plain
//! `Vec::push`/`Vec::pop` on it. The `back` partition stores the second half
//! forward. The logical sequence is always `reverse(front) ++ back`:
//!
//! ```text
//! logical:  [a, b, c, d, e]
//! front:    [c, b, a]          (physical last = logical first)
//! back:     [d, e]
//! ```
//!
//! Whenever a mutation empties one partition while the other still holds more
//! than one element, the private rebalance step redistributes all but one
//! element to the empty side. That single rule keeps every single-ended
//! push/pop amortized *O*(1) and is the only structural maintenance the type
//! ever performs.

use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Bound, Index, IndexMut, RangeBounds};
use std::{fmt, iter, mem, slice};

use crate::slice::DequeSlice;

/// An iterator over borrowed elements in logical order: the `front` partition
/// walked backwards, then the `back` partition walked forwards.
pub type Iter<'a, T> = iter::Chain<iter::Rev<slice::Iter<'a, T>>, slice::Iter<'a, T>>;

/// Mutable counterpart of [`Iter`].
pub type IterMut<'a, T> = iter::Chain<iter::Rev<slice::IterMut<'a, T>>, slice::IterMut<'a, T>>;

/// A double-ended queue backed by two growable arrays.
///
/// `SplitDeque` supports amortized *O*(1) insertion and removal at both ends,
/// *O*(1) random access, and extraction of contiguous sub-ranges as
/// independently balanced [`DequeSlice`] values in time proportional to the
/// result, not the source.
///
/// # Examples
/// ```
/// use gemelli::SplitDeque;
/// let mut deque = SplitDeque::new();
/// deque.push_back(2);
/// deque.push_front(1);
/// deque.push_back(3);
/// assert_eq!(deque, [1, 2, 3]);
/// assert_eq!(deque.pop_front(), Some(1));
/// assert_eq!(deque.pop_back(), Some(3));
/// ```
///
/// # Balance
/// If either partition holds more than one element, the other partition is
/// non-empty. The only states with an empty partition are: both empty, or the
/// other side holding at most one element. Every mutating method restores
/// this before returning.
pub struct SplitDeque<T> {
    pub(crate) front: Vec<T>,
    pub(crate) back: Vec<T>,
}

impl<T> SplitDeque<T> {
    /// Creates a new, empty `SplitDeque`. Does not allocate.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque: SplitDeque<i32> = SplitDeque::new();
    /// assert!(deque.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        SplitDeque {
            front: Vec::new(),
            back: Vec::new(),
        }
    }

    /// Creates an empty `SplitDeque` with room for at least `capacity`
    /// elements split across the two partitions.
    ///
    /// Like [`reserve`](SplitDeque::reserve) this is a storage hint only; it
    /// has no observable effect beyond reducing reallocation.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque: SplitDeque<i32> = SplitDeque::with_capacity(10);
    /// assert!(deque.capacity() >= 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        SplitDeque {
            front: Vec::with_capacity(capacity / 2),
            back: Vec::with_capacity(capacity - capacity / 2),
        }
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque = SplitDeque::from([1, 2, 3]);
    /// assert_eq!(deque.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    /// Returns `true` if the deque contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::new();
    /// assert!(deque.is_empty());
    /// deque.push_back(1);
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Returns the combined spare-inclusive capacity of the two partitions.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.front.capacity() + self.back.capacity()
    }

    /// Reserves capacity for at least `additional` more elements. A storage
    /// hint: where the room ends up between the partitions is unspecified.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2]);
    /// deque.reserve(10);
    /// assert!(deque.capacity() >= 12);
    /// ```
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.back.reserve(additional);
    }

    /// Restores the balance rule after a mutation that may have drained one
    /// partition: if one side is empty while the other holds more than one
    /// element, all but one element move to the empty side. The kept element
    /// is the one nearest the non-empty side's own end, so the move is a
    /// single reversed copy.
    fn rebalance(&mut self) {
        if self.front.is_empty() && self.back.len() > 1 {
            // keep the logical last element in back
            let last = self.back.pop().unwrap();
            self.front.extend(self.back.drain(..).rev());
            self.back.push(last);
        } else if self.back.is_empty() && self.front.len() > 1 {
            // keep the logical first element in front
            let first = self.front.pop().unwrap();
            self.back.extend(self.front.drain(..).rev());
            self.front.push(first);
        }
    }

    /// Provides a reference to the element at `index`, or `None` if out of
    /// bounds. Element 0 is the front of the deque.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque = SplitDeque::from([1, 2, 3]);
    /// assert_eq!(deque.get(1), Some(&2));
    /// assert_eq!(deque.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        let f = self.front.len();
        if index < f {
            self.front.get(f - 1 - index)
        } else {
            self.back.get(index - f)
        }
    }

    /// Provides a mutable reference to the element at `index`, or `None` if
    /// out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2, 3]);
    /// *deque.get_mut(1).unwrap() += 40;
    /// assert_eq!(deque.get(1), Some(&42));
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let f = self.front.len();
        if index < f {
            self.front.get_mut(f - 1 - index)
        } else {
            self.back.get_mut(index - f)
        }
    }

    /// Provides a reference to the first element, or `None` if the deque is
    /// empty.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque = SplitDeque::from([1, 2, 3]);
    /// assert_eq!(deque.first(), Some(&1));
    /// ```
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.front.last().or_else(|| self.back.first())
    }

    /// Provides a mutable reference to the first element, or `None` if the
    /// deque is empty.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        if self.front.is_empty() {
            self.back.first_mut()
        } else {
            self.front.last_mut()
        }
    }

    /// Provides a reference to the last element, or `None` if the deque is
    /// empty.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque = SplitDeque::from([1, 2, 3]);
    /// assert_eq!(deque.last(), Some(&3));
    /// ```
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.back.last().or_else(|| self.front.first())
    }

    /// Provides a mutable reference to the last element, or `None` if the
    /// deque is empty.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        if self.back.is_empty() {
            self.front.first_mut()
        } else {
            self.back.last_mut()
        }
    }

    /// Prepends an element to the front of the deque. Amortized *O*(1).
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([2, 3]);
    /// deque.push_front(1);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.front.push(value);
        self.rebalance();
    }

    /// Appends an element to the back of the deque. Amortized *O*(1).
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2]);
    /// deque.push_back(3);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.back.push(value);
        self.rebalance();
    }

    /// Removes and returns the first element, or `None` if the deque is
    /// empty. Amortized *O*(1).
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2]);
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        // when front is empty the balance rule leaves at most one element in back
        let popped = self.front.pop().or_else(|| self.back.pop());
        self.rebalance();
        popped
    }

    /// Removes and returns the last element, or `None` if the deque is empty.
    /// Amortized *O*(1).
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2]);
    /// assert_eq!(deque.pop_back(), Some(2));
    /// assert_eq!(deque.pop_back(), Some(1));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let popped = self.back.pop().or_else(|| self.front.pop());
        self.rebalance();
        popped
    }

    /// Inserts an element at `index`, shifting everything after it towards
    /// the back. *O*(len) worst case: the insert may shift one whole
    /// partition.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 3]);
    /// deque.insert(1, 2);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(index <= self.len(), "index out of bounds");
        let f = self.front.len();
        if index < f {
            self.front.insert(f - index, value);
        } else {
            self.back.insert(index - f, value);
        }
        self.rebalance();
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it towards the front. *O*(len) worst case.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2, 3]);
    /// assert_eq!(deque.remove(1), 2);
    /// assert_eq!(deque, [1, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len(), "index out of bounds");
        let f = self.front.len();
        let removed = if index < f {
            self.front.remove(f - 1 - index)
        } else {
            self.back.remove(index - f)
        };
        self.rebalance();
        removed
    }

    /// Removes the first `count` elements.
    ///
    /// # Panics
    /// Panics if `count > len`.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2, 3, 4, 5]);
    /// deque.remove_first(3);
    /// assert_eq!(deque, [4, 5]);
    /// ```
    pub fn remove_first(&mut self, count: usize) {
        assert!(
            count <= self.len(),
            "cannot remove more elements than the deque holds"
        );
        let f = self.front.len();
        if count <= f {
            // the first `count` logical elements are the physical tail of front
            self.front.truncate(f - count);
        } else {
            self.front.clear();
            let removed = self.back.drain(..count - f);
            drop(removed);
        }
        self.rebalance();
    }

    /// Removes the last `count` elements.
    ///
    /// # Panics
    /// Panics if `count > len`.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2, 3, 4, 5]);
    /// deque.remove_last(3);
    /// assert_eq!(deque, [1, 2]);
    /// ```
    pub fn remove_last(&mut self, count: usize) {
        assert!(
            count <= self.len(),
            "cannot remove more elements than the deque holds"
        );
        let b = self.back.len();
        if count <= b {
            self.back.truncate(b - count);
        } else {
            self.back.clear();
            let removed = self.front.drain(..count - b);
            drop(removed);
        }
        self.rebalance();
    }

    /// Removes all elements. Keeps the allocated capacity of both partitions.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2, 3]);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.front.clear();
        self.back.clear();
    }

    /// Appends every element of `iter` to the back, preserving its order.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2]);
    /// deque.extend_back([3, 4]);
    /// assert_eq!(deque, [1, 2, 3, 4]);
    /// ```
    pub fn extend_back<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.back.extend(iter);
        self.rebalance();
    }

    /// Prepends every element of `iter` to the front, preserving its order:
    /// the first yielded element becomes the first element of the deque.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([3, 4]);
    /// deque.extend_front([1, 2]);
    /// assert_eq!(deque, [1, 2, 3, 4]);
    /// ```
    pub fn extend_front<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let items: Vec<T> = iter.into_iter().collect();
        self.front.extend(items.into_iter().rev());
        self.rebalance();
    }

    /// Resolves a `RangeBounds` against the current length.
    ///
    /// # Panics
    /// Panics if the range is out of order or ends past `len`.
    fn resolve_range<R: RangeBounds<usize>>(&self, range: R) -> (usize, usize) {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e + 1,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len(),
        };
        assert!(start <= end, "range start must not exceed range end");
        assert!(end <= self.len(), "range end out of bounds");
        (start, end)
    }

    /// Replaces the elements in `range` with the elements yielded by
    /// `replace_with`, which may be shorter or longer than the range.
    ///
    /// *O*(range length) for a pure truncation at the logical end;
    /// *O*(len + replacement length) otherwise, since a splice can shift a
    /// whole partition.
    ///
    /// # Panics
    /// Panics if the range is out of order or ends past `len`.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2, 3, 4, 5]);
    /// deque.replace_range(1..4, [9, 9]);
    /// assert_eq!(deque, [1, 9, 9, 5]);
    /// ```
    pub fn replace_range<R, I>(&mut self, range: R, replace_with: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        let (start, end) = self.resolve_range(range);
        let f = self.front.len();
        if end <= f {
            // the range is physical [f - end, f - start) of front, stored reversed
            let items: Vec<T> = replace_with.into_iter().collect();
            let removed = self.front.splice(f - end..f - start, items.into_iter().rev());
            drop(removed);
        } else if start >= f {
            let removed = self.back.splice(start - f..end - f, replace_with);
            drop(removed);
        } else {
            // straddling: the range covers the physical head of both partitions
            let removed = self.front.drain(..f - start);
            drop(removed);
            let removed = self.back.splice(..end - f, replace_with);
            drop(removed);
        }
        self.rebalance();
    }

    /// Removes the elements in `range`.
    ///
    /// # Panics
    /// Panics if the range is out of order or ends past `len`.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2, 3, 4, 5]);
    /// deque.remove_range(1..4);
    /// assert_eq!(deque, [1, 5]);
    /// ```
    #[inline]
    pub fn remove_range<R: RangeBounds<usize>>(&mut self, range: R) {
        self.replace_range(range, iter::empty());
    }

    /// Reverses the deque in *O*(1) by swapping the roles of the two
    /// partitions; no element is touched.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2, 3]);
    /// deque.reverse();
    /// assert_eq!(deque, [3, 2, 1]);
    /// ```
    #[inline]
    pub fn reverse(&mut self) {
        // front is stored reversed, so the swap is the whole operation
        mem::swap(&mut self.front, &mut self.back);
    }

    /// Consuming form of [`reverse`](SplitDeque::reverse).
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque = SplitDeque::from([1, 2, 3]);
    /// assert_eq!(deque.reversed(), [3, 2, 1]);
    /// ```
    #[inline]
    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }

    /// Returns an iterator over the elements in logical order: the front
    /// partition walked backwards, then the back partition forwards. Single
    /// pass; obtain a fresh iterator for another traversal.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque = SplitDeque::from([1, 2, 3]);
    /// let collected: Vec<i32> = deque.iter().copied().collect();
    /// assert_eq!(collected, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.front.iter().rev().chain(self.back.iter())
    }

    /// Returns a mutable iterator over the elements in logical order.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let mut deque = SplitDeque::from([1, 2, 3]);
    /// for element in deque.iter_mut() {
    ///     *element *= 10;
    /// }
    /// assert_eq!(deque, [10, 20, 30]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.front.iter_mut().rev().chain(self.back.iter_mut())
    }

    #[cfg(test)]
    pub(crate) fn is_balanced(&self) -> bool {
        !(self.front.is_empty() && self.back.len() > 1)
            && !(self.back.is_empty() && self.front.len() > 1)
    }
}

impl<T: Clone> SplitDeque<T> {
    /// Copies the elements in `range` into a new, independently balanced
    /// [`DequeSlice`]. Cost is proportional to the length of the *result*;
    /// the elements outside the range are never visited.
    ///
    /// The returned value shares no storage with `self`.
    ///
    /// # Panics
    /// Panics if the range is out of order or ends past `len`.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque = SplitDeque::from([1, 2, 3, 4, 5]);
    /// let middle = deque.slice(1..4);
    /// assert_eq!(middle, [2, 3, 4]);
    /// ```
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> DequeSlice<T> {
        let (start, end) = self.resolve_range(range);
        if start == end {
            return DequeSlice::from_parts(SplitDeque::new());
        }
        let f = self.front.len();
        let inner = if end <= f {
            // wholly within front: the range's last element seeds the new back
            SplitDeque {
                front: self.front[f - end + 1..f - start].to_vec(),
                back: vec![self.front[f - end].clone()],
            }
        } else if start >= f {
            // wholly within back: the range's first element seeds the new front
            SplitDeque {
                front: vec![self.back[start - f].clone()],
                back: self.back[start - f + 1..end - f].to_vec(),
            }
        } else {
            // straddling: both copied spans are non-empty, balanced by construction
            SplitDeque {
                front: self.front[..f - start].to_vec(),
                back: self.back[..end - f].to_vec(),
            }
        };
        DequeSlice::from_parts(inner)
    }

    /// The first `count` elements as a [`DequeSlice`].
    ///
    /// # Panics
    /// Panics if `count > len`.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque = SplitDeque::from([1, 2, 3, 4]);
    /// assert_eq!(deque.prefix(2), [1, 2]);
    /// ```
    #[inline]
    pub fn prefix(&self, count: usize) -> DequeSlice<T> {
        assert!(
            count <= self.len(),
            "cannot take more elements than the deque holds"
        );
        self.slice(..count)
    }

    /// The last `count` elements as a [`DequeSlice`].
    ///
    /// # Panics
    /// Panics if `count > len`.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque = SplitDeque::from([1, 2, 3, 4]);
    /// assert_eq!(deque.suffix(2), [3, 4]);
    /// ```
    #[inline]
    pub fn suffix(&self, count: usize) -> DequeSlice<T> {
        assert!(
            count <= self.len(),
            "cannot take more elements than the deque holds"
        );
        self.slice(self.len() - count..)
    }

    /// Everything but the first `count` elements, as a [`DequeSlice`].
    ///
    /// # Panics
    /// Panics if `count > len`.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque = SplitDeque::from([1, 2, 3, 4]);
    /// assert_eq!(deque.drop_first(1), [2, 3, 4]);
    /// ```
    #[inline]
    pub fn drop_first(&self, count: usize) -> DequeSlice<T> {
        assert!(
            count <= self.len(),
            "cannot drop more elements than the deque holds"
        );
        self.slice(count..)
    }

    /// Everything but the last `count` elements, as a [`DequeSlice`].
    ///
    /// # Panics
    /// Panics if `count > len`.
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque = SplitDeque::from([1, 2, 3, 4]);
    /// assert_eq!(deque.drop_last(1), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn drop_last(&self, count: usize) -> DequeSlice<T> {
        assert!(
            count <= self.len(),
            "cannot drop more elements than the deque holds"
        );
        self.slice(..self.len() - count)
    }

    /// Splits the deque into the segments between elements matching
    /// `is_separator`, in order. Separator elements are not part of any
    /// segment and empty segments are kept, like [`slice::split`].
    ///
    /// # Examples
    /// ```
    /// # use gemelli::SplitDeque;
    /// let deque = SplitDeque::from([1, 2, 0, 3, 0, 4]);
    /// let segments = deque.split(|&x| x == 0);
    /// assert_eq!(segments.len(), 3);
    /// assert_eq!(segments[0], [1, 2]);
    /// assert_eq!(segments[1], [3]);
    /// assert_eq!(segments[2], [4]);
    /// ```
    pub fn split<F>(&self, mut is_separator: F) -> Vec<DequeSlice<T>>
    where
        F: FnMut(&T) -> bool,
    {
        let mut segments = Vec::new();
        let mut segment_start = 0;
        for (i, element) in self.iter().enumerate() {
            if is_separator(element) {
                segments.push(self.slice(segment_start..i));
                segment_start = i + 1;
            }
        }
        segments.push(self.slice(segment_start..self.len()));
        segments
    }
}

impl<T> Default for SplitDeque<T> {
    #[inline]
    fn default() -> Self {
        SplitDeque::new()
    }
}

impl<T: Clone> Clone for SplitDeque<T> {
    fn clone(&self) -> Self {
        SplitDeque {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

/// Renders both partitions in logical order around the boundary marker, e.g.
/// `[1, 2 | 3, 4]`. Intended for diagnostics; the marker position exposes the
/// current balance.
impl<T: Debug> Debug for SplitDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.front.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", element)?;
        }
        f.write_str(" | ")?;
        for (i, element) in self.back.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", element)?;
        }
        f.write_str("]")
    }
}

impl<T> Index<usize> for SplitDeque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(element) => element,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl<T> IndexMut<usize> for SplitDeque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(element) => element,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl<T> From<Vec<T>> for SplitDeque<T> {
    /// Splits the vector at its midpoint: the first half is stored reversed
    /// into the front partition, the second half forward into the back, so
    /// the result starts out balanced.
    fn from(mut vec: Vec<T>) -> Self {
        let back = vec.split_off(vec.len() / 2);
        vec.reverse();
        SplitDeque { front: vec, back }
    }
}

impl<T, const N: usize> From<[T; N]> for SplitDeque<T> {
    fn from(array: [T; N]) -> Self {
        SplitDeque::from(Vec::from(array))
    }
}

impl<T> FromIterator<T> for SplitDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SplitDeque::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for SplitDeque<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_back(iter);
    }
}

/// A consuming iterator over a [`SplitDeque`], created by
/// [`into_iter`](IntoIterator::into_iter).
pub struct IntoIter<T> {
    deque: SplitDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.deque.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SplitDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a SplitDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SplitDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for SplitDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<[T]> for SplitDeque<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a, T: PartialEq> PartialEq<&'a [T]> for SplitDeque<T> {
    fn eq(&self, other: &&'a [T]) -> bool {
        *self == **other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SplitDeque<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for SplitDeque<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: Eq> Eq for SplitDeque<T> {}

impl<T: PartialOrd> PartialOrd for SplitDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for SplitDeque<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for SplitDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self.iter() {
            element.hash(state);
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SplitDeque<T> {
    /// Serializes as a plain sequence in logical order.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for SplitDeque<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let vec = Vec::<T>::deserialize(deserializer)?;
        Ok(SplitDeque::from(vec))
    }
}
