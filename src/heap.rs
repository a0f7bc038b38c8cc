use core::mem;
use std::fmt::{Debug, Formatter, Result};

use log::{trace, warn};

use crate::error::SelectError;
use crate::order::{Natural, Order};

/// Outcome of inserting an element into a bounded heap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion<T> {
    /// The heap had room; the element was appended.
    Appended,
    /// The heap was full; the element replaced the retained maximum, which is returned.
    Replaced(T),
    /// The heap was full and the element was greater than every retained one; it is handed back.
    Discarded(T),
}

impl<T> Insertion<T> {
    /// Returns `true` if the inserted element is now part of the retained set.
    pub fn is_retained(&self) -> bool {
        !matches!(self, Insertion::Discarded(_))
    }

    /// Returns the element that left the structure, if any.
    pub fn into_evicted(self) -> Option<T> {
        match self {
            Insertion::Appended => None,
            Insertion::Replaced(item) | Insertion::Discarded(item) => Some(item),
        }
    }
}

/// A trait for abstraction over the bounded heap backends (allocated, inline).
pub trait AnyBoundedHeap<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// The fixed maximum number of retained elements.
    fn capacity(&self) -> usize;
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
    fn insert(&mut self, item: T) -> Insertion<T>;
    /// Up to `n` retained elements in heap order.
    fn best_n(&self, n: usize) -> &[T];
    /// Up to `n` retained elements in ascending order.
    fn best_n_ordered(&mut self, n: usize) -> &[T];
    fn clear(&mut self);
}

/// Restores the max-heap property for the subtree rooted at `position`,
/// considering only `slice[..boundary]`.
///
/// Everything below `position` must already be heap-ordered. The element at
/// `position` walks down, swapping with the larger child while it is less than
/// that child. When both children compare equal the left one is taken; the
/// right one wins only when `left < right`.
///
/// `boundary` is clamped to `slice.len()`; a `position` at or past the
/// boundary is a no-op.
///
/// ```rust
/// use bounded_select::{Natural, sift_down};
///
/// let mut v = [1, 9, 5, 3, 4];
/// sift_down(&mut v, 0, 5, &Natural);
/// assert_eq!(v, [9, 4, 5, 3, 1]);
/// ```
pub fn sift_down<T, O>(slice: &mut [T], mut position: usize, boundary: usize, order: &O)
where
    O: Order<T> + ?Sized,
{
    let boundary = boundary.min(slice.len());
    if position >= boundary {
        return;
    }

    let mut child = 2 * position + 1;
    while child < boundary {
        if child + 1 < boundary && order.less_than(&slice[child], &slice[child + 1]) {
            child += 1;
        }
        if !order.less_than(&slice[position], &slice[child]) {
            break;
        }
        slice.swap(position, child);
        position = child;
        child = 2 * position + 1;
    }
}

/// Arranges the whole slice in max-heap order in O(len).
pub fn build_heap<T, O>(slice: &mut [T], order: &O)
where
    O: Order<T> + ?Sized,
{
    let len = slice.len();
    for i in (0..len / 2).rev() {
        sift_down(slice, i, len, order);
    }
}

/// Turns a max-heap ordered slice into ascending order by repeatedly moving
/// the root behind a shrinking boundary.
pub(crate) fn sort_heap<T, O>(slice: &mut [T], order: &O)
where
    O: Order<T> + ?Sized,
{
    for end in (1..slice.len()).rev() {
        slice.swap(0, end);
        sift_down(slice, 0, end, order);
    }
}

#[cfg(test)]
pub(crate) fn is_heap<T, O>(slice: &[T], order: &O) -> bool
where
    O: Order<T> + ?Sized,
{
    (1..slice.len()).all(|i| !order.less_than(&slice[(i - 1) / 2], &slice[i]))
}

/// A binary max-heap with a fixed capacity that keeps the `capacity` smallest
/// elements it has been offered.
///
/// # Behavior
/// * **Filling:** While below capacity, inserts are plain appends; heap order
///   is established lazily on the first insert into a full heap.
/// * **Eviction:** Once full, the root (the largest retained element) is the
///   threshold. Anything greater is discarded, anything else replaces the root.
/// * **Sorted view:** The ascending view is materialized into a second buffer,
///   so the working heap is never reordered by a sort. It is cached until the
///   next change of the retained set.
///
/// Both buffers are allocated once with exactly `capacity` slots and never grow.
///
/// # Pseudo-code Implementation
///
/// ```text
/// insert(item):
///     if len < capacity:
///         heap.push(item); heapified = false; sorted = false
///         return Appended
///     if !heapified: build_heap(heap)
///     if heap[0] < item: return Discarded(item)
///     old = replace(heap[0], item)
///     sift_down(heap, 0, len); sorted = false
///     return Replaced(old)
///
/// best_n_ordered(n):
///     if !sorted:
///         scratch = copy(heap)
///         if !heapified: build_heap(scratch)
///         sort_heap(scratch); sorted = true
///     return scratch[..min(n, len)]
/// ```
pub struct BoundedMaxHeap<T, O = Natural> {
    heap: Vec<T>,
    sorted: Vec<T>,
    capacity: usize,
    heapified: bool,
    sorted_valid: bool,
    order: O,
}

impl<T, O: Order<T> + Default> BoundedMaxHeap<T, O> {
    /// Creates an empty heap holding at most `capacity` elements.
    pub fn new(capacity: usize) -> core::result::Result<Self, SelectError> {
        Self::with_order(capacity, O::default())
    }
}

impl<T, O: Order<T>> BoundedMaxHeap<T, O> {
    /// Creates an empty heap ordered by `order`.
    pub fn with_order(capacity: usize, order: O) -> core::result::Result<Self, SelectError> {
        if capacity == 0 {
            warn!("rejecting bounded heap with capacity {capacity}");
            return Err(SelectError::InvalidCapacity { capacity });
        }
        Ok(Self {
            heap: Vec::with_capacity(capacity),
            sorted: Vec::with_capacity(capacity),
            capacity,
            heapified: false,
            sorted_valid: false,
            order,
        })
    }

    // --- Inspection ---

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Whether the working buffer currently satisfies the max-heap invariant.
    pub fn is_heapified(&self) -> bool {
        self.heapified
    }

    /// Whether the cached ascending view matches the retained elements.
    pub fn is_sorted(&self) -> bool {
        self.sorted_valid
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the largest retained element, the eviction threshold once full.
    /// Establishes heap order first if needed.
    pub fn peek_threshold(&mut self) -> Option<&T> {
        self.ensure_heapified();
        self.heap.first()
    }

    /// Up to `n` retained elements in heap order.
    pub fn best_n(&self, n: usize) -> &[T] {
        &self.heap[..n.min(self.heap.len())]
    }

    /// Iterates the retained elements in heap order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.heap.iter()
    }

    // --- Modification ---

    /// Offers `item` to the heap.
    pub fn insert(&mut self, item: T) -> Insertion<T> {
        if self.heap.len() < self.capacity {
            self.heap.push(item);
            self.heapified = false;
            self.sorted_valid = false;
            return Insertion::Appended;
        }

        self.ensure_heapified();
        if self.order.less_than(&self.heap[0], &item) {
            return Insertion::Discarded(item);
        }

        let evicted = mem::replace(&mut self.heap[0], item);
        let len = self.heap.len();
        sift_down(&mut self.heap, 0, len, &self.order);
        self.sorted_valid = false;
        Insertion::Replaced(evicted)
    }

    /// Drops every retained element. The capacity and allocations are kept.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.sorted.clear();
        self.heapified = false;
        self.sorted_valid = false;
    }

    // --- Consumption ---

    /// Consumes the heap and returns the retained elements in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.heap
    }

    /// Consumes the heap and returns the retained elements in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut heap = self.heap;
        if !self.heapified {
            build_heap(&mut heap, &self.order);
        }
        sort_heap(&mut heap, &self.order);
        heap
    }

    // --- Internals ---

    fn ensure_heapified(&mut self) {
        if !self.heapified {
            trace!("building heap order over {} elements", self.heap.len());
            build_heap(&mut self.heap, &self.order);
            self.heapified = true;
        }
    }
}

impl<T: Clone, O: Order<T>> BoundedMaxHeap<T, O> {
    /// Up to `n` retained elements in ascending order.
    ///
    /// The sort pass runs on a copy, so [`best_n`](Self::best_n) and
    /// [`is_heapified`](Self::is_heapified) are unaffected.
    pub fn best_n_ordered(&mut self, n: usize) -> &[T] {
        if !self.sorted_valid {
            self.heap_sort();
        }
        &self.sorted[..n.min(self.sorted.len())]
    }

    fn heap_sort(&mut self) {
        trace!("sorting {} retained elements", self.heap.len());
        self.sorted.clear();
        self.sorted.extend_from_slice(&self.heap);
        if !self.heapified {
            build_heap(&mut self.sorted, &self.order);
        }
        sort_heap(&mut self.sorted, &self.order);
        self.sorted_valid = true;
    }
}

impl<T: Clone, O: Order<T>> AnyBoundedHeap<T> for BoundedMaxHeap<T, O> {
    fn len(&self) -> usize {
        self.len()
    }
    fn capacity(&self) -> usize {
        self.capacity()
    }
    fn insert(&mut self, item: T) -> Insertion<T> {
        self.insert(item)
    }
    fn best_n(&self, n: usize) -> &[T] {
        self.best_n(n)
    }
    fn best_n_ordered(&mut self, n: usize) -> &[T] {
        self.best_n_ordered(n)
    }
    fn clear(&mut self) {
        self.clear();
    }
}

// --- Trait Implementations ---

impl<T: Clone, O: Clone> Clone for BoundedMaxHeap<T, O> {
    fn clone(&self) -> Self {
        let mut heap = Vec::with_capacity(self.capacity);
        heap.extend_from_slice(&self.heap);
        let mut sorted = Vec::with_capacity(self.capacity);
        sorted.extend_from_slice(&self.sorted);
        Self {
            heap,
            sorted,
            capacity: self.capacity,
            heapified: self.heapified,
            sorted_valid: self.sorted_valid,
            order: self.order.clone(),
        }
    }
}

impl<T: Debug, O> Debug for BoundedMaxHeap<T, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("BoundedMaxHeap")
            .field("capacity", &self.capacity)
            .field("heap", &self.heap)
            .field("heapified", &self.heapified)
            .finish()
    }
}

impl<T, O: Order<T>> Extend<T> for BoundedMaxHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T, O> IntoIterator for &'a BoundedMaxHeap<T, O> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.heap.iter()
    }
}

// --- Tests ---
