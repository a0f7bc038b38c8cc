#![cfg(feature = "heapless")]
//! Inline bounded heap: the allocation-free counterpart of [`BoundedMaxHeap`](crate::BoundedMaxHeap).
//!
//! The capacity is the const generic `N`, so both buffers live inside the
//! struct and construction cannot fail at runtime.

use core::mem;
use heapless::Vec as HeaplessVec;
use log::trace;
use std::fmt::{Debug, Formatter, Result};

use crate::heap::{AnyBoundedHeap, Insertion, build_heap, sift_down, sort_heap};
use crate::order::{Natural, Order};

/// A **stack-allocated** bounded max-heap backed by two `heapless::Vec<T, N>`.
///
/// Semantics match [`BoundedMaxHeap`](crate::BoundedMaxHeap): it keeps the
/// `N` smallest elements offered, evicting through the root once full, and
/// materializes the ascending view into a separate buffer.
///
/// # Overflow protocol
/// `heapless::Vec::push` hands the element back when the working buffer is
/// full; that element then takes the eviction path.
pub struct HeaplessBoundedMaxHeap<T, const N: usize, O = Natural> {
    heap: HeaplessVec<T, N>,
    sorted: HeaplessVec<T, N>,
    heapified: bool,
    sorted_valid: bool,
    order: O,
}

impl<T, const N: usize, O: Order<T> + Default> HeaplessBoundedMaxHeap<T, N, O> {
    pub fn new() -> Self {
        Self::with_order(O::default())
    }
}

impl<T, const N: usize, O: Order<T>> HeaplessBoundedMaxHeap<T, N, O> {
    pub fn with_order(order: O) -> Self {
        const {
            assert!(N > 0, "HeaplessBoundedMaxHeap needs a capacity of at least one");
        }
        Self {
            heap: HeaplessVec::new(),
            sorted: HeaplessVec::new(),
            heapified: false,
            sorted_valid: false,
            order,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_heapified(&self) -> bool {
        self.heapified
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted_valid
    }

    pub fn peek_threshold(&mut self) -> Option<&T> {
        self.ensure_heapified();
        self.heap.first()
    }

    pub fn best_n(&self, n: usize) -> &[T] {
        &self.heap[..n.min(self.heap.len())]
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.heap.iter()
    }

    pub fn insert(&mut self, item: T) -> Insertion<T> {
        let item = match self.heap.push(item) {
            Ok(()) => {
                self.heapified = false;
                self.sorted_valid = false;
                return Insertion::Appended;
            }
            Err(item) => item,
        };

        self.ensure_heapified();
        if self.order.less_than(&self.heap[0], &item) {
            return Insertion::Discarded(item);
        }

        let evicted = mem::replace(&mut self.heap[0], item);
        sift_down(&mut self.heap, 0, N, &self.order);
        self.sorted_valid = false;
        Insertion::Replaced(evicted)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.sorted.clear();
        self.heapified = false;
        self.sorted_valid = false;
    }

    fn ensure_heapified(&mut self) {
        if !self.heapified {
            trace!("building inline heap order over {} elements", self.heap.len());
            build_heap(&mut self.heap, &self.order);
            self.heapified = true;
        }
    }
}

impl<T: Clone, const N: usize, O: Order<T>> HeaplessBoundedMaxHeap<T, N, O> {
    pub fn best_n_ordered(&mut self, n: usize) -> &[T] {
        if !self.sorted_valid {
            trace!("sorting {} inline elements", self.heap.len());
            self.sorted.clone_from(&self.heap);
            if !self.heapified {
                build_heap(&mut self.sorted, &self.order);
            }
            sort_heap(&mut self.sorted, &self.order);
            self.sorted_valid = true;
        }
        &self.sorted[..n.min(self.sorted.len())]
    }
}

impl<T: Clone, const N: usize, O: Order<T>> AnyBoundedHeap<T> for HeaplessBoundedMaxHeap<T, N, O> {
    fn len(&self) -> usize {
        self.len()
    }
    fn capacity(&self) -> usize {
        N
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

impl<T, const N: usize, O: Order<T> + Default> Default for HeaplessBoundedMaxHeap<T, N, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize, O: Clone> Clone for HeaplessBoundedMaxHeap<T, N, O> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
            sorted: self.sorted.clone(),
            heapified: self.heapified,
            sorted_valid: self.sorted_valid,
            order: self.order.clone(),
        }
    }
}

impl<T: Debug, const N: usize, O> Debug for HeaplessBoundedMaxHeap<T, N, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("HeaplessBoundedMaxHeap")
            .field("capacity", &N)
            .field("heap", &self.heap.as_slice())
            .field("heapified", &self.heapified)
            .finish()
    }
}

impl<T, const N: usize, O: Order<T>> Extend<T> for HeaplessBoundedMaxHeap<T, N, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
