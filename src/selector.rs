//! The capacity-N selection facade.

use core::marker::PhantomData;
use std::fmt::{Debug, Formatter, Result};

use crate::error::SelectError;
use crate::heap::{AnyBoundedHeap, BoundedMaxHeap, Insertion};
use crate::order::{Natural, Order};

/// Keeps the N smallest elements (under its order) of everything inserted.
///
/// Wraps any [`AnyBoundedHeap`] backend; the default is the allocated
/// [`BoundedMaxHeap`] with the elements' natural order.
///
/// # Behavior
/// * **Queries:** `best_n(0)` and `best_n_ordered(0)` return `None`. Larger
///   requests are clamped to [`count`](Self::count).
/// * **Largest-N:** build the selector with [`Reversed`](crate::Reversed) to
///   keep the largest elements instead; the ordered view is then largest-first.
///
/// ```rust
/// use bounded_select::Selector;
///
/// let mut selector = Selector::new(3).unwrap();
/// for item in [5, 1, 9, 2, 7, 0] {
///     selector.insert(item);
/// }
/// assert_eq!(selector.count(), 3);
/// assert_eq!(selector.best_n_ordered(3), Some(&[0, 1, 2][..]));
/// ```
pub struct Selector<T, H = BoundedMaxHeap<T, Natural>> {
    heap: H,
    _marker: PhantomData<T>,
}

impl<T: Clone + PartialOrd> Selector<T> {
    /// Creates a selector retaining at most `capacity` elements.
    pub fn new(capacity: usize) -> core::result::Result<Self, SelectError> {
        Self::with_order(capacity, Natural)
    }

    /// Builds a selector of `capacity` and feeds it every element of `items`.
    pub fn select<I>(capacity: usize, items: I) -> core::result::Result<Self, SelectError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut selector = Self::new(capacity)?;
        selector.extend(items);
        Ok(selector)
    }
}

impl<T: Clone, O: Order<T>> Selector<T, BoundedMaxHeap<T, O>> {
    /// Creates a selector ordered by `order`.
    pub fn with_order(capacity: usize, order: O) -> core::result::Result<Self, SelectError> {
        let heap = BoundedMaxHeap::with_order(capacity, order)?;
        Ok(Self::from_heap(heap))
    }
}

impl<T, H: AnyBoundedHeap<T>> Selector<T, H> {
    /// Wraps an existing heap. Elements it already holds stay retained.
    pub fn from_heap(heap: H) -> Self {
        Self {
            heap,
            _marker: PhantomData,
        }
    }

    pub fn insert(&mut self, item: T) -> Insertion<T> {
        self.heap.insert(item)
    }

    /// Up to `n` retained elements in heap order, `None` for `n == 0`.
    pub fn best_n(&self, n: usize) -> Option<&[T]> {
        if n == 0 {
            return None;
        }
        Some(self.heap.best_n(n))
    }

    /// Up to `n` retained elements in ascending order, `None` for `n == 0`.
    pub fn best_n_ordered(&mut self, n: usize) -> Option<&[T]> {
        if n == 0 {
            return None;
        }
        Some(self.heap.best_n_ordered(n))
    }

    /// Number of elements currently retained.
    pub fn count(&self) -> usize {
        self.heap.len()
    }

    /// The N this selector was built with.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn heap(&self) -> &H {
        &self.heap
    }

    pub fn into_heap(self) -> H {
        self.heap
    }
}

impl<T, H: AnyBoundedHeap<T>> Extend<T> for Selector<T, H> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.heap.insert(item);
        }
    }
}

impl<T, H: Clone> Clone for Selector<T, H> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, H: AnyBoundedHeap<T> + Debug> Debug for Selector<T, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Selector")
            .field("capacity", &self.heap.capacity())
            .field("heap", &self.heap)
            .finish()
    }
}
