//! # Bounded Select
//!
//! Keeps the N extremal elements of an arbitrarily long stream in O(N) memory
//! and O(M log N) time, and hands them back either in heap order or fully
//! sorted on demand.
//!
//! ## Key Features
//!
//! * **Fixed footprint:** both backing buffers are sized once at construction and never grow.
//! * **Pluggable ordering:** anything implementing [`Order`] decides what "smallest" means;
//!   closures, [`ByKey`] and [`Reversed`] (largest-N) are provided.
//! * **Non-destructive sort:** the ascending view is built in a scratch buffer and cached,
//!   so heap-order and sorted reads never invalidate each other.
//! * **Inline backend:** with the `heapless` feature (on by default),
//!   [`HeaplessBoundedMaxHeap`] keeps everything inside the struct.
//!
//! ## Examples
//!
//! ### Smallest N
//!
//! ```rust
//! use bounded_select::Selector;
//!
//! let mut selector = Selector::select(3, [5, 1, 9, 2, 7, 0]).unwrap();
//! assert_eq!(selector.count(), 3);
//! assert_eq!(selector.best_n_ordered(3), Some(&[0, 1, 2][..]));
//!
//! // A zero-length request is rejected, a long one is clamped.
//! assert_eq!(selector.best_n(0), None);
//! assert_eq!(selector.best_n(10).map(|s| s.len()), Some(3));
//! ```
//!
//! ### Largest N
//!
//! ```rust
//! use bounded_select::{Natural, Reversed, Selector};
//!
//! let mut selector = Selector::with_order(2, Reversed(Natural)).unwrap();
//! selector.extend([3.5, 9.0, -1.0, 4.25]);
//! assert_eq!(selector.best_n_ordered(2), Some(&[9.0, 4.25][..]));
//! ```
//!
//! ### Inline storage
//!
//! ```rust
//! # #[cfg(feature = "heapless")]
//! # {
//! use bounded_select::{HeaplessBoundedMaxHeap, Selector};
//!
//! let mut selector = Selector::from_heap(HeaplessBoundedMaxHeap::<u16, 4>::new());
//! selector.extend([40, 10, 30, 20, 50, 0]);
//! assert_eq!(selector.best_n_ordered(4), Some(&[0, 10, 20, 30][..]));
//! # }
//! ```

// --- Module Declarations ---

pub mod error;
pub mod heap;
pub mod heapless_heap;
pub mod order;
pub mod selector;

// --- Re-exports ---

pub use error::SelectError;
pub use heap::{AnyBoundedHeap, BoundedMaxHeap, Insertion, build_heap, sift_down};
#[cfg(feature = "heapless")]
pub use heapless_heap::HeaplessBoundedMaxHeap;
pub use order::{ByKey, Natural, Order, Reversed};
pub use selector::Selector;
