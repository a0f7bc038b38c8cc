//! The strict ordering capability used by every structure in this crate.
//!
//! Elements are never inspected directly. All decisions (heap order, eviction,
//! sorting) go through [`Order::less_than`], which must behave as a strict weak
//! order: irreflexive, asymmetric and transitive.

/// A strict "less than" comparison over `T`.
///
/// Any `Fn(&T, &T) -> bool` closure is an `Order<T>`:
///
/// ```rust
/// use bounded_select::Selector;
///
/// // Retain the three longest words.
/// let mut selector = Selector::with_order(3, |a: &&str, b: &&str| a.len() > b.len()).unwrap();
/// for word in ["a", "abcd", "ab", "abcdef", "abc"] {
///     selector.insert(word);
/// }
/// assert_eq!(selector.best_n_ordered(3), Some(&["abcdef", "abcd", "abc"][..]));
/// ```
pub trait Order<T: ?Sized> {
    /// Returns `true` if `a` is strictly less than `b`.
    fn less_than(&self, a: &T, b: &T) -> bool;
}

/// The element type's own `<`.
///
/// For floating point values a `NaN` breaks the strict weak order; the
/// structures stay memory safe but the retained set is unspecified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: PartialOrd + ?Sized> Order<T> for Natural {
    #[inline]
    fn less_than(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Inverts an inner order.
///
/// A selector keeps the N smallest elements under its order, so
/// `Reversed<Natural>` keeps the N largest and reports them largest-first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<O = Natural>(pub O);

impl<T: ?Sized, O: Order<T>> Order<T> for Reversed<O> {
    #[inline]
    fn less_than(&self, a: &T, b: &T) -> bool {
        self.0.less_than(b, a)
    }
}

/// Orders elements by a key extracted from each of them.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Order<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    #[inline]
    fn less_than(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}

impl<T: ?Sized, F> Order<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less_than(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
