//! The [`Comparator`] capability and its stock implementations.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// A three-way comparison over values of type `T`.
///
/// Every ordered container in this crate is parameterised by a comparator
/// rather than by `T: Ord`, so one value type can be ordered several ways and
/// coordinate types that have no natural order can still be stored.
///
/// Implementations must be a total order: reflexive, antisymmetric and
/// transitive. This is not checked; a comparator that violates it leaves the
/// containers in an unspecified (but memory-safe) state.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator:
///
/// ```
/// use std::cmp::Ordering;
/// use tessera_core::Comparator;
///
/// let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab".into(), &"cd".into()), Ordering::Equal);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compare `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders values by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Lifts a comparator over `T::Target` to any smart pointer `T`.
///
/// Used to order shared handles (`Arc<C>`, `Box<C>`) by the value they point
/// at, which is how canonical cells are kept in a sorted cache.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByDeref<C>(pub C);

impl<C> ByDeref<C> {
    /// The wrapped comparator.
    pub fn inner(&self) -> &C {
        &self.0
    }
}

impl<C: fmt::Debug> fmt::Debug for ByDeref<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByDeref").field(&self.0).finish()
    }
}

impl<T, C> Comparator<T> for ByDeref<C>
where
    T: Deref,
    C: Comparator<T::Target>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(&**a, &**b)
    }
}
