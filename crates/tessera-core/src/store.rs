//! [`OrderedStore`]: a strictly ordered sequence with canonicalizing insert.

use crate::comparator::{Comparator, NaturalOrder};
use std::cmp::Ordering;
use std::slice;

/// A strictly ascending sequence of values under a caller-supplied
/// [`Comparator`].
///
/// No two stored elements compare equal. The element that was stored first
/// wins: [`unify`](Self::unify) hands back the resident element when an
/// equivalent one is already present, which is what makes the store a
/// canonicalizing cache. Store `Arc`s (with [`ByDeref`](crate::ByDeref)) when
/// callers need to observe identity.
///
/// Lookups are binary searches, O(log n). Inserts and removals shift the
/// backing `Vec`, O(n); appending above the current maximum is O(1)
/// amortized because the search short-circuits at both ends.
///
/// # Examples
///
/// ```
/// use tessera_core::{NaturalOrder, OrderedStore};
///
/// let mut store = OrderedStore::new(NaturalOrder);
/// store.insert(5);
/// store.insert(1);
/// store.insert(3);
/// assert!(store.contains(&3));
/// assert_eq!(store.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
/// ```
#[derive(Clone, Debug)]
pub struct OrderedStore<T, C = NaturalOrder> {
    comparator: C,
    elements: Vec<T>,
}

impl<T, C: Default> Default for OrderedStore<T, C> {
    fn default() -> Self {
        Self {
            comparator: C::default(),
            elements: Vec::new(),
        }
    }
}

impl<T, C> OrderedStore<T, C> {
    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the store holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The comparator that orders this store.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Element at `index` in ascending order.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Smallest element.
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Largest element.
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Read-only view of the backing sequence, ascending.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Drop every element, keeping the comparator and allocation.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Remove the element at ascending `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.elements.len()).then(|| self.elements.remove(index))
    }

    /// Consume the store, returning the ascending backing `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Binary search driven by a seek closure.
    ///
    /// `seek(element)` must report how the sought value orders against
    /// `element` (`Less` if the sought value belongs before it). Returns
    /// `Ok(index)` of the equivalent element, or `Err(index)` where the
    /// sought value would be inserted.
    ///
    /// The ends are tested before bisecting, so values below the minimum or
    /// at/above the maximum resolve in at most two comparisons. Monotonically
    /// growing sequences hit the upper short-circuit on every insert.
    pub fn search_by<F>(&self, mut seek: F) -> Result<usize, usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        let elements = &self.elements;
        let Some(last) = elements.len().checked_sub(1) else {
            return Err(0);
        };
        match seek(&elements[0]) {
            Ordering::Less => return Err(0),
            Ordering::Equal => return Ok(0),
            Ordering::Greater => {}
        }
        match seek(&elements[last]) {
            Ordering::Equal => return Ok(last),
            Ordering::Greater => return Err(elements.len()),
            Ordering::Less => {}
        }

        // Invariant: elements[low] < sought < elements[high].
        let (mut low, mut high) = (0, last);
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            match seek(&elements[mid]) {
                Ordering::Less => high = mid,
                Ordering::Greater => low = mid,
                Ordering::Equal => return Ok(mid),
            }
        }
        Err(high)
    }
}

impl<T, C: Comparator<T>> OrderedStore<T, C> {
    /// Create an empty store ordered by `comparator`.
    pub fn new(comparator: C) -> Self {
        Self {
            comparator,
            elements: Vec::new(),
        }
    }

    /// Create an empty store with room for `capacity` elements.
    pub fn with_capacity(comparator: C, capacity: usize) -> Self {
        Self {
            comparator,
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Build a store from arbitrary elements. Later duplicates are dropped.
    pub fn from_elements<I>(comparator: C, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut store = Self::new(comparator);
        store.extend(elements);
        store
    }

    /// `Ok(index)` of the element equivalent to `value`, or `Err(index)`
    /// where it would be inserted.
    pub fn search(&self, value: &T) -> Result<usize, usize> {
        let comparator = &self.comparator;
        self.search_by(|element| comparator.compare(value, element))
    }

    /// Whether an element equivalent to `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    /// The stored element equivalent to `value`, if any.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.search(value).ok().map(|index| &self.elements[index])
    }

    /// Current ascending index of the element equivalent to `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.search(value).ok()
    }

    /// Return the stored element equivalent to `value`, inserting `value`
    /// first if there is none.
    ///
    /// On a hit the store is not touched and `value` is dropped, so every
    /// call with an equivalent input yields the same resident element.
    pub fn unify(&mut self, value: T) -> &T {
        let index = match self.search(&value) {
            Ok(index) => index,
            Err(index) => {
                self.elements.insert(index, value);
                index
            }
        };
        &self.elements[index]
    }

    /// Insert `value` if no equivalent element is stored. Returns `true` if
    /// it was inserted.
    pub fn insert(&mut self, value: T) -> bool {
        match self.search(&value) {
            Ok(_) => false,
            Err(index) => {
                self.elements.insert(index, value);
                true
            }
        }
    }

    /// Remove and return the element equivalent to `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.search(value)
            .ok()
            .map(|index| self.elements.remove(index))
    }
}

impl<T, C: Comparator<T>> Extend<T> for OrderedStore<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedStore<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(NaturalOrder, iter)
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedStore<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T, C> IntoIterator for OrderedStore<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
