//! [`OrderedMap`]: key/value pairs over one [`OrderedStore`], with
//! wildcard queries.
//!
//! Entries are ordered by key and then by value. A lookup builds a query
//! pair whose sides are [`Slot`]s; a [`Slot::Any`] side compares equal to
//! anything, so `(Exact(key), Any)` lands on the entry for `key` whatever
//! its value. Stored entries are plain `(K, V)` tuples, so a wildcard can
//! never end up in the map.

use crate::comparator::{Comparator, NaturalOrder};
use crate::store::OrderedStore;
use std::cmp::Ordering;

/// One side of a query pair: a concrete value or "match anything".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    /// Compare against this value.
    Exact(T),
    /// Compare equal to every value.
    Any,
}

impl<T> Slot<T> {
    /// Borrow the contents.
    pub fn as_ref(&self) -> Slot<&T> {
        match self {
            Self::Exact(value) => Slot::Exact(value),
            Self::Any => Slot::Any,
        }
    }

    /// Whether this is the wildcard.
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

/// Product order over `(key, value)` pairs with wildcard support.
///
/// Keys are compared first; on a key tie (or a wildcard key) the values
/// decide, unless either value is a wildcard.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntryOrder<KC, VC> {
    keys: KC,
    values: VC,
}

impl<KC, VC> EntryOrder<KC, VC> {
    /// Combine a key comparator and a value comparator.
    pub fn new(keys: KC, values: VC) -> Self {
        Self { keys, values }
    }

    /// The key comparator.
    pub fn keys(&self) -> &KC {
        &self.keys
    }

    /// The value comparator.
    pub fn values(&self) -> &VC {
        &self.values
    }

    /// Compare two query pairs.
    pub fn compare_slots<K, V>(
        &self,
        (a_key, a_value): (Slot<&K>, Slot<&V>),
        (b_key, b_value): (Slot<&K>, Slot<&V>),
    ) -> Ordering
    where
        KC: Comparator<K>,
        VC: Comparator<V>,
    {
        let values = || match (a_value, b_value) {
            (Slot::Exact(a), Slot::Exact(b)) => self.values.compare(a, b),
            _ => Ordering::Equal,
        };
        match (a_key, b_key) {
            (Slot::Exact(a), Slot::Exact(b)) => self.keys.compare(a, b).then_with(values),
            _ => values(),
        }
    }
}

impl<K, V, KC, VC> Comparator<(K, V)> for EntryOrder<KC, VC>
where
    KC: Comparator<K>,
    VC: Comparator<V>,
{
    fn compare(&self, a: &(K, V), b: &(K, V)) -> Ordering {
        self.compare_slots(
            (Slot::Exact(&a.0), Slot::Exact(&a.1)),
            (Slot::Exact(&b.0), Slot::Exact(&b.1)),
        )
    }
}

/// A sorted associative array with at most one entry per key.
///
/// Keys and values are each ordered by their own [`Comparator`]. Two keys
/// that compare equal are the same key; the map keeps whichever key object
/// was set first for that equivalence class until the entry is replaced.
///
/// # Examples
///
/// ```
/// use tessera_core::OrderedMap;
///
/// let mut map: OrderedMap<&str, i32> = OrderedMap::default();
/// map.set("north", 0);
/// map.set("north", 1);
/// assert_eq!(map.get(&"north"), Some(&1));
/// assert_eq!(map.len(), 1);
/// assert!(!map.has(&"south"));
/// ```
#[derive(Clone, Debug)]
pub struct OrderedMap<K, V, KC = NaturalOrder, VC = NaturalOrder> {
    entries: OrderedStore<(K, V), EntryOrder<KC, VC>>,
}

impl<K, V, KC: Default, VC: Default> Default for OrderedMap<K, V, KC, VC> {
    fn default() -> Self {
        Self {
            entries: OrderedStore::default(),
        }
    }
}

impl<K, V, KC, VC> OrderedMap<K, V, KC, VC> {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `(key, value)` product order.
    pub fn order(&self) -> &EntryOrder<KC, VC> {
        self.entries.comparator()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterate keys in order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterate values in key order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Key lookup with a borrowed closure instead of an owned key.
    ///
    /// `seek(key)` reports how the sought key orders against a stored key;
    /// the value side is a wildcard.
    pub fn get_by<F>(&self, mut seek: F) -> Option<(&K, &V)>
    where
        F: FnMut(&K) -> Ordering,
    {
        self.entries
            .search_by(|(k, _)| seek(k))
            .ok()
            .and_then(|index| self.entries.get(index))
            .map(|(k, v)| (k, v))
    }
}

impl<K, V, KC, VC> OrderedMap<K, V, KC, VC>
where
    KC: Comparator<K>,
    VC: Comparator<V>,
{
    /// Create an empty map ordered by `keys` then `values`.
    pub fn new(keys: KC, values: VC) -> Self {
        Self {
            entries: OrderedStore::new(EntryOrder::new(keys, values)),
        }
    }

    /// Build a map from pairs; a later pair for the same key replaces the
    /// earlier one.
    pub fn from_entries<I>(keys: KC, values: VC, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new(keys, values);
        for (key, value) in entries {
            map.set(key, value);
        }
        map
    }

    /// Search with an explicit query pair.
    ///
    /// `(Exact(k), Any)` is a key lookup; `(Exact(k), Exact(v))` tests one
    /// exact entry.
    pub fn search(&self, query: (Slot<&K>, Slot<&V>)) -> Result<usize, usize> {
        let order = self.entries.comparator();
        self.entries
            .search_by(|(k, v)| order.compare_slots(query, (Slot::Exact(k), Slot::Exact(v))))
    }

    fn locate(&self, key: &K) -> Option<usize> {
        self.search((Slot::Exact(key), Slot::Any)).ok()
    }

    /// The value stored for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// The stored key object and value for `key`.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.locate(key)
            .and_then(|index| self.entries.get(index))
            .map(|(k, v)| (k, v))
    }

    /// Whether an entry exists for `key`.
    pub fn has(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Whether the exact pair `(key, value)` is stored.
    pub fn contains_entry(&self, key: &K, value: &V) -> bool {
        self.search((Slot::Exact(key), Slot::Exact(value))).is_ok()
    }

    /// Map `key` to `value`, replacing any previous entry for `key`.
    /// Returns the displaced value.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.remove(&key);
        self.entries.insert((key, value));
        previous
    }

    /// Remove the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.locate(key)?;
        self.entries.remove_at(index).map(|(_, v)| v)
    }

    /// Total order between maps built with equivalent comparators.
    ///
    /// Shorter maps sort first; equal-length maps compare entry by entry,
    /// key then value.
    pub fn compare_entries(&self, other: &Self) -> Ordering {
        let order = self.entries.comparator();
        self.len().cmp(&other.len()).then_with(|| {
            self.entries
                .iter()
                .zip(other.entries.iter())
                .map(|(a, b)| order.compare(a, b))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl<K: Ord, V: Ord> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(NaturalOrder, NaturalOrder, iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    // ── Wildcard order ──────────────────────────────────────────

    #[test]
    fn wildcard_value_matches_any_value_with_equal_key() {
        let order = EntryOrder::new(NaturalOrder, NaturalOrder);
        let query = (Slot::Exact(&1), Slot::<&i32>::Any);
        assert_eq!(
            order.compare_slots(query, (Slot::Exact(&1), Slot::Exact(&42))),
            Ordering::Equal
        );
        assert_eq!(
            order.compare_slots(query, (Slot::Exact(&2), Slot::Exact(&42))),
            Ordering::Less
        );
    }

    #[test]
    fn wildcard_key_falls_through_to_values() {
        let order = EntryOrder::new(NaturalOrder, NaturalOrder);
        assert_eq!(
            order.compare_slots(
                (Slot::<&i32>::Any, Slot::Exact(&3)),
                (Slot::Exact(&9), Slot::Exact(&4))
            ),
            Ordering::Less
        );
        assert_eq!(
            order.compare_slots(
                (Slot::<&i32>::Any, Slot::<&i32>::Any),
                (Slot::Exact(&9), Slot::Exact(&4))
            ),
            Ordering::Equal
        );
    }

    #[test]
    fn slot_helpers() {
        let exact = Slot::Exact(5);
        assert_eq!(exact.as_ref(), Slot::Exact(&5));
        assert!(!exact.is_any());
        assert!(Slot::<i32>::Any.is_any());
    }

    // ── Map operations ──────────────────────────────────────────

    #[test]
    fn set_replaces_existing_entry() {
        let mut map: OrderedMap<i32, &str> = OrderedMap::default();
        assert_eq!(map.set(7, "a"), None);
        assert_eq!(map.set(7, "b"), Some("a"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&7), Some(&"b"));
        assert!(map.contains_entry(&7, &"b"));
        assert!(!map.contains_entry(&7, &"a"));
    }

    #[test]
    fn get_absent_key() {
        let map: OrderedMap<i32, i32> = [(1, 10), (3, 30)].into_iter().collect();
        assert_eq!(map.get(&2), None);
        assert!(!map.has(&2));
        assert!(map.has(&3));
    }

    #[test]
    fn remove_entry() {
        let mut map: OrderedMap<i32, i32> = [(1, 10), (2, 20), (3, 30)].into_iter().collect();
        assert_eq!(map.remove(&2), Some(20));
        assert_eq!(map.remove(&2), None);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![10, 30]);
    }

    #[test]
    fn custom_key_order_unifies_keys() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        let mut map = OrderedMap::new(by_abs, NaturalOrder);
        map.set(-2, 'x');
        assert_eq!(map.get(&2), Some(&'x'));
        assert_eq!(map.get_key_value(&2), Some((&-2, &'x')));
    }

    #[test]
    fn get_by_searches_with_borrowed_key() {
        let map: OrderedMap<String, u8> = [("east".to_string(), 0), ("west".to_string(), 2)]
            .into_iter()
            .collect();
        let hit = map.get_by(|k| "west".cmp(k.as_str()));
        assert_eq!(hit, Some((&"west".to_string(), &2)));
        assert_eq!(map.get_by(|k| "north".cmp(k.as_str())), None);
    }

    #[test]
    fn compare_entries_is_size_then_lexicographic() {
        let small: OrderedMap<i32, i32> = [(1, 1)].into_iter().collect();
        let a: OrderedMap<i32, i32> = [(1, 1), (2, 2)].into_iter().collect();
        let b: OrderedMap<i32, i32> = [(1, 1), (2, 3)].into_iter().collect();
        let c: OrderedMap<i32, i32> = [(2, 2), (1, 1)].into_iter().collect();
        assert_eq!(small.compare_entries(&a), Ordering::Less);
        assert_eq!(a.compare_entries(&b), Ordering::Less);
        assert_eq!(b.compare_entries(&a), Ordering::Greater);
        assert_eq!(a.compare_entries(&c), Ordering::Equal);
    }

    #[test]
    fn iteration_is_key_ordered() {
        let map: OrderedMap<&str, u8> = [("c", 3), ("a", 1), ("b", 2)].into_iter().collect();
        let pairs: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(pairs, vec![("a", 1), ("b", 2), ("c", 3)]);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn behaves_like_btreemap(ops in prop::collection::vec((0i32..16, 0i32..4, any::<bool>()), 0..120)) {
            let mut map: OrderedMap<i32, i32> = OrderedMap::default();
            let mut reference = BTreeMap::new();
            for (key, value, insert) in ops {
                if insert {
                    prop_assert_eq!(map.set(key, value), reference.insert(key, value));
                } else {
                    prop_assert_eq!(map.remove(&key), reference.remove(&key));
                }
                prop_assert_eq!(map.len(), reference.len());
            }
            for (key, value) in &reference {
                prop_assert_eq!(map.get(key), Some(value));
            }
        }

        #[test]
        fn last_set_wins(key in any::<i16>(), v1 in any::<i16>(), v2 in any::<i16>()) {
            prop_assume!(v1 != v2);
            let mut map: OrderedMap<i16, i16> = OrderedMap::default();
            map.set(key, v1);
            map.set(key, v2);
            prop_assert_eq!(map.len(), 1);
            prop_assert_eq!(map.get(&key), Some(&v2));
        }
    }
}
