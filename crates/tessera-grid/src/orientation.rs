//! Orientation maps on the unit sphere and their closure into a group.

use crate::error::GridError;
use crate::tiling::{Cell, CellOrder, Tiling};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use tessera_core::{Comparator, OrderedMap, OrderedStore};
use tracing::{debug, trace, warn};

/// A map from canonical directions to canonical directions.
pub type DirectionMap<T> = OrderedMap<
    Cell<<T as Tiling>::Coord>,
    Cell<<T as Tiling>::Coord>,
    CellOrder<T>,
    CellOrder<T>,
>;

/// One orientation: its action on the unit sphere plus the generator word
/// that produced it.
///
/// The action is what identifies an orientation: two orientations whose
/// actions agree on every direction are the same group element, whatever
/// their words. The word is kept so the orientation can be extended from
/// directions to arbitrary coordinates by replaying the generators, see
/// [`Grid::orient`](crate::Grid::orient).
pub struct Orientation<T: Tiling> {
    index: usize,
    word: Vec<T::Generator>,
    action: DirectionMap<T>,
}

impl<T: Tiling> Orientation<T> {
    pub(crate) fn new(index: usize, word: Vec<T::Generator>, action: DirectionMap<T>) -> Self {
        Self {
            index,
            word,
            action,
        }
    }

    /// Position in the owning list: declaration order for generators,
    /// discovery order for group elements.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Generators to apply, first to last.
    pub fn word(&self) -> &[T::Generator] {
        &self.word
    }

    /// The action on the unit sphere.
    pub fn action(&self) -> &DirectionMap<T> {
        &self.action
    }

    /// Where `direction` is sent, or `None` if it is not a direction.
    pub fn image(&self, direction: &T::Coord) -> Option<&Cell<T::Coord>> {
        let order = self.action.order().keys().inner();
        self.action
            .get_by(|key| order.compare(direction, key))
            .map(|(_, image)| image)
    }

    /// Whether every direction is fixed.
    pub fn is_identity(&self) -> bool {
        self.action.iter().all(|(d, image)| Arc::ptr_eq(d, image))
    }

    /// Order by action on the unit sphere.
    pub fn compare_action(&self, other: &Self) -> Ordering {
        self.action.compare_entries(&other.action)
    }

    /// Whether both orientations act identically on the unit sphere.
    pub fn same_action(&self, other: &Self) -> bool {
        self.compare_action(other).is_eq()
    }

    /// `self` followed by `next`, or `None` if `next` has no image for one
    /// of `self`'s images.
    pub(crate) fn then(&self, next: &Self, index: usize) -> Option<Self> {
        let order = self.action.order();
        let mut action = DirectionMap::<T>::new(order.keys().clone(), order.values().clone());
        for (direction, image) in self.action.iter() {
            let composed = next.action.get(image)?;
            action.set(direction.clone(), composed.clone());
        }
        let mut word = self.word.clone();
        word.extend(next.word.iter().cloned());
        Some(Self::new(index, word, action))
    }
}

impl<T: Tiling> fmt::Debug for Orientation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action: Vec<_> = self.action.iter().map(|(d, i)| (&**d, &**i)).collect();
        f.debug_struct("Orientation")
            .field("index", &self.index)
            .field("word", &self.word)
            .field("action", &action)
            .finish()
    }
}

type ActionOrder<T> = fn(&Arc<Orientation<T>>, &Arc<Orientation<T>>) -> Ordering;

fn by_action<T: Tiling>(a: &Arc<Orientation<T>>, b: &Arc<Orientation<T>>) -> Ordering {
    a.compare_action(b)
}

/// The closure of a set of orientation generators under composition.
///
/// Elements are numbered in discovery order: the distinct generators first,
/// then products as closure finds them. [`product`](Self::product) is the
/// full multiplication table over those indices.
pub struct OrientationGroup<T: Tiling> {
    elements: Vec<Arc<Orientation<T>>>,
    by_action: OrderedStore<Arc<Orientation<T>>, ActionOrder<T>>,
    products: IndexMap<(usize, usize), usize>,
}

impl<T: Tiling> OrientationGroup<T> {
    /// Close `generators` under composition.
    ///
    /// Every pair of known elements is composed; results are deduplicated
    /// by their action on the unit sphere; rounds repeat until a round
    /// discovers nothing new. Fails with [`GridError::GroupTooLarge`] once
    /// more than `max_order` distinct elements have been found.
    pub(crate) fn close(
        generators: &[Arc<Orientation<T>>],
        max_order: usize,
    ) -> Result<Self, GridError> {
        let mut group = Self {
            elements: Vec::new(),
            by_action: OrderedStore::new(by_action::<T> as ActionOrder<T>),
            products: IndexMap::new(),
        };
        for generator in generators {
            let candidate = Orientation::new(
                group.elements.len(),
                generator.word.clone(),
                generator.action.clone(),
            );
            group.admit(candidate, max_order)?;
        }
        trace!(
            declared = generators.len(),
            distinct = group.elements.len(),
            "deduplicated orientation generators"
        );

        let mut round = 0usize;
        loop {
            let known = group.elements.len();
            for first in 0..known {
                for second in 0..known {
                    if group.products.contains_key(&(first, second)) {
                        continue;
                    }
                    let next = group.elements.len();
                    let Some(composed) = group.elements[first].then(&group.elements[second], next)
                    else {
                        warn!(first, second, "orientation product left the unit sphere");
                        continue;
                    };
                    let index = group.admit(composed, max_order)?;
                    group.products.insert((first, second), index);
                }
            }
            round += 1;
            trace!(round, known, order = group.elements.len(), "closure round");
            if group.elements.len() == known {
                break;
            }
        }
        debug!(order = group.elements.len(), rounds = round, "closed orientation group");
        Ok(group)
    }

    /// Store `candidate` unless an element with the same action exists.
    /// Returns the index of the resident element.
    fn admit(&mut self, candidate: Orientation<T>, max_order: usize) -> Result<usize, GridError> {
        let stored = self.by_action.unify(Arc::new(candidate)).clone();
        if stored.index == self.elements.len() {
            if self.elements.len() == max_order {
                return Err(GridError::GroupTooLarge { limit: max_order });
            }
            self.elements.push(stored.clone());
        }
        Ok(stored.index)
    }

    /// Number of distinct elements.
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// Elements in discovery order.
    pub fn elements(&self) -> &[Arc<Orientation<T>>] {
        &self.elements
    }

    /// Element by index.
    pub fn get(&self, index: usize) -> Option<&Arc<Orientation<T>>> {
        self.elements.get(index)
    }

    /// The element equal (by action) to `orientation`.
    pub fn find(&self, orientation: &Orientation<T>) -> Option<&Arc<Orientation<T>>> {
        self.by_action
            .search_by(|element| orientation.compare_action(element))
            .ok()
            .and_then(|position| self.by_action.get(position))
    }

    /// The element equal to applying `first` and then `second`.
    pub fn product(&self, first: usize, second: usize) -> Option<&Arc<Orientation<T>>> {
        self.products
            .get(&(first, second))
            .and_then(|&index| self.elements.get(index))
    }

    /// The element that fixes every direction, if the generators reach it.
    pub fn identity(&self) -> Option<&Arc<Orientation<T>>> {
        self.elements.iter().find(|element| element.is_identity())
    }

    /// The element that undoes `index`.
    pub fn inverse(&self, index: usize) -> Option<&Arc<Orientation<T>>> {
        let identity = self.identity()?.index;
        (0..self.elements.len())
            .find(|&other| self.products.get(&(index, other)) == Some(&identity))
            .and_then(|other| self.elements.get(other))
    }
}

impl<T: Tiling> fmt::Debug for OrientationGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrientationGroup")
            .field("order", &self.elements.len())
            .field("products", &self.products.len())
            .finish()
    }
}
