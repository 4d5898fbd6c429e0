//! [`Grid`]: the canonicalizing coordinate space derived from a [`Tiling`].

use crate::config::GridConfig;
use crate::error::GridError;
use crate::orientation::{DirectionMap, Orientation, OrientationGroup};
use crate::tiling::{Cell, CellOrder, Tiling};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use tessera_core::{ByDeref, Comparator, OrderedStore};
use tracing::{debug, trace};

/// A navigable, canonicalizing view of the grid a [`Tiling`] describes.
///
/// Every coordinate the grid produces (by stepping, orienting, or
/// canonicalizing external input) is looked up in a per-grid cache first,
/// so each logical cell has exactly one [`Cell`] allocation for the
/// lifetime of the grid. Cells are never evicted.
///
/// Construction derives:
///
/// 1. canonical cells for the origin and every direction;
/// 2. the reverse of every direction (fatal if one is missing);
/// 3. canonical direction maps for every orientation generator, sharing
///    cells with the grid;
/// 4. optionally, the orientation group (see
///    [`close_orientations`](Self::close_orientations)).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use smallvec::smallvec;
/// use tessera_core::Coord;
/// use tessera_grid::{Grid, Square4};
///
/// let mut grid = Grid::new(Square4::new()).unwrap();
/// let east: Coord = smallvec![1, 0];
/// let north: Coord = smallvec![0, 1];
///
/// let origin = grid.origin().clone();
/// let a = grid.step(&origin, &east);
/// let a = grid.step(&a, &north);
/// let b = grid.step(&origin, &north);
/// let b = grid.step(&b, &east);
/// assert!(Arc::ptr_eq(&a, &b));
///
/// let west: Coord = smallvec![-1, 0];
/// assert_eq!(**grid.reverse_of(&east).unwrap(), west);
/// ```
pub struct Grid<T: Tiling> {
    tiling: T,
    config: GridConfig,
    cells: OrderedStore<Cell<T::Coord>, CellOrder<T>>,
    origin: Cell<T::Coord>,
    unit_sphere: OrderedStore<Cell<T::Coord>, CellOrder<T>>,
    reverse: DirectionMap<T>,
    orientations: Vec<Arc<Orientation<T>>>,
    group: Option<OrientationGroup<T>>,
}

impl<T: Tiling> Grid<T> {
    /// Build a grid with the default [`GridConfig`].
    pub fn new(tiling: T) -> Result<Self, GridError> {
        Self::with_config(tiling, GridConfig::default())
    }

    /// Build a grid.
    ///
    /// Returns `Err(GridError::EmptyUnitSphere)` if the tiling declares no
    /// directions, `Err(GridError::UninvertibleDirection)` if a direction
    /// has no reverse in the unit sphere, or the first error from the
    /// opt-in verification and closure passes.
    pub fn with_config(tiling: T, config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let order = ByDeref(tiling.order());

        let mut cells = OrderedStore::with_capacity(order.clone(), config.cache_capacity);
        let origin = cells.unify(Arc::new(tiling.origin())).clone();

        let declared = tiling.unit_sphere();
        if declared.is_empty() {
            return Err(GridError::EmptyUnitSphere);
        }
        let mut unit_sphere = OrderedStore::with_capacity(order.clone(), declared.len());
        for direction in declared {
            unit_sphere.insert(cells.unify(Arc::new(direction)).clone());
        }
        debug!(
            origin = ?origin,
            directions = unit_sphere.len(),
            "canonicalized origin and unit sphere"
        );

        let mut grid = Self {
            reverse: DirectionMap::<T>::new(order.clone(), order),
            tiling,
            config,
            cells,
            origin,
            unit_sphere,
            orientations: Vec::new(),
            group: None,
        };
        grid.derive_reverse_directions()?;
        grid.canonicalize_generators();

        if grid.config.verify_orientations {
            grid.verify_orientations()?;
        }
        if grid.config.close_orientations {
            grid.close_orientations()?;
        }
        debug!(
            cells = grid.cells.len(),
            generators = grid.orientations.len(),
            "grid ready"
        );
        Ok(grid)
    }

    fn derive_reverse_directions(&mut self) -> Result<(), GridError> {
        for direction in self.unit_sphere.iter() {
            let there = self.tiling.step(&self.origin, direction);
            let reverse = self
                .unit_sphere
                .iter()
                .find(|candidate| {
                    let back = self.tiling.step(&there, candidate);
                    self.is_origin(&back)
                })
                .ok_or_else(|| GridError::UninvertibleDirection {
                    direction: format!("{:?}", **direction),
                })?;
            trace!(direction = ?direction, reverse = ?reverse, "derived reverse direction");
            self.reverse.set(direction.clone(), reverse.clone());
        }
        Ok(())
    }

    fn canonicalize_generators(&mut self) {
        let order = self.cells.comparator().clone();
        for (index, generator) in self.tiling.generators().into_iter().enumerate() {
            let mut action = DirectionMap::<T>::new(order.clone(), order.clone());
            for direction in self.unit_sphere.iter() {
                let image = self.tiling.orient(&generator, direction);
                let image = self.cells.unify(Arc::new(image)).clone();
                action.set(direction.clone(), image);
            }
            trace!(index, generator = ?generator, "canonicalized orientation generator");
            self.orientations
                .push(Arc::new(Orientation::new(index, vec![generator], action)));
        }
    }

    fn coord_order(&self) -> &T::Order {
        self.cells.comparator().inner()
    }

    /// The tiling this grid was built from.
    pub fn tiling(&self) -> &T {
        &self.tiling
    }

    /// The configuration this grid was built with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The canonical origin.
    pub fn origin(&self) -> &Cell<T::Coord> {
        &self.origin
    }

    /// Canonical directions, ascending.
    pub fn unit_sphere(&self) -> &[Cell<T::Coord>] {
        self.unit_sphere.as_slice()
    }

    /// Number of canonical cells produced so far.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Every canonical cell produced so far, ascending.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell<T::Coord>> + '_ {
        self.cells.iter()
    }

    /// Whether `coord` is the origin.
    pub fn is_origin(&self, coord: &T::Coord) -> bool {
        self.coord_order().compare(&self.origin, coord) == Ordering::Equal
    }

    /// Whether `coord` is one of the unit-sphere directions.
    pub fn is_direction(&self, coord: &T::Coord) -> bool {
        let order = self.coord_order();
        self.unit_sphere
            .search_by(|direction| order.compare(coord, direction))
            .is_ok()
    }

    /// The canonical cell for `coord`, if it has been produced.
    pub fn lookup(&self, coord: &T::Coord) -> Option<&Cell<T::Coord>> {
        let order = self.coord_order();
        self.cells
            .search_by(|cell| order.compare(coord, cell))
            .ok()
            .and_then(|index| self.cells.get(index))
    }

    /// The canonical cell for `coord`, creating it on first sight.
    pub fn unify(&mut self, coord: T::Coord) -> Cell<T::Coord> {
        if let Some(cell) = self.lookup(&coord) {
            return cell.clone();
        }
        self.cells.unify(Arc::new(coord)).clone()
    }

    /// Step from `from` in `direction` and canonicalize the result.
    ///
    /// `direction` is not required to be in the unit sphere; the step
    /// function decides what a step by it means.
    pub fn step(&mut self, from: &T::Coord, direction: &T::Coord) -> Cell<T::Coord> {
        let next = self.tiling.step(from, direction);
        self.unify(next)
    }

    /// Follow `path` from `from`, returning the canonical end cell.
    pub fn follow(&mut self, from: &T::Coord, path: &[Cell<T::Coord>]) -> Cell<T::Coord> {
        let mut at = self.unify(from.clone());
        for direction in path {
            at = self.step(&at, direction);
        }
        at
    }

    /// The direction that undoes `direction`.
    ///
    /// `None` only when `direction` is not in the unit sphere.
    pub fn reverse_of(&self, direction: &T::Coord) -> Option<&Cell<T::Coord>> {
        let order = self.coord_order();
        self.reverse
            .get_by(|key| order.compare(direction, key))
            .map(|(_, reverse)| reverse)
    }

    /// The declared orientation generators, canonicalized, in declaration
    /// order.
    pub fn orientations(&self) -> &[Arc<Orientation<T>>] {
        &self.orientations
    }

    /// Apply `orientation` to an arbitrary coordinate.
    ///
    /// Replays the orientation's generator word through
    /// [`Tiling::orient`] and canonicalizes the result.
    pub fn orient(&mut self, orientation: &Orientation<T>, coord: &T::Coord) -> Cell<T::Coord> {
        let oriented = orientation
            .word()
            .iter()
            .fold(coord.clone(), |at, generator| {
                self.tiling.orient(generator, &at)
            });
        self.unify(oriented)
    }

    /// Apply `orientation` to every step of `path`.
    ///
    /// `None` if the path contains something that is not a direction.
    pub fn orient_path(
        &self,
        orientation: &Orientation<T>,
        path: &[Cell<T::Coord>],
    ) -> Option<Vec<Cell<T::Coord>>> {
        path.iter()
            .map(|direction| orientation.image(direction).cloned())
            .collect()
    }

    /// Close the orientation generators into a group.
    ///
    /// The group is computed on first call and memoized; later calls return
    /// the cached group.
    pub fn close_orientations(&mut self) -> Result<&OrientationGroup<T>, GridError> {
        let group = match self.group.take() {
            Some(group) => group,
            None => OrientationGroup::close(&self.orientations, self.config.max_group_order)?,
        };
        let group: &OrientationGroup<T> = self.group.insert(group);
        Ok(group)
    }

    /// The orientation group, if [`close_orientations`](Self::close_orientations)
    /// has run.
    pub fn group(&self) -> Option<&OrientationGroup<T>> {
        self.group.as_ref()
    }

    /// Check that every generator is an automorphism.
    ///
    /// For each generator: every direction must land in the unit sphere,
    /// no two directions may share an image, and orienting the end of every
    /// path from the origin (up to `verify_path_depth` steps) must agree
    /// with following the oriented path from the oriented origin. Works on
    /// raw coordinates and does not grow the cache.
    pub fn verify_orientations(&self) -> Result<(), GridError> {
        let order = self.coord_order();
        let sphere = self.unit_sphere.as_slice();
        let origin: &T::Coord = &self.origin;
        let generators = self.tiling.generators();

        for generator in &generators {
            let mut images = OrderedStore::with_capacity(order.clone(), sphere.len());
            for direction in sphere {
                let image = self.tiling.orient(generator, direction);
                if !self.is_direction(&image) {
                    return Err(GridError::OrientationEscapesSphere {
                        generator: format!("{generator:?}"),
                        direction: format!("{:?}", **direction),
                        image: format!("{image:?}"),
                    });
                }
                images.insert(image);
            }
            if images.len() != sphere.len() {
                return Err(GridError::OrientationNotBijective {
                    generator: format!("{generator:?}"),
                });
            }

            let oriented_origin = self.tiling.orient(generator, origin);
            for depth in 1..=self.config.verify_path_depth {
                for path in paths(sphere.len(), depth) {
                    let end = path
                        .iter()
                        .fold(origin.clone(), |at, &i| self.tiling.step(&at, &sphere[i]));
                    let lhs = self.tiling.orient(generator, &end);
                    let rhs = path.iter().fold(oriented_origin.clone(), |at, &i| {
                        let turned = self.tiling.orient(generator, &sphere[i]);
                        self.tiling.step(&at, &turned)
                    });
                    if order.compare(&lhs, &rhs) != Ordering::Equal {
                        let steps: Vec<&T::Coord> = path.iter().map(|&i| &*sphere[i]).collect();
                        return Err(GridError::OrientationBreaksPaths {
                            generator: format!("{generator:?}"),
                            path: format!("{steps:?}"),
                        });
                    }
                }
            }
        }
        debug!(
            generators = generators.len(),
            depth = self.config.verify_path_depth,
            "verified orientation generators"
        );
        Ok(())
    }
}

/// Every sequence of `depth` indices into `0..width`, in odometer order.
fn paths(width: usize, depth: usize) -> impl Iterator<Item = Vec<usize>> {
    let total = width.pow(depth as u32);
    (0..total).map(move |mut n| {
        let mut path = vec![0; depth];
        for slot in path.iter_mut().rev() {
            *slot = n % width;
            n /= width;
        }
        path
    })
}

impl<T: Tiling> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sphere: Vec<&T::Coord> = self.unit_sphere.iter().map(|d| &**d).collect();
        f.debug_struct("Grid")
            .field("origin", &*self.origin)
            .field("unit_sphere", &sphere)
            .field("cells", &self.cells.len())
            .field("generators", &self.orientations.len())
            .field("group_order", &self.group.as_ref().map(OrientationGroup::order))
            .finish()
    }
}
