//! The [`Tiling`] capability trait and the canonical [`Cell`] handle.

use std::fmt::Debug;
use std::sync::Arc;
use tessera_core::{ByDeref, Comparator};

/// Canonical handle to a coordinate owned by a [`Grid`](crate::Grid) cache.
///
/// Within one grid, two cells are the same logical coordinate exactly when
/// they are the same allocation (`Arc::ptr_eq`).
pub type Cell<C> = Arc<C>;

/// Order on [`Cell`]s induced by a tiling's coordinate order.
pub type CellOrder<T> = ByDeref<<T as Tiling>::Order>;

/// The generating data of an infinite discrete grid.
///
/// A tiling declares an origin, a total order on coordinates, the unit
/// sphere of single-step directions, a step function, and a finite set of
/// orientation generators. [`Grid`](crate::Grid) derives everything else
/// (canonical cells, reverse directions, the orientation group) from this
/// data.
///
/// # Contract
///
/// Not checked at construction unless verification is requested:
///
/// - `order` is a total order.
/// - Each generator maps the unit sphere bijectively onto itself and
///   commutes with `step`: following a path and then orienting lands on the
///   same cell as orienting the start and following the oriented path.
///
/// Closure of the unit sphere under negation *is* checked, fatally.
pub trait Tiling {
    /// Coordinate representation.
    type Coord: Clone + Debug;

    /// Total order on coordinates.
    type Order: Comparator<Self::Coord> + Clone;

    /// Label for one orientation generator.
    type Generator: Clone + Debug;

    /// The origin cell.
    fn origin(&self) -> Self::Coord;

    /// The coordinate order.
    fn order(&self) -> Self::Order;

    /// Every admissible single-step direction.
    fn unit_sphere(&self) -> Vec<Self::Coord>;

    /// The cell reached from `from` by one step in `direction`.
    fn step(&self, from: &Self::Coord, direction: &Self::Coord) -> Self::Coord;

    /// The declared orientation generators.
    fn generators(&self) -> Vec<Self::Generator>;

    /// Apply one generator to an arbitrary coordinate.
    fn orient(&self, generator: &Self::Generator, coord: &Self::Coord) -> Self::Coord;
}
