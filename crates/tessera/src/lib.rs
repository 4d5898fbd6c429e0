//! Tessera: canonicalizing ordered containers and symmetric coordinate grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tessera sub-crates. For most users, adding `tessera` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use smallvec::smallvec;
//! use tessera::prelude::*;
//!
//! // Canonicalize values through an ordered store.
//! let mut store = OrderedStore::<String>::default();
//! store.unify("b".to_string());
//! store.unify("a".to_string());
//! store.unify("b".to_string());
//! assert_eq!(store.as_slice(), ["a", "b"]);
//!
//! // Walk a square grid: two routes to [1, 1] land on one cell.
//! let mut grid = Grid::new(Square4::new()).unwrap();
//! let (east, north): (Coord, Coord) = (smallvec![1, 0], smallvec![0, 1]);
//! let origin = grid.origin().clone();
//! let a = grid.step(&origin, &east);
//! let a = grid.step(&a, &north);
//! let b = grid.step(&origin, &north);
//! let b = grid.step(&b, &east);
//! assert!(Arc::ptr_eq(&a, &b));
//!
//! // The square has eight orientations.
//! assert_eq!(grid.close_orientations().unwrap().order(), 8);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`containers`] | `tessera-core` | Comparators, `OrderedStore`, `OrderedMap`, `Shape` |
//! | [`grid`] | `tessera-grid` | `Tiling`, `Grid`, orientations, stock tilings |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Ordered containers and comparators (`tessera-core`).
///
/// [`containers::OrderedStore`] keeps one resident element per equivalence class;
/// [`containers::OrderedMap`] layers a key/value map with wildcard queries on top.
pub use tessera_core as containers;

/// Tilings and canonicalizing grids (`tessera-grid`).
///
/// Implement [`grid::Tiling`] for a new lattice, or use the stock
/// [`grid::Square4`] and [`grid::Hex6`].
pub use tessera_grid as grid;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use tessera_core::{
        ByDeref, Comparator, Coord, NaturalOrder, OrderedMap, OrderedStore, Shape, Slot,
    };

    // Grids
    pub use tessera_grid::{
        Cell, Grid, GridConfig, GridError, Hex6, HexSymmetry, Orientation, OrientationGroup,
        Square4, SquareSymmetry, Tiling,
    };
}
