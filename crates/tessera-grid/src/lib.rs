//! Canonicalizing coordinate grids for Tessera.
//!
//! This crate defines the [`Tiling`] trait, the generating data of an
//! infinite discrete grid, and [`Grid`], which derives from a tiling a
//! canonical cell cache, the reverse of every direction, and the group of
//! orientations generated by the tiling's symmetries.
//!
//! # Tilings
//!
//! - [`Square4`]: square lattice, 4 directions, 8 symmetries
//! - [`Hex6`]: hexagonal lattice in axial coordinates, 6 directions, 12 symmetries
//!
//! # Identity
//!
//! Every cell a grid hands out is a [`Cell`] (`Arc<Coord>`). Two cells from
//! the same grid describe the same coordinate exactly when they are the same
//! allocation, so callers compare them with `Arc::ptr_eq`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod grid;
pub mod hex6;
pub mod orientation;
pub mod square4;
pub mod tiling;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::GridConfig;
pub use error::GridError;
pub use grid::Grid;
pub use hex6::{Hex6, HexSymmetry};
pub use orientation::{DirectionMap, Orientation, OrientationGroup};
pub use square4::{Square4, SquareSymmetry};
pub use tiling::{Cell, CellOrder, Tiling};
