//! Reusable tiling fixtures.
//!
//! Each fixture breaks exactly one [`Tiling`] contract so grid construction
//! and verification can be tested against a known failure:
//!
//! - [`EmptySphere`]: no directions at all.
//! - [`MissingNegation`]: west is absent from the unit sphere.
//! - [`EscapingSymmetry`]: a generator doubles directions.
//! - [`CollapsingSymmetry`]: a generator folds west onto east.
//! - [`DirectionOnlyFlip`]: a generator permutes the sphere but ignores
//!   every other cell.
//!
//! [`DescendingLine`] is well-formed; it exercises a scalar coordinate type
//! with a non-natural comparator.

use smallvec::smallvec;
use std::cmp::Ordering;
use tessera_core::coord::translate;
use tessera_core::{Coord, NaturalOrder};
use tessera_grid::Tiling;

const CARDINALS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

fn cardinals() -> Vec<Coord> {
    CARDINALS.iter().map(|&(x, y)| smallvec![x, y]).collect()
}

/// A tiling that declares no directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySphere;

impl Tiling for EmptySphere {
    type Coord = Coord;
    type Order = NaturalOrder;
    type Generator = ();

    fn origin(&self) -> Coord {
        smallvec![0, 0]
    }

    fn order(&self) -> NaturalOrder {
        NaturalOrder
    }

    fn unit_sphere(&self) -> Vec<Coord> {
        Vec::new()
    }

    fn step(&self, from: &Coord, direction: &Coord) -> Coord {
        translate(from, direction)
    }

    fn generators(&self) -> Vec<()> {
        Vec::new()
    }

    fn orient(&self, _: &(), coord: &Coord) -> Coord {
        coord.clone()
    }
}

/// Square directions with west left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingNegation;

impl Tiling for MissingNegation {
    type Coord = Coord;
    type Order = NaturalOrder;
    type Generator = ();

    fn origin(&self) -> Coord {
        smallvec![0, 0]
    }

    fn order(&self) -> NaturalOrder {
        NaturalOrder
    }

    fn unit_sphere(&self) -> Vec<Coord> {
        let mut sphere = cardinals();
        sphere.retain(|d| d.as_slice() != [-1, 0]);
        sphere
    }

    fn step(&self, from: &Coord, direction: &Coord) -> Coord {
        translate(from, direction)
    }

    fn generators(&self) -> Vec<()> {
        vec![()]
    }

    fn orient(&self, _: &(), coord: &Coord) -> Coord {
        coord.clone()
    }
}

/// The square lattice with a single generator that scales by two.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapingSymmetry;

impl Tiling for EscapingSymmetry {
    type Coord = Coord;
    type Order = NaturalOrder;
    type Generator = &'static str;

    fn origin(&self) -> Coord {
        smallvec![0, 0]
    }

    fn order(&self) -> NaturalOrder {
        NaturalOrder
    }

    fn unit_sphere(&self) -> Vec<Coord> {
        cardinals()
    }

    fn step(&self, from: &Coord, direction: &Coord) -> Coord {
        translate(from, direction)
    }

    fn generators(&self) -> Vec<&'static str> {
        vec!["double"]
    }

    fn orient(&self, _: &&'static str, coord: &Coord) -> Coord {
        coord.iter().map(|a| a * 2).collect()
    }
}

/// The square lattice with a single generator that folds `x` to `|x|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollapsingSymmetry;

impl Tiling for CollapsingSymmetry {
    type Coord = Coord;
    type Order = NaturalOrder;
    type Generator = &'static str;

    fn origin(&self) -> Coord {
        smallvec![0, 0]
    }

    fn order(&self) -> NaturalOrder {
        NaturalOrder
    }

    fn unit_sphere(&self) -> Vec<Coord> {
        cardinals()
    }

    fn step(&self, from: &Coord, direction: &Coord) -> Coord {
        translate(from, direction)
    }

    fn generators(&self) -> Vec<&'static str> {
        vec!["fold"]
    }

    fn orient(&self, _: &&'static str, coord: &Coord) -> Coord {
        smallvec![coord[0].abs(), coord[1]]
    }
}

/// The square lattice with a generator that swaps north and south on the
/// unit sphere and fixes every other cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionOnlyFlip;

impl Tiling for DirectionOnlyFlip {
    type Coord = Coord;
    type Order = NaturalOrder;
    type Generator = &'static str;

    fn origin(&self) -> Coord {
        smallvec![0, 0]
    }

    fn order(&self) -> NaturalOrder {
        NaturalOrder
    }

    fn unit_sphere(&self) -> Vec<Coord> {
        cardinals()
    }

    fn step(&self, from: &Coord, direction: &Coord) -> Coord {
        translate(from, direction)
    }

    fn generators(&self) -> Vec<&'static str> {
        vec!["flip"]
    }

    fn orient(&self, _: &&'static str, coord: &Coord) -> Coord {
        match coord.as_slice() {
            [0, y] if y.abs() == 1 => smallvec![0, -y],
            _ => coord.clone(),
        }
    }
}

/// Descending order on integers.
pub fn descending(a: &i64, b: &i64) -> Ordering {
    b.cmp(a)
}

/// The integer line with cells ordered high to low, generated by a mirror
/// and the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescendingLine;

/// Symmetries of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSymmetry {
    /// Fix every cell.
    Identity,
    /// Negate every cell.
    Mirror,
}

impl Tiling for DescendingLine {
    type Coord = i64;
    type Order = fn(&i64, &i64) -> Ordering;
    type Generator = LineSymmetry;

    fn origin(&self) -> i64 {
        0
    }

    fn order(&self) -> Self::Order {
        descending
    }

    fn unit_sphere(&self) -> Vec<i64> {
        vec![1, -1]
    }

    fn step(&self, from: &i64, direction: &i64) -> i64 {
        from + direction
    }

    fn generators(&self) -> Vec<LineSymmetry> {
        vec![LineSymmetry::Mirror, LineSymmetry::Identity]
    }

    fn orient(&self, generator: &LineSymmetry, coord: &i64) -> i64 {
        match generator {
            LineSymmetry::Identity => *coord,
            LineSymmetry::Mirror => -coord,
        }
    }
}
