//! Infinite hexagonal lattice in axial coordinates.

use crate::tiling::Tiling;
use smallvec::smallvec;
use tessera_core::coord::translate;
use tessera_core::{Coord, NaturalOrder};

/// Axial neighbour offsets `(dq, dr)`.
const HEX_OFFSETS: [(i32, i32); 6] = [
    (1, 0),  // E
    (1, -1), // NE
    (0, -1), // NW
    (-1, 0), // W
    (-1, 1), // SW
    (0, 1),  // SE
];

/// One symmetry of the hexagon: an optional swap of the `q` and `r` axes
/// followed by sixth turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexSymmetry {
    sixth_turns: u8,
    reflected: bool,
}

impl HexSymmetry {
    /// Rotation by `sixth_turns` sixths of a turn (taken mod 6).
    pub fn rotation(sixth_turns: u8) -> Self {
        Self {
            sixth_turns: sixth_turns % 6,
            reflected: false,
        }
    }

    /// Swap `q` and `r`, then rotate by `sixth_turns` (taken mod 6).
    pub fn reflection(sixth_turns: u8) -> Self {
        Self {
            sixth_turns: sixth_turns % 6,
            reflected: true,
        }
    }

    /// All twelve symmetries: six rotations, then six reflections.
    pub fn all() -> Vec<Self> {
        (0..6)
            .map(Self::rotation)
            .chain((0..6).map(Self::reflection))
            .collect()
    }

    /// Sixth turns applied after any reflection.
    pub fn sixth_turns(&self) -> u8 {
        self.sixth_turns
    }

    /// Whether the symmetry mirrors.
    pub fn is_reflected(&self) -> bool {
        self.reflected
    }

    /// Apply to a `[q, r]` coordinate.
    ///
    /// Coordinates of any other dimension are returned unchanged. Components
    /// wrap on `i32` overflow, so each symmetry stays a bijection.
    pub fn apply(&self, coord: &Coord) -> Coord {
        let &[mut q, mut r] = coord.as_slice() else {
            return coord.clone();
        };
        if self.reflected {
            (q, r) = (r, q);
        }
        for _ in 0..self.sixth_turns {
            (q, r) = (r.wrapping_neg(), q.wrapping_add(r));
        }
        smallvec![q, r]
    }
}

/// The infinite hexagonal lattice.
///
/// Coordinates are axial `[q, r]`, ordered lexicographically. Each cell has
/// six neighbours; a step is vector addition. The default generator set is
/// the full twelve-element symmetry group of the hexagon.
#[derive(Debug, Clone)]
pub struct Hex6 {
    generators: Vec<HexSymmetry>,
}

impl Hex6 {
    /// The hexagonal lattice with all twelve symmetries as generators.
    pub fn new() -> Self {
        Self::with_generators(HexSymmetry::all())
    }

    /// The hexagonal lattice with a chosen generator set.
    pub fn with_generators(generators: Vec<HexSymmetry>) -> Self {
        Self { generators }
    }
}

impl Default for Hex6 {
    fn default() -> Self {
        Self::new()
    }
}

impl Tiling for Hex6 {
    type Coord = Coord;
    type Order = NaturalOrder;
    type Generator = HexSymmetry;

    fn origin(&self) -> Coord {
        smallvec![0, 0]
    }

    fn order(&self) -> NaturalOrder {
        NaturalOrder
    }

    fn unit_sphere(&self) -> Vec<Coord> {
        HEX_OFFSETS
            .iter()
            .map(|&(dq, dr)| smallvec![dq, dr])
            .collect()
    }

    fn step(&self, from: &Coord, direction: &Coord) -> Coord {
        translate(from, direction)
    }

    fn generators(&self) -> Vec<HexSymmetry> {
        self.generators.clone()
    }

    fn orient(&self, generator: &HexSymmetry, coord: &Coord) -> Coord {
        generator.apply(coord)
    }
}
