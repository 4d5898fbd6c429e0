//! Infinite 2D square grid with 4-connected neighbourhood (N/S/E/W).

use crate::tiling::Tiling;
use smallvec::smallvec;
use tessera_core::coord::translate;
use tessera_core::{Coord, NaturalOrder};

/// Unit steps: north, east, south, west.
const SQUARE_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// One symmetry of the square: an optional mirror across the vertical
/// axis followed by clockwise quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SquareSymmetry {
    quarter_turns: u8,
    reflected: bool,
}

impl SquareSymmetry {
    /// Clockwise rotation by `quarter_turns` quarter turns (taken mod 4).
    pub fn rotation(quarter_turns: u8) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            reflected: false,
        }
    }

    /// Mirror `x`, then rotate clockwise by `quarter_turns` (taken mod 4).
    pub fn reflection(quarter_turns: u8) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            reflected: true,
        }
    }

    /// All eight symmetries: the four rotations, then the four reflections.
    pub fn all() -> Vec<Self> {
        (0..4)
            .map(Self::rotation)
            .chain((0..4).map(Self::reflection))
            .collect()
    }

    /// Clockwise quarter turns applied after any mirroring.
    pub fn quarter_turns(&self) -> u8 {
        self.quarter_turns
    }

    /// Whether the symmetry mirrors.
    pub fn is_reflected(&self) -> bool {
        self.reflected
    }

    /// Apply to a `[x, y]` coordinate.
    ///
    /// Coordinates of any other dimension are returned unchanged. Components
    /// wrap on `i32` overflow, so each symmetry stays a bijection.
    pub fn apply(&self, coord: &Coord) -> Coord {
        let &[mut x, mut y] = coord.as_slice() else {
            return coord.clone();
        };
        if self.reflected {
            x = x.wrapping_neg();
        }
        for _ in 0..self.quarter_turns {
            (x, y) = (y, x.wrapping_neg());
        }
        smallvec![x, y]
    }
}

/// The infinite square lattice.
///
/// Coordinates are `[x, y]`, ordered lexicographically. The unit sphere is
/// the four cardinal steps and a step is vector addition.
///
/// # Examples
///
/// ```
/// use smallvec::smallvec;
/// use tessera_core::Coord;
/// use tessera_grid::{Square4, SquareSymmetry, Tiling};
///
/// let square = Square4::new();
/// assert_eq!(square.unit_sphere().len(), 4);
/// assert_eq!(square.generators().len(), 8);
///
/// let east: Coord = smallvec![1, 0];
/// let south: Coord = smallvec![0, -1];
/// assert_eq!(square.orient(&SquareSymmetry::rotation(1), &east), south);
/// ```
#[derive(Debug, Clone)]
pub struct Square4 {
    generators: Vec<SquareSymmetry>,
}

impl Square4 {
    /// The square lattice with all eight symmetries as generators.
    pub fn new() -> Self {
        Self::with_generators(SquareSymmetry::all())
    }

    /// The square lattice with a chosen generator set.
    pub fn with_generators(generators: Vec<SquareSymmetry>) -> Self {
        Self { generators }
    }
}

impl Default for Square4 {
    fn default() -> Self {
        Self::new()
    }
}

impl Tiling for Square4 {
    type Coord = Coord;
    type Order = NaturalOrder;
    type Generator = SquareSymmetry;

    fn origin(&self) -> Coord {
        smallvec![0, 0]
    }

    fn order(&self) -> NaturalOrder {
        NaturalOrder
    }

    fn unit_sphere(&self) -> Vec<Coord> {
        SQUARE_OFFSETS
            .iter()
            .map(|&(dx, dy)| smallvec![dx, dy])
            .collect()
    }

    fn step(&self, from: &Coord, direction: &Coord) -> Coord {
        translate(from, direction)
    }

    fn generators(&self) -> Vec<SquareSymmetry> {
        self.generators.clone()
    }

    fn orient(&self, generator: &SquareSymmetry, coord: &Coord) -> Coord {
        generator.apply(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        smallvec![x, y]
    }

    #[test]
    fn quarter_turn_is_clockwise() {
        let turn = SquareSymmetry::rotation(1);
        assert_eq!(turn.apply(&c(0, 1)), c(1, 0));
        assert_eq!(turn.apply(&c(1, 0)), c(0, -1));
        assert_eq!(turn.apply(&c(0, -1)), c(-1, 0));
        assert_eq!(turn.apply(&c(-1, 0)), c(0, 1));
    }

    #[test]
    fn rotation_wraps_mod_four() {
        assert_eq!(SquareSymmetry::rotation(5), SquareSymmetry::rotation(1));
        assert_eq!(SquareSymmetry::rotation(4).apply(&c(3, -2)), c(3, -2));
    }

    #[test]
    fn reflection_mirrors_before_turning() {
        let mirror = SquareSymmetry::reflection(0);
        assert_eq!(mirror.apply(&c(2, 5)), c(-2, 5));
        let mirror_turn = SquareSymmetry::reflection(1);
        assert_eq!(mirror_turn.apply(&c(1, 0)), c(0, 1));
        assert!(mirror_turn.is_reflected());
        assert_eq!(mirror_turn.quarter_turns(), 1);
    }

    #[test]
    fn non_planar_coords_pass_through() {
        let line: Coord = smallvec![5];
        let cube: Coord = smallvec![1, 2, 3];
        for symmetry in SquareSymmetry::all() {
            assert_eq!(symmetry.apply(&line), line);
            assert_eq!(symmetry.apply(&cube), cube);
        }
    }

    #[test]
    fn symmetries_wrap_at_the_edge() {
        let edge = c(i32::MIN, i32::MAX);
        assert_eq!(SquareSymmetry::reflection(0).apply(&edge), c(i32::MIN, i32::MAX));
        assert_eq!(SquareSymmetry::rotation(1).apply(&edge), c(i32::MAX, i32::MIN));
        for symmetry in SquareSymmetry::all() {
            let mut at = symmetry.apply(&edge);
            for _ in 1..4 {
                at = symmetry.apply(&at);
            }
            // Every square symmetry has order dividing 4.
            assert_eq!(at, edge, "{symmetry:?}");
        }
    }

    #[test]
    fn all_symmetries_act_distinctly_on_directions() {
        let square = Square4::new();
        let sphere = square.unit_sphere();
        let actions: Vec<Vec<Coord>> = SquareSymmetry::all()
            .iter()
            .map(|s| sphere.iter().map(|d| s.apply(d)).collect())
            .collect();
        for (i, a) in actions.iter().enumerate() {
            for b in &actions[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_direction_has_its_negation() {
        let sphere = Square4::new().unit_sphere();
        for d in &sphere {
            let negated = tessera_core::coord::negate(d);
            assert!(sphere.contains(&negated));
        }
    }

    #[test]
    fn step_adds() {
        let square = Square4::default();
        assert_eq!(square.step(&c(3, 4), &c(-1, 0)), c(2, 4));
        assert_eq!(square.origin(), c(0, 0));
    }
}
