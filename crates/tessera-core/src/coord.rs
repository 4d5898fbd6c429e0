//! The [`Coord`] type used by the stock tilings.

use smallvec::SmallVec;

/// An integer lattice coordinate.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for lattices up to
/// 4 dimensions. Its `Ord` is lexicographic, which is the order the stock
/// square and hexagonal tilings use to canonicalize cells.
pub type Coord = SmallVec<[i32; 4]>;

/// Componentwise sum of two coordinates.
///
/// A component missing from the shorter operand counts as zero, so the
/// result has the dimension of the longer one. Components wrap on `i32`
/// overflow, which keeps `translate(translate(a, b), negate(b)) == a` for
/// every input.
pub fn translate(from: &Coord, by: &Coord) -> Coord {
    let dim = from.len().max(by.len());
    (0..dim)
        .map(|i| {
            let a = from.get(i).copied().unwrap_or(0);
            let b = by.get(i).copied().unwrap_or(0);
            a.wrapping_add(b)
        })
        .collect()
}

/// Componentwise negation, wrapping `i32::MIN` onto itself.
pub fn negate(coord: &Coord) -> Coord {
    coord.iter().map(|a| a.wrapping_neg()).collect()
}
