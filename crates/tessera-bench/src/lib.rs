//! Benchmark profiles and utilities for the Tessera grid workspace.
//!
//! Provides deterministic workloads shared by the criterion benches:
//!
//! - [`scrambled_keys`]: a reproducible permutation-like key sequence
//! - [`random_walk`]: deterministic direction indices for grid walks
//! - [`reference_grid`] / [`verified_grid`]: pre-built hexagonal grids

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use smallvec::smallvec;
use tessera_core::Coord;
use tessera_grid::{Grid, GridConfig, GridError, Hex6};

const MULTIPLIER: u64 = 6364136223846793005;
const INCREMENT: u64 = 1442695040888963407;

fn lcg(state: u64) -> u64 {
    state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT)
}

/// Generate `n` deterministic keys in `0..range`, seeded by `seed`.
///
/// Duplicates are expected once `n` approaches `range`, which is what the
/// `unify` benches want.
pub fn scrambled_keys(n: usize, range: u64, seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = lcg(state);
            (state >> 33) % range.max(1)
        })
        .collect()
}

/// Generate `len` direction indices in `0..width`, seeded by `seed`.
pub fn random_walk(len: usize, width: usize, seed: u64) -> Vec<usize> {
    scrambled_keys(len, width as u64, seed)
        .into_iter()
        .map(|k| k as usize)
        .collect()
}

/// Square coordinates of a `side` x `side` block anchored at the origin.
pub fn block(side: i32) -> Vec<Coord> {
    (0..side)
        .flat_map(|x| (0..side).map(move |y| smallvec![x, y]))
        .collect()
}

/// A hexagonal grid with default options.
pub fn reference_grid() -> Result<Grid<Hex6>, GridError> {
    Grid::new(Hex6::new())
}

/// A hexagonal grid that verifies and closes its orientations on build.
pub fn verified_grid(depth: usize) -> Result<Grid<Hex6>, GridError> {
    Grid::with_config(
        Hex6::new(),
        GridConfig {
            verify_orientations: true,
            close_orientations: true,
            verify_path_depth: depth,
            ..Default::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrambled_keys_deterministic() {
        let a = scrambled_keys(100, 1000, 42);
        let b = scrambled_keys(100, 1000, 42);
        assert_eq!(a, b);
        assert!(a.iter().all(|&k| k < 1000));
        assert_ne!(a, scrambled_keys(100, 1000, 43));
    }

    #[test]
    fn random_walk_stays_in_range() {
        let walk = random_walk(500, 6, 7);
        assert_eq!(walk.len(), 500);
        assert!(walk.iter().all(|&i| i < 6));
    }

    #[test]
    fn block_has_side_squared_cells() {
        assert_eq!(block(10).len(), 100);
    }

    #[test]
    fn profiles_build() {
        assert_eq!(reference_grid().unwrap().cell_count(), 7);
        assert_eq!(verified_grid(2).unwrap().group().unwrap().order(), 12);
    }
}
