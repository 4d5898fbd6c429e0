//! Grid invariant test helpers.
//!
//! These functions verify that a grid built from a tiling satisfies the
//! invariants every [`Grid`] promises. Reused across the tiling test
//! modules (Square4, Hex6).

use crate::grid::Grid;
use crate::tiling::Tiling;
use std::sync::Arc;

/// Assert that every cached cell is the cell `lookup` returns for it.
pub fn assert_cells_canonical<T: Tiling>(grid: &Grid<T>) {
    for cell in grid.cells() {
        let found = grid
            .lookup(cell)
            .unwrap_or_else(|| panic!("cached cell {:?} not found by lookup", **cell));
        assert!(Arc::ptr_eq(found, cell), "lookup({:?}) returned a copy", **cell);
    }
}

/// Assert that the cache and the unit sphere are strictly ascending.
pub fn assert_strictly_ordered<T: Tiling>(grid: &Grid<T>) {
    use tessera_core::Comparator;
    let order = grid.tiling().order();
    let cells: Vec<_> = grid.cells().collect();
    for pair in cells.windows(2) {
        assert!(
            order.compare(pair[0], pair[1]).is_lt(),
            "cache out of order: {:?} before {:?}",
            **pair[0],
            **pair[1]
        );
    }
    for pair in grid.unit_sphere().windows(2) {
        assert!(order.compare(&pair[0], &pair[1]).is_lt());
    }
}

/// Assert that `unify` on a coordinate already cached returns that cell.
pub fn assert_unify_idempotent<T: Tiling>(grid: &mut Grid<T>) {
    let cells: Vec<_> = grid.cells().cloned().collect();
    let before = grid.cell_count();
    for cell in cells {
        let again = grid.unify((*cell).clone());
        assert!(Arc::ptr_eq(&again, &cell), "unify({:?}) made a new cell", *cell);
    }
    assert_eq!(grid.cell_count(), before);
}

/// Assert that reverse is an involution on canonical directions and that
/// stepping out and back returns to the canonical origin.
pub fn assert_reverse_involution<T: Tiling>(grid: &mut Grid<T>) {
    let sphere = grid.unit_sphere().to_vec();
    let origin = grid.origin().clone();
    for direction in &sphere {
        let reverse = grid
            .reverse_of(direction)
            .unwrap_or_else(|| panic!("no reverse for {:?}", **direction))
            .clone();
        assert!(grid.is_direction(&reverse));
        let back = grid.reverse_of(&reverse).map(Arc::clone);
        assert!(
            back.is_some_and(|back| Arc::ptr_eq(&back, direction)),
            "reverse of reverse of {:?} is not itself",
            **direction
        );
        let there = grid.step(&origin, direction);
        let home = grid.step(&there, &reverse);
        assert!(Arc::ptr_eq(&home, &origin), "{:?} then back missed the origin", **direction);
    }
}

/// Assert that every generator permutes the canonical unit sphere.
pub fn assert_generators_permute_sphere<T: Tiling>(grid: &Grid<T>) {
    let sphere = grid.unit_sphere();
    for orientation in grid.orientations() {
        assert_eq!(orientation.action().len(), sphere.len());
        let mut hit = vec![false; sphere.len()];
        for (_, image) in orientation.action().iter() {
            let slot = sphere
                .iter()
                .position(|d| Arc::ptr_eq(d, image))
                .unwrap_or_else(|| panic!("{orientation:?} leaves the sphere"));
            assert!(!hit[slot], "{orientation:?} is not injective");
            hit[slot] = true;
        }
    }
}

/// Assert that the closed orientation group has a full product table, an
/// identity and inverses.
pub fn assert_group_closed<T: Tiling>(grid: &mut Grid<T>) {
    let group = grid.close_orientations().expect("closure failed");
    let n = group.order();
    let identity = group.identity().expect("no identity").index();
    for a in 0..n {
        for b in 0..n {
            assert!(group.product(a, b).is_some(), "missing product ({a}, {b})");
        }
        let inverse = group.inverse(a).expect("no inverse");
        let back = group.product(inverse.index(), a).expect("missing product");
        assert_eq!(back.index(), identity);
    }
}

/// Run all compliance checks.
pub fn run_full_compliance<T: Tiling>(grid: &mut Grid<T>) {
    assert_cells_canonical(grid);
    assert_strictly_ordered(grid);
    assert_unify_idempotent(grid);
    assert_reverse_involution(grid);
    assert_generators_permute_sphere(grid);
    assert_group_closed(grid);
    assert_cells_canonical(grid);
    assert_strictly_ordered(grid);
}
