//! Distance ranking of candidate cells.
//!
//! Both orderings use a stable sort so cells at equal distance keep the order
//! in which the neighborhood enumeration produced them.  Barrier placement and
//! relocation pick the first acceptable cell from these rankings, which makes
//! them reproducible under a fixed seed.

use sb_core::Cell;

/// `cells` ordered by ascending distance from `anchor`.
pub fn nearest_first(anchor: Cell, cells: &[Cell], extent: (u32, u32)) -> Vec<Cell> {
    let mut ranked: Vec<(Cell, f64)> = cells
        .iter()
        .map(|&c| (c, anchor.wrapped_distance(c, extent)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.into_iter().map(|(c, _)| c).collect()
}

/// `cells` ordered by descending distance from `anchor`.
pub fn furthest_first(anchor: Cell, cells: &[Cell], extent: (u32, u32)) -> Vec<Cell> {
    let mut ranked: Vec<(Cell, f64)> = cells
        .iter()
        .map(|&c| (c, anchor.wrapped_distance(c, extent)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().map(|(c, _)| c).collect()
}
