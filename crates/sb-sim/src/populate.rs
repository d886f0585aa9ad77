//! Initial population of the grid.
//!
//! The grid is split at the horizontal midline:
//!
//! | Region                          | Draw                                   |
//! |---------------------------------|----------------------------------------|
//! | top row, `rear_guard` set       | RearGuard, no draw                     |
//! | `y >= height / 2`               | Settler at `settler_region_density`    |
//! | `y < height / 2`                | Palestinian at `palestinian_density`   |
//! | ... failing that, near midline  | Settler at `settlement_density`        |
//!
//! "Near midline" means `y > (height / 2) · (1 − settlement_density)`, so the
//! settlement band grows downward as the density rises.  Cells are visited
//! x-outer, y-inner, and each region condition is checked before its draw so
//! skipped cells consume no randomness.

use sb_core::Cell;
use sb_behavior::{BehaviorResult, World};
use tracing::debug;

/// Fill an empty `world` from its parameters, drawing from `world.rng`.
pub fn populate(world: &mut World) -> BehaviorResult<()> {
    let params = world.params.clone();
    let (width, height) = world.grid.extent();

    if params.rear_guard && height > 0 {
        for x in 0..width {
            world.spawn_rear_guard(Cell::new(x, height - 1))?;
        }
    }

    let half = f64::from(height) / 2.0;
    let settlement_floor = half * (1.0 - params.settlement_density);
    let cells: Vec<Cell> = world.grid.coord_iter().collect();
    for cell in cells {
        if !world.grid.is_empty(cell) {
            continue;
        }
        let y = f64::from(cell.y);
        if y < half {
            if world.rng.uniform() < params.palestinian_density {
                world.spawn_palestinian(cell)?;
            } else if y > settlement_floor && world.rng.uniform() < params.settlement_density {
                world.spawn_settler(cell)?;
            }
        } else if world.rng.uniform() < params.settler_region_density {
            world.spawn_settler(cell)?;
        }
    }

    debug!(agents = world.agents.len(), "population seeded");
    Ok(())
}
