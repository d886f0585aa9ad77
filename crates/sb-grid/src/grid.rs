//! `Grid`: single-occupancy 2-D cell grid.
//!
//! # Layout
//!
//! Occupancy is a flat `Vec<Option<AgentId>>` indexed `y * width + x`.  A
//! reverse map `AgentId → Cell` is kept alongside so moves never need a scan.
//! The grid is the owner of positions; agents only cache a copy.
//!
//! # Enumeration order
//!
//! [`Grid::neighborhood`] walks `dy` in the outer loop and `dx` in the inner
//! loop, both from `-radius` to `+radius`.  On a torus the wrapped coordinate
//! is emitted once, at its first occurrence, so a radius larger than half the
//! grid never yields duplicates.  [`Grid::coord_iter`] walks `x` in the outer
//! loop and `y` in the inner loop.  Both orders are part of the contract:
//! tie-breaking and population seeding depend on them.

#[cfg(not(feature = "fx-hash"))]
use std::collections::{HashMap, HashSet};

#[cfg(feature = "fx-hash")]
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use sb_core::{AgentId, Cell, SimRng};

use crate::{GridError, GridResult};

/// Which cells count as neighbors.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// 8-connected: every cell within Chebyshev distance `radius`.
    #[default]
    Moore,
    /// 4-connected: every cell within Manhattan distance `radius`.
    VonNeumann,
}

pub struct Grid {
    width:    u32,
    height:   u32,
    torus:    bool,
    cells:    Vec<Option<AgentId>>,
    /// Reverse index for O(1) position lookup.
    placed:   HashMap<AgentId, Cell>,
}

impl Grid {
    pub fn new(width: u32, height: u32, torus: bool) -> Self {
        Self {
            width,
            height,
            torus,
            cells:  vec![None; width as usize * height as usize],
            placed: HashMap::default(),
        }
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn extent(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn wraps(&self) -> bool {
        self.torus
    }

    /// Extent fed to the distance metric.  Bounded grids double it so the
    /// wrap branch of the metric never applies.
    #[inline]
    pub fn metric_extent(&self) -> (u32, u32) {
        if self.torus {
            (self.width, self.height)
        } else {
            (self.width.saturating_mul(2), self.height.saturating_mul(2))
        }
    }

    /// Wrap-aware Euclidean distance between two cells of this grid.
    #[inline]
    pub fn distance(&self, a: Cell, b: Cell) -> f64 {
        a.wrapped_distance(b, self.metric_extent())
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn slot(&self, cell: Cell) -> GridResult<usize> {
        if self.contains(cell) {
            Ok(cell.y as usize * self.width as usize + cell.x as usize)
        } else {
            Err(GridError::OutOfBounds(cell))
        }
    }

    // ── Occupancy queries ─────────────────────────────────────────────────

    /// The agent on `cell`, or `None` if empty or out of bounds.
    pub fn occupant(&self, cell: Cell) -> Option<AgentId> {
        self.slot(cell).ok().and_then(|i| self.cells[i])
    }

    /// `true` if `cell` is on the grid and unoccupied.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.slot(cell), Ok(i) if self.cells[i].is_none())
    }

    pub fn position_of(&self, agent: AgentId) -> Option<Cell> {
        self.placed.get(&agent).copied()
    }

    pub fn occupied_count(&self) -> usize {
        self.placed.len()
    }

    pub fn exists_empty_cell(&self) -> bool {
        self.placed.len() < self.cells.len()
    }

    /// All cells in seeding order: `x` outer, `y` inner.
    pub fn coord_iter(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| Cell::new(x, y)))
    }

    /// Every empty cell, in [`coord_iter`](Self::coord_iter) order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.coord_iter().filter(|&c| self.is_empty(c)).collect()
    }

    /// A uniformly random empty cell (one draw), or `None` on a full grid.
    pub fn random_empty_cell(&self, rng: &mut SimRng) -> Option<Cell> {
        let empties = self.empty_cells();
        rng.choose(&empties).copied()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `agent` on `cell`.  Fails if the cell is taken or the agent is
    /// already on the grid.
    pub fn place(&mut self, agent: AgentId, cell: Cell) -> GridResult<()> {
        let i = self.slot(cell)?;
        if let Some(occupant) = self.cells[i] {
            return Err(GridError::CellOccupied { cell, occupant });
        }
        if let Some(&at) = self.placed.get(&agent) {
            return Err(GridError::AlreadyPlaced { agent, at });
        }
        self.cells[i] = Some(agent);
        self.placed.insert(agent, cell);
        Ok(())
    }

    /// Move `agent` to `to` in one step and return the cell it left.
    ///
    /// On error nothing changes.
    pub fn move_agent(&mut self, agent: AgentId, to: Cell) -> GridResult<Cell> {
        let from = self.position_of(agent).ok_or(GridError::NotPlaced(agent))?;
        let dst = self.slot(to)?;
        if let Some(occupant) = self.cells[dst] {
            return Err(GridError::CellOccupied { cell: to, occupant });
        }
        let src = self.slot(from)?;
        self.cells[src] = None;
        self.cells[dst] = Some(agent);
        self.placed.insert(agent, to);
        Ok(from)
    }

    // ── Neighborhoods ─────────────────────────────────────────────────────

    /// Cells around `pos` within `radius`, in deterministic order.
    ///
    /// Bounded grids clip at the edges; toroidal grids wrap and drop repeated
    /// coordinates.  `radius` is clamped to the larger grid side, past which
    /// no new cell can appear.
    pub fn neighborhood(
        &self,
        pos:            Cell,
        connectivity:   Connectivity,
        radius:         u32,
        include_center: bool,
    ) -> Vec<Cell> {
        let r = i64::from(radius.min(self.width.max(self.height)));
        let (w, h) = (self.width as i64, self.height as i64);
        let (x, y) = (pos.x as i64, pos.y as i64);

        let mut seen: HashSet<Cell> = HashSet::default();
        let mut out = Vec::new();
        for dy in -r..=r {
            for dx in -r..=r {
                if dx == 0 && dy == 0 && !include_center {
                    continue;
                }
                if connectivity == Connectivity::VonNeumann && dx.abs() + dy.abs() > r {
                    continue;
                }
                let (mut px, mut py) = (x + dx, y + dy);
                if self.torus {
                    px = px.rem_euclid(w);
                    py = py.rem_euclid(h);
                } else if !(0..w).contains(&px) || !(0..h).contains(&py) {
                    continue;
                }
                let cell = Cell::new(px as u32, py as u32);
                // A wrapped offset can land back on the centre.
                if cell == pos && !include_center {
                    continue;
                }
                if seen.insert(cell) {
                    out.push(cell);
                }
            }
        }
        out
    }
}
