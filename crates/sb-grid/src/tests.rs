//! Unit tests for sb-grid.
//!
//! All grids are tiny and hand-populated so expected enumeration orders can be
//! written out literally.

#[cfg(test)]
mod occupancy {
    use sb_core::{AgentId, Cell};

    use crate::{Grid, GridError};

    #[test]
    fn place_and_query() {
        let mut g = Grid::new(3, 3, false);
        g.place(AgentId(0), Cell::new(1, 1)).unwrap();
        assert_eq!(g.occupant(Cell::new(1, 1)), Some(AgentId(0)));
        assert!(!g.is_empty(Cell::new(1, 1)));
        assert!(g.is_empty(Cell::new(0, 0)));
        assert_eq!(g.position_of(AgentId(0)), Some(Cell::new(1, 1)));
        assert_eq!(g.occupied_count(), 1);
    }

    #[test]
    fn place_on_occupied_cell_fails() {
        let mut g = Grid::new(3, 3, false);
        g.place(AgentId(0), Cell::new(1, 1)).unwrap();
        let err = g.place(AgentId(1), Cell::new(1, 1)).unwrap_err();
        assert!(matches!(err, GridError::CellOccupied { occupant: AgentId(0), .. }));
        assert_eq!(g.occupied_count(), 1);
    }

    #[test]
    fn double_place_fails() {
        let mut g = Grid::new(3, 3, false);
        g.place(AgentId(0), Cell::new(0, 0)).unwrap();
        assert!(matches!(
            g.place(AgentId(0), Cell::new(2, 2)),
            Err(GridError::AlreadyPlaced { .. })
        ));
    }

    #[test]
    fn out_of_bounds_fails() {
        let mut g = Grid::new(3, 3, true);
        assert!(matches!(
            g.place(AgentId(0), Cell::new(3, 0)),
            Err(GridError::OutOfBounds(_))
        ));
        assert!(!g.is_empty(Cell::new(5, 5)));
        assert_eq!(g.occupant(Cell::new(5, 5)), None);
    }

    #[test]
    fn move_is_atomic() {
        let mut g = Grid::new(3, 3, false);
        g.place(AgentId(0), Cell::new(0, 0)).unwrap();
        g.place(AgentId(1), Cell::new(2, 2)).unwrap();

        let from = g.move_agent(AgentId(0), Cell::new(1, 0)).unwrap();
        assert_eq!(from, Cell::new(0, 0));
        assert!(g.is_empty(Cell::new(0, 0)));
        assert_eq!(g.occupant(Cell::new(1, 0)), Some(AgentId(0)));

        // Blocked move leaves everything untouched.
        assert!(g.move_agent(AgentId(0), Cell::new(2, 2)).is_err());
        assert_eq!(g.position_of(AgentId(0)), Some(Cell::new(1, 0)));
        assert_eq!(g.occupant(Cell::new(2, 2)), Some(AgentId(1)));
    }

    #[test]
    fn move_unplaced_agent_fails() {
        let mut g = Grid::new(3, 3, false);
        assert!(matches!(
            g.move_agent(AgentId(9), Cell::new(0, 0)),
            Err(GridError::NotPlaced(AgentId(9)))
        ));
    }

    #[test]
    fn empty_cell_bookkeeping() {
        let mut g = Grid::new(2, 1, false);
        assert!(g.exists_empty_cell());
        g.place(AgentId(0), Cell::new(0, 0)).unwrap();
        assert_eq!(g.empty_cells(), vec![Cell::new(1, 0)]);
        g.place(AgentId(1), Cell::new(1, 0)).unwrap();
        assert!(!g.exists_empty_cell());
        assert!(g.empty_cells().is_empty());
    }

    #[test]
    fn random_empty_cell_on_full_grid() {
        let mut g = Grid::new(1, 1, false);
        g.place(AgentId(0), Cell::new(0, 0)).unwrap();
        let mut rng = sb_core::SimRng::new(1);
        assert!(g.random_empty_cell(&mut rng).is_none());
    }

    #[test]
    fn coord_iter_is_x_major() {
        let g = Grid::new(2, 2, false);
        let cells: Vec<_> = g.coord_iter().collect();
        assert_eq!(
            cells,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
        );
    }
}

#[cfg(test)]
mod neighborhood {
    use sb_core::Cell;

    use crate::{Connectivity, Grid};

    #[test]
    fn moore_order_interior() {
        let g = Grid::new(3, 3, false);
        let n = g.neighborhood(Cell::new(1, 1), Connectivity::Moore, 1, false);
        assert_eq!(
            n,
            vec![
                Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0),
                Cell::new(0, 1),                  Cell::new(2, 1),
                Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2),
            ]
        );
    }

    #[test]
    fn oversized_radius_is_clamped() {
        let g = Grid::new(3, 3, false);
        let all = g.neighborhood(Cell::new(1, 1), Connectivity::Moore, 3, false);
        assert_eq!(all.len(), 8);
        assert_eq!(g.neighborhood(Cell::new(1, 1), Connectivity::Moore, u32::MAX, false), all);

        let t = Grid::new(5, 2, true);
        let wrapped = t.neighborhood(Cell::new(0, 0), Connectivity::VonNeumann, u32::MAX, true);
        assert_eq!(wrapped.len(), 10);
    }

    #[test]
    fn bounded_corner_is_clipped() {
        let g = Grid::new(3, 3, false);
        let n = g.neighborhood(Cell::new(0, 0), Connectivity::Moore, 1, false);
        assert_eq!(n, vec![Cell::new(1, 0), Cell::new(0, 1), Cell::new(1, 1)]);
    }

    #[test]
    fn torus_corner_wraps() {
        let g = Grid::new(4, 4, true);
        let n = g.neighborhood(Cell::new(0, 0), Connectivity::Moore, 1, false);
        assert_eq!(n.len(), 8);
        assert_eq!(n[0], Cell::new(3, 3));
        assert!(n.contains(&Cell::new(3, 0)));
        assert!(n.contains(&Cell::new(0, 3)));
    }

    #[test]
    fn torus_large_radius_has_no_duplicates() {
        let g = Grid::new(3, 3, true);
        let n = g.neighborhood(Cell::new(1, 1), Connectivity::Moore, 3, false);
        // Every cell but the centre, once each.
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Cell::new(1, 1)));

        let with_center = g.neighborhood(Cell::new(1, 1), Connectivity::Moore, 3, true);
        assert_eq!(with_center.len(), 9);
    }

    #[test]
    fn include_center() {
        let g = Grid::new(3, 3, false);
        let n = g.neighborhood(Cell::new(1, 1), Connectivity::Moore, 1, true);
        assert_eq!(n.len(), 9);
        assert_eq!(n[4], Cell::new(1, 1));
    }

    #[test]
    fn von_neumann() {
        let g = Grid::new(5, 5, false);
        let n = g.neighborhood(Cell::new(2, 2), Connectivity::VonNeumann, 1, false);
        assert_eq!(
            n,
            vec![Cell::new(2, 1), Cell::new(1, 2), Cell::new(3, 2), Cell::new(2, 3)]
        );
        let n2 = g.neighborhood(Cell::new(2, 2), Connectivity::VonNeumann, 2, false);
        assert_eq!(n2.len(), 12);
    }

    #[test]
    fn enumeration_is_stable() {
        let g = Grid::new(7, 5, true);
        let a = g.neighborhood(Cell::new(6, 4), Connectivity::Moore, 2, false);
        let b = g.neighborhood(Cell::new(6, 4), Connectivity::Moore, 2, false);
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod ranking {
    use sb_core::Cell;

    use crate::{furthest_first, nearest_first, Connectivity, Grid};

    #[test]
    fn torus_distance_across_seam() {
        let g = Grid::new(10, 10, true);
        assert_eq!(g.distance(Cell::new(0, 0), Cell::new(9, 0)), 1.0);
        let bounded = Grid::new(10, 10, false);
        assert_eq!(bounded.distance(Cell::new(0, 0), Cell::new(9, 0)), 9.0);
    }

    #[test]
    fn furthest_ties_keep_enumeration_order() {
        let g = Grid::new(9, 9, false);
        let anchor = Cell::new(4, 4);
        let cells = g.neighborhood(anchor, Connectivity::Moore, 2, false);
        let ranked = furthest_first(anchor, &cells, g.metric_extent());
        // The four corners at distance 2√2 come first, in enumeration order.
        assert_eq!(
            &ranked[..4],
            &[Cell::new(2, 2), Cell::new(6, 2), Cell::new(2, 6), Cell::new(6, 6)]
        );
    }

    #[test]
    fn nearest_puts_orthogonals_before_diagonals() {
        let g = Grid::new(5, 5, false);
        let anchor = Cell::new(2, 2);
        let cells = g.neighborhood(anchor, Connectivity::Moore, 1, true);
        let ranked = nearest_first(anchor, &cells, g.metric_extent());
        assert_eq!(ranked[0], anchor);
        assert_eq!(
            &ranked[1..5],
            &[Cell::new(2, 1), Cell::new(1, 2), Cell::new(3, 2), Cell::new(2, 3)]
        );
    }

    #[test]
    fn ranking_is_deterministic() {
        let g = Grid::new(6, 6, true);
        let anchor = Cell::new(0, 5);
        let cells = g.neighborhood(anchor, Connectivity::Moore, 2, false);
        let a = furthest_first(anchor, &cells, g.metric_extent());
        let b = furthest_first(anchor, &cells, g.metric_extent());
        assert_eq!(a, b);
    }
}
