//! Unit tests for sb-agent.

#[cfg(test)]
mod breed {
    use crate::Breed;

    #[test]
    fn only_people_act() {
        assert!(Breed::Settler.has_behavior());
        assert!(Breed::Palestinian.has_behavior());
        assert!(!Breed::Barrier.has_behavior());
        assert!(!Breed::RearGuard.has_behavior());
    }

    #[test]
    fn only_palestinians_are_displaceable() {
        assert!(Breed::Palestinian.can_be_displaced());
        assert!(!Breed::Settler.can_be_displaced());
        assert!(!Breed::Barrier.can_be_displaced());
        assert!(!Breed::RearGuard.can_be_displaced());
    }

    #[test]
    fn freedom_restrictors() {
        assert!(Breed::Settler.restricts_freedom());
        assert!(Breed::Barrier.restricts_freedom());
        assert!(Breed::RearGuard.restricts_freedom());
        assert!(!Breed::Palestinian.restricts_freedom());
    }

    #[test]
    fn display() {
        assert_eq!(Breed::RearGuard.to_string(), "rear_guard");
        assert_eq!(Breed::Palestinian.to_string(), "palestinian");
    }
}

#[cfg(test)]
mod agent {
    use sb_core::Cell;

    use crate::{AgentKind, AgentStore, Breed, PalestinianState, SettlerState};

    #[test]
    fn anger_never_negative() {
        let mut p = PalestinianState { anger: 0.3, ..Default::default() };
        p.decay_anger(0.2);
        assert!((p.anger - 0.1).abs() < 1e-12);
        p.decay_anger(0.2);
        assert_eq!(p.anger, 0.0);
        p.decay_anger(0.2);
        assert_eq!(p.anger, 0.0);
    }

    #[test]
    fn add_anger_ignores_negative_steps() {
        let mut p = PalestinianState::default();
        p.add_anger(1.0);
        p.add_anger(-5.0);
        assert_eq!(p.anger, 1.0);
    }

    #[test]
    fn reset_clears_transient_only() {
        let mut store = AgentStore::new();
        let id = store.spawn(
            AgentKind::Palestinian(PalestinianState {
                violent: true,
                victim:  true,
                suicide: true,
                anger:   2.0,
                ..Default::default()
            }),
            Cell::new(0, 0),
            1,
        )
        .unwrap();
        store.reset_transient();
        let p = store.get(id).unwrap().as_palestinian().unwrap();
        assert!(!p.violent && !p.victim && !p.suicide);
        assert_eq!(p.anger, 2.0);
    }

    #[test]
    fn snapshot_reports_flags() {
        let mut store = AgentStore::new();
        let id = store.spawn(
            AgentKind::Settler(SettlerState { violent: true, victim: false }),
            Cell::new(4, 2),
            1,
        )
        .unwrap();
        let snap = store.get(id).unwrap().snapshot();
        assert_eq!(snap.breed, Breed::Settler);
        assert_eq!((snap.x, snap.y), (4, 2));
        assert!(snap.violent);
        assert!(!snap.victim);
        assert_eq!(snap.freedom, 1.0);
    }
}

#[cfg(test)]
mod store {
    use sb_core::{AgentId, Cell, SbError};

    use crate::store::next_id;
    use crate::{AgentKind, AgentStore, Breed, SettlerState};

    #[test]
    fn ids_are_monotonic() {
        let mut store = AgentStore::new();
        let a = store.spawn(AgentKind::Barrier, Cell::new(0, 0), 1).unwrap();
        let b = store.spawn(AgentKind::RearGuard, Cell::new(1, 0), 1).unwrap();
        let c = store.spawn(AgentKind::Settler(SettlerState::default()), Cell::new(2, 0), 1).unwrap();
        assert_eq!((a, b, c), (AgentId(0), AgentId(1), AgentId(2)));
        assert_eq!(store.agent_ids().collect::<Vec<_>>(), vec![a, b, c]);
    }

    #[test]
    fn id_overflow_is_an_error() {
        assert_eq!(next_id(u32::MAX as usize).unwrap(), AgentId(u32::MAX));
        let issued = u32::MAX as usize + 1;
        assert!(matches!(next_id(issued), Err(SbError::IdSpaceExhausted(n)) if n == issued));
    }

    #[test]
    fn unknown_id_errors() {
        let store = AgentStore::new();
        assert!(matches!(store.get(AgentId(3)), Err(SbError::AgentNotFound(AgentId(3)))));
        assert!(store.breed_of(AgentId(3)).is_none());
    }

    #[test]
    fn count_by_breed() {
        let mut store = AgentStore::with_capacity(4);
        store.spawn(AgentKind::Barrier, Cell::new(0, 0), 1).unwrap();
        store.spawn(AgentKind::Barrier, Cell::new(1, 0), 1).unwrap();
        store.spawn(AgentKind::Settler(SettlerState::default()), Cell::new(2, 0), 1).unwrap();
        assert_eq!(store.count_breed(Breed::Barrier), 2);
        assert_eq!(store.count_breed(Breed::Settler), 1);
        assert_eq!(store.count_breed(Breed::Palestinian), 0);
        assert_eq!(store.len(), 3);
    }
}
