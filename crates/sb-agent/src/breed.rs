//! Agent breed enum shared by every crate that inspects the grid.

/// The variant of an agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Breed {
    Settler,
    Palestinian,
    /// Permanent obstruction created by a violence event.
    Barrier,
    /// Fixed terrain row on the settler side.
    RearGuard,
}

impl Breed {
    /// `true` for breeds the scheduler activates each tick.
    #[inline]
    pub fn has_behavior(self) -> bool {
        matches!(self, Breed::Settler | Breed::Palestinian)
    }

    /// `true` if barrier construction may evict an occupant of this breed.
    #[inline]
    pub fn can_be_displaced(self) -> bool {
        matches!(self, Breed::Palestinian)
    }

    /// `true` for breeds that lower a Palestinian's perceived freedom.
    #[inline]
    pub fn restricts_freedom(self) -> bool {
        matches!(self, Breed::Settler | Breed::RearGuard | Breed::Barrier)
    }

    #[inline]
    pub fn is_terrain(self) -> bool {
        matches!(self, Breed::Barrier | Breed::RearGuard)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Breed::Settler     => "settler",
            Breed::Palestinian => "palestinian",
            Breed::Barrier     => "barrier",
            Breed::RearGuard   => "rear_guard",
        }
    }
}

impl std::fmt::Display for Breed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
