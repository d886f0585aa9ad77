//! Model-wide violence counters.

/// Violence counted this tick and over the whole run.
///
/// `this_tick` is zeroed by [`begin_tick`](Self::begin_tick) and folded into
/// `cumulative` by [`end_tick`](Self::end_tick).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViolenceTally {
    pub this_tick:  u64,
    pub cumulative: u64,
}

impl ViolenceTally {
    #[inline]
    pub fn begin_tick(&mut self) {
        self.this_tick = 0;
    }

    #[inline]
    pub fn record(&mut self, amount: u64) {
        self.this_tick += amount;
    }

    #[inline]
    pub fn end_tick(&mut self) {
        self.cumulative += self.this_tick;
    }
}
