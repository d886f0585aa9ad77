//! Model parameters.
//!
//! Every tunable of the barrier model is a plain named field; there is no
//! file format.  Applications fill a `ModelParams` (usually starting from
//! `Default`) and hand it to the simulation builder, which calls
//! [`ModelParams::validate`] before seeding the grid.

use crate::{SbError, SbResult};

/// Tunable parameters of the barrier model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelParams {
    // ── Grid ──────────────────────────────────────────────────────────────
    pub width:  u32,
    pub height: u32,
    /// Toroidal wrap on both axes.
    pub torus:  bool,
    /// Fill the top row (`y = height - 1`) with rear-guard terrain.
    pub rear_guard: bool,

    // ── Population seeding ────────────────────────────────────────────────
    /// Settler density in the upper (settler) half of the grid.
    pub settler_region_density: f64,
    /// Palestinian density in the lower half of the grid.
    pub palestinian_density:    f64,
    /// Density of settlements pushed into the lower half near the midline.
    pub settlement_density:     f64,

    // ── Perception ────────────────────────────────────────────────────────
    pub settler_vision:     u32,
    pub palestinian_vision: u32,

    // ── Settler behavior ──────────────────────────────────────────────────
    /// Per-tick probability that a settler with a Palestinian in sight attacks.
    pub settler_violence_rate: f64,
    /// Per-tick probability that a settler with an empty neighbor cell spawns
    /// a new settler there.  0 disables growth.
    pub settler_growth_rate:   f64,

    // ── Palestinian behavior ──────────────────────────────────────────────
    /// Fraction of the violence probability that resolves as suicide.
    pub suicide_rate:      f64,
    /// Violence tally added by one suicide event.
    pub suicide_penalty:   u64,
    /// Anger lost per tick (never below zero).
    pub anger_decay:       f64,
    /// Anger gained when a Palestinian is attacked.
    pub anger_increment:   f64,
    /// k₁: saturation speed of `1 - exp(-k₁ · pressure)`.
    pub violence_scale:    f64,
    /// c: weight of local occupation `(1 - freedom)` in the pressure term.
    pub occupation_weight: f64,
    /// k₂: weight of accumulated anger in the pressure term.
    pub anger_weight:      f64,

    // ── Barrier placement ─────────────────────────────────────────────────
    /// 0 builds the barrier on the attacker's own cell.  `g > 0` searches
    /// radius `g + 1` around the attacked settler for the furthest free or
    /// Palestinian-held cell.
    pub greed_level: u32,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            width:                  40,
            height:                 40,
            torus:                  true,
            rear_guard:             true,
            settler_region_density: 0.3,
            palestinian_density:    0.3,
            settlement_density:     0.3,
            settler_vision:         1,
            palestinian_vision:     1,
            settler_violence_rate:  0.01,
            settler_growth_rate:    0.0,
            suicide_rate:           0.1,
            suicide_penalty:        5,
            anger_decay:            0.05,
            anger_increment:        1.0,
            violence_scale:         0.01,
            occupation_weight:      1.0,
            anger_weight:           1.0,
            greed_level:            1,
        }
    }
}

impl ModelParams {
    /// Reject parameter sets the model cannot run with.
    pub fn validate(&self) -> SbResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SbError::Config(format!(
                "grid extent must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.settler_vision == 0 || self.palestinian_vision == 0 {
            return Err(SbError::Config("vision radius must be at least 1".into()));
        }

        // No radius may exceed the larger grid side.
        let max_radius = self.width.max(self.height);
        let radii = [
            ("settler_vision",     self.settler_vision),
            ("palestinian_vision", self.palestinian_vision),
            ("greed_level + 1",    self.greed_level.saturating_add(1)),
        ];
        for (name, value) in radii {
            if value > max_radius {
                return Err(SbError::Config(format!(
                    "{name} must be at most {max_radius} on a {}x{} grid, got {value}",
                    self.width, self.height
                )));
            }
        }

        let unit = [
            ("settler_region_density", self.settler_region_density),
            ("palestinian_density",    self.palestinian_density),
            ("settlement_density",     self.settlement_density),
            ("settler_violence_rate",  self.settler_violence_rate),
            ("settler_growth_rate",    self.settler_growth_rate),
            ("suicide_rate",           self.suicide_rate),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(SbError::Config(format!("{name} must be in [0, 1], got {value}")));
            }
        }

        let non_negative = [
            ("anger_decay",       self.anger_decay),
            ("anger_increment",   self.anger_increment),
            ("violence_scale",    self.violence_scale),
            ("occupation_weight", self.occupation_weight),
            ("anger_weight",      self.anger_weight),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(SbError::Config(format!("{name} must be finite and >= 0, got {value}")));
            }
        }
        Ok(())
    }

    /// Number of cells on the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
