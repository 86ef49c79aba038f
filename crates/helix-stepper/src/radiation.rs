// ─────────────────────────────────────────────────────────────────────
// SCPN Helix Core — Radiation Reaction Hook
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Velocity correction applied after each step.
//!
//! No energy-loss model ships with the stepper. `NoRadiation` is the
//! identity and is what every stepper uses unless a host installs its own
//! correction with [`HelixStepper::with_radiation`](crate::HelixStepper::with_radiation).

use std::fmt::Debug;

/// Post-step velocity correction.
pub trait RadiationReaction: Debug + Send + Sync {
    /// Corrected end-of-step velocity given the velocity before and after the step [m/s].
    fn apply(&self, init_velocity: [f64; 3], end_velocity: [f64; 3]) -> [f64; 3];
}

/// Identity correction: returns `end_velocity` unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoRadiation;

impl RadiationReaction for NoRadiation {
    fn apply(&self, _init_velocity: [f64; 3], end_velocity: [f64; 3]) -> [f64; 3] {
        end_velocity
    }
}
