// ─────────────────────────────────────────────────────────────────────
// SCPN Helix Core — Equation of Motion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Charge/mass bookkeeping that turns (|B|, speed) into path curvature.
//!
//! Momenta exchanged with the stepper are in GeV/c, so that
//! κ = -0.299792458 · q · |B| / p  [1/m] with |B| in tesla.

use helix_types::constants::{ELEMENTARY_CHARGE, JOULE_PER_GEV, SPEED_OF_LIGHT, UNIT_CONSTANT};
use helix_types::error::{HelixError, HelixResult};

/// Per-track charge, momentum and mass. One instance per in-flight particle.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationOfMotion {
    /// q · e · c
    fcof: f64,
    /// Momentum at the start of tracking [GeV/c]
    momentum: f64,
    /// Rest mass [kg]
    mass: f64,
}

impl EquationOfMotion {
    /// `charge` in elementary units, `momentum` in GeV/c, `mass` in kg.
    pub fn new(charge: f64, momentum: f64, mass: f64) -> HelixResult<Self> {
        let mut equation = EquationOfMotion {
            fcof: 0.0,
            momentum: 0.0,
            mass: 1.0,
        };
        equation.set_charge_momentum_mass(charge, momentum, mass)?;
        Ok(equation)
    }

    /// Replace the particle parameters and recompute the charge coefficient.
    ///
    /// Must be called whenever a new particle starts tracking; the stepper
    /// has no other way to notice a change of species.
    pub fn set_charge_momentum_mass(
        &mut self,
        charge: f64,
        momentum: f64,
        mass: f64,
    ) -> HelixResult<()> {
        if !charge.is_finite() {
            return Err(HelixError::PhysicsViolation(format!(
                "particle charge must be finite, got {charge}"
            )));
        }
        if !momentum.is_finite() || momentum < 0.0 {
            return Err(HelixError::PhysicsViolation(format!(
                "particle momentum must be finite and >= 0, got {momentum}"
            )));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(HelixError::PhysicsViolation(format!(
                "particle mass must be finite and > 0, got {mass}"
            )));
        }
        self.fcof = charge * ELEMENTARY_CHARGE * SPEED_OF_LIGHT;
        self.momentum = momentum;
        self.mass = mass;
        tracing::debug!(charge, momentum, mass, fcof = self.fcof, "equation of motion updated");
        Ok(())
    }

    pub fn fcof(&self) -> f64 {
        self.fcof
    }

    /// Charge in elementary units.
    pub fn particle_charge(&self) -> f64 {
        self.fcof / (ELEMENTARY_CHARGE * SPEED_OF_LIGHT)
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Relativistic momentum γ m v in GeV/c for a particle of this mass at `speed` [m/s].
    pub fn momentum_gev(&self, speed: f64) -> HelixResult<f64> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(HelixError::PhysicsViolation(format!(
                "particle speed must be finite and >= 0, got {speed}"
            )));
        }
        let beta = speed / SPEED_OF_LIGHT;
        if beta >= 1.0 {
            return Err(HelixError::PhysicsViolation(format!(
                "particle speed must be below c, got {speed} m/s"
            )));
        }
        let gamma = 1.0 / (1.0 - beta * beta).sqrt();
        Ok(gamma * self.mass * speed * SPEED_OF_LIGHT / JOULE_PER_GEV)
    }

    /// Signed inverse radius of curvature κ [1/m]; positive for negative charges.
    pub fn inverse_curvature(&self, speed: f64, bmag: f64) -> HelixResult<f64> {
        let momentum = self.momentum_gev(speed)?;
        if momentum <= 0.0 {
            return Err(HelixError::PhysicsViolation(
                "particle speed must be > 0".to_string(),
            ));
        }
        Ok(-UNIT_CONSTANT * self.particle_charge() * bmag / momentum)
    }
}
