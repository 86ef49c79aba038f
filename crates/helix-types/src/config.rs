// ─────────────────────────────────────────────────────────────────────
// SCPN Helix Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{ELECTRON_MASS, JOULE_PER_EV, SPEED_OF_LIGHT, TRITIUM_ENDPOINT_EV};
use crate::error::{HelixError, HelixResult};

/// Top-level tracking configuration.
/// Maps 1:1 to the JSON files under `configs/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub name: String,
    pub trap: TrapConfig,
    #[serde(default)]
    pub stepper: StepperKind,
    #[serde(default)]
    pub particle: ParticleConfig,
}

/// Coaxial current-loop trap. All loops share radius and current.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrapConfig {
    /// Loop radius [m]
    pub radius: f64,
    /// Loop current [A]
    pub current: f64,
    /// Axial positions of the loops [m]; two entries give the bathtub trap.
    pub coil_positions: Vec<f64>,
    /// Uniform background field [T]
    #[serde(default)]
    pub background: [f64; 3],
}

/// Stepper law used to advance a particle through one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepperKind {
    /// Single-rotation exact helix for a locally constant field.
    #[default]
    ExactHelix,
    /// Half-step drift, Boris velocity rotation, half-step drift.
    BorisLeapfrog,
}

/// Tracked particle species and energy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Charge in units of the elementary charge
    #[serde(default = "default_charge")]
    pub charge: f64,
    /// Rest mass [kg]
    #[serde(default = "default_mass_kg")]
    pub mass_kg: f64,
    /// Kinetic energy [eV]
    #[serde(default = "default_kinetic_energy_ev")]
    pub kinetic_energy_ev: f64,
}

fn default_charge() -> f64 {
    -1.0
}
fn default_mass_kg() -> f64 {
    ELECTRON_MASS
}
fn default_kinetic_energy_ev() -> f64 {
    TRITIUM_ENDPOINT_EV
}

impl Default for ParticleConfig {
    fn default() -> Self {
        ParticleConfig {
            charge: default_charge(),
            mass_kg: default_mass_kg(),
            kinetic_energy_ev: default_kinetic_energy_ev(),
        }
    }
}

impl ParticleConfig {
    /// Lorentz factor γ = 1 + T / (m c²).
    pub fn lorentz_factor(&self) -> f64 {
        let rest_energy_j = self.mass_kg * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
        1.0 + self.kinetic_energy_ev * JOULE_PER_EV / rest_energy_j
    }

    /// Speed [m/s] from kinetic energy.
    pub fn speed(&self) -> f64 {
        let gamma = self.lorentz_factor();
        SPEED_OF_LIGHT * (1.0 - 1.0 / (gamma * gamma)).sqrt()
    }

    /// Momentum magnitude γ m v [kg m/s].
    pub fn momentum(&self) -> f64 {
        self.lorentz_factor() * self.mass_kg * self.speed()
    }
}

impl TrackerConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> HelixResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        tracing::info!(
            name = %config.name,
            coils = config.trap.coil_positions.len(),
            stepper = ?config.stepper,
            "loaded tracker config from {path}"
        );
        Ok(config)
    }

    /// Reject geometry or species a trap or stepper cannot be built from.
    pub fn validate(&self) -> HelixResult<()> {
        let trap = &self.trap;
        if !trap.radius.is_finite() || trap.radius <= 0.0 {
            return Err(HelixError::ConfigError(format!(
                "trap.radius must be finite and > 0, got {}",
                trap.radius
            )));
        }
        if !trap.current.is_finite() {
            return Err(HelixError::ConfigError(format!(
                "trap.current must be finite, got {}",
                trap.current
            )));
        }
        if trap.coil_positions.is_empty() {
            return Err(HelixError::ConfigError(
                "trap.coil_positions must list at least one coil".to_string(),
            ));
        }
        if trap.coil_positions.iter().any(|z| !z.is_finite()) {
            return Err(HelixError::ConfigError(
                "trap.coil_positions must be finite".to_string(),
            ));
        }
        if trap.background.iter().any(|b| !b.is_finite()) {
            return Err(HelixError::ConfigError(
                "trap.background must be finite".to_string(),
            ));
        }

        let particle = &self.particle;
        if !particle.charge.is_finite() {
            return Err(HelixError::ConfigError(
                "particle.charge must be finite".to_string(),
            ));
        }
        if !particle.mass_kg.is_finite() || particle.mass_kg <= 0.0 {
            return Err(HelixError::ConfigError(format!(
                "particle.mass_kg must be finite and > 0, got {}",
                particle.mass_kg
            )));
        }
        if !particle.kinetic_energy_ev.is_finite() || particle.kinetic_energy_ev <= 0.0 {
            return Err(HelixError::ConfigError(format!(
                "particle.kinetic_energy_ev must be finite and > 0, got {}",
                particle.kinetic_energy_ev
            )));
        }
        Ok(())
    }
}
