// ─────────────────────────────────────────────────────────────────────
// SCPN Helix Core — Magnetic Stepper
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Single-step advance of a charged particle through a field sample that
//! is held constant over the step.
//!
//! With unit tangent t̂, unit field b̂ and signed curvature κ, the step turns
//! the perpendicular part of t̂ about b̂ by Θ = κ h:
//!
//! - `ExactHelix` moves along the exact arc,
//!   Δx = (1/κ)[sin Θ t⊥ + (1 - cos Θ)(b̂ × t̂)] + h t∥.
//! - `BorisLeapfrog` drifts h/2 along the initial tangent, applies the
//!   Boris rotation with t = -tan(Θ/2) b̂, then drifts h/2 along the new one.
//!
//! Both leave |v| unchanged and report a zero error estimate.

use helix_field::MagneticField;
use helix_math::vector::{add, add_scaled, cross, dot, norm, scale, sub, Vec3};
use helix_types::config::{StepperKind, TrackerConfig};
use helix_types::constants::{JOULE_PER_GEV, SPEED_OF_LIGHT};
use helix_types::error::{HelixError, HelixResult};
use helix_types::state::{ParticleState, StepResult, STATE_LEN};
use std::f64::consts::{PI, TAU};

use crate::equation::EquationOfMotion;
use crate::radiation::{NoRadiation, RadiationReaction};

/// Helix parameters cached by the most recent step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixGeometry {
    /// Turning angle |Θ| [rad]
    pub angle: f64,
    /// Radius of curvature of the path, 1/|κ| [m]
    pub curve_radius: f64,
    /// Radius of the helix cylinder (gyroradius) [m]
    pub helix_radius: f64,
}

/// Largest deviation of a helix arc of opening `angle` from its chord.
pub fn dist_chord(angle: f64, helix_radius: f64) -> f64 {
    if angle <= PI {
        helix_radius * (1.0 - (0.5 * angle).cos())
    } else if angle < TAU {
        helix_radius * (1.0 + (0.5 * (TAU - angle)).cos())
    } else {
        2.0 * helix_radius
    }
}

/// Magnetic-field stepper. One instance per tracked particle.
#[derive(Debug)]
pub struct HelixStepper {
    kind: StepperKind,
    equation: EquationOfMotion,
    radiation: Box<dyn RadiationReaction>,
    last_step: Option<HelixGeometry>,
}

/// Build a stepper of the requested kind around `equation`.
pub fn create_stepper(kind: StepperKind, equation: EquationOfMotion) -> HelixStepper {
    tracing::info!(
        ?kind,
        charge = equation.particle_charge(),
        mass = equation.mass(),
        "created magnetic stepper"
    );
    HelixStepper {
        kind,
        equation,
        radiation: Box::new(NoRadiation),
        last_step: None,
    }
}

impl HelixStepper {
    /// Stepper and particle parameters from a validated tracker configuration.
    pub fn from_config(config: &TrackerConfig) -> HelixResult<Self> {
        config.validate()?;
        let particle = &config.particle;
        let momentum_gev = particle.momentum() * SPEED_OF_LIGHT / JOULE_PER_GEV;
        let equation = EquationOfMotion::new(particle.charge, momentum_gev, particle.mass_kg)?;
        Ok(create_stepper(config.stepper, equation))
    }

    /// Replace the post-step velocity correction.
    pub fn with_radiation(mut self, radiation: Box<dyn RadiationReaction>) -> Self {
        self.radiation = radiation;
        self
    }

    pub fn kind(&self) -> StepperKind {
        self.kind
    }

    pub fn equation(&self) -> &EquationOfMotion {
        &self.equation
    }

    /// Mutable access for `set_charge_momentum_mass` when a new particle starts.
    pub fn equation_mut(&mut self) -> &mut EquationOfMotion {
        &mut self.equation
    }

    pub fn last_step(&self) -> Option<HelixGeometry> {
        self.last_step
    }

    /// Convergence-order slot expected by step-size controllers.
    pub fn integrator_order(&self) -> u32 {
        1
    }

    /// Sagitta of the last step's arc. Fails if no step has been taken.
    pub fn dist_chord(&self) -> HelixResult<f64> {
        let geometry = self.last_step.ok_or_else(|| {
            HelixError::StepperState("dist_chord requires a completed step".to_string())
        })?;
        Ok(dist_chord(geometry.angle, geometry.helix_radius))
    }

    /// Sample `field` at the start position and advance by `h`.
    pub fn step_in_field<F: MagneticField + ?Sized>(
        &mut self,
        field: &F,
        state: &ParticleState,
        h: f64,
    ) -> HelixResult<StepResult> {
        let b = field.field_at(state.position);
        self.step(state, h, b)
    }

    /// Advance `state` by arc length `h` [m] in the constant field `field` [T].
    pub fn step(
        &mut self,
        state: &ParticleState,
        h: f64,
        field: [f64; 3],
    ) -> HelixResult<StepResult> {
        validate_step_inputs(state, h, field)?;

        let speed = state.speed();
        if speed <= 0.0 {
            return Err(HelixError::PhysicsViolation(
                "particle speed must be > 0 to define a tangent".to_string(),
            ));
        }
        let bmag = norm(field);
        if bmag <= 0.0 {
            return Err(HelixError::PhysicsViolation(
                "field magnitude must be > 0 to define a rotation axis".to_string(),
            ));
        }
        let kappa = self.equation.inverse_curvature(speed, bmag)?;
        if kappa == 0.0 {
            return Err(HelixError::PhysicsViolation(
                "particle charge must be non-zero to curve in a magnetic field".to_string(),
            ));
        }

        let tangent = scale(state.velocity, 1.0 / speed);
        let b_unit = scale(field, 1.0 / bmag);
        let b_dot_t = dot(b_unit, tangent);
        let theta = kappa * h;

        let (offset, end_tangent) = match self.kind {
            StepperKind::ExactHelix => helix_advance(tangent, b_unit, b_dot_t, kappa, h),
            StepperKind::BorisLeapfrog => boris_advance(tangent, b_unit, theta, h),
        };

        let end_velocity = self
            .radiation
            .apply(state.velocity, scale(end_tangent, speed));

        let sin_pitch = (1.0 - b_dot_t * b_dot_t).max(0.0).sqrt();
        let curve_radius = (1.0 / kappa).abs();
        self.last_step = Some(HelixGeometry {
            angle: theta.abs(),
            curve_radius,
            helix_radius: curve_radius * sin_pitch,
        });

        Ok(StepResult {
            state: ParticleState::new(add(state.position, offset), end_velocity),
            error: [0.0; STATE_LEN],
        })
    }
}

fn validate_step_inputs(state: &ParticleState, h: f64, field: [f64; 3]) -> HelixResult<()> {
    if !state.is_finite() {
        return Err(HelixError::PhysicsViolation(
            "particle position and velocity must be finite".to_string(),
        ));
    }
    if !h.is_finite() {
        return Err(HelixError::PhysicsViolation(format!(
            "step length must be finite, got {h}"
        )));
    }
    if field.iter().any(|b| !b.is_finite()) {
        return Err(HelixError::PhysicsViolation(format!(
            "field sample must be finite, got {field:?}"
        )));
    }
    Ok(())
}

/// Exact arc: returns (position offset, end tangent).
fn helix_advance(tangent: Vec3, b_unit: Vec3, b_dot_t: f64, kappa: f64, h: f64) -> (Vec3, Vec3) {
    let t_par = scale(b_unit, b_dot_t);
    let t_perp = sub(tangent, t_par);
    let b_cross_t = cross(b_unit, tangent);

    let theta = kappa * h;
    let (sin_t, cos_t) = theta.sin_cos();
    // 1 - cos Θ without cancellation for small Θ
    let half_sin = (0.5 * theta).sin();
    let one_minus_cos = 2.0 * half_sin * half_sin;
    let radius = 1.0 / kappa;

    let offset = add_scaled(
        add_scaled(scale(t_perp, radius * sin_t), b_cross_t, radius * one_minus_cos),
        t_par,
        h,
    );
    let end_tangent = add_scaled(add_scaled(t_par, t_perp, cos_t), b_cross_t, sin_t);
    (offset, end_tangent)
}

/// Half drift, Boris rotation, half drift: returns (position offset, end tangent).
fn boris_advance(tangent: Vec3, b_unit: Vec3, theta: f64, h: f64) -> (Vec3, Vec3) {
    let t = scale(b_unit, -(0.5 * theta).tan());
    let s = 2.0 / (1.0 + dot(t, t));
    let u_prime = add(tangent, cross(tangent, t));
    let end_tangent = add_scaled(tangent, cross(u_prime, t), s);

    let offset = scale(add(tangent, end_tangent), 0.5 * h);
    (offset, end_tangent)
}
