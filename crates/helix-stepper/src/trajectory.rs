// ─────────────────────────────────────────────────────────────────────
// SCPN Helix Core — Fixed-Step Trajectories
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Repeated stepping with a constant step length.
//!
//! The field is re-sampled at the start of every step. There is no error
//! control or chord check here; hosts that need either drive
//! [`HelixStepper::step`] themselves.

use helix_field::MagneticField;
use helix_types::error::{HelixError, HelixResult};
use helix_types::state::{ParticleState, STATE_LEN};
use ndarray::{Array2, ArrayView1, ArrayView2};
use std::f64::consts::TAU;

use crate::equation::EquationOfMotion;
use crate::stepper::HelixStepper;

/// States along a fixed-step track, one `[x, y, z, vx, vy, vz]` row per point.
#[derive(Debug, Clone)]
pub struct Trajectory {
    states: Array2<f64>,
    step_length: f64,
}

impl Trajectory {
    /// Number of stored points (steps + 1).
    pub fn len(&self) -> usize {
        self.states.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.states.nrows() == 0
    }

    pub fn step_length(&self) -> f64 {
        self.step_length
    }

    /// Full `[n + 1, 6]` state table.
    pub fn states(&self) -> ArrayView2<f64> {
        self.states.view()
    }

    /// `[n + 1, 3]` positions.
    pub fn positions(&self) -> ArrayView2<f64> {
        self.states.slice(ndarray::s![.., 0..3])
    }

    /// `[n + 1, 3]` velocities.
    pub fn velocities(&self) -> ArrayView2<f64> {
        self.states.slice(ndarray::s![.., 3..6])
    }

    pub fn row(&self, index: usize) -> ArrayView1<f64> {
        self.states.row(index)
    }

    /// State at point `index`, if present.
    pub fn state(&self, index: usize) -> Option<ParticleState> {
        if index >= self.len() {
            return None;
        }
        let row = self.states.row(index);
        let mut y = [0.0; STATE_LEN];
        for (dst, &src) in y.iter_mut().zip(row.iter()) {
            *dst = src;
        }
        Some(ParticleState::from_array(y))
    }

    pub fn final_state(&self) -> Option<ParticleState> {
        self.len().checked_sub(1).and_then(|last| self.state(last))
    }

    /// Arc length from the start to each point [m].
    pub fn arc_lengths(&self) -> Vec<f64> {
        (0..self.len()).map(|i| i as f64 * self.step_length).collect()
    }
}

/// Advance `initial` through `n_steps` steps of length `h`, sampling `field`
/// at the start of each step.
pub fn integrate_fixed_step<F: MagneticField + ?Sized>(
    stepper: &mut HelixStepper,
    field: &F,
    initial: &ParticleState,
    h: f64,
    n_steps: usize,
) -> HelixResult<Trajectory> {
    if !h.is_finite() || h <= 0.0 {
        return Err(HelixError::PhysicsViolation(format!(
            "step length must be finite and > 0, got {h}"
        )));
    }

    let mut states = Array2::zeros((n_steps + 1, STATE_LEN));
    let mut state = *initial;
    write_row(&mut states, 0, &state);
    for i in 1..=n_steps {
        state = stepper.step_in_field(field, &state, h)?.state;
        write_row(&mut states, i, &state);
    }

    Ok(Trajectory {
        states,
        step_length: h,
    })
}

fn write_row(states: &mut Array2<f64>, index: usize, state: &ParticleState) {
    for (dst, src) in states.row_mut(index).iter_mut().zip(state.to_array()) {
        *dst = src;
    }
}

/// Step length that resolves one gyro-orbit at `speed` in a field of
/// magnitude `bmag` with `steps_per_turn` steps.
pub fn gyro_step_length(
    equation: &EquationOfMotion,
    speed: f64,
    bmag: f64,
    steps_per_turn: usize,
) -> HelixResult<f64> {
    if steps_per_turn == 0 {
        return Err(HelixError::ConfigError(
            "steps_per_turn must be > 0".to_string(),
        ));
    }
    if !bmag.is_finite() || bmag <= 0.0 {
        return Err(HelixError::PhysicsViolation(format!(
            "field magnitude must be finite and > 0, got {bmag}"
        )));
    }
    let kappa = equation.inverse_curvature(speed, bmag)?;
    if kappa == 0.0 {
        return Err(HelixError::PhysicsViolation(
            "particle charge must be non-zero to gyrate".to_string(),
        ));
    }
    Ok(TAU / kappa.abs() / steps_per_turn as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_stepper;
    use helix_field::{LoopTrap, UniformField};
    use helix_types::config::{ParticleConfig, StepperKind};
    use helix_types::constants::{ELECTRON_MASS, JOULE_PER_GEV, SPEED_OF_LIGHT};

    fn electron() -> (EquationOfMotion, f64) {
        let particle = ParticleConfig::default();
        let p_gev = particle.momentum() * SPEED_OF_LIGHT / JOULE_PER_GEV;
        (
            EquationOfMotion::new(-1.0, p_gev, ELECTRON_MASS).unwrap(),
            particle.speed(),
        )
    }

    #[test]
    fn test_full_gyro_orbit_closes() {
        let (eom, speed) = electron();
        let h = gyro_step_length(&eom, speed, 1.0, 64).unwrap();
        let mut stepper = create_stepper(StepperKind::ExactHelix, eom);
        let start = ParticleState::new([0.01, 0.0, 0.0], [0.0, speed, 0.0]);
        let traj = integrate_fixed_step(&mut stepper, &UniformField::along_z(1.0), &start, h, 64)
            .unwrap();

        assert_eq!(traj.len(), 65);
        assert_eq!(traj.states().shape(), &[65, 6]);
        assert_eq!(traj.state(0), Some(start));
        let end = traj.final_state().unwrap();
        let radius = 1.0 / stepper.equation().inverse_curvature(speed, 1.0).unwrap();
        for i in 0..3 {
            assert!((end.position[i] - start.position[i]).abs() < 1e-10 * radius);
            assert!((end.velocity[i] - start.velocity[i]).abs() < 1e-10 * speed);
        }
        assert!(traj.state(65).is_none());
    }

    #[test]
    fn test_orbit_stays_on_gyro_circle() {
        let (eom, speed) = electron();
        let h = gyro_step_length(&eom, speed, 1.0, 40).unwrap();
        let mut stepper = create_stepper(StepperKind::BorisLeapfrog, eom);
        let start = ParticleState::new([0.0; 3], [speed, 0.0, 0.0]);
        // 119 steps: three turns of 40 distinct points, so the mean is the centre.
        let traj = integrate_fixed_step(&mut stepper, &UniformField::along_z(1.0), &start, h, 119)
            .unwrap();
        let positions = traj.positions();
        let n = positions.nrows() as f64;
        let cx = positions.column(0).sum() / n;
        let cy = positions.column(1).sum() / n;
        let radii: Vec<f64> = positions
            .rows()
            .into_iter()
            .map(|p| ((p[0] - cx).powi(2) + (p[1] - cy).powi(2)).sqrt())
            .collect();
        let mean = radii.iter().sum::<f64>() / radii.len() as f64;
        for r in radii {
            assert!((r - mean).abs() < 1e-9 * mean);
        }
        for v in traj.velocities().rows() {
            let s = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((s - speed).abs() < 1e-12 * speed);
        }
    }

    #[test]
    fn test_magnetic_mirror_reflects_in_bathtub() {
        // Near-perpendicular electron starting at the trap centre bounces between coils.
        let (eom, speed) = electron();
        let trap = LoopTrap::bathtub(0.03, 200.0, -0.05, 0.05, 1.0).unwrap();
        // Mirror ratio ≈ 1.0031, so pitch angles above ~87° are trapped.
        let h = gyro_step_length(&eom, speed, 1.0, 16).unwrap();
        let mut stepper = create_stepper(StepperKind::ExactHelix, eom);
        let pitch = 88.0f64.to_radians();
        let start = ParticleState::new(
            [0.0; 3],
            [speed * pitch.sin(), 0.0, speed * pitch.cos()],
        );
        let traj = integrate_fixed_step(&mut stepper, &trap, &start, h, 40_000).unwrap();
        let vz = traj.velocities().column(2).to_vec();
        assert!(vz.iter().any(|&v| v < 0.0), "electron never reflected");
        let z_max = traj.positions().column(2).fold(f64::MIN, |a, &b| a.max(b));
        assert!(z_max < 0.05, "electron escaped past the coil: z_max = {z_max}");
    }

    #[test]
    fn test_arc_lengths_and_rows() {
        let (eom, speed) = electron();
        let mut stepper = create_stepper(StepperKind::ExactHelix, eom);
        let start = ParticleState::new([0.0; 3], [speed, 0.0, 0.0]);
        let traj =
            integrate_fixed_step(&mut stepper, &UniformField::along_z(1.0), &start, 1e-5, 3)
                .unwrap();
        let arcs = traj.arc_lengths();
        assert_eq!(arcs.len(), 4);
        for (i, s) in arcs.iter().enumerate() {
            assert!((s - i as f64 * 1e-5).abs() < 1e-20);
        }
        assert_eq!(traj.step_length(), 1e-5);
        assert_eq!(traj.row(0).to_vec(), start.to_array().to_vec());
        assert!(!traj.is_empty());
    }

    #[test]
    fn test_zero_steps_returns_initial_state() {
        let (eom, speed) = electron();
        let mut stepper = create_stepper(StepperKind::ExactHelix, eom);
        let start = ParticleState::new([0.0; 3], [speed, 0.0, 0.0]);
        let traj = integrate_fixed_step(&mut stepper, &UniformField::along_z(1.0), &start, 1e-5, 0)
            .unwrap();
        assert_eq!(traj.len(), 1);
        assert_eq!(traj.final_state(), Some(start));
        assert!(stepper.last_step().is_none());
    }

    #[test]
    fn test_tracks_particle_from_config_file() {
        let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("configs")
            .join("bathtub_trap.json");
        let config =
            helix_types::config::TrackerConfig::from_file(&path.to_string_lossy()).unwrap();
        let trap = LoopTrap::from_config(&config.trap).unwrap();
        let mut stepper = crate::HelixStepper::from_config(&config).unwrap();
        assert_eq!(stepper.kind(), StepperKind::ExactHelix);

        let speed = config.particle.speed();
        let h = gyro_step_length(stepper.equation(), speed, 1.0, 32).unwrap();
        let start = ParticleState::new([0.001, 0.0, 0.0], [0.0, speed, 0.0]);
        let traj = integrate_fixed_step(&mut stepper, &trap, &start, h, 256).unwrap();
        let end = traj.final_state().unwrap();
        assert!((end.speed() - speed).abs() < 1e-12 * speed);
        assert!(stepper.dist_chord().unwrap() > 0.0);
    }

    #[test]
    fn test_rejects_bad_step_and_propagates_stepper_errors() {
        let (eom, speed) = electron();
        let mut stepper = create_stepper(StepperKind::ExactHelix, eom.clone());
        let start = ParticleState::new([0.0; 3], [speed, 0.0, 0.0]);
        let field = UniformField::along_z(1.0);
        assert!(integrate_fixed_step(&mut stepper, &field, &start, 0.0, 10).is_err());
        assert!(integrate_fixed_step(&mut stepper, &field, &start, f64::NAN, 10).is_err());
        let no_field = UniformField::along_z(0.0);
        assert!(integrate_fixed_step(&mut stepper, &no_field, &start, 1e-5, 10).is_err());

        assert!(gyro_step_length(&eom, speed, 1.0, 0).is_err());
        assert!(gyro_step_length(&eom, speed, 0.0, 10).is_err());
        let neutral = EquationOfMotion::new(0.0, 0.0, ELECTRON_MASS).unwrap();
        assert!(gyro_step_length(&neutral, speed, 1.0, 10).is_err());
    }
}
