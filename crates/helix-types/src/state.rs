// ─────────────────────────────────────────────────────────────────────
// SCPN Helix Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::{Array1, Array2};

/// Number of scalars in a stepper state vector: [x, y, z, vx, vy, vz].
pub const STATE_LEN: usize = 6;

/// Charged-particle phase-space point handed to the stepper.
/// Position in metres, velocity in m/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

impl ParticleState {
    pub fn new(position: [f64; 3], velocity: [f64; 3]) -> Self {
        ParticleState { position, velocity }
    }

    /// Unpack a host-framework style `[x, y, z, vx, vy, vz]` vector.
    pub fn from_array(y: [f64; STATE_LEN]) -> Self {
        ParticleState {
            position: [y[0], y[1], y[2]],
            velocity: [y[3], y[4], y[5]],
        }
    }

    pub fn to_array(&self) -> [f64; STATE_LEN] {
        [
            self.position[0],
            self.position[1],
            self.position[2],
            self.velocity[0],
            self.velocity[1],
            self.velocity[2],
        ]
    }

    /// Speed |v| [m/s].
    pub fn speed(&self) -> f64 {
        let v = self.velocity;
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    /// Cylindrical radius sqrt(x² + y²) about the trap axis.
    pub fn cylindrical_radius(&self) -> f64 {
        (self.position[0] * self.position[0] + self.position[1] * self.position[1]).sqrt()
    }

    /// Pitch angle between velocity and `field` [rad].
    /// `None` when either vector has zero length.
    pub fn pitch_angle(&self, field: [f64; 3]) -> Option<f64> {
        let v = self.velocity;
        let b_mag = (field[0] * field[0] + field[1] * field[1] + field[2] * field[2]).sqrt();
        let speed = self.speed();
        if speed == 0.0 || b_mag == 0.0 {
            return None;
        }
        let cos_pitch = (v[0] * field[0] + v[1] * field[1] + v[2] * field[2]) / (speed * b_mag);
        Some(cos_pitch.clamp(-1.0, 1.0).acos())
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().chain(self.velocity.iter()).all(|v| v.is_finite())
    }
}

/// Output of one stepper call: the advanced state and a per-component error estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    pub state: ParticleState,
    pub error: [f64; STATE_LEN],
}

/// Meridional (r, z) sampling grid for axisymmetric field maps.
/// Meshgrid arrays are [nz, nr]: nz rows, nr cols.
#[derive(Debug, Clone)]
pub struct RzGrid {
    pub nr: usize,
    pub nz: usize,
    pub r: Array1<f64>,
    pub z: Array1<f64>,
    pub dr: f64,
    pub dz: f64,
    pub rr: Array2<f64>,
    pub zz: Array2<f64>,
}

impl RzGrid {
    pub fn new(nr: usize, nz: usize, r_min: f64, r_max: f64, z_min: f64, z_max: f64) -> Self {
        let r = Array1::linspace(r_min, r_max, nr);
        let z = Array1::linspace(z_min, z_max, nz);
        let dr = if nr > 1 { r[1] - r[0] } else { r_max - r_min };
        let dz = if nz > 1 { z[1] - z[0] } else { z_max - z_min };

        let rr = Array2::from_shape_fn((nz, nr), |(_, ir)| r[ir]);
        let zz = Array2::from_shape_fn((nz, nr), |(iz, _)| z[iz]);

        RzGrid {
            nr,
            nz,
            r,
            z,
            dr,
            dz,
            rr,
            zz,
        }
    }
}
