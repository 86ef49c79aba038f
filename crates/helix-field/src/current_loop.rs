// ─────────────────────────────────────────────────────────────────────
// SCPN Helix Core — Current Loop
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Exact magnetic field of a circular filament coaxial with the z-axis.
//!
//! With normalised radial distance m = r/R and axial distance n = (z - z_c)/R,
//! α = (1 + m)² + n², γ = α - 4m and elliptic parameter k² = 4m/α:
//!
//!   B_r = B_c · [E (1 + m² + n²)/γ - K] / (π √α) · (n/m)
//!   B_z = B_c · [E (1 - m² - n²)/γ + K] / (π √α)
//!
//! where B_c = μ₀ I / (2R) is the field at the loop centre. The radial
//! formula has a removable singularity at r = 0, so points within
//! `ON_AXIS_GUARD · R` of the axis use the closed on-axis solution
//! instead.

use helix_math::elliptic::ellipke;
use helix_types::constants::MU0;
use helix_types::error::{HelixError, HelixResult};
use std::f64::consts::PI;

use crate::MagneticField;

/// Relative radial distance below which a point is treated as on-axis.
pub const ON_AXIS_GUARD: f64 = 1e-10;

/// Circular current filament of radius R in the plane z = z_c.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentLoop {
    radius: f64,
    current: f64,
    z_position: f64,
    b_central: f64,
}

fn validate_radius(radius: f64) -> HelixResult<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(HelixError::ConfigError(format!(
            "loop radius must be finite and > 0, got {radius}"
        )));
    }
    Ok(())
}

fn validate_current(current: f64) -> HelixResult<()> {
    if !current.is_finite() {
        return Err(HelixError::ConfigError(format!(
            "loop current must be finite, got {current}"
        )));
    }
    Ok(())
}

impl CurrentLoop {
    /// Loop of `radius` [m] carrying `current` [A] centred on the axis at `z_position` [m].
    pub fn new(radius: f64, current: f64, z_position: f64) -> HelixResult<Self> {
        validate_radius(radius)?;
        validate_current(current)?;
        if !z_position.is_finite() {
            return Err(HelixError::ConfigError(format!(
                "loop z_position must be finite, got {z_position}"
            )));
        }
        Ok(CurrentLoop {
            radius,
            current,
            z_position,
            b_central: central_field(radius, current),
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn z_position(&self) -> f64 {
        self.z_position
    }

    /// Field magnitude at the loop centre, μ₀ I / (2R) [T].
    pub fn central_field(&self) -> f64 {
        self.b_central
    }

    /// Change the loop current; the central field is recomputed.
    pub fn set_current(&mut self, current: f64) -> HelixResult<()> {
        validate_current(current)?;
        self.current = current;
        self.b_central = central_field(self.radius, current);
        Ok(())
    }

    /// Change the loop radius; the central field is recomputed.
    pub fn set_radius(&mut self, radius: f64) -> HelixResult<()> {
        validate_radius(radius)?;
        self.radius = radius;
        self.b_central = central_field(radius, self.current);
        Ok(())
    }

    /// Axial field on the symmetry axis at height `z`:
    /// μ₀ I R² / (2 (R² + (z - z_c)²)^{3/2}).
    pub fn on_axis_field(&self, z: f64) -> f64 {
        let radius2 = self.radius * self.radius;
        let dz = z - self.z_position;
        let s = radius2 + dz * dz;
        MU0 * self.current * radius2 / (2.0 * s * s.sqrt())
    }

    /// Cylindrical components `(B_r, B_z)` at radial distance `rad` >= 0 and height `z`.
    ///
    /// Non-finite on the filament itself (r = R, z = z_c).
    pub fn cylindrical_field(&self, rad: f64, z: f64) -> (f64, f64) {
        if rad / self.radius < ON_AXIS_GUARD {
            return (0.0, self.on_axis_field(z));
        }

        let z_rel = z - self.z_position;
        let rad_norm = rad / self.radius;
        let rad_norm2 = rad_norm * rad_norm;
        let z_norm = z_rel / self.radius;
        let z_norm2 = z_norm * z_norm;

        let alpha = (1.0 + rad_norm) * (1.0 + rad_norm) + z_norm2;
        let root_alpha_pi = alpha.sqrt() * PI;
        let k2 = 4.0 * rad_norm / alpha;
        let (int_k, int_e) = ellipke(k2);

        let gamma = alpha - 4.0 * rad_norm;
        let b_r = self.b_central * (int_e * ((1.0 + rad_norm2 + z_norm2) / gamma) - int_k)
            / root_alpha_pi
            * (z_rel / rad);
        let b_z = self.b_central * (int_e * ((1.0 - rad_norm2 - z_norm2) / gamma) + int_k)
            / root_alpha_pi;

        (b_r, b_z)
    }
}

impl MagneticField for CurrentLoop {
    fn field_at(&self, point: [f64; 3]) -> [f64; 3] {
        let [x, y, z] = point;
        let rad = (x * x + y * y).sqrt();
        let (b_r, b_z) = self.cylindrical_field(rad, z);
        if b_r == 0.0 {
            return [0.0, 0.0, b_z];
        }
        [b_r * x / rad, b_r * y / rad, b_z]
    }
}

fn central_field(radius: f64, current: f64) -> f64 {
    current * MU0 / radius / 2.0
}
