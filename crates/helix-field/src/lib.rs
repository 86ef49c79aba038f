// ─────────────────────────────────────────────────────────────────────
// SCPN Helix Core — Helix Field
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Static magnetic fields sampled by the helix steppers.
//!
//! Analytic circular current loops (complete elliptic integrals), coaxial
//! loop traps with a uniform background, a numerical Biot-Savart loop for
//! cross-checks, and batch/field-map helpers.

pub mod biot_savart;
pub mod current_loop;
pub mod field_map;
pub mod trap;

pub use biot_savart::BiotSavartLoop;
pub use current_loop::CurrentLoop;
pub use trap::LoopTrap;

/// A static magnetic field: pure function of position.
///
/// Implementations must be side-effect free so that one field can be
/// shared by any number of concurrently tracked particles.
pub trait MagneticField {
    /// Field vector [T] at `point` [m].
    fn field_at(&self, point: [f64; 3]) -> [f64; 3];

    /// |B| [T] at `point` [m].
    fn magnitude_at(&self, point: [f64; 3]) -> f64 {
        let b = self.field_at(point);
        (b[0] * b[0] + b[1] * b[1] + b[2] * b[2]).sqrt()
    }
}

impl<F: MagneticField + ?Sized> MagneticField for &F {
    fn field_at(&self, point: [f64; 3]) -> [f64; 3] {
        (**self).field_at(point)
    }
}

impl<F: MagneticField + ?Sized> MagneticField for Box<F> {
    fn field_at(&self, point: [f64; 3]) -> [f64; 3] {
        (**self).field_at(point)
    }
}

/// Spatially constant field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformField {
    pub value: [f64; 3],
}

impl UniformField {
    pub fn new(value: [f64; 3]) -> Self {
        UniformField { value }
    }

    /// Uniform field of strength `bz` [T] along +z.
    pub fn along_z(bz: f64) -> Self {
        UniformField {
            value: [0.0, 0.0, bz],
        }
    }
}

impl MagneticField for UniformField {
    fn field_at(&self, _point: [f64; 3]) -> [f64; 3] {
        self.value
    }
}
