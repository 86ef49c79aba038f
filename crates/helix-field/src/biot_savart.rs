// ─────────────────────────────────────────────────────────────────────
// SCPN Helix Core — Biot-Savart Loop
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Direct Biot-Savart summation over a discretised circular loop.
//!
//! Each segment sits at the angular midpoint with a tangent current element
//! `R dθ`. For a closed loop this is the periodic trapezoidal rule, which
//! converges geometrically away from the wire. Used as an independent
//! check on the elliptic-integral solution.

use helix_types::constants::MU0;
use helix_types::error::{HelixError, HelixResult};
use std::f64::consts::PI;

use crate::MagneticField;

/// Points closer than this to a segment midpoint are skipped [m].
const SINGULAR_DISTANCE: f64 = 1e-12;

#[derive(Debug, Clone)]
pub struct BiotSavartLoop {
    current: f64,
    z_position: f64,
    /// Segment midpoints (x, y)
    midpoints: Vec<[f64; 2]>,
    /// Current elements dl (x, y)
    elements: Vec<[f64; 2]>,
}

impl BiotSavartLoop {
    pub fn new(radius: f64, current: f64, z_position: f64, segments: usize) -> HelixResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(HelixError::ConfigError(format!(
                "loop radius must be finite and > 0, got {radius}"
            )));
        }
        if !current.is_finite() || !z_position.is_finite() {
            return Err(HelixError::ConfigError(
                "loop current and z_position must be finite".to_string(),
            ));
        }
        if segments < 3 {
            return Err(HelixError::ConfigError(format!(
                "Biot-Savart loop needs at least 3 segments, got {segments}"
            )));
        }

        let dtheta = 2.0 * PI / segments as f64;
        let (midpoints, elements) = (0..segments)
            .map(|i| {
                let theta = (i as f64 + 0.5) * dtheta;
                let (sin, cos) = theta.sin_cos();
                (
                    [radius * cos, radius * sin],
                    [-radius * sin * dtheta, radius * cos * dtheta],
                )
            })
            .unzip();

        Ok(BiotSavartLoop {
            current,
            z_position,
            midpoints,
            elements,
        })
    }

    pub fn segments(&self) -> usize {
        self.midpoints.len()
    }
}

impl MagneticField for BiotSavartLoop {
    fn field_at(&self, point: [f64; 3]) -> [f64; 3] {
        let rz = point[2] - self.z_position;
        let mut b = [0.0; 3];
        for (mid, dl) in self.midpoints.iter().zip(&self.elements) {
            let rx = point[0] - mid[0];
            let ry = point[1] - mid[1];
            let r_mag = (rx * rx + ry * ry + rz * rz).sqrt();
            if r_mag < SINGULAR_DISTANCE {
                continue;
            }
            let inv_r3 = 1.0 / (r_mag * r_mag * r_mag);
            // dl × r with dl_z = 0
            b[0] += dl[1] * rz * inv_r3;
            b[1] -= dl[0] * rz * inv_r3;
            b[2] += (dl[0] * ry - dl[1] * rx) * inv_r3;
        }
        let factor = MU0 / (4.0 * PI) * self.current;
        [factor * b[0], factor * b[1], factor * b[2]]
    }
}
