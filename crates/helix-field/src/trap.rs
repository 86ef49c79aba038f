// ─────────────────────────────────────────────────────────────────────
// SCPN Helix Core — Loop Trap
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Coaxial current-loop traps: single coil, two-coil "bathtub" bottle and
//! stacked-loop solenoid, superposed on a uniform background field.

use helix_types::config::TrapConfig;
use helix_types::error::{HelixError, HelixResult};

use crate::current_loop::CurrentLoop;
use crate::MagneticField;

/// Set of coaxial loops sharing one radius and one current, plus a uniform background.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopTrap {
    loops: Vec<CurrentLoop>,
    background: [f64; 3],
}

fn validate_background(background: [f64; 3]) -> HelixResult<()> {
    if background.iter().any(|b| !b.is_finite()) {
        return Err(HelixError::ConfigError(format!(
            "background field must be finite, got {background:?}"
        )));
    }
    Ok(())
}

impl LoopTrap {
    /// Loops of `radius` and `current` at each of `coil_positions`.
    pub fn new(
        radius: f64,
        current: f64,
        coil_positions: &[f64],
        background: [f64; 3],
    ) -> HelixResult<Self> {
        if coil_positions.is_empty() {
            return Err(HelixError::ConfigError(
                "trap needs at least one coil".to_string(),
            ));
        }
        validate_background(background)?;
        let loops = coil_positions
            .iter()
            .map(|&z| CurrentLoop::new(radius, current, z))
            .collect::<HelixResult<Vec<_>>>()?;
        tracing::debug!(
            coils = loops.len(),
            radius,
            current,
            ?background,
            "built loop trap"
        );
        Ok(LoopTrap { loops, background })
    }

    /// One loop at `z_position` with an axial background `background_z`.
    pub fn single(
        radius: f64,
        current: f64,
        z_position: f64,
        background_z: f64,
    ) -> HelixResult<Self> {
        Self::new(radius, current, &[z_position], [0.0, 0.0, background_z])
    }

    /// Two identical loops at `z1` and `z2` forming a magnetic bottle.
    pub fn bathtub(
        radius: f64,
        current: f64,
        z1: f64,
        z2: f64,
        background_z: f64,
    ) -> HelixResult<Self> {
        Self::new(radius, current, &[z1, z2], [0.0, 0.0, background_z])
    }

    /// `n_coils` loops evenly spaced over `[z_min, z_max]`, both ends included.
    pub fn solenoid(
        radius: f64,
        current: f64,
        z_min: f64,
        z_max: f64,
        n_coils: usize,
    ) -> HelixResult<Self> {
        if n_coils == 0 {
            return Err(HelixError::ConfigError(
                "solenoid needs at least one coil".to_string(),
            ));
        }
        if !z_min.is_finite() || !z_max.is_finite() || z_max < z_min {
            return Err(HelixError::ConfigError(format!(
                "solenoid extent must be finite with z_max >= z_min, got [{z_min}, {z_max}]"
            )));
        }
        let positions: Vec<f64> = if n_coils == 1 {
            vec![0.5 * (z_min + z_max)]
        } else {
            let dz = (z_max - z_min) / (n_coils - 1) as f64;
            (0..n_coils).map(|i| z_min + i as f64 * dz).collect()
        };
        Self::new(radius, current, &positions, [0.0; 3])
    }

    pub fn from_config(config: &TrapConfig) -> HelixResult<Self> {
        Self::new(
            config.radius,
            config.current,
            &config.coil_positions,
            config.background,
        )
    }

    /// Total field at (x, y, z): loops summed in order, then the background.
    pub fn evaluate_field(&self, x: f64, y: f64, z: f64) -> [f64; 3] {
        let mut b = [0.0; 3];
        for coil in &self.loops {
            let bl = coil.field_at([x, y, z]);
            b[0] += bl[0];
            b[1] += bl[1];
            b[2] += bl[2];
        }
        [
            b[0] + self.background[0],
            b[1] + self.background[1],
            b[2] + self.background[2],
        ]
    }

    pub fn loops(&self) -> &[CurrentLoop] {
        &self.loops
    }

    pub fn background(&self) -> [f64; 3] {
        self.background
    }

    /// Set the current of every loop. Nothing changes if the value is rejected.
    pub fn set_current(&mut self, current: f64) -> HelixResult<()> {
        if !current.is_finite() {
            return Err(HelixError::ConfigError(format!(
                "loop current must be finite, got {current}"
            )));
        }
        for coil in &mut self.loops {
            coil.set_current(current)?;
        }
        tracing::debug!(current, "trap current changed");
        Ok(())
    }

    /// Set the radius of every loop. Nothing changes if the value is rejected.
    pub fn set_radius(&mut self, radius: f64) -> HelixResult<()> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(HelixError::ConfigError(format!(
                "loop radius must be finite and > 0, got {radius}"
            )));
        }
        for coil in &mut self.loops {
            coil.set_radius(radius)?;
        }
        tracing::debug!(radius, "trap radius changed");
        Ok(())
    }

    pub fn set_background(&mut self, background: [f64; 3]) -> HelixResult<()> {
        validate_background(background)?;
        self.background = background;
        tracing::debug!(?background, "trap background changed");
        Ok(())
    }
}

impl MagneticField for LoopTrap {
    fn field_at(&self, point: [f64; 3]) -> [f64; 3] {
        self.evaluate_field(point[0], point[1], point[2])
    }
}
