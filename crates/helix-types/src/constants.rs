// ─────────────────────────────────────────────────────────────────────
// SCPN Helix Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants, SI units throughout.

use std::f64::consts::PI;

/// Vacuum permeability (H/m), classical exact value 4π·10⁻⁷.
/// The loop-field formulas are normalised against this value.
pub const MU0: f64 = 4.0e-7 * PI;

/// Elementary charge (C)
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Electron rest mass (kg)
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;

/// Proton rest mass (kg)
pub const PROTON_MASS: f64 = 1.672_621_923_69e-27;

/// Magnetic rigidity constant: p[GeV/c] = 0.299792458 · B[T] · r[m] for unit charge.
pub const UNIT_CONSTANT: f64 = 0.299_792_458;

/// Joules per GeV.
pub const JOULE_PER_GEV: f64 = 1.0e9 * ELEMENTARY_CHARGE;

/// Joules per eV.
pub const JOULE_PER_EV: f64 = ELEMENTARY_CHARGE;

/// Tritium beta-decay endpoint energy (eV), the default electron energy for trap studies.
pub const TRITIUM_ENDPOINT_EV: f64 = 18_600.0;
