// ─────────────────────────────────────────────────────────────────────
// SCPN Helix Core — Helix Stepper
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form charged-particle steppers for locally uniform magnetic fields.
//!
//! Two step laws share one stepper type: the exact helix rotation and a
//! half-step leapfrog with a Boris velocity rotation. Both take a field
//! sample that is held constant over the step.

pub mod equation;
pub mod radiation;
pub mod stepper;
pub mod trajectory;

pub use equation::EquationOfMotion;
pub use helix_types::config::StepperKind;
pub use radiation::{NoRadiation, RadiationReaction};
pub use stepper::{create_stepper, dist_chord, HelixGeometry, HelixStepper};
pub use trajectory::{gyro_step_length, integrate_fixed_step, Trajectory};
