//! Mathematical primitives for SCPN Helix Core.

pub mod elliptic;
pub mod vector;
