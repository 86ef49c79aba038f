// ─────────────────────────────────────────────────────────────────────
// SCPN Helix Core — Field Maps
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Batch evaluation of a field over point lists and meridional grids.

use helix_types::error::{HelixError, HelixResult};
use helix_types::state::RzGrid;
use ndarray::{Array1, Array2, ArrayView2};

use crate::MagneticField;

/// Field at each row of an `[n, 3]` point array. Returns `[n, 3]`.
pub fn evaluate_points<F: MagneticField + ?Sized>(
    field: &F,
    points: ArrayView2<f64>,
) -> HelixResult<Array2<f64>> {
    if points.ncols() != 3 {
        return Err(HelixError::ConfigError(format!(
            "points must have shape [n, 3], got {:?}",
            points.shape()
        )));
    }
    let mut out = Array2::zeros((points.nrows(), 3));
    for (row, mut b_row) in points.rows().into_iter().zip(out.rows_mut()) {
        let b = field.field_at([row[0], row[1], row[2]]);
        b_row[0] = b[0];
        b_row[1] = b[1];
        b_row[2] = b[2];
    }
    Ok(out)
}

/// |B| at each row of an `[n, 3]` point array.
pub fn field_magnitudes<F: MagneticField + ?Sized>(
    field: &F,
    points: ArrayView2<f64>,
) -> HelixResult<Array1<f64>> {
    let b = evaluate_points(field, points)?;
    Ok(b.rows()
        .into_iter()
        .map(|row| (row[0] * row[0] + row[1] * row[1] + row[2] * row[2]).sqrt())
        .collect())
}

/// Sample `(B_r, B_z)` in the φ = 0 half-plane.
///
/// Returns `[nz, nr]` arrays matching `grid.rr` / `grid.zz`. For an
/// axisymmetric field B_r is B_x at (r, 0, z); negative r values sample
/// the mirrored half-plane.
pub fn field_map<F: MagneticField + ?Sized>(
    field: &F,
    grid: &RzGrid,
) -> (Array2<f64>, Array2<f64>) {
    let mut b_r = Array2::zeros((grid.nz, grid.nr));
    let mut b_z = Array2::zeros((grid.nz, grid.nr));

    for iz in 0..grid.nz {
        for ir in 0..grid.nr {
            let b = field.field_at([grid.rr[[iz, ir]], 0.0, grid.zz[[iz, ir]]]);
            b_r[[iz, ir]] = b[0];
            b_z[[iz, ir]] = b[2];
        }
    }

    (b_r, b_z)
}

/// Axial field along the symmetry axis at each of `z`.
pub fn on_axis_profile<F: MagneticField + ?Sized>(field: &F, z: &[f64]) -> Array1<f64> {
    z.iter().map(|&zi| field.field_at([0.0, 0.0, zi])[2]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CurrentLoop, LoopTrap, UniformField};
    use ndarray::array;

    #[test]
    fn test_evaluate_points_matches_pointwise() {
        let trap = LoopTrap::bathtub(0.03, 200.0, -0.05, 0.05, 1.0).unwrap();
        let points = array![[0.0, 0.0, 0.0], [0.01, 0.002, -0.03], [0.0, 0.02, 0.06]];
        let b = evaluate_points(&trap, points.view()).unwrap();
        assert_eq!(b.shape(), &[3, 3]);
        for i in 0..3 {
            let expected = trap.evaluate_field(points[[i, 0]], points[[i, 1]], points[[i, 2]]);
            for j in 0..3 {
                assert_eq!(b[[i, j]], expected[j]);
            }
        }
    }

    #[test]
    fn test_field_magnitudes_uniform() {
        let field = UniformField::new([3.0, 0.0, 4.0]);
        let points = Array2::zeros((5, 3));
        let mags = field_magnitudes(&field, points.view()).unwrap();
        assert_eq!(mags.len(), 5);
        assert!(mags.iter().all(|&m| (m - 5.0).abs() < 1e-15));
    }

    #[test]
    fn test_rejects_wrong_point_shape() {
        let field = UniformField::along_z(1.0);
        let points = Array2::<f64>::zeros((4, 2));
        match evaluate_points(&field, points.view()).unwrap_err() {
            HelixError::ConfigError(msg) => assert!(msg.contains("[n, 3]")),
            other => panic!("Unexpected error: {other:?}"),
        }
        assert!(field_magnitudes(&field, points.view()).is_err());
    }

    #[test]
    fn test_field_map_layout_and_axis() {
        let coil = CurrentLoop::new(0.05, 5.0, 0.0).unwrap();
        let grid = RzGrid::new(9, 17, 0.0, 0.04, -0.08, 0.08);
        let (b_r, b_z) = field_map(&coil, &grid);
        assert_eq!(b_r.shape(), &[17, 9]);
        assert_eq!(b_z.shape(), &[17, 9]);
        for iz in 0..17 {
            // First column is the axis
            assert_eq!(b_r[[iz, 0]], 0.0);
            let on_axis = coil.on_axis_field(grid.z[iz]);
            assert!((b_z[[iz, 0]] - on_axis).abs() < 1e-15 * on_axis);
        }
        assert!(!b_r.iter().any(|v| v.is_nan()));
        assert!(!b_z.iter().any(|v| v.is_nan()));
    }

    #[test]
    fn test_on_axis_profile_symmetric_for_bathtub() {
        let trap = LoopTrap::bathtub(0.03, 200.0, -0.05, 0.05, 1.0).unwrap();
        let z = [-0.04, -0.02, 0.0, 0.02, 0.04];
        let profile = on_axis_profile(&trap, &z);
        assert_eq!(profile.len(), 5);
        for i in 0..2 {
            let mirror = profile[4 - i];
            assert!((profile[i] - mirror).abs() < 1e-12 * mirror);
        }
        assert!(profile[2] < profile[0]);
    }

    #[test]
    fn test_works_through_trait_objects() {
        let fields: Vec<Box<dyn MagneticField>> = vec![
            Box::new(UniformField::along_z(1.0)),
            Box::new(CurrentLoop::new(0.1, 1.0, 0.0).unwrap()),
        ];
        for field in &fields {
            let profile = on_axis_profile(field.as_ref(), &[0.0]);
            assert!(profile[0] > 0.0);
        }
    }
}
