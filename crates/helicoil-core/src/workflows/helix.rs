use crate::core::geometry::angles::backbone_angles;
use crate::core::geometry::error::GeometryError;
use crate::core::geometry::omega::{self, solve_omega};
use crate::core::io::coords::truncate_ends;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Parameters for an omega-profile analysis.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct OmegaParams {
    /// Absolute tolerance, in radians, for the rotation-angle root finder.
    pub tolerance: f64,
    /// Number of leading positions to drop before windowing.
    pub truncate_start: usize,
    /// Number of trailing positions to drop before windowing.
    pub truncate_end: usize,
}

impl Default for OmegaParams {
    fn default() -> Self {
        Self {
            tolerance: omega::DEFAULT_TOLERANCE,
            truncate_start: 0,
            truncate_end: 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl OmegaParams {
    /// Parses parameters from a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Loads parameters from a TOML file.
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        Ok(Self::from_toml_str(&fs::read_to_string(path)?)?)
    }
}

/// Computes the helix rotation angle of four consecutive positions.
///
/// This is the canonical four-point entry point: it extracts the two bond
/// angles and the torsion, averages the bond angles into `theta`, and
/// solves the projection equation for omega. The result is in radians, in
/// `(-pi, pi)`, negative for a left-handed helix.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateInput`] when consecutive points
/// coincide, and [`GeometryError::NonConvergence`] if the root finder
/// fails to bracket the solution (a logic defect, not a data problem).
pub fn rotation_angle(
    p0: &Point3<f64>,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    tolerance: f64,
) -> Result<f64, GeometryError> {
    let angles = backbone_angles(p0, p1, p2, p3)?;
    solve_omega(angles.theta(), angles.phi, tolerance)
}

/// Computes the helix rotation angle from precomputed angles.
///
/// For callers that already extracted `theta` (the average 3-body bond
/// angle) and `phi` (the 4-body torsion) themselves.
///
/// # Errors
///
/// Returns [`GeometryError::NonConvergence`] if the root finder fails to
/// bracket the solution.
pub fn rotation_angle_from_angles(
    theta: f64,
    phi: f64,
    tolerance: f64,
) -> Result<f64, GeometryError> {
    solve_omega(theta, phi, tolerance)
}

/// Computes the omega profile of a chain: one rotation angle per sliding
/// window of four consecutive positions.
///
/// A window is "unavailable" when any of its four positions is `None`
/// (missing coordinates in the source data) or when its points are
/// degenerate; such windows yield `None` and processing continues with the
/// next window. The output always has `max(len - 3, 0)` entries for an
/// input of `len` positions (after truncation), so positions stay aligned
/// with the source chain.
///
/// # Errors
///
/// Propagates [`GeometryError::NonConvergence`] from the root finder;
/// unlike degenerate data, a non-converging solve indicates a defect and
/// must fail loudly.
pub fn omega_profile(
    coords: &[Option<Point3<f64>>],
    params: &OmegaParams,
) -> Result<Vec<Option<f64>>, GeometryError> {
    let coords = truncate_ends(coords, params.truncate_start, params.truncate_end);

    let windows = coords.len().saturating_sub(3);
    let mut profile = Vec::with_capacity(windows);
    for (i, window) in coords.windows(4).enumerate() {
        let omega = match window {
            [Some(p0), Some(p1), Some(p2), Some(p3)] => {
                match rotation_angle(p0, p1, p2, p3, params.tolerance) {
                    Ok(omega) => Some(omega),
                    Err(GeometryError::DegenerateInput { pair }) => {
                        debug!("window {}: degenerate bond {}, skipped", i, pair);
                        None
                    }
                    Err(e @ GeometryError::NonConvergence { .. }) => return Err(e),
                }
            }
            _ => None,
        };
        profile.push(omega);
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::omega::DEFAULT_TOLERANCE;
    use std::f64::consts::PI;

    /// Builds an ideal helical trace from its internal coordinates: every
    /// bond has length `bond`, every 3-body angle is `eta`, every torsion
    /// is `phi`.
    fn ideal_trace(n: usize, bond: f64, eta: f64, phi: f64) -> Vec<Option<Point3<f64>>> {
        let mut points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(bond, 0.0, 0.0),
            Point3::new(bond - bond * eta.cos(), bond * eta.sin(), 0.0),
        ];
        while points.len() < n {
            let k = points.len();
            let d2 = (points[k - 1] - points[k - 2]).normalize();
            let n_hat = (points[k - 2] - points[k - 3]).cross(&d2).normalize();
            let m_hat = n_hat.cross(&d2);
            let step = d2 * -eta.cos() + m_hat * (eta.sin() * phi.cos()) + n_hat * (eta.sin() * phi.sin());
            points.push(points[k - 1] + step * bond);
        }
        points.into_iter().map(Some).collect()
    }

    #[test]
    fn ideal_trace_reproduces_its_internal_coordinates() {
        let trace = ideal_trace(6, 3.8, 92.0f64.to_radians(), 50.0f64.to_radians());
        let pts: Vec<_> = trace.iter().map(|p| p.unwrap()).collect();
        let angles = backbone_angles(&pts[1], &pts[2], &pts[3], &pts[4]).unwrap();
        assert!((angles.angle012.to_degrees() - 92.0).abs() < 1e-6);
        assert!((angles.angle123.to_degrees() - 92.0).abs() < 1e-6);
        assert!((angles.phi.to_degrees() - 50.0).abs() < 1e-6);
    }

    #[test]
    fn alpha_helix_trace_winds_at_about_a_hundred_degrees() {
        // Canonical CA pseudo-geometry: 3.8 A bonds, 92 degree pseudo-bond
        // angles, 50 degree pseudo-torsions -> ~3.6 residues per turn.
        let trace = ideal_trace(8, 3.8, 92.0f64.to_radians(), 50.0f64.to_radians());
        let profile = omega_profile(&trace, &OmegaParams::default()).unwrap();
        assert_eq!(profile.len(), 5);
        for omega in profile {
            let omega_deg = omega.unwrap().to_degrees();
            assert!((95.0..105.0).contains(&omega_deg), "omega was {omega_deg}");
            let residues_per_turn = 360.0 / omega_deg;
            assert!((3.4..3.8).contains(&residues_per_turn));
        }
    }

    #[test]
    fn left_handed_trace_gives_negative_omega() {
        let trace = ideal_trace(6, 3.8, 92.0f64.to_radians(), -50.0f64.to_radians());
        let profile = omega_profile(&trace, &OmegaParams::default()).unwrap();
        for omega in profile {
            assert!(omega.unwrap() < 0.0);
        }
    }

    #[test]
    fn four_point_and_from_angles_paths_agree() {
        // The inlined extraction-plus-solve and the precomputed-angles
        // entry point must agree on the same window.
        let trace = ideal_trace(4, 3.8, 92.0f64.to_radians(), 50.0f64.to_radians());
        let pts: Vec<_> = trace.iter().map(|p| p.unwrap()).collect();

        let via_points =
            rotation_angle(&pts[0], &pts[1], &pts[2], &pts[3], DEFAULT_TOLERANCE).unwrap();

        let angles = backbone_angles(&pts[0], &pts[1], &pts[2], &pts[3]).unwrap();
        let via_angles =
            rotation_angle_from_angles(angles.theta(), angles.phi, DEFAULT_TOLERANCE).unwrap();

        assert_eq!(via_points.to_bits(), via_angles.to_bits());
    }

    #[test]
    fn rotation_angle_is_idempotent() {
        let trace = ideal_trace(4, 3.8, 92.0f64.to_radians(), 50.0f64.to_radians());
        let pts: Vec<_> = trace.iter().map(|p| p.unwrap()).collect();
        let a = rotation_angle(&pts[0], &pts[1], &pts[2], &pts[3], DEFAULT_TOLERANCE).unwrap();
        let b = rotation_angle(&pts[0], &pts[1], &pts[2], &pts[3], DEFAULT_TOLERANCE).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn coplanar_window_yields_the_boundary_omega() {
        // Four coplanar, non-collinear points: phi is exactly zero and
        // omega solves the boundary equation, omega = pi - theta.
        let pts = [
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let omega =
            rotation_angle(&pts[0], &pts[1], &pts[2], &pts[3], DEFAULT_TOLERANCE).unwrap();
        assert!(!omega.is_nan());
        assert!((omega - PI / 2.0).abs() < 1e-5, "omega was {omega}");
    }

    #[test]
    fn missing_positions_skip_only_their_windows() {
        let mut trace = ideal_trace(9, 3.8, 92.0f64.to_radians(), 50.0f64.to_radians());
        trace[4] = None;
        let profile = omega_profile(&trace, &OmegaParams::default()).unwrap();
        assert_eq!(profile.len(), 6);
        // Windows 1 through 4 contain position 4; 0 and 5 do not.
        assert!(profile[0].is_some());
        for w in 1..=4 {
            assert!(profile[w].is_none(), "window {w} should be unavailable");
        }
        assert!(profile[5].is_some());
    }

    #[test]
    fn degenerate_window_is_isolated_not_fatal() {
        let mut trace = ideal_trace(9, 3.8, 92.0f64.to_radians(), 50.0f64.to_radians());
        // Duplicate a position so the bond between 3 and 4 has zero length.
        trace[4] = trace[3];
        let profile = omega_profile(&trace, &OmegaParams::default()).unwrap();
        assert_eq!(profile.len(), 6);
        // Exactly the windows spanning the zero-length bond are skipped.
        for w in 1..=3 {
            assert!(profile[w].is_none(), "window {w} should be unavailable");
        }
        assert!(profile[0].is_some());
        assert!(profile[4].is_some());
        assert!(profile[5].is_some());
    }

    #[test]
    fn short_chains_produce_empty_profiles() {
        let trace = ideal_trace(3, 3.8, 92.0f64.to_radians(), 50.0f64.to_radians());
        let profile = omega_profile(&trace, &OmegaParams::default()).unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn truncation_is_applied_before_windowing() {
        let trace = ideal_trace(10, 3.8, 92.0f64.to_radians(), 50.0f64.to_radians());
        let params = OmegaParams {
            truncate_start: 2,
            truncate_end: 1,
            ..OmegaParams::default()
        };
        let profile = omega_profile(&trace, &params).unwrap();
        // 10 - 2 - 1 = 7 positions -> 4 windows.
        assert_eq!(profile.len(), 4);
    }

    #[test]
    fn params_parse_from_toml_with_defaults() {
        let params = OmegaParams::from_toml_str("tolerance = 1e-8\n").unwrap();
        assert_eq!(params.tolerance, 1e-8);
        assert_eq!(params.truncate_start, 0);
        assert_eq!(params.truncate_end, 0);

        let params =
            OmegaParams::from_toml_str("truncate-start = 2\ntruncate-end = 3\n").unwrap();
        assert_eq!(params.truncate_start, 2);
        assert_eq!(params.truncate_end, 3);
    }

    #[test]
    fn unknown_params_are_rejected() {
        assert!(OmegaParams::from_toml_str("bogus = 1\n").is_err());
    }

    #[test]
    fn params_load_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        std::fs::write(&path, "tolerance = 1e-7\ntruncate-start = 1\n").unwrap();
        let params = OmegaParams::from_toml_path(&path).unwrap();
        assert_eq!(params.tolerance, 1e-7);
        assert_eq!(params.truncate_start, 1);

        assert!(matches!(
            OmegaParams::from_toml_path(dir.path().join("missing.toml")),
            Err(ParamsError::Io(_))
        ));
    }
}
