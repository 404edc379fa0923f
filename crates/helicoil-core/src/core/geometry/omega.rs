use super::error::GeometryError;
use std::f64::consts::PI;

/// Default absolute tolerance, in radians, for the bisection bracket.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

// The bracket halves every iteration, so ceil(log2(pi / tolerance))
// iterations suffice for any tolerance down to f64 resolution.
const MAX_ITERATIONS: usize = 128;

/// Solves for the helix rotation angle omega.
///
/// Omega is the exterior angle made by the polygonal shadow of a helix's
/// backbone trace when viewed down its axis of symmetry and projected onto
/// the plane below. For an alpha helix, which winds roughly 3.6 residues
/// per turn, omega is about 360/3.6 = 100 degrees.
///
/// Given `theta` (the average 3-body bond angle) and `phi` (the 4-body
/// torsion angle), omega satisfies
///
/// ```text
/// tan^2(phi/2) = (sin^2(omega/2) - sin^2(Theta/2)) / cos^2(omega/2)
/// ```
///
/// with `Theta = pi - theta`. The left-hand side is monotonically
/// increasing in omega over `[0, pi]`, so the unique root is found by
/// bisection to within `tolerance` radians. The magnitude is solved first;
/// a negative `phi` (left-handed helix) negates the result.
///
/// All angles are in radians.
///
/// # Errors
///
/// Returns [`GeometryError::NonConvergence`] if the bracket fails to shrink
/// below `tolerance` within the iteration cap. With a monotone left-hand
/// side this is unreachable for any tolerance above f64 resolution.
pub fn solve_omega(theta: f64, phi: f64, tolerance: f64) -> Result<f64, GeometryError> {
    let big_theta = PI - theta;

    let tan_half_phi = (0.5 * phi).tan();
    let tan2_half_phi = tan_half_phi * tan_half_phi;

    let sin_half_theta = (0.5 * big_theta).sin();
    let sin2_half_theta = sin_half_theta * sin_half_theta;

    let mut lower = 0.0f64;
    let mut upper = PI;
    let mut omega = lower + 0.5 * (upper - lower);
    let mut iterations = 0;
    while upper - lower > tolerance {
        if iterations >= MAX_ITERATIONS {
            return Err(GeometryError::NonConvergence { iterations });
        }
        omega = lower + 0.5 * (upper - lower);

        let cos_half = (0.5 * omega).cos();
        let sin_half = (0.5 * omega).sin();
        let lhs = (sin_half * sin_half - sin2_half_theta) / (cos_half * cos_half);

        if lhs > tan2_half_phi {
            upper = omega;
        } else {
            lower = omega;
        }
        iterations += 1;
    }

    // The bisection only recovers the magnitude of omega.
    if phi < 0.0 { Ok(-omega) } else { Ok(omega) }
}

/// The forward equation: recovers the torsion angle `phi` implied by a
/// bond angle `theta` and a rotation angle `omega`.
///
/// Inverse of [`solve_omega`]; used for round-trip verification. The
/// argument of the square root is clamped at zero, since for `|omega|`
/// below the planar minimum the geometric model has no real torsion.
pub fn omega_to_phi(theta: f64, omega: f64) -> f64 {
    let big_theta = PI - theta;

    let sin_half_omega = (0.5 * omega).sin();
    let cos_half_omega = (0.5 * omega).cos();
    let sin_half_theta = (0.5 * big_theta).sin();

    let numerator = sin_half_omega * sin_half_omega - sin_half_theta * sin_half_theta;
    let tan_half_phi = (numerator.max(0.0)).sqrt() / cos_half_omega.abs();

    let phi = 2.0 * tan_half_phi.atan();
    if omega < 0.0 { -phi } else { phi }
}
