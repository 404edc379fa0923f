use super::error::GeometryError;
use super::vector::{cross, dot, length};
use nalgebra::Point3;

/// The two bond angles and the signed torsion angle extracted from four
/// consecutive backbone positions.
///
/// `angle012` and `angle123` are the 3-body angles at the two interior
/// vertices, each in `[0, π]`. `phi` is the 4-body torsion (dihedral)
/// angle in `(-π, π]`, negative for left-handed twist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackboneAngles {
    pub angle012: f64,
    pub angle123: f64,
    pub phi: f64,
}

impl BackboneAngles {
    /// The average of the two bond angles, the `theta` consumed by the
    /// rotation-angle solver.
    #[inline]
    pub fn theta(&self) -> f64 {
        0.5 * (self.angle012 + self.angle123)
    }
}

/// `acos` with its argument clamped to `[-1, 1]`.
///
/// Floating-point roundoff can push a cosine computed from exactly coplanar
/// or collinear points slightly outside the domain (e.g. `1.0 + 1e-10`),
/// which would turn into a NaN downstream. The clamp is part of the
/// contract, not an optional nicety, and is silent.
#[inline]
pub fn clamped_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    length(&(b - a))
}

/// Computes the [`BackboneAngles`] of four consecutive positions.
///
/// The torsion sign convention follows the usual chirality test: `phi` is
/// negated when the final bond points against the normal of the first
/// bond plane (`dot(n1, d23) < 0`), so right-handed twist is positive.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateInput`] when any two consecutive
/// points coincide; the angle at a zero-length bond is undefined and would
/// otherwise surface as a division by zero.
pub fn backbone_angles(
    r0: &Point3<f64>,
    r1: &Point3<f64>,
    r2: &Point3<f64>,
    r3: &Point3<f64>,
) -> Result<BackboneAngles, GeometryError> {
    let d01 = r1 - r0;
    let d12 = r2 - r1;
    let d23 = r3 - r2;

    let l01 = length(&d01);
    let l12 = length(&d12);
    let l23 = length(&d23);
    for (pair, l) in [l01, l12, l23].into_iter().enumerate() {
        if l == 0.0 {
            return Err(GeometryError::DegenerateInput { pair });
        }
    }

    let n1 = cross(&d01, &d12);
    let n2 = cross(&d12, &d23);

    let mut phi = clamped_acos(dot(&n1, &n2) / (length(&n1) * length(&n2)));
    if dot(&n1, &d23) < 0.0 {
        phi = -phi;
    }

    // The interior angle at r1 is between d12 and -d01, hence the negated
    // dot products.
    let angle012 = clamped_acos(-dot(&d01, &d12) / (l01 * l12));
    let angle123 = clamped_acos(-dot(&d12, &d23) / (l12 * l23));

    Ok(BackboneAngles {
        angle012,
        angle123,
        phi,
    })
}
