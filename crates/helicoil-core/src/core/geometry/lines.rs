use super::vector::dot;
use nalgebra::{Point3, Vector3};

/// Returns the closest pair of points on two infinite lines in 3D.
///
/// The first line passes through `ra0` with direction `va`, the second
/// through `rb0` with direction `vb`. Solving the two-line least-squares
/// system gives the parameters of the closest approach:
///
/// ```text
/// ta = -((vb.vb) va - (va.vb) vb) . (ra0 - rb0) / (va.va vb.vb - (va.vb)^2)
/// tb =  ((va.va) vb - (va.vb) va) . (ra0 - rb0) / (va.va vb.vb - (va.vb)^2)
/// ```
///
/// When the lines are parallel the discriminant vanishes and the pair is
/// not unique; in that case the points chosen lie halfway between `ra0`
/// and `rb0` along the shared direction.
pub fn closest_line_points(
    ra0: &Point3<f64>,
    rb0: &Point3<f64>,
    va: &Vector3<f64>,
    vb: &Vector3<f64>,
) -> (Point3<f64>, Point3<f64>) {
    let rab = ra0 - rb0;
    let va2 = dot(va, va);
    let vb2 = dot(vb, vb);
    let va_vb = dot(va, vb);

    let discriminant = va2 * vb2 - va_vb * va_vb;
    if discriminant == 0.0 {
        let scale_b = 0.5 * dot(&rab, vb) / vb2;
        let delta_b = vb * scale_b;
        return (ra0 - delta_b, rb0 + delta_b);
    }

    let ta = -dot(&(va * vb2 - vb * va_vb), &rab) / discriminant;
    let tb = dot(&(vb * va2 - va * va_vb), &rab) / discriminant;
    (ra0 + va * ta, rb0 + vb * tb)
}
