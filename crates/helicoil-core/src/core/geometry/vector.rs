use nalgebra::Vector3;

/// Dot product of two 3-vectors.
#[inline]
pub fn dot(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.dot(b)
}

/// Euclidean length of a 3-vector. Always non-negative, and exactly zero
/// for the zero vector.
#[inline]
pub fn length(v: &Vector3<f64>) -> f64 {
    dot(v, v).sqrt()
}

/// Standard 3D cross product. Dimension mismatches are impossible here:
/// `Vector3` is a fixed-size type, so a wrong-length input does not compile.
#[inline]
pub fn cross(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    a.cross(b)
}
