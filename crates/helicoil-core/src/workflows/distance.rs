use crate::core::geometry::angles::distance;
use nalgebra::Point3;

/// Computes the distance between the two atoms of each input line.
///
/// Unavailable pairs (blank or malformed source lines) stay `None` so the
/// output lines up one-to-one with the input.
pub fn distance_profile(pairs: &[Option<(Point3<f64>, Point3<f64>)>]) -> Vec<Option<f64>> {
    pairs
        .iter()
        .map(|pair| pair.as_ref().map(|(a, b)| distance(a, b)))
        .collect()
}
