use nalgebra::Point3;
use std::io::{self, BufRead};
use tracing::debug;

/// Parses a whitespace-separated coordinate trace, one point per line.
///
/// Each line should hold three numbers (x, y, z). A blank line marks a
/// position whose coordinates are unavailable (e.g. an atom missing from
/// the source structure) and becomes `None`; so does a line with the wrong
/// number of tokens or an unparsable number. Unavailable positions are
/// placeholders, not gaps: they keep the residue indexing of the chain
/// intact so that downstream windows line up.
///
/// # Errors
///
/// Returns an error only when reading from the underlying stream fails.
pub fn read_points(reader: &mut impl BufRead) -> io::Result<Vec<Option<Point3<f64>>>> {
    let mut points = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let parsed = parse_numbers(&line, 3);
        if parsed.is_none() && !line.trim().is_empty() {
            debug!("line {}: not a coordinate triple, marked unavailable", lineno + 1);
        }
        points.push(parsed.map(|n| Point3::new(n[0], n[1], n[2])));
    }
    Ok(points)
}

/// Parses a trace of point pairs, six numbers per line (two atoms).
///
/// Blank and malformed lines become `None`, as in [`read_points`].
///
/// # Errors
///
/// Returns an error only when reading from the underlying stream fails.
pub fn read_point_pairs(
    reader: &mut impl BufRead,
) -> io::Result<Vec<Option<(Point3<f64>, Point3<f64>)>>> {
    let mut pairs = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let parsed = parse_numbers(&line, 6);
        if parsed.is_none() && !line.trim().is_empty() {
            debug!("line {}: not a coordinate pair, marked unavailable", lineno + 1);
        }
        pairs.push(parsed.map(|n| {
            (
                Point3::new(n[0], n[1], n[2]),
                Point3::new(n[3], n[4], n[5]),
            )
        }));
    }
    Ok(pairs)
}

/// Drops `skip_start` leading and `skip_end` trailing entries.
///
/// The residues at the two ends of a helix are less trustworthy than the
/// ones in the middle, so callers routinely trim them before analysis.
/// Requests that would consume the whole slice return an empty slice.
pub fn truncate_ends<T>(values: &[T], skip_start: usize, skip_end: usize) -> &[T] {
    if skip_start + skip_end >= values.len() {
        return &[];
    }
    &values[skip_start..values.len() - skip_end]
}

fn parse_numbers(line: &str, expected: usize) -> Option<Vec<f64>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return None;
    }
    tokens.iter().map(|t| t.parse::<f64>().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    #[test]
    fn reads_triples_one_per_line() {
        let input = "1.0 2.0 3.0\n4 5 6\n";
        let points = read_points(&mut BufReader::new(input.as_bytes())).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Some(Point3::new(1.0, 2.0, 3.0)));
        assert_eq!(points[1], Some(Point3::new(4.0, 5.0, 6.0)));
    }

    #[test]
    fn blank_lines_are_unavailable_markers() {
        let input = "1 2 3\n\n7 8 9\n";
        let points = read_points(&mut BufReader::new(input.as_bytes())).unwrap();
        assert_eq!(points.len(), 3);
        assert!(points[0].is_some());
        assert!(points[1].is_none());
        assert!(points[2].is_some());
    }

    #[test]
    fn malformed_lines_are_unavailable_not_fatal() {
        let input = "1 2 3\n1 2\nfoo bar baz\n1 2 3 4\n4 5 6\n";
        let points = read_points(&mut BufReader::new(input.as_bytes())).unwrap();
        assert_eq!(points.len(), 5);
        assert!(points[0].is_some());
        assert!(points[1].is_none());
        assert!(points[2].is_none());
        assert!(points[3].is_none());
        assert!(points[4].is_some());
    }

    #[test]
    fn reads_six_number_pair_lines() {
        let input = "0 0 0 3 4 0\n\n1 1 1 1 1 1\n";
        let pairs = read_point_pairs(&mut BufReader::new(input.as_bytes())).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(
            pairs[0],
            Some((Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)))
        );
        assert!(pairs[1].is_none());
        assert!(pairs[2].is_some());
    }

    #[test]
    fn truncation_trims_both_ends() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(truncate_ends(&values, 1, 2), &[2, 3]);
        assert_eq!(truncate_ends(&values, 0, 0), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn truncation_never_panics_on_short_input() {
        let values = [1, 2];
        assert!(truncate_ends(&values, 1, 1).is_empty());
        assert!(truncate_ends(&values, 5, 0).is_empty());
        assert!(truncate_ends::<i32>(&[], 0, 1).is_empty());
    }
}
