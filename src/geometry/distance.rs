/// The closest pair among a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDistance {
    /// Positions within the input slice, `i < j`.
    pub i: usize,
    pub j: usize,
    pub distance: f64,
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Finds the closest pair by checking every unordered pair.
///
/// Returns `None` when fewer than two points are given. Ties keep the pair
/// encountered first in `(i, j)` lexicographic order.
pub fn closest_pair(points: &[[f64; 3]]) -> Option<PairDistance> {
    let mut best: Option<PairDistance> = None;

    for (i, &a) in points.iter().enumerate() {
        for (offset, &b) in points[i + 1..].iter().enumerate() {
            let d = distance(a, b);
            if best.is_none_or(|p| d < p.distance) {
                best = Some(PairDistance {
                    i,
                    j: i + 1 + offset,
                    distance: d,
                });
            }
        }
    }

    best
}

pub fn min_pairwise_distance(points: &[[f64; 3]]) -> Option<f64> {
    closest_pair(points).map(|p| p.distance)
}
