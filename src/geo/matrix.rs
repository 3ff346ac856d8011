//! Dense pairwise distance table.

use super::Coordinate;

/// Symmetric `n × n` distance table over a fixed point list.
///
/// Entries are filled once through a caller-supplied distance function,
/// typically [`DistanceCache::get_or_compute`](super::DistanceCache::get_or_compute)
/// or [`haversine_distance`](super::haversine_distance). Only the upper
/// triangle is queried; the lower triangle is mirrored.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    size: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the table for `points` using `distance` for each unordered pair.
    pub fn from_points<F>(points: &[Coordinate], mut distance: F) -> Self
    where
        F: FnMut(Coordinate, Coordinate) -> f64,
    {
        let size = points.len();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = distance(points[i], points[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self { size, data }
    }

    /// Number of points.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance between point `i` and point `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::haversine_distance;

    #[test]
    fn test_matches_direct_distance() {
        let points = [
            Coordinate::new(116.397428, 39.90923),
            Coordinate::new(116.466263, 39.921466),
            Coordinate::new(116.432919, 39.999659),
        ];
        let m = DistanceMatrix::from_points(&points, haversine_distance);

        assert_eq!(m.size(), 3);
        for i in 0..3 {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..3 {
                if i != j {
                    assert_eq!(m.get(i, j), haversine_distance(points[i], points[j]));
                    assert_eq!(m.get(i, j), m.get(j, i));
                }
            }
        }
    }

    #[test]
    fn test_each_pair_queried_once() {
        let points: Vec<Coordinate> = (0..5).map(|i| Coordinate::new(i as f64, 0.0)).collect();
        let mut calls = 0;
        let _ = DistanceMatrix::from_points(&points, |a, b| {
            calls += 1;
            haversine_distance(a, b)
        });
        assert_eq!(calls, 10);
    }

    #[test]
    fn test_empty() {
        let m = DistanceMatrix::from_points(&[], haversine_distance);
        assert_eq!(m.size(), 0);
    }
}
