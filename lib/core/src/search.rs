//! Exhaustive nearest-neighbor search
//!
//! Every training row is scored against the query; no index is built. The
//! result is overfetched so that collapsing hits by label can still reach `k`
//! distinct labels.

use crate::{Dataset, Metric, MetricSpace, PresenceVector};
use serde::Serialize;

/// Overfetch factor applied to `k`
pub const OVERFETCH_FACTOR: usize = 8;

/// A single search hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    pub row: usize,
    pub distance: f64,
}

/// Number of raw neighbors to request for `k`: `clamp(k * 8, k, n)`
#[inline]
pub fn overfetch(k: usize, n: usize) -> usize {
    k.saturating_mul(OVERFETCH_FACTOR).max(k).min(n)
}

/// Brute-force search over a borrowed dataset
pub struct NeighborSearch<'a> {
    dataset: &'a Dataset,
}

impl<'a> NeighborSearch<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Distances from `query` to every row, in row order
    pub fn distances(&self, query: &PresenceVector, metric: Metric) -> Vec<f64> {
        match metric.space() {
            MetricSpace::Boolean => self
                .dataset
                .presence_rows()
                .iter()
                .map(|row| metric.boolean_distance(query, row))
                .collect(),
            MetricSpace::Numeric => {
                let query = query.to_numeric();
                self.dataset
                    .numeric_rows()
                    .iter()
                    .map(|row| metric.numeric_distance(&query, row))
                    .collect()
            }
        }
    }

    /// The `overfetch(k, N)` closest rows, ascending by distance, ties in row order
    pub fn search(&self, query: &PresenceVector, k: usize, metric: Metric) -> Vec<Candidate> {
        let ask = overfetch(k, self.dataset.len());

        let mut candidates: Vec<Candidate> = self
            .distances(query, metric)
            .into_iter()
            .enumerate()
            .map(|(row, distance)| Candidate { row, distance })
            .collect();

        // stable: equal distances keep row order
        candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        candidates.truncate(ask);
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vocabulary;

    fn dataset() -> Dataset {
        let vocab = Vocabulary::new(["fever", "cough", "fatigue"]);
        Dataset::from_symptom_sets(
            vocab,
            vec![
                ("Cold", vec!["cough", "fatigue"]),
                ("Flu", vec!["fever", "cough"]),
                ("Flu", vec!["fever"]),
                ("Flu", vec!["fever"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_overfetch() {
        assert_eq!(overfetch(1, 100), 8);
        assert_eq!(overfetch(7, 100), 56);
        assert_eq!(overfetch(7, 20), 20);
        assert_eq!(overfetch(3, 2), 2);
        assert_eq!(overfetch(usize::MAX, 10), 10);
    }

    #[test]
    fn test_search_sorted_with_stable_ties() {
        let ds = dataset();
        let query = PresenceVector::from_indices(3, [ds.vocabulary().index_of("fever").unwrap()]);
        let hits = NeighborSearch::new(&ds).search(&query, 1, Metric::Hamming);

        assert_eq!(hits.len(), 4);
        let rows: Vec<usize> = hits.iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![2, 3, 1, 0]);
        assert_eq!(hits[0].distance, 0.0);
        assert!((hits[2].distance - 1.0 / 3.0).abs() < 1e-12);
        assert!((hits[3].distance - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_search_numeric_metrics() {
        let ds = dataset();
        let fever = ds.vocabulary().index_of("fever").unwrap();
        let query = PresenceVector::from_indices(3, [fever]);

        let hits = NeighborSearch::new(&ds).search(&query, 1, Metric::Euclidean);
        assert_eq!(hits[0].row, 2);
        assert_eq!(hits[0].distance, 0.0);
        assert!((hits[2].distance - 1.0).abs() < 1e-9);
        assert!((hits[3].distance - 3f64.sqrt()).abs() < 1e-9);

        let hits = NeighborSearch::new(&ds).search(&query, 1, Metric::Cosine);
        assert_eq!(hits[0].row, 2);
        assert!(hits[0].distance.abs() < 1e-9);
        assert!((hits[3].distance - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_search_respects_overfetch_limit() {
        let vocab = Vocabulary::new(["a", "b"]);
        let records: Vec<(String, Vec<&str>)> =
            (0..30).map(|i| (format!("L{}", i % 5), vec!["a"])).collect();
        let ds = Dataset::from_symptom_sets(vocab, records).unwrap();
        let query = PresenceVector::from_indices(2, [0]);

        let hits = NeighborSearch::new(&ds).search(&query, 2, Metric::Jaccard);
        assert_eq!(hits.len(), 16);
        assert!(hits.windows(2).all(|w| w[0].row < w[1].row));
    }
}
