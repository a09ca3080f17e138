//! Collapse search hits into one summary per label

use crate::Candidate;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Smoothing term in the inverse-distance weight, keeps exact matches finite
pub const EPS: f64 = 1e-9;

/// Per-label summary of collapsed search hits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAggregate {
    pub label: String,
    /// Minimum distance among the label's hits
    pub distance: f64,
    /// Number of hits collapsed into this aggregate
    pub count: usize,
    /// Σ 1 / (distance + EPS) over the label's hits
    #[serde(rename = "agg_weight")]
    pub weight: f64,
}

/// Inverse-distance weight of a single hit
#[inline]
pub fn hit_weight(distance: f64) -> f64 {
    1.0 / (distance + EPS)
}

/// Collapse distance-sorted `candidates` by their label in `labels`.
///
/// One aggregate per distinct label, ordered ascending by minimum distance
/// with ties in first-encountered order. Hit counts sum to `candidates.len()`.
pub fn collapse_by_label(candidates: &[Candidate], labels: &[String]) -> Vec<LabelAggregate> {
    let mut slots: AHashMap<&str, usize> = AHashMap::new();
    let mut aggregates: Vec<LabelAggregate> = Vec::new();

    for candidate in candidates {
        let label = labels[candidate.row].as_str();
        let weight = hit_weight(candidate.distance);

        match slots.get(label) {
            Some(&slot) => {
                let agg = &mut aggregates[slot];
                if candidate.distance < agg.distance {
                    agg.distance = candidate.distance;
                }
                agg.count += 1;
                agg.weight += weight;
            }
            None => {
                slots.insert(label, aggregates.len());
                aggregates.push(LabelAggregate {
                    label: label.to_string(),
                    distance: candidate.distance,
                    count: 1,
                    weight,
                });
            }
        }
    }

    // already ordered for sorted input; stable sort keeps first-seen order on ties
    aggregates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    aggregates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        ["Flu", "Cold", "Flu", "Allergy", "Cold"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn hits(pairs: &[(usize, f64)]) -> Vec<Candidate> {
        pairs
            .iter()
            .map(|&(row, distance)| Candidate { row, distance })
            .collect()
    }

    #[test]
    fn test_collapse_counts_and_minimums() {
        let candidates = hits(&[(2, 0.0), (1, 0.25), (0, 0.25), (4, 0.5), (3, 0.75)]);
        let aggs = collapse_by_label(&candidates, &labels());

        assert_eq!(aggs.len(), 3);
        assert_eq!(aggs[0].label, "Flu");
        assert_eq!(aggs[0].count, 2);
        assert_eq!(aggs[0].distance, 0.0);
        assert!((aggs[0].weight - (1.0 / EPS + 1.0 / (0.25 + EPS))).abs() < 1e-3);

        assert_eq!(aggs[1].label, "Cold");
        assert_eq!(aggs[1].count, 2);
        assert_eq!(aggs[1].distance, 0.25);

        assert_eq!(aggs[2].label, "Allergy");
        assert_eq!(aggs.iter().map(|a| a.count).sum::<usize>(), candidates.len());
    }

    #[test]
    fn test_collapse_ties_keep_encounter_order() {
        let candidates = hits(&[(3, 0.5), (1, 0.5), (0, 0.5)]);
        let aggs = collapse_by_label(&candidates, &labels());
        let order: Vec<&str> = aggs.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(order, vec!["Allergy", "Cold", "Flu"]);
    }

    #[test]
    fn test_collapse_unsorted_input_still_tracks_minimum() {
        let candidates = hits(&[(4, 0.9), (0, 0.4), (1, 0.1)]);
        let aggs = collapse_by_label(&candidates, &labels());
        assert_eq!(aggs[0].label, "Cold");
        assert_eq!(aggs[0].distance, 0.1);
        assert_eq!(aggs[0].count, 2);
        assert_eq!(aggs[1].label, "Flu");
    }

    #[test]
    fn test_collapse_empty() {
        assert!(collapse_by_label(&[], &labels()).is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let agg = LabelAggregate {
            label: "Flu".to_string(),
            distance: 0.5,
            count: 3,
            weight: 6.0,
        };
        let json = serde_json::to_value(&agg).unwrap();
        assert_eq!(json["agg_weight"], 6.0);
        assert_eq!(json["count"], 3);
    }
}
