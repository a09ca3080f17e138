//! End-to-end prediction over a shared, immutable [`Dataset`]

use crate::{
    collapse_by_label, distance_weighted_vote, vectorize, Dataset, Error, LabelAggregate, Metric,
    NeighborSearch, Result,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_K: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub symptoms: Vec<String>,
    pub k: usize,
    pub metric: Metric,
}

impl PredictRequest {
    pub fn new<I, S>(symptoms: I, k: usize, metric: Metric) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            k,
            metric,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "predicted_disease")]
    pub predicted: String,
    /// k after clamping into `[1, N]`
    pub k: usize,
    pub metric: Metric,
    /// Closest labels, ascending by minimum distance, at most `k` entries
    pub neighbors: Vec<LabelAggregate>,
    #[serde(rename = "used_symptoms")]
    pub used: Vec<String>,
    #[serde(rename = "ignored_symptoms")]
    pub ignored: Vec<String>,
}

/// Clamp a requested k into `[1, n]`
#[inline]
pub fn effective_k(k: usize, n: usize) -> usize {
    k.min(n).max(1)
}

/// Predict a label for one request.
///
/// Aggregates are truncated to `k` before the weighted vote, so a heavy label
/// whose best hit is not among the `k` closest labels cannot win.
pub fn predict(dataset: &Dataset, request: &PredictRequest) -> Result<Prediction> {
    let query = vectorize(dataset.vocabulary(), &request.symptoms)?;
    let k = effective_k(request.k, dataset.len());

    let candidates = NeighborSearch::new(dataset).search(&query.vector, k, request.metric);
    let mut neighbors = collapse_by_label(&candidates, dataset.labels());
    neighbors.truncate(k);

    let predicted = distance_weighted_vote(&neighbors)
        .map(|agg| agg.label.clone())
        .ok_or_else(|| Error::InvalidDataset("search returned no candidates".to_string()))?;

    debug!(
        metric = %request.metric,
        k,
        candidates = candidates.len(),
        labels = neighbors.len(),
        predicted = %predicted,
        "prediction complete"
    );

    Ok(Prediction {
        predicted,
        k,
        metric: request.metric,
        neighbors,
        used: query.used,
        ignored: query.ignored,
    })
}

/// Evaluate independent requests in parallel; results keep input order
pub fn predict_batch(dataset: &Dataset, requests: &[PredictRequest]) -> Vec<Result<Prediction>> {
    requests
        .par_iter()
        .map(|request| predict(dataset, request))
        .collect()
}
