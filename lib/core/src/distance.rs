//! Distance metrics over symptom vectors
//!
//! The metric set is closed. Set-overlap metrics work on [`PresenceVector`]s,
//! continuous-space metrics on the numeric [`Vector`] form of the same rows.

use crate::{Error, PresenceVector, Result, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vector representation a metric operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricSpace {
    Boolean,
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Hamming,
    Jaccard,
    Cosine,
    Euclidean,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Hamming,
        Metric::Jaccard,
        Metric::Cosine,
        Metric::Euclidean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Hamming => "hamming",
            Metric::Jaccard => "jaccard",
            Metric::Cosine => "cosine",
            Metric::Euclidean => "euclidean",
        }
    }

    pub fn space(&self) -> MetricSpace {
        match self {
            Metric::Hamming | Metric::Jaccard => MetricSpace::Boolean,
            Metric::Cosine | Metric::Euclidean => MetricSpace::Numeric,
        }
    }

    /// Distance between two presence vectors, computed in this metric's space
    pub fn distance(&self, a: &PresenceVector, b: &PresenceVector) -> f64 {
        match self.space() {
            MetricSpace::Boolean => self.boolean_distance(a, b),
            MetricSpace::Numeric => self.numeric_distance(&a.to_numeric(), &b.to_numeric()),
        }
    }

    // Callers dispatch on `space()` first
    pub(crate) fn boolean_distance(&self, a: &PresenceVector, b: &PresenceVector) -> f64 {
        match self {
            Metric::Hamming => hamming(a.as_slice(), b.as_slice()),
            Metric::Jaccard => jaccard(a.as_slice(), b.as_slice()),
            Metric::Cosine | Metric::Euclidean => {
                unreachable!("{} is not a boolean metric", self)
            }
        }
    }

    pub(crate) fn numeric_distance(&self, a: &Vector, b: &Vector) -> f64 {
        match self {
            Metric::Cosine => cosine(a, b),
            Metric::Euclidean => a.l2_distance(b),
            Metric::Hamming | Metric::Jaccard => {
                unreachable!("{} is not a numeric metric", self)
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hamming" => Ok(Metric::Hamming),
            "jaccard" => Ok(Metric::Jaccard),
            "cosine" => Ok(Metric::Cosine),
            "euclidean" => Ok(Metric::Euclidean),
            _ => Err(Error::InvalidMetric(s.to_string())),
        }
    }
}

/// Fraction of positions that differ
pub fn hamming(a: &[bool], b: &[bool]) -> f64 {
    if a.is_empty() {
        return 0.0;
    }
    let differing = a.iter().zip(b).filter(|(x, y)| x != y).count();
    differing as f64 / a.len() as f64
}

/// Jaccard dissimilarity: mismatches over positions where either is set.
/// Two all-absent vectors are identical (0.0).
pub fn jaccard(a: &[bool], b: &[bool]) -> f64 {
    let mut either = 0usize;
    let mut differing = 0usize;
    for (&x, &y) in a.iter().zip(b) {
        if x || y {
            either += 1;
            if x != y {
                differing += 1;
            }
        }
    }
    if either == 0 {
        0.0
    } else {
        differing as f64 / either as f64
    }
}

/// Cosine distance clipped into `[0, 2]`; a zero-norm vector is orthogonal to everything
pub fn cosine(a: &Vector, b: &Vector) -> f64 {
    (1.0 - a.cosine_similarity(b)).clamp(0.0, 2.0)
}
