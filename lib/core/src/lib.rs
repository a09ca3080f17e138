//! # SymptomDX Core
//!
//! Core library for the SymptomDX disease predictor.
//!
//! This crate provides the data structures and algorithms behind a prediction:
//!
//! - [`Vocabulary`] - Ordered set of canonical symptoms defining vector columns
//! - [`Dataset`] - Immutable labeled presence matrix (boolean and numeric form)
//! - [`vectorize`] - Free-form symptoms to a query vector
//! - [`NeighborSearch`] - Exhaustive, overfetching k-NN search under a [`Metric`]
//! - [`collapse_by_label`] - Per-label aggregation of search hits
//! - [`distance_weighted_vote`] - Final label selection
//!
//! ## Example
//!
//! ```rust
//! use symptomdx_core::{Dataset, Metric, PredictRequest, Vocabulary, predict};
//!
//! let vocab = Vocabulary::new(["fever", "cough", "fatigue"]);
//! let dataset = Dataset::from_symptom_sets(
//!     vocab,
//!     vec![
//!         ("Flu", vec!["fever", "cough"]),
//!         ("Flu", vec!["fever"]),
//!         ("Cold", vec!["cough", "fatigue"]),
//!     ],
//! )
//! .unwrap();
//!
//! let request = PredictRequest::new(["Fever"], 2, Metric::Hamming);
//! let prediction = predict(&dataset, &request).unwrap();
//! assert_eq!(prediction.predicted, "Flu");
//! ```

pub mod aggregate;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod predictor;
pub mod search;
pub mod vector;
pub mod vectorizer;
pub mod vocabulary;
pub mod vote;

pub use aggregate::{collapse_by_label, hit_weight, LabelAggregate, EPS};
pub use dataset::Dataset;
pub use distance::{Metric, MetricSpace};
pub use error::{Error, Result};
pub use predictor::{effective_k, predict, predict_batch, PredictRequest, Prediction, DEFAULT_K};
pub use search::{overfetch, Candidate, NeighborSearch};
pub use vector::{PresenceVector, Vector};
pub use vectorizer::{vectorize, EncodedQuery};
pub use vocabulary::{normalize_symptom, Vocabulary};
pub use vote::distance_weighted_vote;
