//! # SymptomDX
//!
//! Disease prediction from reported symptoms by nearest-neighbor search over a
//! labeled symptom-presence dataset.
//!
//! A prediction normalizes the symptoms, encodes them against a fixed
//! vocabulary, scores every training row under the chosen metric, collapses
//! the overfetched hits per disease and picks the disease with the highest
//! inverse-distance weight among the `k` closest diseases.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! symptomdx --data-dir ./data --http-port 8000
//! curl -X POST localhost:8000/predict \
//!     -H 'content-type: application/json' \
//!     -d '{"symptoms": ["itching", "skin_rash"], "k": 5, "metric": "jaccard"}'
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use symptomdx::prelude::*;
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
//! let prediction = predict(&dataset, &PredictRequest::new(["fever"], 2, Metric::Hamming)).unwrap();
//! assert_eq!(prediction.predicted, "Flu");
//! ```
//!
//! ## Crate Structure
//!
//! - [`symptomdx-core`](https://docs.rs/symptomdx-core) - Vocabulary, dataset, metrics, search, aggregation, voting
//! - [`symptomdx-storage`](https://docs.rs/symptomdx-storage) - CSV loading, disease knowledge base, dataset pagination
//! - [`symptomdx-api`](https://docs.rs/symptomdx-api) - REST API

// Re-export core types
pub use symptomdx_core::{
    predict, predict_batch, Dataset, Error, LabelAggregate, Metric, PredictRequest, Prediction,
    Result, Vocabulary,
};

// Re-export storage
pub use symptomdx_storage::{DataPaths, DataStore, KnowledgeBase};

// Re-export API
pub use symptomdx_api::{ApiConfig, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        predict, predict_batch, ApiConfig, DataPaths, DataStore, Dataset, Error, KnowledgeBase,
        LabelAggregate, Metric, PredictRequest, Prediction, RestApi, Result, Vocabulary,
    };
}
