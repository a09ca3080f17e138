use crate::{normalize_symptom, Error, PresenceVector, Result, Vector, Vocabulary};
use tracing::warn;

/// Immutable labeled feature matrix.
///
/// Rows are stored in both presence and numeric form so that every metric
/// family can scan its own representation without conversion per query.
#[derive(Debug, Clone)]
pub struct Dataset {
    vocabulary: Vocabulary,
    presence_rows: Vec<PresenceVector>,
    numeric_rows: Vec<Vector>,
    labels: Vec<String>,
}

impl Dataset {
    /// Build a dataset from pre-encoded rows.
    ///
    /// Fails when rows and labels disagree in length, a row width differs from
    /// the vocabulary size, or there are no rows at all.
    pub fn new(
        vocabulary: Vocabulary,
        rows: Vec<PresenceVector>,
        labels: Vec<String>,
    ) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::InvalidDataset("dataset has no rows".to_string()));
        }
        if rows.len() != labels.len() {
            return Err(Error::InvalidDataset(format!(
                "{} rows but {} labels",
                rows.len(),
                labels.len()
            )));
        }
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.dim() != vocabulary.len())
        {
            return Err(Error::InvalidDataset(format!(
                "row {} has {} columns, vocabulary has {}",
                i,
                row.dim(),
                vocabulary.len()
            )));
        }

        let numeric_rows = rows.iter().map(Vector::from).collect();

        Ok(Self {
            vocabulary,
            presence_rows: rows,
            numeric_rows,
            labels,
        })
    }

    /// Encode `(label, symptoms)` records against `vocabulary`.
    /// Symptoms outside the vocabulary are skipped.
    pub fn from_symptom_sets<I, L, S>(vocabulary: Vocabulary, records: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, Vec<S>)>,
        L: Into<String>,
        S: AsRef<str>,
    {
        let mut rows = Vec::new();
        let mut labels = Vec::new();

        for (label, symptoms) in records {
            let mut row = PresenceVector::zeros(vocabulary.len());
            for symptom in symptoms {
                let symptom = normalize_symptom(symptom.as_ref());
                if symptom.is_empty() {
                    continue;
                }
                match vocabulary.index_of(&symptom) {
                    Some(col) => row.set(col),
                    None => warn!("Symptom '{}' in row {} is not in the vocabulary", symptom, rows.len()),
                }
            }
            rows.push(row);
            labels.push(label.into());
        }

        Self::new(vocabulary, rows, labels)
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of training rows (N)
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Vector width (M)
    #[inline]
    pub fn dim(&self) -> usize {
        self.vocabulary.len()
    }

    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[inline]
    pub fn label(&self, row: usize) -> &str {
        &self.labels[row]
    }

    #[inline]
    pub fn presence_rows(&self) -> &[PresenceVector] {
        &self.presence_rows
    }

    #[inline]
    pub fn numeric_rows(&self) -> &[Vector] {
        &self.numeric_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symptom_sets() {
        let vocab = Vocabulary::new(["fever", "cough", "fatigue"]);
        let dataset = Dataset::from_symptom_sets(
            vocab,
            vec![
                ("Flu", vec!["fever", " Cough"]),
                ("Cold", vec!["cough", "fatigue", ""]),
            ],
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.dim(), 3);
        // columns: cough, fatigue, fever
        assert_eq!(dataset.presence_rows()[0].as_slice(), &[true, false, true]);
        assert_eq!(dataset.numeric_rows()[1].as_slice(), &[1.0, 1.0, 0.0]);
        assert_eq!(dataset.label(1), "Cold");
    }

    #[test]
    fn test_rejects_inconsistent_rows() {
        let vocab = Vocabulary::new(["a", "b"]);
        let err = Dataset::new(
            vocab.clone(),
            vec![PresenceVector::zeros(2)],
            vec!["x".to_string(), "y".to_string()],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidDataset(_)));

        let err = Dataset::new(vocab.clone(), vec![PresenceVector::zeros(3)], vec!["x".to_string()])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDataset(_)));

        let err = Dataset::new(vocab, Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidDataset(_)));
    }
}
