use crate::{normalize_symptom, Error, PresenceVector, Result, Vocabulary};

/// A request's symptoms encoded against the vocabulary
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedQuery {
    pub vector: PresenceVector,
    /// Recognized symptoms, normalized, in encounter order
    pub used: Vec<String>,
    /// Non-empty unrecognized symptoms, normalized, in encounter order
    pub ignored: Vec<String>,
}

/// Encode free-form symptoms into a presence vector.
///
/// Empty inputs are dropped silently; unknown ones are reported in `ignored`.
/// Fails with [`Error::NoRecognizedSymptoms`] if nothing was recognized.
pub fn vectorize<S: AsRef<str>>(vocabulary: &Vocabulary, symptoms: &[S]) -> Result<EncodedQuery> {
    let mut vector = PresenceVector::zeros(vocabulary.len());
    let mut used = Vec::new();
    let mut ignored = Vec::new();

    for raw in symptoms {
        let symptom = normalize_symptom(raw.as_ref());
        if symptom.is_empty() {
            continue;
        }
        match vocabulary.index_of(&symptom) {
            Some(col) => {
                vector.set(col);
                used.push(symptom);
            }
            None => ignored.push(symptom),
        }
    }

    if used.is_empty() {
        return Err(Error::NoRecognizedSymptoms);
    }

    Ok(EncodedQuery {
        vector,
        used,
        ignored,
    })
}
