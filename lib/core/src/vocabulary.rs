use ahash::AHashMap;

/// Canonical form of a symptom string: trimmed, lowercase, underscores as
/// spaces, whitespace runs collapsed.
pub fn normalize_symptom(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ordered set of canonical symptoms. Position defines the vector column.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    symptoms: Vec<String>,
    index: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Normalize, drop empties, deduplicate and sort the given symptoms
    pub fn new<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symptoms: Vec<String> = symptoms
            .into_iter()
            .map(|s| normalize_symptom(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();
        symptoms.sort();
        symptoms.dedup();

        let index = symptoms
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();

        Self { symptoms, index }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    /// Column of an already-normalized symptom
    #[inline]
    pub fn index_of(&self, symptom: &str) -> Option<usize> {
        self.index.get(symptom).copied()
    }

    #[inline]
    pub fn contains(&self, symptom: &str) -> bool {
        self.index.contains_key(symptom)
    }

    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.symptoms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symptoms.iter().map(String::as_str)
    }
}
