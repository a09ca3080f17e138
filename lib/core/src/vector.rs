use serde::{Deserialize, Serialize};

/// A dense vector of floating point numbers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Dot product, accumulated in `f64`
    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        dot_product(&self.data, &other.data)
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> f64 {
        dot_product(&self.data, &self.data).sqrt()
    }

    /// Compute cosine similarity with another vector.
    /// Returns 0.0 when either vector has zero norm or dimensions differ.
    #[inline]
    pub fn cosine_similarity(&self, other: &Vector) -> f64 {
        if self.dim() != other.dim() {
            return 0.0;
        }

        let norm_a = self.norm();
        let norm_b = other.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        self.dot(other) / (norm_a * norm_b)
    }

    /// Compute L2 (Euclidean) distance
    #[inline]
    pub fn l2_distance(&self, other: &Vector) -> f64 {
        if self.dim() != other.dim() {
            return f64::INFINITY;
        }

        l2_distance(&self.data, &other.data)
    }
}

impl From<&PresenceVector> for Vector {
    fn from(presence: &PresenceVector) -> Self {
        Vector::new(
            presence
                .as_slice()
                .iter()
                .map(|&present| if present { 1.0 } else { 0.0 })
                .collect(),
        )
    }
}

/// A 0/1 vector marking which vocabulary columns are present
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PresenceVector {
    bits: Vec<bool>,
}

impl PresenceVector {
    #[inline]
    #[must_use]
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// All-absent vector of the given width
    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            bits: vec![false; dim],
        }
    }

    /// Build a vector of width `dim` with the given columns set
    pub fn from_indices<I>(dim: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut v = Self::zeros(dim);
        for i in indices {
            v.set(i);
        }
        v
    }

    #[inline]
    pub fn set(&mut self, index: usize) {
        self.bits[index] = true;
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Number of present columns
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    #[inline]
    #[must_use]
    pub fn to_numeric(&self) -> Vector {
        Vector::from(self)
    }
}

// Two accumulators for better pipelining
#[inline]
fn dot_product(a: &[f32], b: &[f32]) -> f64 {
    let mut dot0 = 0.0f64;
    let mut dot1 = 0.0f64;

    let chunks = a.chunks_exact(2);
    let remainder = chunks.remainder();
    let b_chunks = b.chunks_exact(2);

    for (a_chunk, b_chunk) in chunks.zip(b_chunks) {
        dot0 += f64::from(a_chunk[0]) * f64::from(b_chunk[0]);
        dot1 += f64::from(a_chunk[1]) * f64::from(b_chunk[1]);
    }

    for i in (a.len() - remainder.len())..a.len() {
        dot0 += f64::from(a[i]) * f64::from(b[i]);
    }

    dot0 + dot1
}

#[inline]
fn l2_distance(a: &[f32], b: &[f32]) -> f64 {
    let mut sum0 = 0.0f64;
    let mut sum1 = 0.0f64;

    let chunks = a.chunks_exact(2);
    let remainder = chunks.remainder();
    let b_chunks = b.chunks_exact(2);

    for (a_chunk, b_chunk) in chunks.zip(b_chunks) {
        let d0 = f64::from(a_chunk[0] - b_chunk[0]);
        let d1 = f64::from(a_chunk[1] - b_chunk[1]);
        sum0 += d0 * d0;
        sum1 += d1 * d1;
    }

    for i in (a.len() - remainder.len())..a.len() {
        let diff = f64::from(a[i] - b[i]);
        sum0 += diff * diff;
    }

    (sum0 + sum1).sqrt()
}
