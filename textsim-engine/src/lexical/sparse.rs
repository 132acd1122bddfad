//! Sparse term-weight vectors

/// A sparse row of term weights, sorted by term index.
///
/// Rows produced by the vectorizer are L2-normalized, so the dot product of
/// two rows is their cosine similarity.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVector {
    /// Build a vector from (index, value) pairs. Pairs need not be sorted;
    /// indices must be unique.
    pub fn from_pairs(mut pairs: Vec<(u32, f32)>) -> Self {
        pairs.sort_unstable_by_key(|&(i, _)| i);
        let (indices, values) = pairs.into_iter().unzip();
        Self { indices, values }
    }

    /// The all-zero vector.
    pub fn empty() -> Self {
        Self {
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Whether the vector has no non-zero entries.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Scale the vector to unit L2 norm. The zero vector is left unchanged.
    pub fn l2_normalize(&mut self) {
        let norm: f32 = self.values.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut self.values {
                *value /= norm;
            }
        }
    }

    /// Dot product via merge-join over the sorted index lists.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let mut sum = 0.0;
        let (mut a, mut b) = (0, 0);
        while a < self.indices.len() && b < other.indices.len() {
            match self.indices[a].cmp(&other.indices[b]) {
                std::cmp::Ordering::Less => a += 1,
                std::cmp::Ordering::Greater => b += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[a] * other.values[b];
                    a += 1;
                    b += 1;
                }
            }
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_of_disjoint_vectors_is_zero() {
        let a = SparseVector::from_pairs(vec![(0, 1.0), (2, 1.0)]);
        let b = SparseVector::from_pairs(vec![(1, 1.0), (3, 1.0)]);
        assert_eq!(a.dot(&b), 0.0);
    }

    #[test]
    fn dot_matches_dense_computation() {
        let a = SparseVector::from_pairs(vec![(3, 2.0), (0, 1.0), (7, 0.5)]);
        let b = SparseVector::from_pairs(vec![(3, 4.0), (7, 2.0), (8, 9.0)]);
        assert!((a.dot(&b) - 9.0).abs() < 1e-6);
        // Unsorted input must be ordered on construction
        assert_eq!(a.nnz(), 3);
    }

    #[test]
    fn normalized_self_dot_is_one() {
        let mut v = SparseVector::from_pairs(vec![(0, 3.0), (1, 4.0)]);
        v.l2_normalize();
        assert!((v.dot(&v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_survives_normalization() {
        let mut v = SparseVector::empty();
        v.l2_normalize();
        assert!(v.is_empty());
        assert_eq!(v.dot(&v), 0.0);
    }
}
