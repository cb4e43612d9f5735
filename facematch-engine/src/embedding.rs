use ndarray::Array1;

use crate::error::EmbeddingError;

/// Face embedding produced by an external recognition model.
///
/// Always non-empty with finite components. The dimensionality is fixed at
/// construction and exposed through [`Embedding::dim`].
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    vector: Array1<f32>,
}

impl Embedding {
    pub fn new(values: Vec<f32>) -> Result<Self, EmbeddingError> {
        if values.is_empty() {
            return Err(EmbeddingError::Empty);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(EmbeddingError::NonFinite { index, value });
        }
        Ok(Self {
            vector: Array1::from_vec(values),
        })
    }

    pub fn from_slice(values: &[f32]) -> Result<Self, EmbeddingError> {
        Self::new(values.to_vec())
    }

    pub fn dim(&self) -> usize {
        self.vector.len()
    }

    /// Components in index order.
    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.vector.iter()
    }

    pub fn as_array(&self) -> &Array1<f32> {
        &self.vector
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.vector.to_vec()
    }
}

impl TryFrom<Vec<f32>> for Embedding {
    type Error = EmbeddingError;

    fn try_from(values: Vec<f32>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}
