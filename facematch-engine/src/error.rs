use thiserror::Error;

/// Why a vector could not become an [`Embedding`](crate::Embedding).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmbeddingError {
    #[error("embedding has no components")]
    Empty,
    #[error("embedding component {index} is not finite ({value})")]
    NonFinite { index: usize, value: f32 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// The query embedding was missing or zero-length.
    #[error("query embedding is empty")]
    EmptyQuery,
    #[error("invalid query embedding: {0}")]
    InvalidQuery(EmbeddingError),
    #[error("embedding dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("threshold {0} is not a positive finite number, only exact matches will be accepted")]
    DegenerateThreshold(f64),
}

impl From<EmbeddingError> for MatchError {
    fn from(err: EmbeddingError) -> Self {
        match err {
            EmbeddingError::Empty => MatchError::EmptyQuery,
            other => MatchError::InvalidQuery(other),
        }
    }
}
