pub mod config;
pub mod extractor;
pub mod matcher;
pub mod storage;

// Re-export engine types for convenience
pub use facematch_engine::{
    euclidean_distance, Candidate, Embedding, EmbeddingError, MatchError, MatchResult, Matcher,
    Threshold, DEFAULT_THRESHOLD,
};
