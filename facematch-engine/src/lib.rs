//! Face embedding match engine.
//!
//! Compares one query [`Embedding`] against an ordered set of [`Candidate`]s
//! by Euclidean distance and returns the closest one under a [`Threshold`],
//! together with a display confidence in `[0, 100]`.
//!
//! The engine is stateless: a [`Matcher`] is a plain `Copy` value and every
//! call only reads the slices it is given.

pub mod distance;
pub mod embedding;
pub mod engine;
pub mod error;
pub mod threshold;

pub use distance::euclidean_distance;
pub use embedding::Embedding;
pub use engine::{Candidate, MatchResult, Matcher};
pub use error::{EmbeddingError, MatchError};
pub use threshold::{Threshold, DEFAULT_THRESHOLD};
