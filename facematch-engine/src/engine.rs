use log::{debug, warn};
use serde::Serialize;

use crate::{
    distance::euclidean_distance, embedding::Embedding, error::MatchError, threshold::Threshold,
};

/// A stored face: an opaque store identifier plus its embedding, if usable.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<I> {
    pub id: I,
    pub embedding: Option<Embedding>,
}

impl<I> Candidate<I> {
    pub fn new(id: I, embedding: Embedding) -> Self {
        Self {
            id,
            embedding: Some(embedding),
        }
    }

    /// Candidate whose descriptor is missing. It never takes part in matching.
    pub fn absent(id: I) -> Self {
        Self {
            id,
            embedding: None,
        }
    }

    /// Wraps a raw stored descriptor. Empty or non-finite descriptors become
    /// absent candidates rather than errors.
    pub fn from_raw(id: I, values: &[f32]) -> Self {
        match Embedding::from_slice(values) {
            Ok(embedding) => Self::new(id, embedding),
            Err(err) => {
                debug!("stored descriptor unusable: {err}");
                Self::absent(id)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchResult<I> {
    NoMatch,
    Match {
        candidate_id: I,
        distance: f64,
        confidence: u8,
    },
}

impl<I> MatchResult<I> {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Match { .. })
    }

    pub fn candidate_id(&self) -> Option<&I> {
        match self {
            MatchResult::Match { candidate_id, .. } => Some(candidate_id),
            MatchResult::NoMatch => None,
        }
    }

    pub fn confidence(&self) -> Option<u8> {
        match self {
            MatchResult::Match { confidence, .. } => Some(*confidence),
            MatchResult::NoMatch => None,
        }
    }

    pub fn map_id<J>(self, f: impl FnOnce(I) -> J) -> MatchResult<J> {
        match self {
            MatchResult::NoMatch => MatchResult::NoMatch,
            MatchResult::Match {
                candidate_id,
                distance,
                confidence,
            } => MatchResult::Match {
                candidate_id: f(candidate_id),
                distance,
                confidence,
            },
        }
    }
}

/// Nearest-candidate selection under a distance threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Matcher {
    threshold: Threshold,
}

impl Matcher {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Returns the closest candidate strictly under the threshold.
    ///
    /// Candidates are scanned in slice order and the first one to reach the
    /// minimum distance wins ties. Candidates without a usable embedding or
    /// with a different dimensionality than `query` are skipped.
    pub fn find_best<I: Clone>(
        &self,
        query: &Embedding,
        candidates: &[Candidate<I>],
    ) -> MatchResult<I> {
        if candidates.is_empty() {
            return MatchResult::NoMatch;
        }

        let mut best: Option<(&I, f64)> = None;

        for (idx, candidate) in candidates.iter().enumerate() {
            let Some(embedding) = candidate.embedding.as_ref() else {
                debug!("candidate #{idx}: no usable descriptor, skipping");
                continue;
            };

            let distance = match euclidean_distance(query, embedding) {
                Ok(d) => d,
                Err(err) => {
                    warn!("candidate #{idx}: {err}, skipping");
                    continue;
                }
            };

            let better = match best {
                Some((_, best_distance)) => distance < best_distance,
                None => self.threshold.admits(distance),
            };
            if better {
                best = Some((&candidate.id, distance));
            }
        }

        match best {
            Some((id, distance)) => MatchResult::Match {
                candidate_id: id.clone(),
                distance,
                confidence: self.threshold.confidence(distance),
            },
            None => MatchResult::NoMatch,
        }
    }

    /// Validates a raw query vector, then runs [`Matcher::find_best`].
    ///
    /// An empty query is an error, not a `NoMatch`.
    pub fn match_descriptor<I: Clone>(
        &self,
        query: &[f32],
        candidates: &[Candidate<I>],
    ) -> Result<MatchResult<I>, MatchError> {
        let query = Embedding::from_slice(query)?;
        Ok(self.find_best(&query, candidates))
    }
}
