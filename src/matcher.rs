use crate::storage::{self, FaceRecord};
use facematch_engine::{Embedding, MatchResult, Matcher};
use serde::Serialize;

/// Winning record as reported to users. The stored embedding is left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileMatch<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub distance: f64,
    pub confidence: u8,
}

pub fn best_match<'a>(
    engine: &Matcher,
    records: &'a [FaceRecord],
    probe: &Embedding,
) -> Option<ProfileMatch<'a>> {
    let snapshot = storage::candidates(records);
    match engine.find_best(probe, &snapshot) {
        MatchResult::Match {
            candidate_id,
            distance,
            confidence,
        } => {
            let record = &records[candidate_id];
            Some(ProfileMatch {
                id: &record.id,
                label: &record.label,
                distance,
                confidence,
            })
        }
        MatchResult::NoMatch => None,
    }
}
