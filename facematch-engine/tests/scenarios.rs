use anyhow::Result;
use facematch_engine::{Candidate, Embedding, MatchError, MatchResult, Matcher, Threshold};

/// Query at the origin; a candidate at `x` on the first axis sits exactly
/// `x` away.
fn axis(x: f32, dim: usize) -> Embedding {
    let mut v = vec![0.0; dim];
    v[0] = x;
    Embedding::new(v).unwrap()
}

fn origin(dim: usize) -> Embedding {
    Embedding::new(vec![0.0; dim]).unwrap()
}

#[test]
fn test_tie_goes_to_earlier_candidate() {
    env_logger::try_init().ok();
    let matcher = Matcher::new(Threshold::new(0.6));
    let candidates = vec![
        Candidate::new("A", axis(0.5, 128)),
        Candidate::new("B", axis(0.3, 128)),
        Candidate::new("C", axis(0.3, 128)),
    ];

    let result = matcher.find_best(&origin(128), &candidates);

    assert_eq!(
        result,
        MatchResult::Match {
            candidate_id: "B",
            distance: f64::from(0.3f32),
            confidence: 50,
        }
    );
}

#[test]
fn test_tie_order_is_input_order() {
    let matcher = Matcher::default();
    let candidates = vec![
        Candidate::new("C", axis(-0.3, 4)),
        Candidate::new("B", axis(0.3, 4)),
    ];
    let result = matcher.find_best(&origin(4), &candidates);
    assert_eq!(result.candidate_id(), Some(&"C"));
}

#[test]
fn test_distance_at_threshold_is_no_match() {
    let matcher = Matcher::new(Threshold::new(0.6));
    let candidates = vec![Candidate::new("A", axis(0.6, 128))];
    assert_eq!(matcher.find_best(&origin(128), &candidates), MatchResult::NoMatch);
}

#[test]
fn test_empty_candidate_set() {
    let matcher = Matcher::default();
    let empty: Vec<Candidate<&str>> = Vec::new();
    assert_eq!(matcher.find_best(&origin(128), &empty), MatchResult::NoMatch);
    assert_eq!(matcher.find_best(&axis(42.0, 3), &empty), MatchResult::NoMatch);
}

#[test]
fn test_mismatched_dimension_is_excluded() -> Result<()> {
    env_logger::try_init().ok();
    let matcher = Matcher::default();

    let only = vec![Candidate::new("short", origin(64))];
    assert_eq!(matcher.find_best(&origin(128), &only), MatchResult::NoMatch);

    let mixed = vec![
        Candidate::new("short", origin(64)),
        Candidate::new("full", axis(0.2, 128)),
    ];
    let result = matcher.match_descriptor(&[0.0; 128], &mixed)?;
    assert_eq!(result.candidate_id(), Some(&"full"));
    Ok(())
}

#[test]
fn test_degenerate_threshold() {
    let matcher = Matcher::new(Threshold::new(0.0));

    let exact = vec![Candidate::new("exact", origin(8))];
    assert_eq!(
        matcher.find_best(&origin(8), &exact),
        MatchResult::Match {
            candidate_id: "exact",
            distance: 0.0,
            confidence: 100,
        }
    );

    let near = vec![Candidate::new("near", axis(0.0001, 8))];
    assert_eq!(matcher.find_best(&origin(8), &near), MatchResult::NoMatch);
}

#[test]
fn test_empty_query_is_an_error() {
    let matcher = Matcher::default();
    let candidates = vec![Candidate::new("A", origin(128))];
    assert_eq!(
        matcher.match_descriptor(&[], &candidates),
        Err(MatchError::EmptyQuery)
    );
}

#[test]
fn test_infinite_threshold_matches_nothing_far() {
    let matcher = Matcher::new(Threshold::new(f64::INFINITY));
    let candidates = vec![Candidate::new("far", axis(1000.0, 1))];
    assert_eq!(matcher.find_best(&origin(1), &candidates), MatchResult::NoMatch);
}

#[test]
fn test_boundary_decided_in_double_precision() {
    let matcher = Matcher::new(Threshold::new(0.6));
    let candidates = vec![Candidate::new(
        "edge",
        Embedding::new(vec![0.4527549147605896, 0.39371687173843384]).unwrap(),
    )];
    let result = matcher.find_best(&origin(2), &candidates);
    assert_eq!(result.candidate_id(), Some(&"edge"));
    assert_eq!(result.confidence(), Some(0));
}

#[test]
fn test_selection_ignores_confidence_rounding() {
    // 0.301 and 0.302 both round to the same confidence; the nearer one wins.
    let matcher = Matcher::default();
    let candidates = vec![
        Candidate::new("far", axis(0.302, 2)),
        Candidate::new("near", axis(0.301, 2)),
    ];
    let result = matcher.find_best(&origin(2), &candidates);
    assert_eq!(result.candidate_id(), Some(&"near"));
    assert_eq!(result.confidence(), Some(50));
}

#[test]
fn test_result_serializes_with_outcome_tag() -> Result<()> {
    let hit: MatchResult<&str> = MatchResult::Match {
        candidate_id: "B",
        distance: 0.5,
        confidence: 17,
    };
    let json = serde_json::to_value(&hit)?;
    assert_eq!(json["outcome"], "match");
    assert_eq!(json["candidate_id"], "B");
    assert_eq!(json["confidence"], 17);

    let miss = serde_json::to_value(MatchResult::<&str>::NoMatch)?;
    assert_eq!(miss["outcome"], "no_match");
    Ok(())
}
