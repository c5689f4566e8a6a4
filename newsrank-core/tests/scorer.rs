//! Contract tests for the `Scorer` trait and score sanitisation.

use newsrank_core::test_support::{FixedScorer, article};
use newsrank_core::{MAX_SCORE, Scorer, sanitise_score};
use rstest::rstest;

const TOLERANCE: f32 = 1e-6;

#[rstest]
#[case(f32::NAN, 0.0)]
#[case(f32::INFINITY, 0.0)]
#[case(f32::NEG_INFINITY, 0.0)]
#[case(-0.1, 0.0)]
#[case(120.0, 100.0)]
#[case(42.5, 42.5)]
#[case(0.0, 0.0)]
#[case(100.0, 100.0)]
fn sanitise_clamps_and_filters(#[case] input: f32, #[case] expected: f32) {
    let result = FixedScorer::sanitise(input);
    assert!(result.is_finite(), "result must be finite");
    assert!(
        (0.0..=MAX_SCORE).contains(&result),
        "result must be within [0, 100]"
    );
    assert!((result - expected).abs() <= TOLERANCE);
    assert!((sanitise_score(input) - result).abs() <= TOLERANCE);
}

#[rstest]
fn scorers_are_usable_as_trait_objects() {
    let scorers: Vec<Box<dyn Scorer>> =
        vec![Box::new(FixedScorer(10.0)), Box::new(FixedScorer(900.0))];
    let sample = article("a", "Headline", "Body");
    let scores: Vec<f32> = scorers.iter().map(|s| s.score(&sample)).collect();
    assert_eq!(scores, vec![10.0, 100.0]);
}
