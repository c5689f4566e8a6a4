#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for keyword scoring.

use std::cell::RefCell;

use camino::Utf8PathBuf;
use newsrank_core::TopicScoreTable;
use newsrank_core::test_support::{article, single_topic};
use newsrank_scorer::{KeywordScorer, ScoreBreakdown, load_topic_scores_or_default};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

const SECURITY: &str = "Security";

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    temp_dir: TempDir,
    scorer: RefCell<Option<KeywordScorer>>,
    outcome: RefCell<Option<(f32, ScoreBreakdown)>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        temp_dir: TempDir::new().expect("create tempdir for scenario"),
        scorer: RefCell::new(None),
        outcome: RefCell::new(None),
    }
}

fn security_keywords() -> newsrank_core::TopicKeywordSet {
    single_topic(SECURITY, &["malware", "outbreak"], &["rumour", "hearsay"])
        .expect("valid security topic")
}

fn temp_path(context: &TestContext, name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(context.temp_dir.path().join(name)).expect("utf8 temp path")
}

fn install(context: &TestContext, scorer: KeywordScorer) {
    *context.scorer.borrow_mut() = Some(scorer);
}

fn score(context: &TestContext, title: &str, body: &str) {
    let guard = context.scorer.borrow();
    let scorer = guard.as_ref().expect("scorer must be initialised");
    *context.outcome.borrow_mut() = Some(scorer.score_article(&article("1", title, body)));
}

fn breakdown(context: &TestContext) -> ScoreBreakdown {
    context
        .outcome
        .borrow()
        .as_ref()
        .map(|(_, details)| details.clone())
        .expect("article should be scored")
}

#[given("a scorer for the security topic with base score 80")]
fn security_scorer(context: &TestContext) {
    install(
        context,
        KeywordScorer::new(
            security_keywords(),
            TopicScoreTable::new().with_score(SECURITY, 80),
        ),
    );
}

#[given("a scorer loaded from a missing topic score file")]
fn scorer_without_file(context: &TestContext) {
    let table = load_topic_scores_or_default(&[temp_path(context, "absent.json")]);
    install(context, KeywordScorer::new(security_keywords(), table));
}

#[given("a scorer loaded from a topic score file rating security at 90")]
fn scorer_with_file(context: &TestContext) {
    let path = temp_path(context, "topic_scores.json");
    std::fs::write(
        path.as_std_path(),
        r#"{"complete_topic_list": [{"topic": "Security", "score": 90}]}"#,
    )
    .expect("write topic score file");
    let table = load_topic_scores_or_default(&[path]);
    install(context, KeywordScorer::new(security_keywords(), table));
}

#[when("I score an article about gardening")]
fn score_gardening(context: &TestContext) {
    score(context, "Spring planting", "Roses and tulips thrive.");
}

#[when("I score an article about a malware outbreak")]
fn score_malware(context: &TestContext) {
    score(context, "Malware outbreak", "Hospitals are affected.");
}

#[when("I score an article mixing malware with two rumours")]
fn score_rumours(context: &TestContext) {
    score(context, "Malware?", "Pure rumour and hearsay so far.");
}

#[then("the keyword score is 30")]
fn score_is_thirty(context: &TestContext) {
    assert_score(context, 30.0);
}

#[then("the keyword score is 50")]
fn score_is_fifty(context: &TestContext) {
    assert_score(context, 50.0);
}

#[then("the keyword score is 80")]
fn score_is_eighty(context: &TestContext) {
    assert_score(context, 80.0);
}

#[then("the keyword score is 90")]
fn score_is_ninety(context: &TestContext) {
    assert_score(context, 90.0);
}

#[then("the security topic contributes")]
fn security_contributes(context: &TestContext) {
    assert_eq!(breakdown(context).contributing_topics, [SECURITY]);
}

#[then("no topic contributes")]
fn nothing_contributes(context: &TestContext) {
    assert!(breakdown(context).contributing_topics.is_empty());
}

#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating point values"
)]
fn assert_score(context: &TestContext, expected: f32) {
    let score = context
        .outcome
        .borrow()
        .as_ref()
        .map(|(score, _)| *score)
        .expect("article should be scored");
    assert!((score - expected).abs() < 0.000_1_f32, "got {score}");
}

#[scenario(path = "tests/features/keyword_scoring.feature", index = 0)]
fn unmatched_article_falls_back(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/keyword_scoring.feature", index = 1)]
fn single_topic_yields_base(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/keyword_scoring.feature", index = 2)]
fn negatives_suppress_topic(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/keyword_scoring.feature", index = 3)]
fn missing_file_uses_defaults(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/keyword_scoring.feature", index = 4)]
fn file_supplies_base_scores(context: TestContext) {
    let _ = context;
}
