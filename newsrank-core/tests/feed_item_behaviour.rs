//! Behavioural coverage for feed item conversion.

use std::cell::RefCell;

use newsrank_core::test_support::FIXTURE_NOW;
use newsrank_core::{Article, ArticleError, FeedItem, FeedItemError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;

/// State shared by the steps of one scenario.
pub struct TestContext {
    item: RefCell<Option<FeedItem>>,
    outcome: RefCell<Option<Result<Article, FeedItemError>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        item: RefCell::new(None),
        outcome: RefCell::new(None),
    }
}

fn set_item(context: &TestContext, value: serde_json::Value) {
    let item = FeedItem::from_value(value).expect("decodable feed item");
    *context.item.borrow_mut() = Some(item);
}

fn converted(context: &TestContext) -> Article {
    context
        .outcome
        .borrow()
        .as_ref()
        .expect("conversion should have run")
        .as_ref()
        .expect("conversion should succeed")
        .clone()
}

#[given("a feed item with summary, canonical link, origin, and labels")]
fn complete_item(context: &TestContext) {
    set_item(
        context,
        json!({
            "id": "tag:google.com,2005:reader/item/42",
            "title": "Leaked documents reveal breach",
            "summary": {"content": "<p>An <strong>investigation</strong> uncovered it.</p>"},
            "canonical": [{"href": "https://news.example/breach"}],
            "alternate": [{"href": "https://mirror.example/breach"}],
            "origin": {"title": "Example News"},
            "published": 1_699_990_000,
            "categories": [
                "user/-/label/Security",
                "user/-/state/com.google/reading-list",
                "user/-/label/Investigations"
            ]
        }),
    );
}

#[given("a feed item carrying only an identifier")]
fn sparse_item(context: &TestContext) {
    set_item(context, json!({"id": "tag:item/7"}));
}

#[given("a feed item without an identifier")]
fn anonymous_item(context: &TestContext) {
    set_item(context, json!({"title": "Nobody owns me"}));
}

#[when("I convert the item at the reference time")]
fn convert(context: &TestContext) {
    let item = context
        .item
        .borrow_mut()
        .take()
        .expect("item should be prepared");
    *context.outcome.borrow_mut() = Some(item.into_article(FIXTURE_NOW));
}

#[then("the article body has no markup")]
fn body_has_no_markup(context: &TestContext) {
    assert_eq!(converted(context).content, "An investigation uncovered it.");
}

#[then("the article links to the canonical URL")]
fn canonical_link(context: &TestContext) {
    assert_eq!(converted(context).url, "https://news.example/breach");
}

#[then("the article lists only label categories")]
fn label_categories(context: &TestContext) {
    assert_eq!(
        converted(context).categories,
        vec!["Security".to_owned(), "Investigations".to_owned()]
    );
}

#[then("the article is titled Untitled from an Unknown source")]
fn fallback_title_and_source(context: &TestContext) {
    let article = converted(context);
    assert_eq!(article.title, "Untitled");
    assert_eq!(article.source, "Unknown");
}

#[then("the article is published at the reference time")]
fn fallback_published(context: &TestContext) {
    assert_eq!(converted(context).published, FIXTURE_NOW);
}

#[then("conversion fails because the identifier is missing")]
fn missing_identifier(context: &TestContext) {
    let outcome = context.outcome.borrow();
    let result = outcome.as_ref().expect("conversion should have run");
    assert!(matches!(
        result,
        Err(FeedItemError::Invalid(ArticleError::MissingId))
    ));
}

#[scenario(path = "tests/features/feed_item.feature", index = 0)]
fn complete_item_keeps_metadata(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/feed_item.feature", index = 1)]
fn sparse_item_takes_fallbacks(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/feed_item.feature", index = 2)]
fn anonymous_item_is_rejected(context: TestContext) {
    let _ = context;
}
