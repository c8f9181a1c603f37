//! End-to-end pipeline tests over the stub adapters

use std::sync::Arc;

use requote_adapters::comment::CannedCommentGenerator;
use requote_adapters::x::{StubCredentialStore, StubPostSource, StubQuotePublisher};
use requote_domain::{
    EngagementMetrics, RunOutcome, SourcePost, TriggerEvent,
    usecases::{Pipeline, PipelineConfig, PipelineError},
};

fn post(id: &str, likes: u64, reposts: u64, quotes: u64, replies: u64) -> SourcePost {
    SourcePost {
        id: id.to_string(),
        author_id: "stub_user".to_string(),
        text: format!("post {id}"),
        metrics: EngagementMetrics {
            likes,
            reposts,
            quotes,
            replies,
        },
    }
}

fn config() -> PipelineConfig {
    PipelineConfig {
        secret_key: "twitter".to_string(),
        fallback_source: "someuser".to_string(),
        dry_run: false,
    }
}

#[tokio::test]
async fn pipeline_quotes_the_top_post_through_the_stubs() {
    let publisher = Arc::new(StubQuotePublisher::new());
    let pipeline = Pipeline::new(
        Arc::new(StubCredentialStore::with_token("stub-token")),
        Arc::new(StubPostSource::with_posts(vec![
            post("a", 10, 0, 0, 0),
            post("b", 0, 0, 4, 0),
            post("c", 5, 2, 0, 2),
        ])),
        Arc::new(CannedCommentGenerator::with_samples(vec![
            "Must read 👇".to_string(),
        ])),
        Arc::clone(&publisher),
        config(),
    );

    let outcome = pipeline.run(TriggerEvent::default()).await.unwrap();

    // Scores: a=10, b=12, c=10 -> b wins
    match outcome {
        RunOutcome::Published {
            selected,
            comment,
            receipt,
            ..
        } => {
            assert_eq!(selected.post.id, "b");
            assert_eq!(selected.score, 12.0);
            assert_eq!(comment, "Must read 👇");
            assert_eq!(receipt.post_id.as_deref(), Some("stub_b"));
        }
        other => panic!("Expected Published, got {other:?}"),
    }

    let published = publisher.get_published();
    assert_eq!(published, vec![("Must read 👇".to_string(), "b".to_string())]);
}

#[tokio::test]
async fn pipeline_stops_benignly_when_the_stub_has_no_posts() {
    let publisher = Arc::new(StubQuotePublisher::new());
    let pipeline = Pipeline::new(
        Arc::new(StubCredentialStore::with_token("stub-token")),
        Arc::new(StubPostSource::empty()),
        Arc::new(CannedCommentGenerator::new()),
        Arc::clone(&publisher),
        config(),
    );

    let outcome = pipeline.run(TriggerEvent::default()).await.unwrap();

    assert!(matches!(outcome, RunOutcome::NoPosts { source } if source == "someuser"));
    assert!(publisher.get_published().is_empty());
}

#[tokio::test]
async fn pipeline_surfaces_a_missing_credential() {
    let pipeline = Pipeline::new(
        Arc::new(StubCredentialStore::missing()),
        Arc::new(StubPostSource::with_posts(vec![post("a", 1, 0, 0, 0)])),
        Arc::new(CannedCommentGenerator::new()),
        Arc::new(StubQuotePublisher::new()),
        config(),
    );

    let err = pipeline.run(TriggerEvent::default()).await.unwrap_err();

    assert!(matches!(err, PipelineError::Credential(_)));
}

#[tokio::test]
async fn repeated_runs_may_select_the_same_post_again() {
    // No de-duplication across runs: identical input selects the same winner
    let publisher = Arc::new(StubQuotePublisher::new());
    let pipeline = Pipeline::new(
        Arc::new(StubCredentialStore::with_token("stub-token")),
        Arc::new(StubPostSource::with_posts(vec![post("a", 3, 1, 0, 0)])),
        Arc::new(CannedCommentGenerator::new()),
        Arc::clone(&publisher),
        config(),
    );

    pipeline.run(TriggerEvent::default()).await.unwrap();
    pipeline.run(TriggerEvent::default()).await.unwrap();

    let published = publisher.get_published();
    assert_eq!(published.len(), 2);
    assert_eq!(published[0].1, "a");
    assert_eq!(published[1].1, "a");
}
