//! Single-run pipeline use case - load credential, fetch, score, quote
//!
//! The pipeline is a strictly linear sequence: LoadCredential -> ResolveUser
//! -> FetchPosts -> SelectAndCompose -> Publish. Each step depends on the
//! previous step's output, so every call is awaited sequentially. The only
//! branch is the early exit when the account has no posts.

use std::sync::Arc;

use crate::{
    model::{RunOutcome, TriggerEvent},
    ports::{
        CommentGenerator, CredentialError, CredentialStore, PostSource, PostSourceError,
        PublishError, QuotePublisher,
    },
    scoring,
};

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Logical key of the bearer token in the credential store
    pub secret_key: String,
    /// Username used when the trigger event carries no source
    pub fallback_source: String,
    /// Select and compose but skip the publish call
    pub dry_run: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            secret_key: "twitter".to_string(),
            fallback_source: "elonmusk".to_string(),
            dry_run: false,
        }
    }
}

/// Errors from the pipeline, one variant per failing step.
///
/// The CLI collapses these into a single failure response, but call sites and
/// tests can still distinguish credential, lookup, and publish failures.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error(transparent)]
    PostSource(#[from] PostSourceError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Pipeline orchestrator, generic over the four ports.
///
/// All handles are injected explicitly; there is no module-level shared state,
/// so isolated invocations can run concurrently in tests.
#[derive(Clone)]
pub struct Pipeline<Cr, Ps, Cg, Pb>
where
    Cr: CredentialStore + ?Sized,
    Ps: PostSource + ?Sized,
    Cg: CommentGenerator + ?Sized,
    Pb: QuotePublisher + ?Sized,
{
    credential_store: Arc<Cr>,
    post_source: Arc<Ps>,
    comment_generator: Arc<Cg>,
    publisher: Arc<Pb>,
    config: PipelineConfig,
}

impl<Cr, Ps, Cg, Pb> Pipeline<Cr, Ps, Cg, Pb>
where
    Cr: CredentialStore + ?Sized,
    Ps: PostSource + ?Sized,
    Cg: CommentGenerator + ?Sized,
    Pb: QuotePublisher + ?Sized,
{
    pub fn new(
        credential_store: Arc<Cr>,
        post_source: Arc<Ps>,
        comment_generator: Arc<Cg>,
        publisher: Arc<Pb>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            credential_store,
            post_source,
            comment_generator,
            publisher,
            config,
        }
    }

    /// Execute one pipeline invocation for the given trigger event.
    ///
    /// Exactly one post is selected per successful run; an empty candidate
    /// set terminates early with the benign `NoPosts` outcome.
    pub async fn run(&self, event: TriggerEvent) -> Result<RunOutcome, PipelineError> {
        let source = event
            .source
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| self.config.fallback_source.clone());

        tracing::info!(source = %source, dry_run = self.config.dry_run, "Starting run");

        // Fetched fresh every invocation; the stored token may rotate
        let token = self
            .credential_store
            .bearer_token(&self.config.secret_key)
            .await?;

        let user_id = self.post_source.resolve_user(&token, &source).await?;

        tracing::debug!(source = %source, user_id = %user_id, "Resolved user");

        let posts = self.post_source.recent_posts(&token, &user_id).await?;

        tracing::info!(source = %source, count = posts.len(), "Fetched posts");

        let Some(selected) = scoring::select_top(posts) else {
            return Ok(RunOutcome::NoPosts { source });
        };

        tracing::info!(
            post_id = %selected.post.id,
            score = selected.score,
            "Selected top post"
        );

        let comment = self.comment_generator.comment(&selected.post.text).await;

        if self.config.dry_run {
            tracing::info!(
                post_id = %selected.post.id,
                comment = %comment,
                "[DRY RUN] Would quote"
            );
            return Ok(RunOutcome::DryRun {
                source,
                selected,
                comment,
            });
        }

        let receipt = self
            .publisher
            .quote(&token, &comment, &selected.post.id)
            .await?;

        tracing::info!(
            post_id = %selected.post.id,
            published_id = ?receipt.post_id,
            "Published quote"
        );

        Ok(RunOutcome::Published {
            source,
            selected,
            comment,
            receipt,
        })
    }
}
