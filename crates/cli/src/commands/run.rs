//! Run command - one pipeline invocation: fetch, score, quote

use anyhow::{Result, bail};
use requote_adapters::{
    comment::CannedCommentGenerator,
    secrets::{EnvCredentialStore, FileCredentialStore},
    x::{XPostSource, XQuotePublisher},
};
use requote_domain::{
    CommentGenerator, CredentialStore, RunOutcome, TriggerEvent,
    usecases::{Pipeline, PipelineConfig},
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::args::RunArgs;
use crate::config::AppConfig;

/// Response object mirroring the job's external output contract:
/// status 200/500, body fields depending on outcome.
#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn execute(args: RunArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    let dry_run = args.dry_run || config.general.dry_run;

    tracing::info!(
        source = ?args.source,
        dry_run = dry_run,
        "Starting requote run"
    );

    // Build dependencies; all handles are explicit, nothing is shared globally
    let credential_store = build_credential_store(&config)?;
    let post_source = Arc::new(XPostSource::with_base_url(config.x.base_url.clone()));
    let comment_generator: Arc<dyn CommentGenerator> = Arc::new(
        CannedCommentGenerator::with_samples(config.comment.samples.clone()),
    );
    let publisher = Arc::new(XQuotePublisher::with_base_url(
        config.x.base_url.clone(),
        config.x.max_chars,
    ));

    let pipeline = Pipeline::new(
        credential_store,
        post_source,
        comment_generator,
        publisher,
        PipelineConfig {
            secret_key: config.secrets.key.clone(),
            fallback_source: config.general.source.clone(),
            dry_run,
        },
    );

    let event = TriggerEvent {
        source: args.source.clone(),
    };

    let response = match pipeline.run(event).await {
        Ok(outcome) => response_for_outcome(outcome),
        Err(e) => RunResponse {
            status: 500,
            message: "Run failed".to_string(),
            comment: None,
            result: None,
            error: Some(e.to_string()),
        },
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(&response);
    }

    // Exit codes map 1:1 to the response status
    if response.status != 200 {
        bail!("{}", response.error.as_deref().unwrap_or("Run failed"));
    }

    Ok(())
}

fn response_for_outcome(outcome: RunOutcome) -> RunResponse {
    match outcome {
        RunOutcome::Published {
            source,
            selected,
            comment,
            receipt,
        } => RunResponse {
            status: 200,
            message: format!(
                "Quoted post https://twitter.com/{}/status/{}",
                source, selected.post.id
            ),
            comment: Some(comment),
            result: Some(receipt.raw),
            error: None,
        },
        RunOutcome::DryRun {
            source,
            selected,
            comment,
        } => RunResponse {
            status: 200,
            message: format!(
                "[DRY RUN] Would quote post https://twitter.com/{}/status/{} (score {})",
                source, selected.post.id, selected.score
            ),
            comment: Some(comment),
            result: None,
            error: None,
        },
        RunOutcome::NoPosts { source } => RunResponse {
            status: 200,
            message: format!("No posts found for {}", source),
            comment: None,
            result: None,
            error: None,
        },
    }
}

fn print_response(response: &RunResponse) {
    println!("{}", response.message);
    if let Some(ref comment) = response.comment {
        println!("Comment: {}", comment);
    }
    if let Some(ref error) = response.error {
        println!("Error: {}", error);
    }
}

pub(crate) fn build_credential_store(config: &AppConfig) -> Result<Arc<dyn CredentialStore>> {
    match config.secrets.backend.as_str() {
        "file" => Ok(Arc::new(FileCredentialStore::new(
            config.secrets.file.clone(),
        ))),
        "env" => Ok(Arc::new(EnvCredentialStore::new().with_mapping(
            config.secrets.key.clone(),
            config.secrets.bearer_token_env.clone(),
        ))),
        other => bail!("Unknown secrets backend: {}", other),
    }
}
