//! Score command - one-shot offline scoring and selection

use anyhow::{Context, Result, bail};
use requote_domain::{SourcePost, scoring};
use serde::Serialize;
use std::io::{self, Read};

use crate::args::ScoreArgs;

#[derive(Debug, Serialize)]
struct ScoreReport {
    scores: Vec<PostScore>,
    selected: Option<PostScore>,
}

#[derive(Debug, Clone, Serialize)]
struct PostScore {
    id: String,
    score: f64,
}

pub async fn execute(args: ScoreArgs) -> Result<()> {
    let input = read_input(&args)?;

    let posts: Vec<SourcePost> =
        serde_json::from_str(&input).context("Input is not a JSON array of posts")?;

    tracing::info!(count = posts.len(), "Scoring posts");

    let scores: Vec<PostScore> = posts
        .iter()
        .map(|p| PostScore {
            id: p.id.clone(),
            score: scoring::engagement_score(&p.metrics),
        })
        .collect();

    let selected = scoring::select_top(posts).map(|s| PostScore {
        id: s.post.id,
        score: s.score,
    });

    let report = ScoreReport { scores, selected };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn read_input(args: &ScoreArgs) -> Result<String> {
    match args.file {
        Some(ref path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read from stdin")?;
            if input.trim().is_empty() {
                bail!("No input provided");
            }
            Ok(input)
        }
    }
}

fn print_report(report: &ScoreReport) {
    println!("Scores");
    println!("======");
    for entry in &report.scores {
        println!("  {} -> {}", entry.id, entry.score);
    }
    println!();

    match report.selected {
        Some(ref winner) => println!("Selected: {} (score {})", winner.id, winner.score),
        None => println!("No posts to select from."),
    }
}
