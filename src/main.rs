use std::fs;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use resume_insight::{ResumeInsight, ResumeRecord, ScoreRubric, WordVectorEmbedding};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: resume-insight <resume.json> [--vectors <vectors.json>] [--rubric <rubric.json>]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut resume_path: Option<String> = None;
    let mut vectors_path: Option<String> = None;
    let mut rubric_path: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--vectors" => {
                vectors_path = Some(
                    iter.next()
                        .context("--vectors requires a file path")?
                        .clone(),
                );
            }
            "--rubric" => {
                rubric_path = Some(
                    iter.next()
                        .context("--rubric requires a file path")?
                        .clone(),
                );
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            other if resume_path.is_none() => resume_path = Some(other.to_string()),
            other => anyhow::bail!("unexpected argument '{other}'\n{USAGE}"),
        }
    }

    let resume_path = resume_path.context(USAGE)?;
    let resume_json = fs::read_to_string(&resume_path)
        .with_context(|| format!("reading resume file {resume_path}"))?;
    let resume = ResumeRecord::from_json(&resume_json)?;

    // The embedding service is constructed once and shared by reference;
    // without a vector table the semantic bucket contributes nothing.
    let mut engine = match vectors_path {
        Some(path) => {
            let embedding = WordVectorEmbedding::from_json_file(&path)?;
            tracing::info!(words = embedding.len(), path, "loaded word vectors");
            ResumeInsight::new(Arc::new(embedding))
        }
        None => {
            tracing::warn!("no --vectors given; semantic scoring is disabled");
            ResumeInsight::without_embeddings()
        }
    };

    if let Some(path) = rubric_path {
        engine = engine.with_rubric(ScoreRubric::from_json_file(&path)?);
    }

    let score = engine.ats_score(&resume);
    let feedback = engine.analyze(&resume);

    let name = resume.full_name();
    if name.is_empty() {
        println!("Resume analysis");
    } else {
        println!("Resume analysis for {name}");
    }
    println!("ATS Score: {score}/100");
    println!();
    for item in feedback {
        println!("- {item}");
    }

    Ok(())
}
