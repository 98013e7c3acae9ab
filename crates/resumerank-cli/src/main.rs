//! resumerank — rank extracted resume texts by composite quality score.
//!
//! Reads a JSON array of documents on stdin, either `{"id": ..., "text": ...}`
//! objects or `["id", "text"]` pairs, and writes the ranking as JSON on stdout.
//! Logs go to stderr.

mod config;

use std::io::{Read, Write};

use anyhow::Context;
use resumerank_common::{RawDocument, TextCorpus};
use resumerank_ranker::{RankingPipeline, RankingReport};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{Config, OutputFormat};

/// One input record as produced by the text extraction step.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Pair(String, Option<String>),
    Object(RawDocument),
}

impl From<InputDocument> for RawDocument {
    fn from(doc: InputDocument) -> Self {
        match doc {
            InputDocument::Pair(id, text) => RawDocument::new(id, text),
            InputDocument::Object(raw) => raw,
        }
    }
}

fn read_corpus(input: &str) -> anyhow::Result<TextCorpus> {
    let docs: Vec<InputDocument> = serde_json::from_str(input)
        .context("stdin must be a JSON array of documents")?;
    Ok(TextCorpus::from_raw(docs.into_iter().map(RawDocument::from)))
}

fn render(report: RankingReport, config: &Config) -> anyhow::Result<String> {
    let out = &config.output;
    let ranking = report.ranking.clone().top(out.top_n);
    let value = match out.format {
        OutputFormat::Pairs => serde_json::to_value(ranking.to_pairs())?,
        OutputFormat::Entries => serde_json::to_value(&ranking)?,
        OutputFormat::Report => serde_json::to_value(RankingReport { ranking, ..report })?,
    };
    let rendered = if out.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(rendered)
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resumerank=debug,info")),
        )
        .init();

    info!("resumerank v{}", env!("CARGO_PKG_VERSION"));

    let config = match Config::load()? {
        Some(c) => {
            info!(path = %Config::path().display(), "Configuration loaded");
            c
        }
        None => {
            warn!(path = %Config::path().display(), "No configuration file; using built-in defaults");
            Config::default()
        }
    };

    let pipeline = RankingPipeline::new(config.scoring.clone())?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading documents from stdin")?;
    let corpus = read_corpus(&input)?;

    let report = pipeline.report(&corpus);
    let rendered = render(report, &config)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reads_objects_and_pairs() {
        let corpus = read_corpus(
            r#"[
                {"id": "a.pdf", "text": "expert python project"},
                ["b.pdf", "basic java"],
                ["c.pdf", null],
                {"id": "d.pdf"}
            ]"#,
        )
        .unwrap();
        assert_eq!(corpus.ids().collect::<Vec<_>>(), vec!["a.pdf", "b.pdf"]);
        assert_eq!(corpus.skipped(), 2);
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(read_corpus(r#"{"id": "a"}"#).is_err());
    }

    #[test]
    fn test_render_pairs_top_n() {
        let corpus = read_corpus(
            r#"[["a.txt", "expert python developer, built a project"],
                ["b.txt", "basic familiar with java"]]"#,
        )
        .unwrap();
        let report = RankingPipeline::default().report(&corpus);
        let mut config = Config::default();
        config.output.top_n = 1;
        config.output.pretty = false;

        let out = render(report, &config).unwrap();
        let parsed: Vec<(String, f64)> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].0, "a.txt");
    }

    #[test]
    fn test_render_empty_ranking() {
        let corpus = read_corpus("[]").unwrap();
        let report = RankingPipeline::default().report(&corpus);
        let mut config = Config::default();
        config.output.pretty = false;
        assert_eq!(render(report, &config).unwrap(), "[]");
    }

    #[test]
    fn test_render_report_carries_breakdown() {
        let corpus = read_corpus(
            r#"[["a.txt", "expert python developer, built a project"],
                ["b.txt", "basic familiar with java"],
                ["c.txt", null]]"#,
        )
        .unwrap();
        let report = RankingPipeline::default().report(&corpus);
        let mut config = Config::default();
        config.output.format = OutputFormat::Report;
        config.output.top_n = 1;

        let out = render(report, &config).unwrap();
        assert!(out.contains('\n'));
        let parsed: RankingReport = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.ranking.len(), 1);
        assert_eq!(parsed.breakdown.len(), 2);
        assert_eq!(parsed.skipped, 1);
    }
}
