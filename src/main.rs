//! rapid-digest command-line tool
//!
//! Reads a document, prints its per-paragraph summary and reports how much
//! shorter the summary is than the source.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use rapid_digest::pipeline::{PipelineObserver, StageReport, StageTimingObserver};
use rapid_digest::{read_document, Summary, SummaryPipeline, SummaryStats, SummarizerConfig};

#[derive(Parser)]
#[command(name = "rapid-digest", version)]
#[command(about = "Summarize a document by picking the most central sentence of each paragraph")]
struct Args {
    /// Document to summarize
    input: PathBuf,

    /// Title line printed above the summary
    #[arg(long, short = 't')]
    title: Option<String>,

    /// JSON configuration file
    #[arg(long, short = 'c', env = "RAPID_DIGEST_CONFIG")]
    config: Option<PathBuf>,

    /// Print summary and statistics as JSON
    #[arg(long)]
    json: bool,

    /// Log how long each pipeline stage took
    #[arg(long)]
    timings: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a Path,
    summary: &'a Summary,
    text: &'a str,
    stats: SummaryStats,
}

/// Forwards stage timings to the log as they complete
struct LoggingObserver {
    inner: StageTimingObserver,
}

impl PipelineObserver for LoggingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        info!(
            stage,
            elapsed_us = report.elapsed.as_micros() as u64,
            items = ?report.items,
            "stage finished"
        );
        self.inner.on_stage_end(stage, report);
    }
}

fn load_config(path: Option<&Path>) -> Result<SummarizerConfig> {
    let Some(path) = path else {
        return Ok(SummarizerConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = SummarizerConfig::from_json_str(&raw)
        .with_context(|| format!("parsing config {}", path.display()))?;
    debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // --timings reports at info level, so lift the default filter for it
    let default_level = if args.timings { "info" } else { "warn" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(args.config.as_deref())?;

    if !args.json {
        println!("Processing {}...", args.input.display());
    }

    let document = read_document(&args.input)?;
    debug!(bytes = document.byte_len, "read document");
    let content = document.text.as_str();

    let pipeline = SummaryPipeline::with_config(config);
    let summary = if args.timings {
        let mut observer = LoggingObserver {
            inner: StageTimingObserver::new(),
        };
        let summary = pipeline.run(args.title.as_deref(), content, &mut observer);
        info!(
            total_us = observer.inner.total().as_micros() as u64,
            "pipeline finished"
        );
        summary
    } else {
        pipeline.run(
            args.title.as_deref(),
            content,
            &mut rapid_digest::NoopObserver,
        )
    };

    // The report always opens with a title line, empty when no title is set
    let text = summary.render_with_title_line();
    let stats = SummaryStats::from_lengths(document.byte_len, text.len());

    if args.json {
        let report = JsonReport {
            input: &args.input,
            summary: &summary,
            text: &text,
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{text}");
        println!();
        println!("{stats}");
    }

    Ok(())
}
