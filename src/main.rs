//! Diary Sentiment - run-once analysis of the newest daily-log export.
//!
//! Picks the most recently modified CSV in the configured data directory,
//! classifies every diary entry through the configured LLM, then writes
//! the labeled table and the sentiment report. Aborts before creating any
//! output when there is no input file.

use anyhow::{Context, Result};
use diary_sentiment::sentiment::{write_labeled_csv, LabelCounts, SentimentPipeline, SentimentReport};
use diary_sentiment::{latest_csv, DiaryTable, OpenAiClassifier};
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = diary_sentiment::load_config(CONFIG_PATH)?;

    // Startup failure: nothing to analyze, no artifacts are produced.
    let input = match latest_csv(&config.paths.data_dir)? {
        Some(path) => path,
        None => {
            error!(
                "no CSV files found in {}, nothing to analyze",
                config.paths.data_dir.display()
            );
            std::process::exit(1);
        }
    };

    info!("loading daily log: {}", input.display());
    let table = DiaryTable::from_csv(&input)?;
    info!(
        "loaded {} records (activity column present: {})",
        table.len(),
        table.has_activity
    );

    let api_key = config
        .api_key()
        .context("no API key: set OPENAI_API_KEY or llm.api_key in config.toml")?;
    let mut classifier = OpenAiClassifier::new(api_key).with_model(config.llm.model.clone());
    if let Some(base_url) = &config.llm.base_url {
        classifier = classifier.with_base_url(base_url.clone());
    }

    let pipeline = SentimentPipeline::new(Arc::new(classifier));
    let scored = pipeline.run(table.records).await;

    // Output tree is only created once classification has terminal results
    // for every record.
    let graphs_dir = config.paths.graphs_dir();
    let reports_dir = config.paths.reports_dir();
    std::fs::create_dir_all(&graphs_dir)?;
    std::fs::create_dir_all(&reports_dir)?;

    let labeled_path = config.paths.output_dir.join("labeled_log.csv");
    write_labeled_csv(&scored, &labeled_path)?;
    info!("labeled table written: {}", labeled_path.display());

    let counts = LabelCounts::from_records(&scored);
    let report_path = reports_dir.join("sentiment_report.txt");
    SentimentReport::new(counts).write(&report_path)?;
    info!("sentiment report written: {}", report_path.display());

    info!(
        "done: {} positive, {} neutral, {} negative, {} failures",
        counts.positive, counts.neutral, counts.negative, counts.errors
    );

    Ok(())
}
