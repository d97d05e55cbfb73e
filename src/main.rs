//! lyric-fusion - batch analysis driver
//!
//! Reads a JSON file containing an array of songs, each an object mapping
//! source label → lyric text, analyzes every song, and prints per-record
//! statistics plus the final usage report.

use anyhow::{Context, Result};
use clap::Parser;
use lyric_fusion::{AnalyzerConfig, LyricAnalyzer, SourceLabel};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "lyric-fusion", version, about = "Reconcile multi-source lyric transcriptions")]
struct Args {
    /// JSON input: array of objects mapping source label to lyric text
    input: PathBuf,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };
    let analyzer = LyricAnalyzer::from_config(&config)?;

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let songs: Vec<BTreeMap<SourceLabel, String>> =
        serde_json::from_str(&content).context("input must be an array of label→text maps")?;

    info!("Analyzing {} songs", songs.len());

    for (index, song) in songs.iter().enumerate() {
        let sources: Vec<(SourceLabel, String)> =
            song.iter().map(|(l, t)| (l.clone(), t.clone())).collect();
        match analyzer.analyze(&sources) {
            Some(stats) => println!("{}", serde_json::to_string_pretty(&stats)?),
            None => warn!(song = index, "No metrics: all supplied texts empty"),
        }
    }

    if let Some(report) = analyzer.usage_report() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
