use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "emobench",
    version,
    about = "Emotion-classification accuracy benchmark for hosted and local LLM providers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a provider over a dataset and persist the raw predictions
    Run(RunArgs),
    /// Score a previously written predictions file (exact match)
    Score(ScoreArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Tab-separated dataset with one header row
    #[arg(long)]
    pub dataset: PathBuf,

    /// Prompt language: English, Arabic, Spanish, Amharic, German, Hindi
    #[arg(long)]
    pub language: Option<String>,

    /// Country of residence stated in the prompt (instead of --language)
    #[arg(long)]
    pub country: Option<String>,

    /// Backend: openai | anthropic | gemini | ollama
    #[arg(long)]
    pub provider: String,

    /// Provider-specific model identifier
    #[arg(long)]
    pub model: String,

    /// Output JSON path (overwritten)
    #[arg(long, default_value = "results.json")]
    pub out: PathBuf,

    /// Drop the residence preamble from the prompt
    #[arg(long)]
    pub plain_prompt: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Predictions file written by `run`
    #[arg(long)]
    pub results: PathBuf,
}
