//! Persistence of evaluation results. One record per dataset row, written
//! as a pretty-printed JSON array with non-ASCII text preserved literally.

use crate::config::Mode;
use crate::dataset::Sample;
use crate::providers::Prediction;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One row's outcome. Field order matches the persisted document; exactly
/// one of `language` / `country` is present, mirroring the active mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub prompt: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Ground-truth emotion label.
    pub emotion: String,
    /// The model's raw output, not canonicalized.
    pub pred_emotion: String,
    pub model: String,
}

impl ResultRecord {
    pub fn new(mode: &Mode, model: &str, sample: Sample, prediction: Prediction) -> Self {
        let (language, country) = match mode {
            Mode::Language(lang) => (Some(lang.to_string()), None),
            Mode::Country(c) => (None, Some(c.clone())),
        };
        Self {
            prompt: prediction.prompt,
            text: sample.text,
            language,
            country,
            emotion: sample.emotion,
            pred_emotion: prediction.text,
            model: model.to_string(),
        }
    }
}

/// Writes the records as an indented JSON array, overwriting any existing
/// file at `out`.
pub fn write_json(records: &[ResultRecord], out: &Path) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(records)?;
    std::fs::write(out, body)
        .with_context(|| format!("failed to write results to {}", out.display()))?;
    tracing::info!(path = %out.display(), records = records.len(), "results written");
    Ok(())
}

/// Loads a previously written evaluation document in full.
pub fn load_json(path: &Path) -> anyhow::Result<Vec<ResultRecord>> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read results from {}", path.display()))?;
    serde_json::from_str(&body)
        .with_context(|| format!("invalid results document at {}", path.display()))
}
