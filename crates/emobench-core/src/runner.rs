//! Sequential batch runner: one pass over the dataset in file order, one
//! provider call per row, results collected in memory and written by the
//! caller after the full pass. Any parse, prompt, or backend error aborts
//! the run.

use crate::config::EvalConfig;
use crate::dataset;
use crate::prompt;
use crate::providers::Provider;
use crate::report::ResultRecord;
use anyhow::Context;

pub async fn run(config: &EvalConfig, provider: &dyn Provider) -> anyhow::Result<Vec<ResultRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_path(&config.dataset)
        .with_context(|| format!("failed to open dataset {}", config.dataset.display()))?;

    let mut results = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let row = idx + 1;
        let record =
            record.with_context(|| format!("failed to read dataset row {row}"))?;

        let sample = dataset::parse_row(&config.mode, row, &record)?;
        let prompt = prompt::build_prompt(&config.mode, config.style, &sample.text)?;

        let prediction = provider
            .predict(&config.model, &prompt)
            .await
            .with_context(|| format!("prediction failed on row {row}"))?;

        tracing::info!(row, provider = provider.name(), model = %config.model, "row processed");
        results.push(ResultRecord::new(&config.mode, &config.model, sample, prediction));
    }

    Ok(results)
}
