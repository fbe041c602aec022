use async_trait::async_trait;
use emobench_core::config::{EvalConfig, Mode, PromptStyle};
use emobench_core::prompt::Language;
use emobench_core::providers::{Prediction, Provider};
use emobench_core::runner;
use std::path::Path;
use std::sync::Mutex;
use tempfile::tempdir;

struct MockProvider {
    responses: Mutex<Vec<String>>,
}

impl MockProvider {
    fn with_responses(responses: &[&str]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn predict(&self, _model: &str, prompt: &str) -> anyhow::Result<Prediction> {
        let mut resps = self.responses.lock().unwrap();
        if resps.is_empty() {
            anyhow::bail!("no more mock responses");
        }
        Ok(Prediction {
            prompt: prompt.to_string(),
            text: resps.remove(0),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

fn english_config(dir: &Path) -> EvalConfig {
    let dataset = dir.join("eng.tsv");
    std::fs::write(
        &dataset,
        "text\temotion\tsentiment\n\
         I am happy\tjoy\tpositive\n\
         I lost my keys\tsadness\tnegative\n\
         It is Tuesday\tneutral\tneutral\n",
    )
    .unwrap();
    EvalConfig {
        dataset,
        mode: Mode::Language(Language::English),
        style: PromptStyle::Situated,
        model: "test-model".into(),
        output: dir.join("out.json"),
    }
}

#[tokio::test]
async fn one_record_per_data_row_in_file_order() {
    let dir = tempdir().unwrap();
    let config = english_config(dir.path());
    let provider = MockProvider::with_responses(&["joy", "fear", "neutral"]);

    let records = runner::run(&config, &provider).await.unwrap();

    assert_eq!(records.len(), 3, "header row must not produce a record");
    assert_eq!(records[0].text, "I am happy");
    assert_eq!(records[0].emotion, "joy");
    assert_eq!(records[0].pred_emotion, "joy");
    assert_eq!(records[1].text, "I lost my keys");
    assert_eq!(records[1].pred_emotion, "fear");
    assert_eq!(records[2].text, "It is Tuesday");
    assert_eq!(records[2].pred_emotion, "neutral");
}

#[tokio::test]
async fn records_embed_prompt_and_carry_language_field() {
    let dir = tempdir().unwrap();
    let config = english_config(dir.path());
    let provider = MockProvider::with_responses(&["joy", "joy", "joy"]);

    let records = runner::run(&config, &provider).await.unwrap();

    for record in &records {
        assert!(record.prompt.contains(&record.text));
        assert_eq!(record.language.as_deref(), Some("English"));
        assert_eq!(record.country, None);
        assert_eq!(record.model, "test-model");
    }
}

#[tokio::test]
async fn country_mode_reads_six_field_rows() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("mex.tsv");
    std::fs::write(
        &dataset,
        "text\ttext_es\temotion\temotion_es\tsentiment\tsentiment_es\n\
         I am sad\ttriste\tsadness\ttristeza\tnegative\tnegativo\n",
    )
    .unwrap();
    let config = EvalConfig {
        dataset,
        mode: Mode::Country("Mexico".into()),
        style: PromptStyle::Situated,
        model: "test-model".into(),
        output: dir.path().join("out.json"),
    };
    let provider = MockProvider::with_responses(&["sadness"]);

    let records = runner::run(&config, &provider).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "I am sad");
    assert_eq!(records[0].emotion, "sadness");
    assert_eq!(records[0].country.as_deref(), Some("Mexico"));
    assert_eq!(records[0].language, None);
    assert!(records[0].prompt.starts_with("You live in Mexico,"));
}

#[tokio::test]
async fn provider_failure_aborts_the_run() {
    let dir = tempdir().unwrap();
    let config = english_config(dir.path());
    // Two responses for three rows: the third call fails.
    let provider = MockProvider::with_responses(&["joy", "fear"]);

    let err = runner::run(&config, &provider).await.unwrap_err();
    assert!(err.to_string().contains("row 3"), "{err}");
    assert!(!config.output.exists(), "no partial output on abort");
}

#[tokio::test]
async fn shape_mismatch_aborts_the_run() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("bad.tsv");
    std::fs::write(
        &dataset,
        "text\ttext_es\temotion\temotion_es\tsentiment\tsentiment_es\n\
         only\tthree\tfields\n",
    )
    .unwrap();
    let config = EvalConfig {
        dataset,
        mode: Mode::Country("Mexico".into()),
        style: PromptStyle::Situated,
        model: "test-model".into(),
        output: dir.path().join("out.json"),
    };
    let provider = MockProvider::with_responses(&["sadness"]);

    let err = runner::run(&config, &provider).await.unwrap_err();
    assert!(err.to_string().contains("expected 6 fields"), "{err}");
}

#[tokio::test]
async fn missing_dataset_is_an_error() {
    let dir = tempdir().unwrap();
    let config = EvalConfig {
        dataset: dir.path().join("absent.tsv"),
        mode: Mode::Language(Language::English),
        style: PromptStyle::Situated,
        model: "test-model".into(),
        output: dir.path().join("out.json"),
    };
    let provider = MockProvider::with_responses(&[]);

    let err = runner::run(&config, &provider).await.unwrap_err();
    assert!(err.to_string().contains("failed to open dataset"), "{err}");
}
