//! Exact-match scoring over a persisted evaluation document.
//!
//! A prediction counts iff it is byte-for-byte equal to the ground-truth
//! label: no case folding, no trimming, no fuzzy matching. Keeping the
//! comparison strict keeps scores comparable with earlier runs.

use crate::report::{self, ResultRecord};
use std::path::Path;

/// Per-record outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub emotion: String,
    pub pred_emotion: String,
    pub correct: bool,
}

/// Aggregate over one evaluation document.
#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard {
    pub verdicts: Vec<Verdict>,
    pub matched: usize,
}

impl Scorecard {
    pub fn total(&self) -> usize {
        self.verdicts.len()
    }

    /// Matches over records; 0.0 for an empty document.
    pub fn accuracy(&self) -> f64 {
        if self.verdicts.is_empty() {
            0.0
        } else {
            self.matched as f64 / self.verdicts.len() as f64
        }
    }
}

fn exact_match(prediction: &str, truth: &str) -> bool {
    prediction == truth
}

pub fn score_records(records: &[ResultRecord]) -> Scorecard {
    let verdicts: Vec<Verdict> = records
        .iter()
        .map(|r| Verdict {
            emotion: r.emotion.clone(),
            pred_emotion: r.pred_emotion.clone(),
            correct: exact_match(&r.pred_emotion, &r.emotion),
        })
        .collect();
    let matched = verdicts.iter().filter(|v| v.correct).count();
    Scorecard { verdicts, matched }
}

/// Loads an evaluation document and scores it.
pub fn score_file(path: &Path) -> anyhow::Result<Scorecard> {
    let records = report::load_json(path)?;
    Ok(score_records(&records))
}
