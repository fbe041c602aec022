//! Row extraction for the three dataset layouts. The active mode decides
//! the expected column count and which columns carry the ground truth.

use crate::config::Mode;
use crate::errors::EvalError;
use crate::prompt::Language;
use csv::StringRecord;

/// Input text plus ground-truth labels extracted from one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub text: String,
    pub emotion: String,
    pub sentiment: String,
}

/// Extracts a sample from one delimited row.
///
/// Layouts:
/// - language = English: `(text, emotion, sentiment)`
/// - language != English: `(text_eng, text, emotion_eng, emotion,
///   sentiment_eng, sentiment)` — only the translated columns are kept
/// - country: `(text, _, emotion, _, sentiment, _)`
///
/// `row` is the 1-based data-row number (header excluded), used in the
/// shape error.
pub fn parse_row(mode: &Mode, row: usize, record: &StringRecord) -> Result<Sample, EvalError> {
    let (layout, expected, indices) = match mode {
        Mode::Language(Language::English) => ("english", 3, [0, 1, 2]),
        Mode::Language(_) => ("translated", 6, [1, 3, 5]),
        Mode::Country(_) => ("country", 6, [0, 2, 4]),
    };

    if record.len() != expected {
        return Err(EvalError::RowShape {
            row,
            layout,
            expected,
            got: record.len(),
        });
    }

    let field = |i: usize| record.get(i).unwrap_or_default().to_string();
    Ok(Sample {
        text: field(indices[0]),
        emotion: field(indices[1]),
        sentiment: field(indices[2]),
    })
}
