use crate::errors::EvalError;
use crate::prompt::Language;
use std::path::PathBuf;

/// Mutually exclusive selector between language-keyed and country-keyed
/// evaluation. Both the prompt template and the dataset row layout depend on
/// which variant is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Language(Language),
    Country(String),
}

impl Mode {
    /// Resolves the language/country pair from the configuration surface.
    /// Exactly one of the two must be set; everything downstream carries the
    /// resolved enum, so this is the only place the invariant is checked.
    pub fn resolve(
        language: Option<Language>,
        country: Option<String>,
    ) -> Result<Self, EvalError> {
        match (language, country) {
            (Some(lang), None) => Ok(Mode::Language(lang)),
            (None, Some(country)) => {
                if country.trim().is_empty() {
                    Err(EvalError::Config("country must be non-empty".into()))
                } else {
                    Ok(Mode::Country(country))
                }
            }
            (Some(_), Some(_)) => Err(EvalError::Config(
                "language and country are mutually exclusive; set exactly one".into(),
            )),
            (None, None) => Err(EvalError::Config(
                "either a language or a country is required".into(),
            )),
        }
    }
}

/// Prompt phrasing variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStyle {
    /// Opens with a residence preamble ("You live in ...") matching the
    /// active language's country or the configured country.
    #[default]
    Situated,
    /// No residence preamble. Language-keyed runs only.
    Plain,
}

/// One evaluation run. Built once at startup and passed by reference into
/// the runner; there is no ambient global state.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Tab-separated dataset with one header row.
    pub dataset: PathBuf,
    pub mode: Mode,
    pub style: PromptStyle,
    /// Provider-specific model identifier, recorded verbatim in each result.
    pub model: String,
    /// Output JSON path; overwritten without warning.
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_language_only() {
        let mode = Mode::resolve(Some(Language::Spanish), None).unwrap();
        assert_eq!(mode, Mode::Language(Language::Spanish));
    }

    #[test]
    fn resolve_country_only() {
        let mode = Mode::resolve(None, Some("Mexico".into())).unwrap();
        assert_eq!(mode, Mode::Country("Mexico".into()));
    }

    #[test]
    fn resolve_rejects_both() {
        let err = Mode::resolve(Some(Language::English), Some("Mexico".into())).unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"), "{err}");
    }

    #[test]
    fn resolve_rejects_neither() {
        let err = Mode::resolve(None, None).unwrap_err();
        assert!(err.to_string().contains("required"), "{err}");
    }

    #[test]
    fn resolve_rejects_blank_country() {
        let err = Mode::resolve(None, Some("  ".into())).unwrap_err();
        assert!(err.to_string().contains("non-empty"), "{err}");
    }
}
