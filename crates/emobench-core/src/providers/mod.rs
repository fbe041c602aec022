//! Text-generation backends. Each client wraps one HTTP API behind the
//! [`Provider`] trait; selection happens once at startup via
//! [`from_env`]. Transport and auth failures propagate to the caller
//! unchanged; there is no retry or backoff at this layer.

pub mod anthropic;
pub mod gemini;
pub mod ollama;
pub mod openai;

pub use anthropic::AnthropicClient;
pub use gemini::GeminiClient;
pub use ollama::OllamaClient;
pub use openai::OpenAiClient;

use crate::errors::EvalError;
use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

/// Raw model output paired with the prompt that produced it. The prompt is
/// returned unchanged; the response text is not trimmed or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub prompt: String,
    pub text: String,
}

/// A text-generation backend.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn predict(&self, model: &str, prompt: &str) -> anyhow::Result<Prediction>;

    fn name(&self) -> &'static str;
}

/// Backend selector for the configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    Gemini,
    Ollama,
}

impl FromStr for ProviderKind {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            "ollama" => Ok(ProviderKind::Ollama),
            other => Err(EvalError::Config(format!(
                "unknown provider '{other}' (expected openai, anthropic, gemini, or ollama)"
            ))),
        }
    }
}

/// Builds the selected client from process environment credentials. A
/// missing credential is a fatal startup error naming the variable.
pub fn from_env(kind: ProviderKind) -> anyhow::Result<Arc<dyn Provider>> {
    Ok(match kind {
        ProviderKind::OpenAi => Arc::new(OpenAiClient::from_env()?),
        ProviderKind::Anthropic => Arc::new(AnthropicClient::from_env()?),
        ProviderKind::Gemini => Arc::new(GeminiClient::from_env()?),
        ProviderKind::Ollama => Arc::new(OllamaClient::from_env()),
    })
}

/// Reads a required credential, mapping absence to a config error.
pub(crate) fn required_env(var: &'static str) -> Result<String, EvalError> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| EvalError::Config(format!("{var} is not set")))
}

/// Reads an optional base-URL override.
pub(crate) fn base_url(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}
