use super::{base_url, required_env, Prediction, Provider};
use async_trait::async_trait;
use serde_json::json;

const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    base: String,
    api_key: String,
    client: reqwest::Client,
}

impl AnthropicClient {
    pub fn new(base: String, api_key: String) -> Self {
        Self {
            base,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Reads `ANTHROPIC_API_KEY` (required) and `ANTHROPIC_BASE_URL`
    /// (optional).
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = required_env("ANTHROPIC_API_KEY")?;
        let base = base_url("ANTHROPIC_BASE_URL", "https://api.anthropic.com");
        Ok(Self::new(base, api_key))
    }
}

#[async_trait]
impl Provider for AnthropicClient {
    async fn predict(&self, model: &str, prompt: &str) -> anyhow::Result<Prediction> {
        let url = format!("{}/v1/messages", self.base.trim_end_matches('/'));

        let body = json!({
            "model": model,
            "max_tokens": 1000,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let resp = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_else(|_| String::new());
            anyhow::bail!("Anthropic messages API error (status {}): {}", status, error_text);
        }

        let json: serde_json::Value = resp.json().await?;
        let text = json
            .pointer("/content/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("Anthropic API response missing content text"))?
            .to_string();

        Ok(Prediction {
            prompt: prompt.to_string(),
            text,
        })
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }
}
