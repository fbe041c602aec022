use super::{base_url, required_env, Prediction, Provider};
use async_trait::async_trait;
use serde_json::json;

pub struct OpenAiClient {
    base: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(base: String, api_key: String) -> Self {
        Self {
            base,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Reads `OPENAI_API_KEY` (required) and `OPENAI_BASE_URL` (optional).
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = required_env("OPENAI_API_KEY")?;
        let base = base_url("OPENAI_BASE_URL", "https://api.openai.com");
        Ok(Self::new(base, api_key))
    }
}

#[async_trait]
impl Provider for OpenAiClient {
    async fn predict(&self, model: &str, prompt: &str) -> anyhow::Result<Prediction> {
        let url = format!("{}/v1/chat/completions", self.base.trim_end_matches('/'));

        let body = json!({
            "model": model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_else(|_| String::new());
            anyhow::bail!("OpenAI chat API error (status {}): {}", status, error_text);
        }

        let json: serde_json::Value = resp.json().await?;
        let text = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("OpenAI API response missing message content"))?
            .to_string();

        Ok(Prediction {
            prompt: prompt.to_string(),
            text,
        })
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
