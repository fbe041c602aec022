use super::{base_url, required_env, Prediction, Provider};
use async_trait::async_trait;
use serde_json::json;

pub struct GeminiClient {
    base: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(base: String, api_key: String) -> Self {
        Self {
            base,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Reads `GOOGLE_API_KEY` (required) and `GOOGLE_BASE_URL` (optional).
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = required_env("GOOGLE_API_KEY")?;
        let base = base_url("GOOGLE_BASE_URL", "https://generativelanguage.googleapis.com");
        Ok(Self::new(base, api_key))
    }
}

#[async_trait]
impl Provider for GeminiClient {
    async fn predict(&self, model: &str, prompt: &str) -> anyhow::Result<Prediction> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base.trim_end_matches('/'),
            model,
            self.api_key
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_else(|_| String::new());
            anyhow::bail!("Gemini API error (status {}): {}", status, error_text);
        }

        let json: serde_json::Value = resp.json().await?;
        let text = json
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("Gemini API response missing candidate text"))?
            .to_string();

        Ok(Prediction {
            prompt: prompt.to_string(),
            text,
        })
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
