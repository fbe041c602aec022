use super::{base_url, Prediction, Provider};
use async_trait::async_trait;
use serde_json::json;

/// Client for a locally hosted Ollama server. No credential; the server
/// address comes from `OLLAMA_BASE_URL`.
pub struct OllamaClient {
    base: String,
    client: reqwest::Client,
}

impl OllamaClient {
    pub fn new(base: String) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(base_url("OLLAMA_BASE_URL", "http://localhost:11434"))
    }
}

#[async_trait]
impl Provider for OllamaClient {
    async fn predict(&self, model: &str, prompt: &str) -> anyhow::Result<Prediction> {
        let url = format!("{}/api/chat", self.base.trim_end_matches('/'));

        let body = json!({
            "model": model,
            "messages": [{ "role": "user", "content": prompt }],
            "stream": false,
        });

        let resp = self.client.post(&url).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_else(|_| String::new());
            anyhow::bail!("Ollama chat API error (status {}): {}", status, error_text);
        }

        let json: serde_json::Value = resp.json().await?;
        let text = json
            .pointer("/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("Ollama response missing message content"))?
            .to_string();

        Ok(Prediction {
            prompt: prompt.to_string(),
            text,
        })
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}
