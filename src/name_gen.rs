use crate::settings::NameGenSettings;
use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::json;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

/// Source of suggested participant names.
pub trait NameGenerator: Send + Sync {
    fn generate(&self, topic: &str) -> Result<Vec<String>>;
}

/// Name generator backed by the Gemini `generateContent` REST API.
pub struct GeminiGenerator {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
    count: usize,
}

impl GeminiGenerator {
    pub fn new(settings: &NameGenSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent("sorteio name generator")
            .build()?;
        Ok(Self {
            client,
            api_key: settings.resolve_api_key(),
            model: settings.model.clone(),
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            count: settings.count.max(1),
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl NameGenerator for GeminiGenerator {
    fn generate(&self, topic: &str) -> Result<Vec<String>> {
        let Some(key) = &self.api_key else {
            bail!("missing API key");
        };
        let body = serde_json::to_string(&request_body(topic, self.count))?;
        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", key.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .context("send generateContent request")?;
        if !resp.status().is_success() {
            bail!("http status {}", resp.status());
        }
        let text = resp.text().context("read generateContent response")?;
        parse_response(&text)
    }
}

/// Prompt asking for `count` entries of `topic` as a JSON array of strings.
pub fn request_body(topic: &str, count: usize) -> serde_json::Value {
    json!({
        "contents": [{
            "parts": [{ "text": format!("Gere uma lista de {count} {topic}. Apenas retorne os nomes.") }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        }
    })
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// Extract the generated names from a `generateContent` response body.
///
/// A response without text, or whose text is not a JSON array, yields an
/// empty list. Non-string array items are skipped.
pub fn parse_response(body: &str) -> Result<Vec<String>> {
    let resp: GenerateResponse =
        serde_json::from_str(body).context("decode generateContent response")?;
    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value =
        serde_json::from_str(&text).context("decode generated names")?;
    let names = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(names)
}

/// A generation request running on a background thread.
pub struct PendingImport {
    rx: Receiver<Result<Vec<String>>>,
}

impl PendingImport {
    /// Result of the request once it has finished.
    pub fn try_take(&self) -> Option<Result<Vec<String>>> {
        match self.rx.try_recv() {
            Ok(res) => Some(res),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err(anyhow::anyhow!("name generator stopped unexpectedly")))
            }
        }
    }
}

/// Run `generator` for `topic` on a new thread.
pub fn spawn_generate(generator: Arc<dyn NameGenerator>, topic: String) -> PendingImport {
    let (tx, rx) = channel();
    std::thread::spawn(move || {
        let res = generator.generate(&topic);
        if let Err(e) = &res {
            tracing::warn!("name generation failed: {e:#}");
        }
        let _ = tx.send(res);
    });
    PendingImport { rx }
}
