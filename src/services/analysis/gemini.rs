//! Gemini analysis provider
//!
//! Calls the `generateContent` endpoint with a JSON response schema and reads
//! the first candidate's text back as an [`AnalysisResult`]. ureq is blocking,
//! so each call runs on tokio's blocking pool.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{trace, warn};
use ureq::Agent;

use super::provider::{AnalysisError, AnalysisProvider, AnalysisResult};

pub struct GeminiProvider {
    agent: Agent,
    endpoint: String,
    api_key: String,
}

/// Shape the model is asked to answer in
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    suggested_alias: String,
    #[serde(default = "default_raw_score")]
    safety_score: i64,
}

fn default_raw_score() -> i64 {
    50
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiProvider {
    /// `api_url` is the API base, e.g. `https://generativelanguage.googleapis.com/v1beta`
    pub fn new(api_url: &str, model: &str, api_key: &str, timeout_secs: u64) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(timeout_secs.max(1))))
            .build()
            .into();

        Self {
            agent,
            endpoint: format!(
                "{}/models/{}:generateContent",
                api_url.trim_end_matches('/'),
                model
            ),
            api_key: api_key.to_string(),
        }
    }

    fn prompt(url: &str) -> String {
        format!(
            "Look at this URL and infer what the page behind it is about: \"{url}\".\n\
             Answer in JSON with:\n\
             1. title: a likely page title.\n\
             2. summary: one sentence on what a visitor will find there.\n\
             3. tags: 3-4 short keyword tags.\n\
             4. suggestedAlias: a short, catchy slug for a URL shortener (max 10 chars, alphanumeric).\n\
             5. safetyScore: 1-100 from domain reputation heuristics, 100 being very safe."
        )
    }

    fn request_body(url: &str) -> Value {
        json!({
            "contents": [{ "parts": [{ "text": Self::prompt(url) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "summary": { "type": "STRING" },
                        "tags": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "suggestedAlias": { "type": "STRING" },
                        "safetyScore": { "type": "INTEGER" }
                    },
                    "required": ["title", "summary", "tags", "suggestedAlias", "safetyScore"]
                }
            }
        })
    }

    /// Pull the model's JSON text out of a `generateContent` response
    fn parse_response(response: GenerateResponse) -> Result<AnalysisResult, AnalysisError> {
        let text = response
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text.filter(|t| !t.trim().is_empty()))
            .ok_or(AnalysisError::EmptyResponse)?;

        let raw: RawAnalysis = serde_json::from_str(&text)
            .map_err(|e| AnalysisError::Malformed(e.to_string()))?;

        AnalysisResult::normalized(
            &raw.title,
            &raw.summary,
            &raw.tags,
            &raw.suggested_alias,
            raw.safety_score,
        )
    }

    fn analyze_sync(
        agent: Agent,
        endpoint: String,
        api_key: String,
        url: String,
    ) -> Result<AnalysisResult, AnalysisError> {
        let resp = agent
            .post(&endpoint)
            .header("x-goog-api-key", &api_key)
            .send_json(Self::request_body(&url))
            .map_err(|e| {
                warn!("Gemini request to \"{}\" failed: {}", endpoint, e);
                AnalysisError::Http(e.to_string())
            })?;

        let response: GenerateResponse = resp
            .into_body()
            .read_json()
            .map_err(|e| AnalysisError::Malformed(e.to_string()))?;

        trace!("Gemini returned {} candidates", response.candidates.len());
        Self::parse_response(response)
    }
}

#[async_trait]
impl AnalysisProvider for GeminiProvider {
    async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        let api_key = self.api_key.clone();
        let url = url.to_string();

        tokio::task::spawn_blocking(move || Self::analyze_sync(agent, endpoint, api_key, url))
            .await
            .map_err(|e| AnalysisError::Task(e.to_string()))?
    }

    fn name(&self) -> &'static str {
        "Gemini"
    }
}
