//! Google Gemini `generateContent` provider.

use crate::Completion;
use anyhow::{Context as _, Result, bail};
use reqwest::{
    Client, Method,
    header::{self, HeaderMap},
};
use serde::{Deserialize, Serialize};

/// Hosted API base; the model segment is appended per request.
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Completion provider backed by the Gemini REST API.
#[derive(Clone)]
pub struct Gemini {
    /// The HTTP client.
    client: Client,
    /// Prepared request headers, API key included.
    headers: HeaderMap,
    /// Endpoint base; requests go to `{base}/{model}:generateContent`.
    base_url: String,
}

impl Gemini {
    /// Create a provider against the hosted Gemini API.
    pub fn new(client: Client, key: &str) -> Result<Self> {
        Self::custom(client, key, BASE_URL)
    }

    /// Create a provider against a custom endpoint base.
    pub fn custom(client: Client, key: &str, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse()?);
        headers.insert(header::ACCEPT, "application/json".parse()?);
        headers.insert("x-goog-api-key", key.parse()?);
        Ok(Self {
            client,
            headers,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The prepared request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The endpoint base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Completion for Gemini {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/{model}:generateContent", self.base_url);
        let body = GenerateRequest::from_prompt(prompt);
        tracing::debug!("request to {url}: {} prompt bytes", prompt.len());

        let response = self
            .client
            .request(Method::POST, &url)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("response ({status}): {text}");
        if !status.is_success() {
            bail!("generateContent returned {status}: {text}");
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&text).context("malformed generateContent response")?;
        parsed.into_text()
    }
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

impl GenerateRequest {
    /// Wrap an assembled prompt as a single user content part.
    fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Part {
    text: String,
}

/// Response body from `generateContent`.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GenerateResponse {
    /// Text of the first candidate, parts concatenated.
    fn into_text(self) -> Result<String> {
        let Some(first) = self.candidates.into_iter().next() else {
            bail!("generateContent response carried no candidates");
        };
        Ok(first
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect())
    }
}
