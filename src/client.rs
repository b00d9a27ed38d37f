//! Summarization client for the Gemini text-generation API.
//!
//! The network transport sits behind the [`TextGenerator`] trait so the
//! summarization flow can be exercised with a fake generator in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Base URL for the Gemini REST API
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!("gist/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Please enter a URL")]
    EmptyUrl,
    #[error("Failed to summarize article: {0}")]
    RequestFailed(String),
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("missing API key: set GEMINI_API_KEY or add it to gist.toml")]
    MissingApiKey,
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Transport seam for the external text-generation service.
///
/// The real implementation is [`GeminiGenerator`]; tests substitute a fake.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and return the model's raw reply text.
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Build the fixed prompt sent to the model for a submitted URL.
pub fn build_prompt(url: &str) -> String {
    format!(
        r#"Analyze the article at {url} and provide a well-formatted response with the following:

1. Extract the source name (website/publication name) from the URL
2. Write a concise summary (2-3 paragraphs)
3. List 5 key takeaways
4. Provide one valuable insight

Format the response exactly like this (maintain spacing and formatting):

Source: [Publication Name]

Summary:
[Write the summary here, broken into paragraphs for readability]

Key Takeaways:
1. [First takeaway]
2. [Second takeaway]
3. [Third takeaway]
4. [Fourth takeaway]
5. [Fifth takeaway]

Key Insight:
[Single line insight that provides unique value]"#
    )
}

/// Summarize the article at `url` using the given generator.
///
/// An empty or whitespace-only URL is rejected before the generator is
/// invoked. Any generator error is wrapped into a single user-facing
/// failure message; the failure is terminal for this submission, no retry
/// is attempted and no result is cached.
pub async fn summarize(
    url: &str,
    generator: &dyn TextGenerator,
) -> Result<String, SummarizeError> {
    if url.trim().is_empty() {
        return Err(SummarizeError::EmptyUrl);
    }

    let prompt = build_prompt(url);
    generator
        .generate(&prompt)
        .await
        .map_err(|e| SummarizeError::RequestFailed(e.to_string()))
}

// Wire types for the generateContent endpoint.

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Gemini-backed [`TextGenerator`].
///
/// The API key and model are injected at construction; a missing key only
/// surfaces when a call is made, as a generation failure.
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Result<Self, GenerateError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            api_key,
            model: model.into(),
        })
    }
}

impl fmt::Debug for GeminiGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiGenerator")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(GenerateError::MissingApiKey)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let endpoint = format!("{}/models/{}:generateContent", GEMINI_BASE_URL, self.model);
        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        parse_reply(&body)
    }
}

/// Extract the reply text from a `generateContent` response body.
fn parse_reply(body: &str) -> Result<String, GenerateError> {
    let reply: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;
    reply
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(|| GenerateError::MalformedResponse("no candidates returned".to_string()))
}
