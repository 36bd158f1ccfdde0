//! Minimal client for the Gemini `generateContent` endpoint. Only the
//! single-turn text shape is supported since that's all the trainer
//! chat needs.
use std::time::Duration;

use anyhow::{Error, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Keep error bodies short in logs, upstream can return whole HTML pages
const ERROR_BODY_EXCERPT_CHARS: usize = 500;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Part {
    pub text: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Content {
    pub parts: Vec<Part>,
}

// {
//   "contents": [
//     { "parts": [ { "text": "You are a helpful fitness trainer..." } ] }
//   ]
// }
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

pub fn generate_content_url(api_hostname: &str, model: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent",
        api_hostname.trim_end_matches('/'),
        model
    )
}

/// Send a single prompt and return the raw JSON response. Any non-2xx
/// status is an error.
pub async fn generate_content(
    client: &reqwest::Client,
    prompt: &str,
    api_hostname: &str,
    api_key: &str,
    model: &str,
    timeout: Duration,
) -> Result<Value, Error> {
    let payload = GenerateContentRequest::from_prompt(prompt);
    let url = generate_content_url(api_hostname, model);
    let response = client
        .post(url)
        .query(&[("key", api_key)])
        .header("Content-Type", "application/json")
        .timeout(timeout)
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let excerpt: String = body.chars().take(ERROR_BODY_EXCERPT_CHARS).collect();
        bail!("Gemini API request failed with status {}: {}", status, excerpt);
    }

    let json = response.json().await?;
    Ok(json)
}

/// Pull the generated text out of `candidates[0].content.parts[0].text`.
/// Empty text counts as missing.
pub fn extract_text(resp: &Value) -> Option<String> {
    resp["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Send a prompt and return only the generated text.
pub async fn generate_text(
    client: &reqwest::Client,
    prompt: &str,
    api_hostname: &str,
    api_key: &str,
    model: &str,
    timeout: Duration,
) -> Result<String, Error> {
    let resp = generate_content(client, prompt, api_hostname, api_key, model, timeout).await?;
    extract_text(&resp).ok_or(anyhow!(
        "Gemini response missing candidates[0].content.parts[0].text: {}",
        resp
    ))
}
