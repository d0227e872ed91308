//! Summarization APIs

use super::{non_empty, read_json, require_key, TextService};
use crate::config::Config;
use crate::error::{HelperError, HelperResult};
use crate::task::TextTask;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct HuggingFaceSummary {
    summary_text: Option<String>,
}

/// HuggingFace inference API (bart-large-cnn by default)
pub struct HuggingFaceSummarizer {
    client: Client,
    url: String,
    token: String,
}

impl HuggingFaceSummarizer {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.huggingface_url.clone(),
            token: config.huggingface_token.clone(),
        }
    }
}

#[async_trait]
impl TextService for HuggingFaceSummarizer {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn invoke(&self, task: &TextTask) -> HelperResult<String> {
        let mut request = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "inputs": task.input.trim() }));

        // Anonymous access works with a lower rate limit
        if !self.token.is_empty() {
            request = request.bearer_auth(&self.token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HelperError::http(self.name(), e))?;
        let summaries: Vec<HuggingFaceSummary> = read_json(self.name(), response).await?;

        non_empty(
            self.name(),
            summaries.into_iter().next().and_then(|s| s.summary_text),
        )
    }
}

#[derive(Debug, Deserialize)]
struct MeaningCloudResponse {
    summary: Option<String>,
}

/// MeaningCloud summarization (requires a key)
pub struct MeaningCloudSummarizer {
    client: Client,
    url: String,
    key: String,
}

impl MeaningCloudSummarizer {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.meaningcloud_url.clone(),
            key: config.meaningcloud_key.clone(),
        }
    }
}

#[async_trait]
impl TextService for MeaningCloudSummarizer {
    fn name(&self) -> &str {
        "MeaningCloud"
    }

    async fn invoke(&self, task: &TextTask) -> HelperResult<String> {
        let key = require_key(self.name(), &self.key)?;
        debug!("Requesting MeaningCloud summary");

        let response = self
            .client
            .post(&self.url)
            .form(&[
                ("key", key),
                ("txt", task.input.trim()),
                ("sentences", "3"),
            ])
            .send()
            .await
            .map_err(|e| HelperError::http(self.name(), e))?;
        let body: MeaningCloudResponse = read_json(self.name(), response).await?;

        non_empty(self.name(), body.summary)
    }
}
