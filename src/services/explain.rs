//! Concept explanation APIs

use super::{non_empty, read_json, TextService};
use crate::config::Config;
use crate::error::{HelperError, HelperResult};
use crate::task::TextTask;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WikipediaSummary {
    extract: Option<String>,
}

/// Wikipedia REST page summary
pub struct WikipediaExplainer {
    client: Client,
    url: String,
}

impl WikipediaExplainer {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.wikipedia_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Page title as Wikipedia expects it in a path segment
fn page_title(concept: &str) -> String {
    let title = concept.split_whitespace().collect::<Vec<_>>().join("_");
    urlencoding::encode(&title).into_owned()
}

#[async_trait]
impl TextService for WikipediaExplainer {
    fn name(&self) -> &str {
        "Wikipedia"
    }

    async fn invoke(&self, task: &TextTask) -> HelperResult<String> {
        let url = format!("{}/{}", self.url, page_title(&task.input));
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HelperError::http(self.name(), e))?;
        let body: WikipediaSummary = read_json(self.name(), response).await?;

        non_empty(self.name(), body.extract)
    }
}

#[derive(Debug, Deserialize)]
struct DuckDuckGoAnswer {
    #[serde(rename = "AbstractText")]
    abstract_text: Option<String>,
}

/// DuckDuckGo instant answer API
pub struct DuckDuckGoExplainer {
    client: Client,
    url: String,
}

impl DuckDuckGoExplainer {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.duckduckgo_url.clone(),
        }
    }
}

#[async_trait]
impl TextService for DuckDuckGoExplainer {
    fn name(&self) -> &str {
        "DuckDuckGo"
    }

    async fn invoke(&self, task: &TextTask) -> HelperResult<String> {
        let url = format!(
            "{}?q={}&format=json&no_html=1",
            self.url,
            urlencoding::encode(task.input.trim())
        );
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HelperError::http(self.name(), e))?;
        let body: DuckDuckGoAnswer = read_json(self.name(), response).await?;

        non_empty(self.name(), body.abstract_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("  photosynthesis "), "photosynthesis");
        assert_eq!(page_title("black   hole"), "black_hole");
        assert_eq!(page_title("C++"), "C%2B%2B");
    }
}
