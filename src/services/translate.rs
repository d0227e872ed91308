//! Translation APIs

use super::{non_empty, read_json, TextService};
use crate::config::Config;
use crate::error::{HelperError, HelperResult};
use crate::task::TextTask;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// MyMemory free translation API
pub struct MyMemoryTranslator {
    client: Client,
    url: String,
}

impl MyMemoryTranslator {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.mymemory_url.clone(),
        }
    }
}

/// `responseStatus` arrives as a number or a string depending on the error path
fn status_is_ok(status: &Value) -> bool {
    match status {
        Value::Number(n) => n.as_u64() == Some(200),
        Value::String(s) => s == "200",
        _ => false,
    }
}

#[async_trait]
impl TextService for MyMemoryTranslator {
    fn name(&self) -> &str {
        "MyMemory"
    }

    async fn invoke(&self, task: &TextTask) -> HelperResult<String> {
        let langpair = format!("{}|{}", task.options.source_lang, task.options.target_lang);
        let url = format!(
            "{}?q={}&langpair={}",
            self.url,
            urlencoding::encode(task.input.trim()),
            urlencoding::encode(&langpair)
        );
        debug!("MyMemory langpair {}", langpair);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HelperError::http(self.name(), e))?;
        let body: Value = read_json(self.name(), response).await?;

        if !status_is_ok(&body["responseStatus"]) {
            return Err(HelperError::payload(
                self.name(),
                format!("responseStatus {}", body["responseStatus"]),
            ));
        }

        let translated = body["responseData"]["translatedText"]
            .as_str()
            .map(str::to_string);
        non_empty(self.name(), translated)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibreTranslateResponse {
    translated_text: Option<String>,
}

/// LibreTranslate instance (key optional, depending on the instance)
pub struct LibreTranslator {
    client: Client,
    url: String,
    key: String,
}

impl LibreTranslator {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.libretranslate_url.clone(),
            key: config.libretranslate_key.clone(),
        }
    }
}

#[async_trait]
impl TextService for LibreTranslator {
    fn name(&self) -> &str {
        "LibreTranslate"
    }

    async fn invoke(&self, task: &TextTask) -> HelperResult<String> {
        let mut payload = serde_json::json!({
            "q": task.input.trim(),
            "source": task.options.source_lang,
            "target": task.options.target_lang,
            "format": "text",
        });
        if !self.key.is_empty() {
            payload["api_key"] = Value::String(self.key.clone());
        }

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HelperError::http(self.name(), e))?;
        let body: LibreTranslateResponse = read_json(self.name(), response).await?;

        non_empty(self.name(), body.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_ok() {
        assert!(status_is_ok(&serde_json::json!(200)));
        assert!(status_is_ok(&serde_json::json!("200")));
        assert!(!status_is_ok(&serde_json::json!(403)));
        assert!(!status_is_ok(&Value::Null));
    }
}
