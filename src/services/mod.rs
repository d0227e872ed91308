//! Remote Text Services
//!
//! One client per third-party API. Every client shares the `TextService`
//! contract so the fallback chain can try them in order:
//! - Summarization: HuggingFace, MeaningCloud
//! - Explanation: Wikipedia, DuckDuckGo
//! - Translation: MyMemory, LibreTranslate
//! - Grammar: LanguageTool, Ginger, Textgears, Reverso, GrammarBot

pub mod explain;
pub mod grammar;
pub mod summarize;
pub mod translate;

use crate::config::Config;
use crate::error::{HelperError, HelperResult};
use crate::task::{TaskKind, TextTask};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

pub use explain::{DuckDuckGoExplainer, WikipediaExplainer};
pub use grammar::{GingerChecker, GrammarBotChecker, LanguageToolChecker, ReversoChecker, TextgearsChecker};
pub use summarize::{HuggingFaceSummarizer, MeaningCloudSummarizer};
pub use translate::{LibreTranslator, MyMemoryTranslator};

/// A remote endpoint that turns a task into text, or fails
#[async_trait]
pub trait TextService: Send + Sync {
    /// Display name, used in labels and logs
    fn name(&self) -> &str;

    /// Perform one request. Any error moves the chain to the next endpoint.
    async fn invoke(&self, task: &TextTask) -> HelperResult<String>;
}

/// Ordered endpoints for a task kind, highest priority first
pub fn endpoints_for(kind: TaskKind, config: &Config) -> Vec<Arc<dyn TextService>> {
    if config.offline {
        debug!("Offline mode, no remote endpoints for {}", kind);
        return Vec::new();
    }

    let client = Client::new();
    match kind {
        TaskKind::Summarize => vec![
            Arc::new(HuggingFaceSummarizer::new(client.clone(), config)) as Arc<dyn TextService>,
            Arc::new(MeaningCloudSummarizer::new(client, config)),
        ],
        TaskKind::Explain => vec![
            Arc::new(WikipediaExplainer::new(client.clone(), config)) as Arc<dyn TextService>,
            Arc::new(DuckDuckGoExplainer::new(client, config)),
        ],
        TaskKind::Translate => vec![
            Arc::new(MyMemoryTranslator::new(client.clone(), config)) as Arc<dyn TextService>,
            Arc::new(LibreTranslator::new(client, config)),
        ],
        TaskKind::Grammar => vec![
            Arc::new(LanguageToolChecker::new(client.clone(), config)) as Arc<dyn TextService>,
            Arc::new(GingerChecker::new(client.clone(), config)),
            Arc::new(TextgearsChecker::new(client.clone(), config)),
            Arc::new(ReversoChecker::new(client.clone(), config)),
            Arc::new(GrammarBotChecker::new(client, config)),
        ],
        TaskKind::EssayIdeas | TaskKind::EssayTitles | TaskKind::Mcq => Vec::new(),
    }
}

/// Reject non-2xx responses, then decode the body as `T`
pub(crate) async fn read_json<T: DeserializeOwned>(
    endpoint: &str,
    response: Response,
) -> HelperResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(HelperError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| HelperError::http(endpoint, e))?;
    debug!("{} raw body: {}", endpoint, body);

    serde_json::from_str(&body).map_err(|e| HelperError::payload(endpoint, e.to_string()))
}

/// Treat missing or blank text as a payload failure
pub(crate) fn non_empty(endpoint: &str, text: Option<String>) -> HelperResult<String> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t.trim().to_string()),
        _ => Err(HelperError::payload(endpoint, "empty result")),
    }
}

/// Keyed services fail fast without a network call when no key is set
pub(crate) fn require_key<'a>(endpoint: &str, key: &'a str) -> HelperResult<&'a str> {
    if key.trim().is_empty() {
        Err(HelperError::NotConfigured(endpoint.to_string()))
    } else {
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_priority_order() {
        let names: Vec<String> = endpoints_for(TaskKind::Grammar, &Config::default())
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["LanguageTool", "Ginger", "Textgears", "Reverso", "GrammarBot"]
        );
    }

    #[test]
    fn test_local_only_kinds() {
        let config = Config::default();
        assert!(endpoints_for(TaskKind::Mcq, &config).is_empty());
        assert!(endpoints_for(TaskKind::EssayIdeas, &config).is_empty());
        assert!(endpoints_for(TaskKind::EssayTitles, &config).is_empty());
        assert_eq!(endpoints_for(TaskKind::Translate, &config)[0].name(), "MyMemory");
    }

    #[test]
    fn test_offline_has_no_endpoints() {
        let config = Config {
            offline: true,
            ..Config::default()
        };
        for kind in TaskKind::ALL {
            assert!(endpoints_for(kind, &config).is_empty());
        }
    }

    #[test]
    fn test_non_empty() {
        assert!(non_empty("X", None).is_err());
        assert!(non_empty("X", Some("   ".into())).is_err());
        assert_eq!(non_empty("X", Some(" ok ".into())).unwrap(), "ok");
    }

    #[test]
    fn test_require_key() {
        assert!(matches!(
            require_key("Textgears", ""),
            Err(HelperError::NotConfigured(_))
        ));
        assert_eq!(require_key("Textgears", "k").unwrap(), "k");
    }
}
