//! Grammar checking APIs
//!
//! LanguageTool and GrammarBot report matches as offsets into the submitted
//! text, counted in UTF-16 code units. Ginger reports inclusive ranges in
//! the same units. Textgears and Reverso return the corrected text directly.

use super::{non_empty, read_json, require_key, TextService};
use crate::config::Config;
use crate::error::{HelperError, HelperResult};
use crate::task::TextTask;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// One replacement over a UTF-16 span of the original text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub offset: usize,
    pub length: usize,
    pub replacement: String,
}

/// Apply edits right to left so earlier offsets stay valid.
/// Edits that overlap an already applied one are skipped. An edit reaching
/// past the end of the text means the response does not describe this text.
pub fn apply_edits(endpoint: &str, text: &str, mut edits: Vec<TextEdit>) -> HelperResult<String> {
    let mut units: Vec<u16> = text.encode_utf16().collect();
    edits.sort_by(|a, b| b.offset.cmp(&a.offset));

    let len = units.len();
    let mut floor = len;
    for edit in edits {
        let end = match edit.offset.checked_add(edit.length) {
            Some(end) if end <= len => end,
            _ => {
                return Err(HelperError::payload(
                    endpoint,
                    format!("edit at {} (+{}) is outside the text", edit.offset, edit.length),
                ))
            }
        };
        if end > floor {
            debug!("{} skipping overlapping edit at {}", endpoint, edit.offset);
            continue;
        }
        units.splice(edit.offset..end, edit.replacement.encode_utf16());
        floor = edit.offset;
    }

    String::from_utf16(&units).map_err(|e| HelperError::payload(endpoint, e.to_string()))
}

#[derive(Debug, Deserialize)]
struct Replacement {
    value: String,
}

#[derive(Debug, Deserialize)]
struct RuleMatch {
    offset: usize,
    length: usize,
    #[serde(default)]
    replacements: Vec<Replacement>,
}

#[derive(Debug, Deserialize)]
struct MatchesResponse {
    matches: Vec<RuleMatch>,
}

impl MatchesResponse {
    fn into_edits(self) -> Vec<TextEdit> {
        self.matches
            .into_iter()
            .filter_map(|m| {
                let replacement = m.replacements.into_iter().next()?.value;
                Some(TextEdit {
                    offset: m.offset,
                    length: m.length,
                    replacement,
                })
            })
            .collect()
    }
}

/// LanguageTool public API
pub struct LanguageToolChecker {
    client: Client,
    url: String,
}

impl LanguageToolChecker {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.languagetool_url.clone(),
        }
    }
}

#[async_trait]
impl TextService for LanguageToolChecker {
    fn name(&self) -> &str {
        "LanguageTool"
    }

    async fn invoke(&self, task: &TextTask) -> HelperResult<String> {
        let text = task.input.trim();
        let response = self
            .client
            .post(&self.url)
            .form(&[("text", text), ("language", "en-US")])
            .send()
            .await
            .map_err(|e| HelperError::http(self.name(), e))?;
        let body: MatchesResponse = read_json(self.name(), response).await?;
        debug!("LanguageTool reported {} matches", body.matches.len());

        let corrected = apply_edits(self.name(), text, body.into_edits())?;
        non_empty(self.name(), Some(corrected))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GingerSuggestion {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GingerCorrection {
    from: usize,
    to: usize,
    #[serde(default)]
    suggestions: Vec<GingerSuggestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GingerResponse {
    corrections: Vec<GingerCorrection>,
}

/// Ginger ranges are inclusive. Corrections without a suggestion are ignored.
fn ginger_edits(endpoint: &str, corrections: Vec<GingerCorrection>) -> HelperResult<Vec<TextEdit>> {
    let mut edits = Vec::new();
    for c in corrections {
        let Some(suggestion) = c.suggestions.into_iter().next() else {
            continue;
        };
        let length = c
            .to
            .checked_add(1)
            .and_then(|end| end.checked_sub(c.from))
            .ok_or_else(|| {
                HelperError::payload(endpoint, format!("bad range {}..={}", c.from, c.to))
            })?;
        edits.push(TextEdit {
            offset: c.from,
            length,
            replacement: suggestion.text,
        });
    }
    Ok(edits)
}

/// Ginger Software correction API
pub struct GingerChecker {
    client: Client,
    url: String,
    key: String,
}

impl GingerChecker {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.ginger_url.clone(),
            key: config.ginger_key.clone(),
        }
    }
}

#[async_trait]
impl TextService for GingerChecker {
    fn name(&self) -> &str {
        "Ginger"
    }

    async fn invoke(&self, task: &TextTask) -> HelperResult<String> {
        let key = require_key(self.name(), &self.key)?;
        let text = task.input.trim();
        let url = format!(
            "{}?lang=US&clientVersion=2.0&apiKey={}&text={}",
            self.url,
            urlencoding::encode(key),
            urlencoding::encode(text)
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HelperError::http(self.name(), e))?;
        let body: GingerResponse = read_json(self.name(), response).await?;

        let edits = ginger_edits(self.name(), body.corrections)?;

        let corrected = apply_edits(self.name(), text, edits)?;
        non_empty(self.name(), Some(corrected))
    }
}

#[derive(Debug, Deserialize)]
struct TextgearsBody {
    corrected: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TextgearsResponse {
    status: bool,
    response: Option<TextgearsBody>,
}

/// Textgears correction API
pub struct TextgearsChecker {
    client: Client,
    url: String,
    key: String,
}

impl TextgearsChecker {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.textgears_url.clone(),
            key: config.textgears_key.clone(),
        }
    }
}

#[async_trait]
impl TextService for TextgearsChecker {
    fn name(&self) -> &str {
        "Textgears"
    }

    async fn invoke(&self, task: &TextTask) -> HelperResult<String> {
        let key = require_key(self.name(), &self.key)?;
        let url = format!(
            "{}?text={}&language=en-US&key={}",
            self.url,
            urlencoding::encode(task.input.trim()),
            urlencoding::encode(key)
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HelperError::http(self.name(), e))?;
        let body: TextgearsResponse = read_json(self.name(), response).await?;

        if !body.status {
            return Err(HelperError::payload(self.name(), "status false"));
        }
        non_empty(self.name(), body.response.and_then(|r| r.corrected))
    }
}

#[derive(Debug, Deserialize)]
struct ReversoResponse {
    text: Option<String>,
}

/// Reverso spelling and grammar API
pub struct ReversoChecker {
    client: Client,
    url: String,
}

impl ReversoChecker {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.reverso_url.clone(),
        }
    }
}

#[async_trait]
impl TextService for ReversoChecker {
    fn name(&self) -> &str {
        "Reverso"
    }

    async fn invoke(&self, task: &TextTask) -> HelperResult<String> {
        let response = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({
                "text": task.input.trim(),
                "language": "eng",
                "autoReplace": true,
                "getCorrectionDetails": true,
                "interfaceLanguage": "en",
                "locale": "Indifferent",
                "origin": "interactive",
                "isHtml": false,
                "IsUserPremium": false
            }))
            .send()
            .await
            .map_err(|e| HelperError::http(self.name(), e))?;
        let body: ReversoResponse = read_json(self.name(), response).await?;

        non_empty(self.name(), body.text)
    }
}

/// GrammarBot API (LanguageTool-compatible matches)
pub struct GrammarBotChecker {
    client: Client,
    url: String,
    key: String,
}

impl GrammarBotChecker {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.grammarbot_url.clone(),
            key: config.grammarbot_key.clone(),
        }
    }
}

#[async_trait]
impl TextService for GrammarBotChecker {
    fn name(&self) -> &str {
        "GrammarBot"
    }

    async fn invoke(&self, task: &TextTask) -> HelperResult<String> {
        let key = require_key(self.name(), &self.key)?;
        let text = task.input.trim();
        let url = format!(
            "{}?api_key={}&language=en-US&text={}",
            self.url,
            urlencoding::encode(key),
            urlencoding::encode(text)
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HelperError::http(self.name(), e))?;
        let body: MatchesResponse = read_json(self.name(), response).await?;

        let corrected = apply_edits(self.name(), text, body.into_edits())?;
        non_empty(self.name(), Some(corrected))
    }
}
