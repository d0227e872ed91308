use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Chain behaviour
    pub request_timeout_secs: u64,
    pub simulated_delay_ms: u64,
    pub offline: bool,

    // Summarization
    pub huggingface_url: String,
    pub huggingface_token: String,
    pub meaningcloud_url: String,
    pub meaningcloud_key: String,

    // Explanation
    pub wikipedia_url: String,
    pub duckduckgo_url: String,

    // Translation
    pub mymemory_url: String,
    pub libretranslate_url: String,
    pub libretranslate_key: String,

    // Grammar
    pub languagetool_url: String,
    pub ginger_url: String,
    pub ginger_key: String,
    pub textgears_url: String,
    pub textgears_key: String,
    pub reverso_url: String,
    pub grammarbot_url: String,
    pub grammarbot_key: String,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout_secs: 5,
            simulated_delay_ms: 0,
            offline: false,
            huggingface_url:
                "https://api-inference.huggingface.co/models/facebook/bart-large-cnn".to_string(),
            huggingface_token: "".to_string(),
            meaningcloud_url: "https://api.meaningcloud.com/summarization-1.0".to_string(),
            meaningcloud_key: "".to_string(),
            wikipedia_url: "https://en.wikipedia.org/api/rest_v1/page/summary".to_string(),
            duckduckgo_url: "https://api.duckduckgo.com/".to_string(),
            mymemory_url: "https://api.mymemory.translated.net/get".to_string(),
            libretranslate_url: "https://libretranslate.com/translate".to_string(),
            libretranslate_key: "".to_string(),
            languagetool_url: "https://api.languagetool.org/v2/check".to_string(),
            ginger_url:
                "https://services.gingersoftware.com/Ginger/correct/jsonSecured/GingerTheTextFull"
                    .to_string(),
            ginger_key: "".to_string(),
            textgears_url: "https://api.textgears.com/correct".to_string(),
            textgears_key: "".to_string(),
            reverso_url: "https://orthographe.reverso.net/api/v1/Spelling/".to_string(),
            grammarbot_url: "https://api.grammarbot.io/v2/check".to_string(),
            grammarbot_key: "".to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, degrading to defaults when absent or corrupt
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Keep the broken file around for debugging
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Per-call bound applied to every remote endpoint
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("student-helper")
        .join("config.json")
}
