//! Fallback Chain
//!
//! Tries each remote endpoint for a task in priority order, one attempt each,
//! and falls back to the local heuristic generator when all of them fail.

use crate::core::grammar::no_issues_html;
use crate::core::translate::translation_label;
use crate::error::{HelperError, HelperResult};
use crate::heuristics::HeuristicGenerator;
use crate::services::TextService;
use crate::task::{TaskKind, TaskOutput, TextTask};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct FallbackChain {
    endpoints: Vec<Arc<dyn TextService>>,
    local: Arc<dyn HeuristicGenerator>,
    timeout: Duration,
    local_delay: Duration,
}

impl FallbackChain {
    pub fn new(
        endpoints: Vec<Arc<dyn TextService>>,
        local: Arc<dyn HeuristicGenerator>,
        timeout: Duration,
    ) -> Self {
        Self {
            endpoints,
            local,
            timeout,
            local_delay: Duration::ZERO,
        }
    }

    /// Pause this long before every local answer
    pub fn with_local_delay(mut self, delay: Duration) -> Self {
        self.local_delay = delay;
        self
    }

    /// Names of the remote endpoints, in the order they are tried
    pub fn endpoint_names(&self) -> Vec<String> {
        self.endpoints.iter().map(|e| e.name().to_string()).collect()
    }

    /// Run the task through the chain. Never fails: the local tier always answers.
    pub async fn execute(&self, task: &TextTask) -> TaskOutput {
        for endpoint in &self.endpoints {
            match self.attempt(endpoint.as_ref(), task).await {
                Ok(text) => {
                    info!("✅ {} answered {} task", endpoint.name(), task.kind);
                    return TaskOutput::new(render_remote(task, endpoint.name(), &text));
                }
                Err(HelperError::NotConfigured(name)) => {
                    debug!("⏭️ Skipping {} (no API key)", name);
                }
                Err(e) => {
                    warn!("⚠️ {} failed: {}", endpoint.name(), e);
                }
            }
        }

        info!("🏠 Using local generator for {} task", task.kind);
        if !self.local_delay.is_zero() {
            tokio::time::sleep(self.local_delay).await;
        }
        TaskOutput::new(self.local.generate(task))
    }

    async fn attempt(&self, endpoint: &dyn TextService, task: &TextTask) -> HelperResult<String> {
        debug!("🌐 Trying {} for {} task", endpoint.name(), task.kind);
        match tokio::time::timeout(self.timeout, endpoint.invoke(task)).await {
            Ok(result) => result,
            Err(_) => Err(HelperError::Timeout {
                endpoint: endpoint.name().to_string(),
                secs: self.timeout.as_secs(),
            }),
        }
    }
}

/// Label a remote result with its task and the service that produced it
pub fn render_remote(task: &TextTask, service: &str, text: &str) -> String {
    match task.kind {
        TaskKind::Summarize => {
            format!("<strong>AI-Generated Summary ({service}):</strong><br><br>{text}")
        }
        TaskKind::Explain => format!(
            "<strong>{} ({service}):</strong><br><br>{text}",
            task.input.trim()
        ),
        TaskKind::Translate => format!(
            "<strong>{} ({service}):</strong><br><br>{text}",
            translation_label(&task.options.target_lang)
        ),
        TaskKind::Grammar => {
            if text.trim() == task.input.trim() {
                no_issues_html()
            } else {
                format!(
                    "<strong>Grammar Check ({service}):</strong><br><br>\
                     <strong>Corrected Text:</strong><br>{}",
                    text.trim()
                )
            }
        }
        TaskKind::EssayIdeas | TaskKind::EssayTitles | TaskKind::Mcq => text.to_string(),
    }
}
