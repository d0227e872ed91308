//! Task Processor
//!
//! The boundary between a caller and the fallback chains. Validates input,
//! remembers the last task per kind for regeneration, runs the chain and
//! turns any failure into a message the user can read.

use crate::chain::FallbackChain;
use crate::config::Config;
use crate::error::{HelperError, HelperResult};
use crate::format::format_response;
use crate::heuristics::{HeuristicGenerator, LocalGenerator};
use crate::services::{endpoints_for, TextService};
use crate::task::{DisplayableError, TaskKind, TaskOutput, TextTask};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

pub const MAX_QUESTION_COUNT: usize = 10;

/// Check a task before any endpoint is tried. Lengths count trimmed chars.
pub fn validate(task: &TextTask) -> HelperResult<()> {
    fn reject(message: &str) -> HelperResult<()> {
        Err(HelperError::Validation(message.to_string()))
    }

    let len = task.input.trim().chars().count();

    match task.kind {
        TaskKind::Summarize if len < 100 => {
            reject("Please enter at least 100 characters of text to summarize.")
        }
        TaskKind::EssayIdeas | TaskKind::EssayTitles if len < 3 => {
            reject("Please enter a topic for your essay.")
        }
        TaskKind::Explain if len < 2 => reject("Please enter a concept or term to explain."),
        TaskKind::Translate if len < 1 => reject("Please enter text to translate."),
        TaskKind::Translate if task.options.source_lang == task.options.target_lang => {
            reject("Please select different source and target languages.")
        }
        TaskKind::Mcq if len < 50 => {
            reject("Please enter at least 50 characters of text to generate questions.")
        }
        TaskKind::Mcq
            if task.options.question_count < 1
                || task.options.question_count > MAX_QUESTION_COUNT =>
        {
            reject("Please select a number of questions between 1 and 10.")
        }
        TaskKind::Grammar if len < 1 => reject("Please enter some text to check."),
        _ => Ok(()),
    }
}

fn displayable(kind: TaskKind, err: HelperError) -> DisplayableError {
    if err.is_validation() {
        return DisplayableError::new(err.to_string());
    }
    warn!("❌ {} task failed: {}", kind, err);
    DisplayableError::new(format!(
        "An error occurred while {}. Please try again.",
        kind.action()
    ))
}

pub struct Processor {
    config: Config,
    local: Arc<dyn HeuristicGenerator>,
    /// Endpoint lists that replace the configured ones for a kind
    overrides: HashMap<TaskKind, Vec<Arc<dyn TextService>>>,
    last_submitted: Mutex<HashMap<TaskKind, TextTask>>,
}

impl Processor {
    pub fn new(config: Config) -> Self {
        Self::with_generator(config, Arc::new(LocalGenerator::default()))
    }

    pub fn with_generator(config: Config, local: Arc<dyn HeuristicGenerator>) -> Self {
        Self {
            config,
            local,
            overrides: HashMap::new(),
            last_submitted: Mutex::new(HashMap::new()),
        }
    }

    /// Use `endpoints` for `kind` instead of the services built from config
    pub fn with_endpoints(mut self, kind: TaskKind, endpoints: Vec<Arc<dyn TextService>>) -> Self {
        self.overrides.insert(kind, endpoints);
        self
    }

    fn chain_for(&self, kind: TaskKind) -> FallbackChain {
        let endpoints = match self.overrides.get(&kind) {
            Some(endpoints) => endpoints.clone(),
            None => endpoints_for(kind, &self.config),
        };
        FallbackChain::new(endpoints, self.local.clone(), self.config.request_timeout())
            .with_local_delay(self.config.simulated_delay())
    }

    /// Run one task. Yields exactly one output or one displayable error.
    pub async fn submit(&self, task: TextTask) -> Result<TaskOutput, DisplayableError> {
        let kind = task.kind;
        self.run(task).await.map_err(|e| displayable(kind, e))
    }

    /// Re-run the last task submitted for `kind`, if there was one
    pub async fn regenerate(&self, kind: TaskKind) -> Option<Result<TaskOutput, DisplayableError>> {
        let task = match self.last_submitted(kind) {
            Ok(task) => task?,
            Err(e) => return Some(Err(displayable(kind, e))),
        };
        debug!("🔁 Regenerating {} task", kind);
        Some(self.submit(task).await)
    }

    /// The task most recently submitted for `kind`
    pub fn last_submitted(&self, kind: TaskKind) -> HelperResult<Option<TextTask>> {
        let map = self.last_submitted.lock()?;
        Ok(map.get(&kind).cloned())
    }

    async fn run(&self, task: TextTask) -> HelperResult<TaskOutput> {
        validate(&task)?;
        self.remember(&task)?;

        info!("📝 Processing {} task", task.kind);
        let output = self.chain_for(task.kind).execute(&task).await;
        Ok(TaskOutput::new(format_response(&output.html)))
    }

    fn remember(&self, task: &TextTask) -> HelperResult<()> {
        let mut map = self.last_submitted.lock()?;
        map.insert(task.kind, task.clone());
        Ok(())
    }
}
