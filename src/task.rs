//! Task Types
//!
//! What the UI hands to the core, and what it gets back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of text operation requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    Summarize,
    EssayIdeas,
    EssayTitles,
    Explain,
    Translate,
    Mcq,
    Grammar,
}

impl TaskKind {
    pub const ALL: [TaskKind; 7] = [
        TaskKind::Summarize,
        TaskKind::EssayIdeas,
        TaskKind::EssayTitles,
        TaskKind::Explain,
        TaskKind::Translate,
        TaskKind::Mcq,
        TaskKind::Grammar,
    ];

    /// Verb phrase used in "An error occurred while ..." messages
    pub fn action(&self) -> &'static str {
        match self {
            TaskKind::Summarize => "summarizing the text",
            TaskKind::EssayIdeas => "generating essay ideas",
            TaskKind::EssayTitles => "generating essay titles",
            TaskKind::Explain => "generating the explanation",
            TaskKind::Translate => "translating the text",
            TaskKind::Mcq => "generating questions",
            TaskKind::Grammar => "checking the grammar",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskKind::Summarize => "summarize",
            TaskKind::EssayIdeas => "essay-ideas",
            TaskKind::EssayTitles => "essay-titles",
            TaskKind::Explain => "explain",
            TaskKind::Translate => "translate",
            TaskKind::Mcq => "mcq",
            TaskKind::Grammar => "grammar",
        };
        f.write_str(name)
    }
}

/// Task-specific parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOptions {
    pub question_count: usize,
    pub source_lang: String,
    pub target_lang: String,
}

impl Default for TaskOptions {
    fn default() -> Self {
        Self {
            question_count: 5,
            source_lang: "en".to_string(),
            target_lang: "ar".to_string(),
        }
    }
}

/// A single user request. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTask {
    pub kind: TaskKind,
    pub input: String,
    pub options: TaskOptions,
}

impl TextTask {
    pub fn new(kind: TaskKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            options: TaskOptions::default(),
        }
    }

    pub fn with_question_count(mut self, count: usize) -> Self {
        self.options.question_count = count;
        self
    }

    pub fn with_languages(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.options.source_lang = source.into();
        self.options.target_lang = target.into();
        self
    }
}

/// The only externally visible output of a task: markup to render verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutput {
    pub html: String,
}

impl TaskOutput {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

/// A failure the UI can show to the user as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayableError {
    pub message: String,
}

impl DisplayableError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="result-content" style="color: var(--error-color);"><i class="fas fa-exclamation-circle"></i> {}</div>"#,
            self.message
        )
    }
}

impl fmt::Display for DisplayableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for DisplayableError {}
