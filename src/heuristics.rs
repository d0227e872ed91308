//! Local Heuristic Generator
//!
//! The terminal tier of every fallback chain. Never fails: degenerate input
//! produces a user-facing message instead of an error.

use crate::core::random::{RandomSource, ThreadRandom};
use crate::core::{essay, explain, grammar, mcq, text, translate};
use crate::task::{TaskKind, TextTask};
use std::sync::Arc;
use tracing::debug;

pub const NO_SUMMARY_MESSAGE: &str =
    "Unable to generate summary. Please provide more substantial content.";

/// Produces a result for a task without any network access
pub trait HeuristicGenerator: Send + Sync {
    fn generate(&self, task: &TextTask) -> String;
}

/// Rule and template based generator for every task kind
#[derive(Clone)]
pub struct LocalGenerator {
    rng: Arc<dyn RandomSource>,
}

impl Default for LocalGenerator {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRandom))
    }
}

impl LocalGenerator {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Extractive summary, degrading to the lead sentences, then to a message
    pub fn summarize(&self, input: &str) -> String {
        let extractive = if text::word_frequency(input).is_empty() {
            debug!("No scorable words, skipping extractive summary");
            Err(crate::error::HelperError::EmptyInput)
        } else {
            text::extractive_summary(input)
        };

        match extractive.or_else(|e| {
            debug!("Extractive summary unavailable ({}), using lead sentences", e);
            text::lead_summary(input)
        }) {
            Ok(summary) => format!("<strong>Summary:</strong><br><br>{summary}"),
            Err(_) => NO_SUMMARY_MESSAGE.to_string(),
        }
    }

    pub fn essay_titles(&self, topic: &str) -> Vec<essay::EssayTitle> {
        essay::essay_titles(topic, self.rng.as_ref())
    }
}

impl HeuristicGenerator for LocalGenerator {
    fn generate(&self, task: &TextTask) -> String {
        let input = task.input.trim();
        let rng = self.rng.as_ref();
        match task.kind {
            TaskKind::Summarize => self.summarize(input),
            TaskKind::EssayIdeas => essay::essay_ideas(input, rng),
            TaskKind::EssayTitles => essay::render_titles(input, &self.essay_titles(input)),
            TaskKind::Explain => explain::explain_concept(input, rng),
            TaskKind::Mcq => {
                let questions = mcq::generate_mcqs(input, task.options.question_count, rng);
                mcq::render_mcqs(&questions)
            }
            TaskKind::Grammar => grammar::fix_grammar(input).to_html(),
            TaskKind::Translate => format!(
                "<strong>{}:</strong><br><br>{}",
                translate::translation_label(&task.options.target_lang),
                translate::unavailable_notice(&task.options.source_lang, &task.options.target_lang)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::SeededRandom;

    fn generator() -> LocalGenerator {
        LocalGenerator::new(Arc::new(SeededRandom::new(1)))
    }

    #[test]
    fn test_every_kind_produces_output() {
        let generator = generator();
        for kind in TaskKind::ALL {
            let task = TextTask::new(
                kind,
                "Water boils at one hundred degrees Celsius at sea level. \
                 Pressure changes the boiling point considerably.",
            );
            assert!(!generator.generate(&task).is_empty(), "{} was empty", kind);
        }
    }

    #[test]
    fn test_summary_falls_back_to_message() {
        let html = generator().summarize("Hi. Ok. No.");
        assert_eq!(html, NO_SUMMARY_MESSAGE);
    }

    #[test]
    fn test_summary_without_scorable_words_uses_lead() {
        // Every word is three chars or fewer, so nothing can be scored
        let html = generator().summarize("The cat sat on the mat all day. A dog ran to it and sat too.");
        assert!(html.contains("The cat sat on the mat all day."));
    }

    #[test]
    fn test_translate_fallback_is_labelled() {
        let task = TextTask::new(TaskKind::Translate, "hello").with_languages("ar", "en");
        let html = generator().generate(&task);
        assert!(html.starts_with("<strong>English Translation:</strong>"));
        assert!(html.contains("temporarily unavailable"));
    }

    #[test]
    fn test_grammar_no_issues() {
        let task = TextTask::new(TaskKind::Grammar, "This is correct.");
        assert!(generator().generate(&task).contains("No issues found"));
    }
}
