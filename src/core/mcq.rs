//! Multiple-Choice Question Generator
//!
//! Builds one question per qualifying sentence around a randomly chosen key
//! word. Every question shares the same four generic options.

use super::random::{pick, RandomSource};
use super::text::split_sentences;

/// Sentences of this many chars or fewer cannot carry a question
pub const MCQ_MIN_SENTENCE_LEN: usize = 20;

/// Longest context excerpt shown with a question
const CONTEXT_LEN: usize = 80;

pub const MCQ_OPTIONS: [&str; 4] = [
    "It serves as the main subject of discussion",
    "It represents a supporting example or detail",
    "It indicates a cause or reason for something",
    "It shows a contrasting or opposing viewpoint",
];

pub const NO_QUESTIONS_MESSAGE: &str =
    "Unable to generate questions. Please provide more substantial content with complete sentences.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McqQuestion {
    pub key_word: String,
    pub question: String,
    pub context: String,
    pub options: [&'static str; 4],
}

fn excerpt(sentence: &str) -> String {
    if sentence.chars().count() > CONTEXT_LEN {
        let head: String = sentence.chars().take(CONTEXT_LEN).collect();
        format!("{head}...")
    } else {
        sentence.to_string()
    }
}

/// Up to `count` questions, one per qualifying sentence in reading order
pub fn generate_mcqs(text: &str, count: usize, rng: &dyn RandomSource) -> Vec<McqQuestion> {
    let sentences = split_sentences(text, MCQ_MIN_SENTENCE_LEN);

    sentences
        .iter()
        .take(count)
        .filter_map(|sentence| {
            let candidates: Vec<&str> = sentence
                .split(' ')
                .filter(|w| w.chars().count() > 3)
                .collect();
            let key_word = pick(rng, &candidates)?.to_string();
            Some(McqQuestion {
                question: format!(
                    "According to the text, what role does \"{key_word}\" play in the context?"
                ),
                context: excerpt(sentence),
                key_word,
                options: MCQ_OPTIONS,
            })
        })
        .collect()
}

pub fn render_mcqs(questions: &[McqQuestion]) -> String {
    if questions.is_empty() {
        return NO_QUESTIONS_MESSAGE.to_string();
    }

    let plural = if questions.len() > 1 { "s" } else { "" };
    let mut html = format!(
        "<div class=\"mcq-result-header\">Here are {} MCQ{} generated from your text:</div>",
        questions.len(),
        plural
    );
    for (i, q) in questions.iter().enumerate() {
        html.push_str(&format!(
            "<strong>Question {}:</strong> {}<br>",
            i + 1,
            q.question
        ));
        html.push_str(&format!(
            "<div class=\"mcq-context\">Context: \"{}\"</div>",
            q.context
        ));
        for (letter, option) in ('A'..='D').zip(q.options.iter()) {
            html.push_str(&format!("{letter}) {option}<br>"));
        }
        html.push_str("<br>");
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::ThreadRandom;

    const TWO_QUALIFYING: &str = "The mitochondria produces energy for the cell. \
        Short one. Ribosomes assemble proteins from amino acids! Tiny?";

    #[test]
    fn test_count_limited_by_qualifying_sentences() {
        let questions = generate_mcqs(TWO_QUALIFYING, 5, &ThreadRandom);
        assert_eq!(questions.len(), 2);

        let html = render_mcqs(&questions);
        assert_eq!(html.matches("<strong>Question ").count(), 2);
        for letter in ["A) ", "B) ", "C) ", "D) "] {
            assert_eq!(html.matches(letter).count(), 2, "option {}", letter);
        }
        assert!(html.contains("Here are 2 MCQs"));
    }

    #[test]
    fn test_count_limits_questions() {
        let questions = generate_mcqs(TWO_QUALIFYING, 1, &ThreadRandom);
        assert_eq!(questions.len(), 1);
        assert!(render_mcqs(&questions).contains("Here are 1 MCQ generated"));
    }

    #[test]
    fn test_key_word_comes_from_sentence() {
        for q in generate_mcqs(TWO_QUALIFYING, 5, &ThreadRandom) {
            assert!(q.key_word.chars().count() > 3);
            assert!(q.context.contains(&q.key_word));
            assert_eq!(q.options, MCQ_OPTIONS);
        }
    }

    #[test]
    fn test_long_context_is_truncated() {
        let long = format!("{} end.", "word ".repeat(30));
        let questions = generate_mcqs(&long, 1, &ThreadRandom);
        assert!(questions[0].context.ends_with("..."));
        assert_eq!(questions[0].context.chars().count(), CONTEXT_LEN + 3);
    }

    #[test]
    fn test_no_qualifying_sentences() {
        let questions = generate_mcqs("Too short. Nope!", 5, &ThreadRandom);
        assert!(questions.is_empty());
        assert_eq!(render_mcqs(&questions), NO_QUESTIONS_MESSAGE);
    }
}
