//! Sentence Splitting & Scoring
//!
//! Punctuation-based sentence splitting and word-frequency scoring used by
//! extractive summarization and MCQ generation.

use crate::error::{HelperError, HelperResult};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Fragments of this many chars or fewer are not summary candidates
pub const SUMMARY_MIN_SENTENCE_LEN: usize = 10;

/// Most sentences an extractive summary will keep
pub const MAX_SUMMARY_SENTENCES: usize = 3;

/// Boost applied to the first two sentences
const LEAD_BOOST: f64 = 1.5;

lazy_static! {
    static ref TERMINAL_RUN: Regex = Regex::new(r"[.!?]+").expect("valid terminal regex");
    static ref WORD: Regex = Regex::new(r"[\p{L}\p{N}]+").expect("valid word regex");
}

/// A candidate sentence with its relevance score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub text: String,
    pub score: f64,
    pub original_index: usize,
}

/// Split on runs of `.`, `!`, `?`, keeping trimmed pieces longer than `min_len` chars
pub fn split_sentences(text: &str, min_len: usize) -> Vec<String> {
    TERMINAL_RUN
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() > min_len)
        .map(str::to_string)
        .collect()
}

/// Lowercased alphanumeric tokens
pub fn words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count occurrences of words longer than 3 chars
pub fn word_frequency(text: &str) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    for word in words(text) {
        if word.chars().count() > 3 {
            *freq.entry(word).or_insert(0) += 1;
        }
    }
    freq
}

/// Sum of contained-word frequencies, boosted for the two lead sentences
pub fn score_sentence(sentence: &str, freq: &HashMap<String, usize>, index: usize) -> f64 {
    let base: usize = words(sentence)
        .iter()
        .map(|w| freq.get(w).copied().unwrap_or(0))
        .sum();
    let score = base as f64;
    if index < 2 {
        score * LEAD_BOOST
    } else {
        score
    }
}

fn summary_len(sentence_count: usize) -> usize {
    MAX_SUMMARY_SENTENCES.min(sentence_count.div_ceil(3))
}

fn join_sentences<'a>(sentences: impl Iterator<Item = &'a str>) -> String {
    let mut out = sentences.collect::<Vec<_>>().join(". ");
    out.push('.');
    out
}

/// Pick the highest-scoring sentences and return them in reading order
pub fn extractive_summary(text: &str) -> HelperResult<String> {
    let sentences = split_sentences(text, SUMMARY_MIN_SENTENCE_LEN);
    if sentences.is_empty() {
        return Err(HelperError::EmptyInput);
    }

    let freq = word_frequency(text);
    let mut scored: Vec<ScoredSentence> = sentences
        .into_iter()
        .enumerate()
        .map(|(i, s)| ScoredSentence {
            score: score_sentence(&s, &freq, i),
            text: s,
            original_index: i,
        })
        .collect();

    let take = summary_len(scored.len());
    // Stable sort: ties keep reading order
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut selected: Vec<ScoredSentence> = scored.into_iter().take(take).collect();
    selected.sort_by_key(|s| s.original_index);

    Ok(join_sentences(selected.iter().map(|s| s.text.as_str())))
}

/// First `min(3, ceil(n/3))` sentences, no scoring
pub fn lead_summary(text: &str) -> HelperResult<String> {
    let sentences = split_sentences(text, SUMMARY_MIN_SENTENCE_LEN);
    if sentences.is_empty() {
        return Err(HelperError::EmptyInput);
    }
    let take = summary_len(sentences.len());
    Ok(join_sentences(sentences.iter().take(take).map(String::as_str)))
}
