//! Local Grammar Fixer
//!
//! Rule-based correction used when every remote grammar service fails.
//! Passes run in a fixed order: dictionary, capitalization, spacing and
//! punctuation, pattern rewrites, terminal period.

use super::grammar_rules::{GRAMMAR_PATTERNS, MISSPELLINGS};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Upper bound on re-applying one rewrite to the same text
const MAX_REWRITE_PASSES: usize = 4;

lazy_static! {
    static ref DICTIONARY: Vec<(Regex, &'static str)> = MISSPELLINGS
        .iter()
        .map(|(wrong, right)| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(wrong)))
                .expect("valid dictionary regex");
            (re, *right)
        })
        .collect();
    static ref PATTERNS: Vec<(Regex, &'static str, &'static str)> = GRAMMAR_PATTERNS
        .iter()
        .map(|rule| {
            let re = Regex::new(rule.pattern).expect("valid grammar pattern");
            (re, rule.replacement, rule.reason)
        })
        .collect();
    static ref TEXT_START: Regex =
        Regex::new(r"^([^\p{L}\p{N}]*)(\p{Ll})").expect("valid start regex");
    // A trailing ".x" or a leading "x.y" marks an abbreviation such as "i.e."
    static ref LONE_I: Regex = Regex::new(r"\bi\b(\.\p{L})?").expect("valid pronoun regex");
    static ref AFTER_TERMINAL: Regex =
        Regex::new(r"((?:\b\p{L}\.)+\p{L})?([.!?]\s+)(\p{Ll})").expect("valid terminal regex");
    static ref MULTI_SPACE: Regex = Regex::new(r"[ \t]{2,}").expect("valid space regex");
    static ref SPACE_BEFORE_PUNCT: Regex =
        Regex::new(r"[ \t]+([,;:.!?])").expect("valid punctuation regex");
    static ref REPEATED_TERMINAL: Regex =
        Regex::new(r"([.!?])[.!?]+").expect("valid repeat regex");
    static ref MISSING_SPACE_CLAUSE: Regex =
        Regex::new(r"([,;:])(\p{L})").expect("valid clause regex");
    static ref MISSING_SPACE_SENTENCE: Regex =
        Regex::new(r"([.!?])(\p{Lu})").expect("valid sentence regex");
}

/// One change the fixer made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub original: String,
    pub replacement: String,
    pub reason: Option<String>,
}

/// Outcome of a grammar pass over some text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarReport {
    pub original: String,
    pub corrected: String,
    pub corrections: Vec<Correction>,
}

impl GrammarReport {
    pub fn has_changes(&self) -> bool {
        self.corrected != self.original
    }

    pub fn to_html(&self) -> String {
        if !self.has_changes() {
            return no_issues_html();
        }

        let mut html = format!(
            "<strong>Corrected Text:</strong><br><br>{}<br><br><strong>Corrections Made ({}):</strong><br>",
            self.corrected,
            self.corrections.len()
        );
        let lines: Vec<String> = self
            .corrections
            .iter()
            .map(|c| match &c.reason {
                Some(reason) => format!(
                    "• \"{}\" → \"{}\" <em>({})</em>",
                    c.original, c.replacement, reason
                ),
                None => format!("• \"{}\" → \"{}\"", c.original, c.replacement),
            })
            .collect();
        html.push_str(&lines.join("<br>"));
        html
    }
}

/// Message shown when the text needs no changes
pub fn no_issues_html() -> String {
    "<strong>Grammar Check:</strong><br><br>✅ No issues found! Your text looks good.".to_string()
}

/// Uppercase the replacement's first letter when the matched text started uppercase
fn match_case(matched: &str, replacement: &str) -> String {
    let starts_upper = matched.chars().next().is_some_and(char::is_uppercase);
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) if starts_upper && first.is_lowercase() => {
            first.to_uppercase().chain(chars).collect()
        }
        _ => replacement.to_string(),
    }
}

fn capitalize_second(caps: &Captures) -> String {
    format!("{}{}", &caps[1], caps[2].to_uppercase())
}

/// Accumulates text and the corrections applied to it
struct Fixer {
    text: String,
    corrections: Vec<Correction>,
}

impl Fixer {
    fn record(&mut self, original: String, replacement: String, reason: &str) {
        self.corrections.push(Correction {
            original,
            replacement,
            reason: Some(reason.to_string()),
        });
    }

    /// Replace all matches, keeping the case of each match's first letter
    fn rewrite(&mut self, re: &Regex, replacement: &str, reason: &str) {
        let mut first_change: Option<(String, String)> = None;
        for _ in 0..MAX_REWRITE_PASSES {
            let mut changed = None;
            let out = re.replace_all(&self.text, |caps: &Captures| {
                let matched = &caps[0];
                let mut expanded = String::new();
                caps.expand(replacement, &mut expanded);
                let fixed = match_case(matched, &expanded);
                if changed.is_none() && fixed != matched {
                    changed = Some((matched.to_string(), fixed.clone()));
                }
                fixed
            });
            if changed.is_none() {
                break;
            }
            self.text = out.into_owned();
            if first_change.is_none() {
                first_change = changed;
            }
        }
        if let Some((original, replacement)) = first_change {
            self.record(original, replacement, reason);
        }
    }

    /// Apply a closure-based rule once
    fn transform<F>(&mut self, re: &Regex, reason: &str, f: F)
    where
        F: Fn(&Captures) -> String,
    {
        let Some((original, replacement)) = re
            .captures_iter(&self.text)
            .map(|caps| (caps[0].to_string(), f(&caps)))
            .find(|(original, replacement)| original != replacement)
        else {
            return;
        };
        let out = re.replace_all(&self.text, |caps: &Captures| f(caps)).into_owned();
        if out != self.text {
            self.text = out;
            self.record(original, replacement, reason);
        }
    }

    fn dictionary(&mut self) {
        for (re, right) in DICTIONARY.iter() {
            self.rewrite(re, right, "Spelling");
        }
    }

    fn capitalization(&mut self) {
        self.transform(&TEXT_START, "Capitalize the first word", capitalize_second);
        self.transform(&LONE_I, "Capitalize \"I\"", |caps| match caps.get(1) {
            Some(_) => caps[0].to_string(),
            None => "I".to_string(),
        });
        self.transform(
            &AFTER_TERMINAL,
            "Capitalize the start of a sentence",
            |caps| match caps.get(1) {
                Some(_) => caps[0].to_string(),
                None => format!("{}{}", &caps[2], caps[3].to_uppercase()),
            },
        );
    }

    fn spacing(&mut self) {
        self.transform(&MULTI_SPACE, "Extra spaces", |_| " ".to_string());
        self.transform(&SPACE_BEFORE_PUNCT, "No space before punctuation", |caps| {
            caps[1].to_string()
        });
        self.transform(&REPEATED_TERMINAL, "Repeated punctuation", |caps| {
            caps[1].to_string()
        });
        self.transform(&MISSING_SPACE_CLAUSE, "Space after punctuation", |caps| {
            format!("{} {}", &caps[1], &caps[2])
        });
        self.transform(&MISSING_SPACE_SENTENCE, "Space after punctuation", |caps| {
            format!("{} {}", &caps[1], &caps[2])
        });
    }

    fn patterns(&mut self) {
        for (re, replacement, reason) in PATTERNS.iter() {
            self.rewrite(re, replacement, reason);
        }
    }

    fn terminal_period(&mut self) {
        if self.text.ends_with(&['.', '!', '?'][..]) {
            return;
        }
        let original = last_word(&self.text);
        let kept = self.text.trim_end_matches(&[',', ';', ':'][..]).len();
        self.text.truncate(kept);
        self.text.push('.');
        let replacement = last_word(&self.text);
        self.record(original, replacement, "End the sentence with punctuation");
    }
}

fn last_word(text: &str) -> String {
    text.split_whitespace()
        .last()
        .unwrap_or_default()
        .to_string()
}

/// Run every local pass over `text`
pub fn fix_grammar(text: &str) -> GrammarReport {
    let original = text.trim().to_string();
    let mut fixer = Fixer {
        text: original.clone(),
        corrections: Vec::new(),
    };

    if !original.is_empty() {
        fixer.dictionary();
        fixer.capitalization();
        fixer.spacing();
        fixer.patterns();
        fixer.terminal_period();
    }

    GrammarReport {
        original,
        corrected: fixer.text,
        corrections: fixer.corrections,
    }
}
