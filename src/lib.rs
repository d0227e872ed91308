//! Student Helper Library
//!
//! Text tools for students: summaries, essay ideas and titles, concept
//! explanations, translation, multiple-choice questions and grammar fixes.
//! Each tool tries remote services in order and falls back to local rules.

pub mod chain;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod heuristics;
pub mod processor;
pub mod services;
pub mod task;
