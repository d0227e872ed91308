//! Core text processing
//!
//! Pure, offline text transforms: sentence scoring, template generators and
//! the rule-based grammar fixer. Nothing here touches the network.

pub mod essay;
pub mod explain;
pub mod grammar;
pub mod grammar_rules;
pub mod mcq;
pub mod random;
pub mod text;
pub mod translate;
