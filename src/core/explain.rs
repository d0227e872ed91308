//! Concept Explanation Templates

use super::random::RandomSource;

fn opening(variant: usize, concept: &str) -> String {
    match variant {
        0 => format!("<strong>{concept}</strong> is a fundamental concept that refers to..."),
        1 => format!(
            "Understanding <strong>{concept}</strong> requires examining its core components..."
        ),
        _ => format!(
            "<strong>{concept}</strong> can be best understood through its practical applications..."
        ),
    }
}

const OPENING_COUNT: usize = 3;

/// Random opening followed by the fixed explanation structure
pub fn explain_concept(concept: &str, rng: &dyn RandomSource) -> String {
    let variant = rng.next_index(OPENING_COUNT);
    format!(
        "{}<br><br>\
         <strong>Key Characteristics:</strong><br>\
         • Primary function and purpose<br>\
         • Relationship to related concepts<br>\
         • Common applications or examples<br><br>\
         <strong>Why it matters:</strong><br>\
         This concept is important because it helps us understand broader patterns and relationships in the subject area.",
        opening(variant, concept)
    )
}
