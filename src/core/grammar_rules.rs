//! Grammar Fixer Tables
//!
//! Static, ordered data for the local grammar fixer. No replacement may also
//! appear as a key, so a second pass over corrected text is a no-op.

/// A regex rewrite with the explanation shown to the user
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub reason: &'static str,
}

/// Whole-word, case-insensitive misspellings and missing apostrophes
pub const MISSPELLINGS: &[(&str, &str)] = &[
    // Contractions without apostrophes
    ("dont", "don't"),
    ("cant", "can't"),
    ("wont", "won't"),
    ("isnt", "isn't"),
    ("arent", "aren't"),
    ("wasnt", "wasn't"),
    ("werent", "weren't"),
    ("didnt", "didn't"),
    ("doesnt", "doesn't"),
    ("hasnt", "hasn't"),
    ("havent", "haven't"),
    ("hadnt", "hadn't"),
    ("couldnt", "couldn't"),
    ("shouldnt", "shouldn't"),
    ("wouldnt", "wouldn't"),
    ("im", "I'm"),
    ("ive", "I've"),
    ("youre", "you're"),
    ("theyre", "they're"),
    ("thats", "that's"),
    ("whats", "what's"),
    ("theres", "there's"),
    ("wheres", "where's"),
    ("shes", "she's"),
    // Run-together phrases
    ("alot", "a lot"),
    ("alittle", "a little"),
    ("aswell", "as well"),
    ("atleast", "at least"),
    ("eachother", "each other"),
    ("everytime", "every time"),
    ("incase", "in case"),
    ("infact", "in fact"),
    ("thankyou", "thank you"),
    // Common misspellings
    ("teh", "the"),
    ("wich", "which"),
    ("whith", "with"),
    ("woud", "would"),
    ("thier", "their"),
    ("thru", "through"),
    ("untill", "until"),
    ("becuase", "because"),
    ("becasue", "because"),
    ("beacuse", "because"),
    ("recieve", "receive"),
    ("recieved", "received"),
    ("beleive", "believe"),
    ("belive", "believe"),
    ("acheive", "achieve"),
    ("acheived", "achieved"),
    ("occured", "occurred"),
    ("occuring", "occurring"),
    ("occurence", "occurrence"),
    ("seperate", "separate"),
    ("seperately", "separately"),
    ("definately", "definitely"),
    ("definatly", "definitely"),
    ("goverment", "government"),
    ("enviroment", "environment"),
    ("enviromental", "environmental"),
    ("tommorow", "tomorrow"),
    ("tomorow", "tomorrow"),
    ("tommorrow", "tomorrow"),
    ("wierd", "weird"),
    ("freind", "friend"),
    ("freinds", "friends"),
    ("truely", "truly"),
    ("arguement", "argument"),
    ("begining", "beginning"),
    ("beggining", "beginning"),
    ("calender", "calendar"),
    ("comming", "coming"),
    ("commited", "committed"),
    ("concious", "conscious"),
    ("embarass", "embarrass"),
    ("existance", "existence"),
    ("foriegn", "foreign"),
    ("grammer", "grammar"),
    ("happend", "happened"),
    ("harrass", "harass"),
    ("independant", "independent"),
    ("knowlege", "knowledge"),
    ("libary", "library"),
    ("neccessary", "necessary"),
    ("necesary", "necessary"),
    ("noticable", "noticeable"),
    ("persue", "pursue"),
    ("posession", "possession"),
    ("prefered", "preferred"),
    ("publically", "publicly"),
    ("realy", "really"),
    ("reccomend", "recommend"),
    ("recomend", "recommend"),
    ("refered", "referred"),
    ("relevent", "relevant"),
    ("remeber", "remember"),
    ("rember", "remember"),
    ("responsability", "responsibility"),
    ("succesful", "successful"),
    ("successfull", "successful"),
    ("suprise", "surprise"),
    ("tounge", "tongue"),
    ("whereever", "wherever"),
    ("writting", "writing"),
    ("adress", "address"),
    ("accomodate", "accommodate"),
    ("acommodate", "accommodate"),
    ("agressive", "aggressive"),
    ("apparantly", "apparently"),
    ("basicly", "basically"),
    ("buisness", "business"),
    ("catagory", "category"),
    ("collegue", "colleague"),
    ("completly", "completely"),
    ("curiousity", "curiosity"),
    ("diffrent", "different"),
    ("dissapoint", "disappoint"),
    ("exagerate", "exaggerate"),
    ("excercise", "exercise"),
    ("experiance", "experience"),
    ("finaly", "finally"),
    ("fourty", "forty"),
    ("futher", "further"),
    ("gaurd", "guard"),
    ("guage", "gauge"),
    ("hieght", "height"),
    ("immediatly", "immediately"),
    ("intrest", "interest"),
    ("intresting", "interesting"),
    ("lenght", "length"),
    ("liason", "liaison"),
    ("mispell", "misspell"),
    ("naturaly", "naturally"),
    ("occassion", "occasion"),
    ("oppurtunity", "opportunity"),
    ("paralel", "parallel"),
    ("peice", "piece"),
    ("perminent", "permanent"),
    ("posible", "possible"),
    ("probly", "probably"),
    ("probaly", "probably"),
    ("pronounciation", "pronunciation"),
    ("questionaire", "questionnaire"),
    ("rythm", "rhythm"),
    ("sentance", "sentence"),
    ("similiar", "similar"),
    ("sincerly", "sincerely"),
    ("speach", "speech"),
    ("strenght", "strength"),
    ("studing", "studying"),
    ("togather", "together"),
    ("unfortunatly", "unfortunately"),
    ("usualy", "usually"),
    ("vaccuum", "vacuum"),
    ("yeild", "yield"),
];

/// Regex grammar rewrites, applied in order. Best-effort heuristics: narrow
/// patterns that can misfire on unusual phrasing.
pub const GRAMMAR_PATTERNS: &[PatternRule] = &[
    PatternRule {
        pattern: r"\b([Aa])\s+((?:[ai]\w{2,}|o[^n\W]\w+|on[^ce\W]\w*|one\w+|onc\w{2,}|e[^u\W]\w*|u[^nsr\W]\w*|un[^i\W]\w*))\b",
        replacement: "${1}n ${2}",
        reason: "Use \"an\" before a vowel sound",
    },
    PatternRule {
        pattern: r"\b([Aa])n\s+([bcdfgjklmnpqrstvwxyz]\w*)\b",
        replacement: "${1} ${2}",
        reason: "Use \"a\" before a consonant sound",
    },
    PatternRule {
        pattern: r"(?i)\b(could|should|would|might|must)\s+of\b",
        replacement: "${1} have",
        reason: "Use \"have\" after a modal verb, not \"of\"",
    },
    PatternRule {
        pattern: r"(?i)\b(don't|doesn't|didn't|do not|does not|did not)\s+(have|need|want|know|see|get)\s+no\b",
        replacement: "${1} ${2} any",
        reason: "Double negative",
    },
    PatternRule {
        pattern: r"(?i)\b(don't|doesn't|didn't|can't|won't)\s+(\w+)\s+nothing\b",
        replacement: "${1} ${2} anything",
        reason: "Double negative",
    },
    PatternRule {
        pattern: r"(?i)\b(don't|doesn't|didn't|can't|won't)\s+(\w+)\s+nobody\b",
        replacement: "${1} ${2} anybody",
        reason: "Double negative",
    },
    PatternRule {
        pattern: r"(?i)\b(don't|doesn't|didn't|can't|won't)\s+(\w+)\s+nowhere\b",
        replacement: "${1} ${2} anywhere",
        reason: "Double negative",
    },
    PatternRule {
        pattern: r"(?i)\b(he|she|it)\s+don't\b",
        replacement: "${1} doesn't",
        reason: "Subject-verb agreement (doesn't)",
    },
    PatternRule {
        pattern: r"(?i)\b(I|you|we|they)\s+doesn't\b",
        replacement: "${1} don't",
        reason: "Subject-verb agreement (don't)",
    },
    PatternRule {
        pattern: r"(?i)\b(they|we|you)\s+is\b",
        replacement: "${1} are",
        reason: "Subject-verb agreement (are)",
    },
    PatternRule {
        pattern: r"(?i)\b(he|she|it)\s+are\b",
        replacement: "${1} is",
        reason: "Subject-verb agreement (is)",
    },
    PatternRule {
        pattern: r"\b(I)\s+(?i:is|are)\b",
        replacement: "${1} am",
        reason: "Subject-verb agreement (am)",
    },
    PatternRule {
        pattern: r"(?i)\b(everyone|everybody|someone|somebody|nobody|each)\s+are\b",
        replacement: "${1} is",
        reason: "Indefinite pronouns take a singular verb",
    },
    PatternRule {
        pattern: r"(?i)\b(there)\s+is\s+(many|several|few|two|three|four|five)\b",
        replacement: "${1} are ${2}",
        reason: "Subject-verb agreement (are)",
    },
    PatternRule {
        pattern: r"(?i)\b(they|we|you)\s+was\b",
        replacement: "${1} were",
        reason: "Subject-verb agreement (were)",
    },
    PatternRule {
        pattern: r"(?i)\b(he|she|it)\s+were\b",
        replacement: "${1} was",
        reason: "Subject-verb agreement (was)",
    },
    PatternRule {
        pattern: r"(?i)\b(there)\s+was\s+(many|several|few|two|three|four|five)\b",
        replacement: "${1} were ${2}",
        reason: "Subject-verb agreement (were)",
    },
    PatternRule {
        pattern: r"(?i)\bmore\s+(better|worse|bigger|smaller|faster|slower|easier|harder|larger|greater)\b",
        replacement: "${1}",
        reason: "Redundant comparative",
    },
    PatternRule {
        pattern: r"(?i)\bmost\s+(best|worst|biggest|smallest|fastest|easiest|hardest|largest|greatest)\b",
        replacement: "${1}",
        reason: "Redundant superlative",
    },
    PatternRule {
        pattern: r"(?i)\b(where|what|how|why|when)\s+did\s+(he|she|it|they|we|you|I)\s+went\b",
        replacement: "${1} did ${2} go",
        reason: "Use the base verb after \"did\"",
    },
    PatternRule {
        pattern: r"(?i)\b(didn't|did not)\s+went\b",
        replacement: "${1} go",
        reason: "Use the base verb after \"did\"",
    },
    PatternRule {
        pattern: r"(?i)\b(these|those)\s+(kind|type|sort)\s+of\b",
        replacement: "${1} ${2}s of",
        reason: "Plural determiner needs a plural noun",
    },
    PatternRule {
        pattern: r"(?i)\bcould\s+care\s+less\b",
        replacement: "couldn't care less",
        reason: "Idiom is \"couldn't care less\"",
    },
    PatternRule {
        pattern: r"(?i)\birregardless\b",
        replacement: "regardless",
        reason: "Nonstandard word",
    },
    PatternRule {
        pattern: r"(?i)\bin\s+regards\s+to\b",
        replacement: "in regard to",
        reason: "Idiom is \"in regard to\"",
    },
    PatternRule {
        pattern: r"(?i)\b(the)\s+the\b",
        replacement: "${1}",
        reason: "Repeated word",
    },
    PatternRule {
        pattern: r"(?i)\b(is)\s+is\b",
        replacement: "${1}",
        reason: "Repeated word",
    },
    PatternRule {
        pattern: r"(?i)\b(to)\s+to\b",
        replacement: "${1}",
        reason: "Repeated word",
    },
    PatternRule {
        pattern: r"(?i)\b(and)\s+and\b",
        replacement: "${1}",
        reason: "Repeated word",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::collections::HashSet;

    #[test]
    fn test_tables_are_large_enough() {
        assert!(MISSPELLINGS.len() >= 120);
        assert!(GRAMMAR_PATTERNS.len() >= 25);
    }

    #[test]
    fn test_no_replacement_is_a_key() {
        let keys: HashSet<&str> = MISSPELLINGS.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), MISSPELLINGS.len(), "duplicate key");
        for (_, replacement) in MISSPELLINGS {
            for word in replacement.split(' ') {
                assert!(
                    !keys.contains(word.to_lowercase().as_str()),
                    "'{}' is both a key and a replacement",
                    word
                );
            }
        }
    }

    #[test]
    fn test_all_patterns_compile() {
        for rule in GRAMMAR_PATTERNS {
            assert!(Regex::new(rule.pattern).is_ok(), "bad pattern {}", rule.pattern);
        }
    }
}
