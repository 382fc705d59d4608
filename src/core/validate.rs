/// Advisory validation — well-formedness and agreement heuristics.
///
/// Checks never block or alter output. They produce `Warning` records the
/// caller may surface or ignore.

use std::fmt;

use crate::core::lexicon::Lexicon;
use crate::schema::features::{HonorificBucket, Number, Person, PronounFeatures};

/// An advisory finding about a generated sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The sentence does not match the coarse well-formedness shape
    /// (Telugu-block text ending in terminal punctuation).
    Pattern { sentence: String },
    /// The finite verb ending looks inconsistent with the subject.
    Agreement { subject: String, sentence: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Pattern { sentence } => {
                write!(f, "pattern validation suspicious: {}", sentence)
            }
            Warning::Agreement { subject, sentence } => {
                write!(
                    f,
                    "subject-verb agreement suspicious: {} ↔ {}",
                    subject, sentence
                )
            }
        }
    }
}

/// Coarse shape check: one or more Telugu-block characters, spaces,
/// commas, or semicolons, ending in `.`, `?`, or `!`.
pub fn is_well_formed(sentence: &str) -> bool {
    let trimmed = sentence.trim();
    let mut chars = trimmed.chars();
    let last = match chars.next_back() {
        Some(c) => c,
        None => return false,
    };
    if !matches!(last, '.' | '?' | '!') {
        return false;
    }
    let mut seen_body = false;
    for c in chars {
        let telugu = ('\u{0C00}'..='\u{0C7F}').contains(&c);
        if !telugu && !c.is_whitespace() && c != ',' && c != ';' {
            return false;
        }
        seen_body = true;
    }
    seen_body
}

/// Heuristic subject–verb agreement. Plural-polite subjects expect a
/// plural-polite verb ending or the existential plural auxiliary;
/// first-singular subjects expect the first-singular ending; everything
/// else passes unconditionally.
pub fn agreement_ok(features: &PronounFeatures, sentence: &str) -> bool {
    let plural_polite = features.honorific == HonorificBucket::High
        || (features.person == Person::Third && features.number == Number::Plural);
    if plural_polite {
        return sentence.ends_with("రు")
            || sentence.ends_with("రు.")
            || sentence.contains("ఉన్నారు");
    }
    if features.person == Person::First && features.number == Number::Singular {
        return sentence.ends_with("ను") || sentence.ends_with("ను.");
    }
    true
}

/// Run all advisory checks against a finished sentence.
pub fn check(lexicon: &Lexicon, subject: &str, sentence: &str) -> Vec<Warning> {
    let mut warnings = Vec::new();
    if !is_well_formed(sentence) {
        warnings.push(Warning::Pattern {
            sentence: sentence.to_string(),
        });
    }
    let features = lexicon.pronoun_features(subject);
    if !agreement_ok(&features, sentence) {
        warnings.push(Warning::Agreement {
            subject: subject.to_string(),
            sentence: sentence.to_string(),
        });
    }
    warnings
}
