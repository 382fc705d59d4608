/// Morphological engine — verb conjugation and noun declension.
///
/// Conjugation resolves override-before-synthesis: a stored finite form for
/// (stem, tense, subject) always wins; otherwise a tense suffix chosen by
/// the subject's agreement slot is attached to the stem, and as a last
/// resort the bare stem is returned. Every branch has a fallback, so
/// conjugation never fails.

use crate::core::lexicon::Lexicon;
use crate::schema::features::{
    Aspect, Case, Gender, Number, Person, Polarity, PronounFeatures, Tense,
};

/// The stem-final vowel stripped before suffixation.
const STEM_FINAL_U: char = 'ు';
/// Continuous-aspect participle marker.
const CONTINUOUS_PARTICIPLE: &str = "ుతూ";
/// Completed-aspect participle marker.
const COMPLETED_PARTICIPLE: &str = "ిన";
/// Particle appended after the affirmative form for generic negation.
const NEGATIVE_PARTICLE: &str = "కాదు";
/// Imperative suffix for a singular addressee.
const IMPERATIVE_SUFFIX: char = 'ు';
/// Imperative suffix for a plural or polite addressee.
const POLITE_IMPERATIVE_SUFFIX: &str = "ండి";
/// Auxiliary used when the subject has no entry in the auxiliary tables.
const DEFAULT_AUX: &str = "ఉంది";

/// Stems known to take person-marked negative suffixes instead of the
/// generic negative particle.
const PERSON_MARKED_NEGATIVE_STEMS: &[&str] = &["చేయు", "వెళ్ళు", "పో"];

/// All surface forms derived from one conjugation call. Several templates
/// need more than one of these at once, so they are computed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBundle {
    /// The finite (tensed, agreeing) form.
    pub finite: String,
    /// Negative counterpart; equals `finite` under positive polarity.
    pub negated: String,
    /// Aspect-marked participle.
    pub participle: String,
    /// Auxiliary for progressive constructions.
    pub progressive_aux: String,
    /// Auxiliary for perfect constructions.
    pub perfect_aux: String,
    /// Command form; defaults to `finite` for non-addressee subjects.
    pub imperative: String,
}

/// Agreement slot used to key the suffix tables. Gender disambiguates
/// third singular only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AgreementSlot {
    FirstSg,
    SecondSg,
    ThirdSgMasc,
    ThirdSgFem,
    FirstPl,
    SecondPl,
    ThirdPl,
}

fn agreement_slot(features: &PronounFeatures) -> AgreementSlot {
    match (features.person, features.number) {
        (Person::First, Number::Singular) => AgreementSlot::FirstSg,
        (Person::Second, Number::Singular) => AgreementSlot::SecondSg,
        (Person::Third, Number::Singular) => {
            if features.gender == Some(Gender::Feminine) {
                AgreementSlot::ThirdSgFem
            } else {
                AgreementSlot::ThirdSgMasc
            }
        }
        (Person::First, Number::Plural) => AgreementSlot::FirstPl,
        (Person::Second, Number::Plural) => AgreementSlot::SecondPl,
        (Person::Third, Number::Plural) => AgreementSlot::ThirdPl,
    }
}

/// Suffix table for the default "-ఉ" stem class. Past forms are usually
/// irregular and come from the override table; this is the generic fallback.
fn tense_suffix(tense: &Tense, slot: AgreementSlot) -> Option<&'static str> {
    match tense {
        Tense::Present | Tense::Future => Some(match slot {
            AgreementSlot::FirstSg => "తాను",
            AgreementSlot::SecondSg => "తావు",
            AgreementSlot::ThirdSgMasc => "తాడు",
            AgreementSlot::ThirdSgFem => "తుంది",
            AgreementSlot::FirstPl => "తాము",
            AgreementSlot::SecondPl => "తారు",
            AgreementSlot::ThirdPl => "తారు",
        }),
        Tense::Past => Some(match slot {
            AgreementSlot::FirstSg => "యాను",
            AgreementSlot::SecondSg => "యావు",
            AgreementSlot::ThirdSgMasc => "యాడు",
            AgreementSlot::ThirdSgFem => "యింది",
            AgreementSlot::FirstPl => "యాము",
            AgreementSlot::SecondPl => "యారు",
            AgreementSlot::ThirdPl => "యారు",
        }),
        Tense::Other(_) => None,
    }
}

/// Existential auxiliary for progressive constructions, by subject.
fn progressive_aux(subject: &str) -> &'static str {
    match subject {
        "నేను" => "ఉన్నాను",
        "నువ్వు" | "నీవు" => "ఉన్నావు",
        "అతను" => "ఉన్నాడు",
        "ఆమె" => "ఉంది",
        "ఆయన" | "ఆవిడ" | "మీరు" | "వారు" => "ఉన్నారు",
        "మేము" => "ఉన్నాము",
        _ => DEFAULT_AUX,
    }
}

/// Existential auxiliary placed after the participle in perfect
/// constructions, by subject.
fn perfect_aux(subject: &str) -> &'static str {
    match subject {
        "నేను" => "ఉన్నాను",
        "నువ్వు" | "నీవు" => "ఉన్నావు",
        "అతను" => "ఉన్నాడు",
        "ఆమె" => "ఉంది",
        "ఆయన" | "ఆవిడ" | "మీరు" | "వారు" => "ఉన్నారు",
        "మేము" => "ఉన్నాము",
        _ => DEFAULT_AUX,
    }
}

fn strip_final_u(stem: &str) -> &str {
    stem.strip_suffix(STEM_FINAL_U).unwrap_or(stem)
}

/// Morphological operations over a lexicon.
pub struct Morphology<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Morphology<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Conjugate a verb stem for the given features.
    ///
    /// The negated form is computed on every call and simply equals the
    /// finite form under positive polarity; callers select the field that
    /// matches their construction.
    pub fn conjugate(
        &self,
        stem: &str,
        tense: &Tense,
        subject: &str,
        aspect: &Aspect,
        polarity: Polarity,
    ) -> FormBundle {
        let features = self.lexicon.pronoun_features(subject);

        let finite = match self.lexicon.finite_override(stem, tense, subject) {
            Some(form) => form.to_string(),
            None => synthesize_finite(stem, tense, &features),
        };

        let participle = if aspect.is_continuous() {
            format!("{}{}", strip_final_u(stem), CONTINUOUS_PARTICIPLE)
        } else {
            format!("{}{}", strip_final_u(stem), COMPLETED_PARTICIPLE)
        };

        let negated = if polarity == Polarity::Negative {
            negate(stem, &features, &finite)
        } else {
            finite.clone()
        };

        let imperative = imperative(stem, &features).unwrap_or_else(|| finite.clone());

        FormBundle {
            finite,
            negated,
            participle,
            progressive_aux: progressive_aux(subject).to_string(),
            perfect_aux: perfect_aux(subject).to_string(),
            imperative,
        }
    }

    /// Decline a noun into a case/number surface form.
    ///
    /// Unknown nouns and unrecognized cases fall back to the input
    /// unchanged; an empty noun declines to an empty string.
    pub fn decline(&self, noun: &str, case: &Case, plural: bool) -> String {
        if noun.is_empty() {
            return String::new();
        }
        let paradigm = match self.lexicon.nouns.get(noun) {
            Some(paradigm) => paradigm,
            None => return noun.to_string(),
        };

        if plural {
            let head = paradigm.get("pl").map(String::as_str).unwrap_or(noun);
            return match case {
                Case::Accusative => format!("{}ను", head),
                Case::Dative => format!("{}కు", head),
                Case::Genitive => format!("{} యొక్క", head),
                Case::Locative => format!("{}లో", head),
                Case::Instrumental => format!("{}తో", head),
                _ => head.to_string(),
            };
        }

        paradigm
            .get(case.code())
            .cloned()
            .unwrap_or_else(|| noun.to_string())
    }
}

fn synthesize_finite(stem: &str, tense: &Tense, features: &PronounFeatures) -> String {
    match tense_suffix(tense, agreement_slot(features)) {
        Some(suffix) => format!("{}{}", strip_final_u(stem), suffix),
        None => stem.to_string(),
    }
}

/// Negative form: person-marked suffixes for the closed stem set,
/// the generic particle after the affirmative form otherwise.
fn negate(stem: &str, features: &PronounFeatures, finite: &str) -> String {
    if PERSON_MARKED_NEGATIVE_STEMS.contains(&stem) {
        let suffix = match (features.person, features.number) {
            (Person::First, Number::Singular) => "ను",
            (Person::Second, Number::Singular) => "వు",
            _ => "రు",
        };
        format!("{}{}", strip_final_u(stem), suffix)
    } else {
        format!("{} {}", finite, NEGATIVE_PARTICLE)
    }
}

/// Imperative for addressee subjects; `None` for everyone else.
fn imperative(stem: &str, features: &PronounFeatures) -> Option<String> {
    if features.person != Person::Second {
        return None;
    }
    match features.number {
        Number::Singular => {
            if stem.ends_with(IMPERATIVE_SUFFIX) {
                Some(stem.to_string())
            } else {
                Some(format!("{}{}", stem, IMPERATIVE_SUFFIX))
            }
        }
        Number::Plural => Some(format!("{}{}", strip_final_u(stem), POLITE_IMPERATIVE_SUFFIX)),
    }
}
