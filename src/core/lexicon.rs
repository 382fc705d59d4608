/// Lexical data store — seed tables, runtime extension, and RON loading.
///
/// Holds every lookup table the pipeline reads: verb override forms, noun
/// paradigms, pronoun features, honorific maps, dialect and spoken-register
/// substitutions, and the sentence templates. Generation borrows the store
/// immutably; extension merges take `&mut self`, so the borrow checker
/// rules out merging while a generation call is in flight.

use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::syntax::TemplateSet;
use crate::schema::features::{
    Dialect, Formality, Gender, HonorificBucket, Number, Person, PronounFeatures, Tense,
};

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Extension record for verbs: stem → tense → subject → finite form.
pub type VerbOverrideTable = FxHashMap<String, FxHashMap<String, FxHashMap<String, String>>>;

/// Extension record for nouns: noun → case code (or "pl") → surface form.
pub type NounTable = FxHashMap<String, FxHashMap<String, String>>;

/// The mutable lexical knowledge of the engine.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub verb_overrides: VerbOverrideTable,
    pub nouns: NounTable,
    pub pronouns: FxHashMap<String, PronounFeatures>,
    honorifics: HashMap<Formality, FxHashMap<String, String>>,
    pub dialects: FxHashMap<String, Vec<(String, String)>>,
    pub spoken: Vec<(String, String)>,
    pub templates: TemplateSet,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::seed()
    }
}

impl Lexicon {
    /// The embedded seed lexicon.
    pub fn seed() -> Lexicon {
        Lexicon {
            verb_overrides: seed_verb_overrides(),
            nouns: seed_nouns(),
            pronouns: seed_pronouns(),
            honorifics: seed_honorifics(),
            dialects: seed_dialects(),
            spoken: seed_spoken_conversions(),
            templates: TemplateSet::seed(),
        }
    }

    /// A fully precomputed finite form for (stem, tense, subject), if any.
    /// Overrides always win over suffix synthesis.
    pub fn finite_override(&self, stem: &str, tense: &Tense, subject: &str) -> Option<&str> {
        self.verb_overrides
            .get(stem)?
            .get(tense.key())?
            .get(subject)
            .map(String::as_str)
    }

    /// Feature bundle for a subject pronoun; unknown subjects get the
    /// third-singular default bucket.
    pub fn pronoun_features(&self, subject: &str) -> PronounFeatures {
        self.pronouns
            .get(subject)
            .copied()
            .unwrap_or_default()
    }

    /// Honorific-substituted pronoun for the given formality level.
    /// Unlisted pronouns pass through unchanged.
    pub fn honorific(&self, pronoun: &str, level: Formality) -> String {
        self.honorifics
            .get(&level)
            .and_then(|map| map.get(pronoun))
            .cloned()
            .unwrap_or_else(|| pronoun.to_string())
    }

    /// Ordered literal substitutions for a dialect; empty for unknown names.
    pub fn dialect_substitutions(&self, dialect: &Dialect) -> &[(String, String)] {
        self.dialects
            .get(dialect.key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Merge verb override records. New stems are added; an incoming tense
    /// block replaces the stored one wholesale, sibling tenses are kept.
    pub fn merge_verb_overrides(&mut self, data: VerbOverrideTable) {
        for (stem, tenses) in data {
            let entry = self.verb_overrides.entry(stem).or_default();
            for (tense, forms) in tenses {
                entry.insert(tense, forms);
            }
        }
    }

    /// Merge noun paradigm records. New nouns are added; incoming case
    /// forms overwrite stored ones, sibling case forms are kept.
    pub fn merge_nouns(&mut self, data: NounTable) {
        for (noun, forms) in data {
            let entry = self.nouns.entry(noun).or_default();
            for (case, form) in forms {
                entry.insert(case, form);
            }
        }
    }

    /// Parse and merge a verb extension record from a RON string.
    pub fn extend_verbs_from_ron(&mut self, input: &str) -> Result<(), LexiconError> {
        let data: VerbOverrideTable = ron::from_str(input)?;
        self.merge_verb_overrides(data);
        Ok(())
    }

    /// Load and merge a verb extension file.
    pub fn load_verbs_from_ron(&mut self, path: &Path) -> Result<(), LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        self.extend_verbs_from_ron(&contents)
    }

    /// Parse and merge a noun extension record from a RON string.
    pub fn extend_nouns_from_ron(&mut self, input: &str) -> Result<(), LexiconError> {
        let data: NounTable = ron::from_str(input)?;
        self.merge_nouns(data);
        Ok(())
    }

    /// Load and merge a noun extension file.
    pub fn load_nouns_from_ron(&mut self, path: &Path) -> Result<(), LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        self.extend_nouns_from_ron(&contents)
    }
}

fn rows(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn substitutions(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Seed override forms for irregular stems, fully specified per tense and
/// subject. Consulted before any suffix synthesis.
fn seed_verb_overrides() -> VerbOverrideTable {
    let mut table = VerbOverrideTable::default();

    let mut po = FxHashMap::default();
    po.insert(
        "present".to_string(),
        rows(&[
            ("నేను", "పోతాను"),
            ("నీవు", "పోతావు"),
            ("నువ్వు", "పోతావు"),
            ("అతను", "పోతాడు"),
            ("ఆమె", "పోతుంది"),
            ("ఇతను", "పోతాడు"),
            ("ఆయన", "పోతారు"),
            ("ఆవిడ", "పోతారు"),
            ("మేము", "పోతాము"),
            ("మనము", "పోతాము"),
            ("మీరు", "పోతారు"),
            ("వారు", "పోతారు"),
        ]),
    );
    po.insert(
        "past".to_string(),
        rows(&[
            ("నేను", "పోయాను"),
            ("నీవు", "పోయావు"),
            ("నువ్వు", "పోయావు"),
            ("అతను", "పోయాడు"),
            ("ఆమె", "పోయింది"),
            ("ఇతను", "పోయాడు"),
            ("ఆయన", "పోయారు"),
            ("ఆవిడ", "పోయారు"),
            ("మేము", "పోయాము"),
            ("మనము", "పోయాము"),
            ("మీరు", "పోయారు"),
            ("వారు", "పోయారు"),
        ]),
    );
    po.insert(
        "future".to_string(),
        rows(&[
            ("నేను", "పోతాను"),
            ("నీవు", "పోతావు"),
            ("నువ్వు", "పోతావు"),
            ("అతను", "పోతాడు"),
            ("ఆమె", "పోతుంది"),
            ("ఆయన", "పోతారు"),
            ("ఆవిడ", "పోతారు"),
            ("మేము", "పోతాము"),
            ("మీరు", "పోతారు"),
            ("వారు", "పోతారు"),
        ]),
    );
    table.insert("పో".to_string(), po);

    let mut chaduvu = FxHashMap::default();
    chaduvu.insert(
        "present".to_string(),
        rows(&[
            ("నేను", "చదువుతాను"),
            ("నీవు", "చదువుతావు"),
            ("నువ్వు", "చదువుతావు"),
            ("అతను", "చదువుతాడు"),
            ("ఆమె", "చదువుతుంది"),
            ("ఆయన", "చదువుతారు"),
            ("ఆవిడ", "చదువుతారు"),
            ("మేము", "చదువుతాము"),
            ("మీరు", "చదువుతారు"),
            ("వారు", "చదువుతారు"),
        ]),
    );
    chaduvu.insert(
        "past".to_string(),
        rows(&[
            ("నేను", "చదివాను"),
            ("నీవు", "చదివావు"),
            ("నువ్వు", "చదివావు"),
            ("అతను", "చదివాడు"),
            ("ఆమె", "చదివింది"),
            ("ఆయన", "చదివారు"),
            ("ఆవిడ", "చదివారు"),
            ("మేము", "చదివాము"),
            ("మీరు", "చదివారు"),
            ("వారు", "చదివారు"),
        ]),
    );
    chaduvu.insert(
        "future".to_string(),
        rows(&[
            ("నేను", "చదువుతాను"),
            ("నీవు", "చదువుతావు"),
            ("నువ్వు", "చదువుతావు"),
            ("అతను", "చదువుతాడు"),
            ("ఆమె", "చదువుతుంది"),
            ("ఆయన", "చదువుతారు"),
            ("ఆవిడ", "చదువుతారు"),
            ("మేము", "చదువుతాము"),
            ("మీరు", "చదువుతారు"),
            ("వారు", "చదువుతారు"),
        ]),
    );
    table.insert("చదువు".to_string(), chaduvu);

    let mut cheyu = FxHashMap::default();
    cheyu.insert(
        "present".to_string(),
        rows(&[
            ("నేను", "చేస్తాను"),
            ("నీవు", "చేస్తావు"),
            ("నువ్వు", "చేస్తావు"),
            ("అతను", "చేస్తాడు"),
            ("ఆమె", "చేస్తుంది"),
            ("ఆయన", "చేస్తారు"),
            ("ఆవిడ", "చేస్తారు"),
            ("మేము", "చేస్తాము"),
            ("మీరు", "చేస్తారు"),
            ("వారు", "చేస్తారు"),
        ]),
    );
    cheyu.insert(
        "past".to_string(),
        rows(&[
            ("నేను", "చేశాను"),
            ("నీవు", "చేశావు"),
            ("నువ్వు", "చేశావు"),
            ("అతను", "చేశాడు"),
            ("ఆమె", "చేసింది"),
            ("ఆయన", "చేశారు"),
            ("ఆవిడ", "చేశారు"),
            ("మేము", "చేశాము"),
            ("మీరు", "చేశారు"),
            ("వారు", "చేశారు"),
        ]),
    );
    cheyu.insert(
        "future".to_string(),
        rows(&[
            ("నేను", "చేస్తాను"),
            ("నీవు", "చేస్తావు"),
            ("నువ్వు", "చేస్తావు"),
            ("అతను", "చేస్తాడు"),
            ("ఆమె", "చేస్తుంది"),
            ("ఆయన", "చేస్తారు"),
            ("ఆవిడ", "చేస్తారు"),
            ("మేము", "చేస్తాము"),
            ("మీరు", "చేస్తారు"),
            ("వారు", "చేస్తారు"),
        ]),
    );
    table.insert("చేయు".to_string(), cheyu);

    table
}

/// Seed noun paradigms: per-case surface forms plus the plural head.
fn seed_nouns() -> NounTable {
    let mut table = NounTable::default();
    table.insert(
        "పుస్తకం".to_string(),
        rows(&[
            ("nom", "పుస్తకం"),
            ("acc", "పుస్తకాన్ని"),
            ("dat", "పుస్తకానికి"),
            ("gen", "పుస్తకం యొక్క"),
            ("loc", "పుస్తకంలో"),
            ("ins", "పుస్తకంతో"),
            ("pl", "పుస్తకాలు"),
        ]),
    );
    table.insert(
        "అబ్బాయి".to_string(),
        rows(&[
            ("nom", "అబ్బాయి"),
            ("acc", "అబ్బాయిని"),
            ("dat", "అబ్బాయికి"),
            ("gen", "అబ్బాయి యొక్క"),
            ("loc", "అబ్బాయిలో"),
            ("ins", "అబ్బాయితో"),
            ("pl", "అబ్బాయిలు"),
        ]),
    );
    table.insert(
        "అమ్మాయి".to_string(),
        rows(&[
            ("nom", "అమ్మాయి"),
            ("acc", "అమ్మాయిని"),
            ("dat", "అమ్మాయికి"),
            ("gen", "అమ్మాయి యొక్క"),
            ("loc", "అమ్మాయిలో"),
            ("ins", "అమ్మాయితో"),
            ("pl", "అమ్మాయిలు"),
        ]),
    );
    table.insert(
        "బడి".to_string(),
        rows(&[
            ("nom", "బడి"),
            ("acc", "బడిని"),
            ("dat", "బడికి"),
            ("gen", "బడి యొక్క"),
            ("loc", "బడిలో"),
            ("ins", "బడియితో"),
            ("pl", "బడులు"),
        ]),
    );
    table
}

fn seed_pronouns() -> FxHashMap<String, PronounFeatures> {
    let mut table = FxHashMap::default();
    table.insert(
        "నేను".to_string(),
        PronounFeatures::new(Person::First, Number::Singular),
    );
    table.insert(
        "నువ్వు".to_string(),
        PronounFeatures::new(Person::Second, Number::Singular).honorific(HonorificBucket::Low),
    );
    table.insert(
        "నీవు".to_string(),
        PronounFeatures::new(Person::Second, Number::Singular).honorific(HonorificBucket::Low),
    );
    table.insert(
        "మీరు".to_string(),
        PronounFeatures::new(Person::Second, Number::Plural).honorific(HonorificBucket::High),
    );
    table.insert(
        "అతను".to_string(),
        PronounFeatures::new(Person::Third, Number::Singular).gender(Gender::Masculine),
    );
    table.insert(
        "ఆమె".to_string(),
        PronounFeatures::new(Person::Third, Number::Singular).gender(Gender::Feminine),
    );
    table.insert(
        "ఆయన".to_string(),
        PronounFeatures::new(Person::Third, Number::Singular)
            .gender(Gender::Masculine)
            .honorific(HonorificBucket::High),
    );
    table.insert(
        "ఆవిడ".to_string(),
        PronounFeatures::new(Person::Third, Number::Singular)
            .gender(Gender::Feminine)
            .honorific(HonorificBucket::High),
    );
    table.insert(
        "మేము".to_string(),
        PronounFeatures::new(Person::First, Number::Plural),
    );
    table.insert(
        "వారు".to_string(),
        PronounFeatures::new(Person::Third, Number::Plural),
    );
    table
}

fn seed_honorifics() -> HashMap<Formality, FxHashMap<String, String>> {
    let mut table = HashMap::new();
    table.insert(
        Formality::Formal,
        rows(&[
            ("నేను", "నేను"),
            ("నీవు", "మీరు"),
            ("నువ్వు", "మీరు"),
            ("అతను", "ఆయన"),
            ("ఆమె", "ఆవిడ"),
            ("మీరు", "మీరు"),
            ("వారు", "వారు"),
        ]),
    );
    table.insert(
        Formality::Informal,
        rows(&[
            ("నేను", "నేను"),
            ("నీవు", "నువ్వు"),
            ("నువ్వు", "నువ్వు"),
            ("అతను", "అతను"),
            ("ఆమె", "ఆమె"),
            ("మీరు", "మీరు"),
            ("వారు", "వారు"),
        ]),
    );
    table
}

fn seed_dialects() -> FxHashMap<String, Vec<(String, String)>> {
    let mut table = FxHashMap::default();
    table.insert(
        "hyderabad".to_string(),
        substitutions(&[("పోతాను", "పోతన్నా"), ("పోతావు", "పోతవ్వా")]),
    );
    table.insert(
        "telangana".to_string(),
        substitutions(&[("లేడు", "లేదురా"), ("లేదు", "లేదోయ్")]),
    );
    table.insert("coastal".to_string(), Vec::new());
    table.insert("rayalaseema".to_string(), Vec::new());
    table
}

/// Formal verb endings and their spoken contractions, applied in order.
fn seed_spoken_conversions() -> Vec<(String, String)> {
    substitutions(&[
        ("వస్తున్నాను", "వస్తున్నా"),
        ("చేస్తున్నాను", "చేస్తున్నా"),
        ("పోతున్నాను", "పోతున్నా"),
        ("చదువుతాను", "చదువుతా"),
        ("పోతాను", "పోతా"),
        ("చేస్తాను", "చేస్తా"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_override_lookup() {
        let lex = Lexicon::seed();
        assert_eq!(
            lex.finite_override("చేయు", &Tense::Present, "నేను"),
            Some("చేస్తాను")
        );
        assert_eq!(
            lex.finite_override("పో", &Tense::Past, "ఆమె"),
            Some("పోయింది")
        );
        assert_eq!(lex.finite_override("తిను", &Tense::Present, "నేను"), None);
        assert_eq!(
            lex.finite_override("చేయు", &Tense::Other("aorist".into()), "నేను"),
            None
        );
    }

    #[test]
    fn pronoun_features_known_and_unknown() {
        let lex = Lexicon::seed();
        let meeru = lex.pronoun_features("మీరు");
        assert_eq!(meeru.person, Person::Second);
        assert_eq!(meeru.number, Number::Plural);
        assert_eq!(meeru.honorific, HonorificBucket::High);

        let unknown = lex.pronoun_features("రాము");
        assert_eq!(unknown, PronounFeatures::default());
    }

    #[test]
    fn honorific_remap() {
        let lex = Lexicon::seed();
        assert_eq!(lex.honorific("నీవు", Formality::Formal), "మీరు");
        assert_eq!(lex.honorific("అతను", Formality::Formal), "ఆయన");
        assert_eq!(lex.honorific("నీవు", Formality::Informal), "నువ్వు");
        // Unlisted pronouns pass through
        assert_eq!(lex.honorific("రాము", Formality::Formal), "రాము");
    }

    #[test]
    fn dialect_substitutions_lookup() {
        let lex = Lexicon::seed();
        assert!(!lex.dialect_substitutions(&Dialect::Hyderabad).is_empty());
        assert!(lex.dialect_substitutions(&Dialect::Coastal).is_empty());
        assert!(lex
            .dialect_substitutions(&Dialect::Other("mars".into()))
            .is_empty());
    }

    #[test]
    fn merge_verbs_replaces_tense_keeps_siblings() {
        let mut lex = Lexicon::seed();
        let mut incoming = VerbOverrideTable::default();
        let mut tenses = FxHashMap::default();
        tenses.insert("present".to_string(), rows(&[("నేను", "చేయుదును")]));
        incoming.insert("చేయు".to_string(), tenses);
        lex.merge_verb_overrides(incoming);

        // Incoming tense block replaced the stored one wholesale
        assert_eq!(
            lex.finite_override("చేయు", &Tense::Present, "నేను"),
            Some("చేయుదును")
        );
        assert_eq!(lex.finite_override("చేయు", &Tense::Present, "మీరు"), None);
        // Sibling tense untouched
        assert_eq!(
            lex.finite_override("చేయు", &Tense::Past, "నేను"),
            Some("చేశాను")
        );
    }

    #[test]
    fn merge_verbs_adds_new_stem() {
        let mut lex = Lexicon::seed();
        lex.extend_verbs_from_ron(
            r#"{
                "వెళ్ళు": {
                    "present": { "నేను": "వెళ్తాను" },
                },
            }"#,
        )
        .unwrap();
        assert_eq!(
            lex.finite_override("వెళ్ళు", &Tense::Present, "నేను"),
            Some("వెళ్తాను")
        );
    }

    #[test]
    fn merge_nouns_keeps_sibling_cases() {
        let mut lex = Lexicon::seed();
        lex.extend_nouns_from_ron(r#"{ "బడి": { "acc": "బడినే" } }"#).unwrap();
        let paradigm = lex.nouns.get("బడి").unwrap();
        assert_eq!(paradigm.get("acc").map(String::as_str), Some("బడినే"));
        assert_eq!(paradigm.get("dat").map(String::as_str), Some("బడికి"));
        assert_eq!(paradigm.get("pl").map(String::as_str), Some("బడులు"));
    }

    #[test]
    fn malformed_extension_is_an_error() {
        let mut lex = Lexicon::seed();
        let err = lex.extend_verbs_from_ron("{ not ron").unwrap_err();
        assert!(matches!(err, LexiconError::Ron(_)));
        // A malformed record applies nothing
        assert_eq!(
            lex.finite_override("చేయు", &Tense::Present, "నేను"),
            Some("చేస్తాను")
        );
    }
}
