/// Grammatical feature categories.
///
/// Caller-facing parameters arrive as free-form strings; each category has a
/// `parse` that normalizes them at the boundary. Categories whose behavior
/// depends on a lookup miss carry an `Other` variant so unrecognized input
/// keeps its graceful-fallback meaning instead of being coerced onto a known
/// value.

use serde::{Deserialize, Serialize};

/// Grammatical tense of the finite verb.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Present,
    Past,
    Future,
    /// Unrecognized tense name; conjugation falls back to the bare stem.
    Other(String),
}

impl Tense {
    pub fn parse(input: &str) -> Tense {
        match input.trim().to_lowercase().as_str() {
            "present" => Tense::Present,
            "past" => Tense::Past,
            "future" => Tense::Future,
            other => Tense::Other(other.to_string()),
        }
    }

    /// The string key used to index the override table.
    pub fn key(&self) -> &str {
        match self {
            Tense::Present => "present",
            Tense::Past => "past",
            Tense::Future => "future",
            Tense::Other(name) => name,
        }
    }
}

/// Grammatical aspect, distinguishing simple / progressive / perfect
/// readings. `Imperfective` shares the continuous participle with
/// `Progressive` but does not force the progressive sentence branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    Simple,
    Progressive,
    Imperfective,
    Perfect,
    /// Unrecognized aspect name; treated like `Simple`.
    Other(String),
}

impl Aspect {
    pub fn parse(input: &str) -> Aspect {
        match input.trim().to_lowercase().as_str() {
            "simple" => Aspect::Simple,
            "progressive" => Aspect::Progressive,
            "imperfective" => Aspect::Imperfective,
            "perfect" => Aspect::Perfect,
            other => Aspect::Other(other.to_string()),
        }
    }

    /// True for aspects that take the continuous participle.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Aspect::Progressive | Aspect::Imperfective)
    }
}

/// Affirmative vs. negative framing. Anything other than "negative"
/// parses as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn parse(input: &str) -> Polarity {
        if input.trim().eq_ignore_ascii_case("negative") {
            Polarity::Negative
        } else {
            Polarity::Positive
        }
    }
}

/// Grammatical case of the object noun.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    Nominative,
    Accusative,
    Dative,
    Genitive,
    Locative,
    Instrumental,
    /// Unrecognized case name; declension returns the noun unchanged.
    Other(String),
}

impl Case {
    /// Accepts both full names ("accusative") and short codes ("acc").
    pub fn parse(input: &str) -> Case {
        match input.trim().to_lowercase().as_str() {
            "nominative" | "nom" => Case::Nominative,
            "accusative" | "acc" => Case::Accusative,
            "dative" | "dat" => Case::Dative,
            "genitive" | "gen" => Case::Genitive,
            "locative" | "loc" => Case::Locative,
            "instrumental" | "ins" => Case::Instrumental,
            other => Case::Other(other.to_string()),
        }
    }

    /// The short code used to index noun paradigms.
    pub fn code(&self) -> &str {
        match self {
            Case::Nominative => "nom",
            Case::Accusative => "acc",
            Case::Dative => "dat",
            Case::Genitive => "gen",
            Case::Locative => "loc",
            Case::Instrumental => "ins",
            Case::Other(name) => name,
        }
    }
}

/// Politeness level driving pronoun substitution before morphology.
/// Anything other than "formal" parses as informal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formality {
    Informal,
    Formal,
}

impl Formality {
    pub fn parse(input: &str) -> Formality {
        if input.trim().eq_ignore_ascii_case("formal") {
            Formality::Formal
        } else {
            Formality::Informal
        }
    }
}

/// Regional dialect applied as a post-render substitution pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    Standard,
    Hyderabad,
    Telangana,
    Coastal,
    Rayalaseema,
    /// Unrecognized dialect name; the pass is a no-op.
    Other(String),
}

impl Dialect {
    pub fn parse(input: &str) -> Dialect {
        match input.trim().to_lowercase().as_str() {
            "standard" => Dialect::Standard,
            "hyderabad" => Dialect::Hyderabad,
            "telangana" => Dialect::Telangana,
            "coastal" => Dialect::Coastal,
            "rayalaseema" => Dialect::Rayalaseema,
            other => Dialect::Other(other.to_string()),
        }
    }

    /// The string key used to index the dialect substitution tables.
    pub fn key(&self) -> &str {
        match self {
            Dialect::Standard => "standard",
            Dialect::Hyderabad => "hyderabad",
            Dialect::Telangana => "telangana",
            Dialect::Coastal => "coastal",
            Dialect::Rayalaseema => "rayalaseema",
            Dialect::Other(name) => name,
        }
    }
}

/// Written register. Anything other than "spoken" parses as formal,
/// which leaves the rendered sentence untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    Formal,
    Spoken,
}

impl Style {
    pub fn parse(input: &str) -> Style {
        if input.trim().eq_ignore_ascii_case("spoken") {
            Style::Spoken
        } else {
            Style::Formal
        }
    }
}

/// Requested sentence construction. Selection of the actual template also
/// weighs aspect and polarity; see the pipeline's branch resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentenceKind {
    Statement,
    Question,
    YesNoQuestion,
    Negation,
    Progressive,
    Perfect,
    Conditional,
    Relative,
    Imperative,
    /// Unrecognized kind; rendered as a plain statement.
    Other(String),
}

impl SentenceKind {
    pub fn parse(input: &str) -> SentenceKind {
        match input.trim().to_lowercase().as_str() {
            "statement" => SentenceKind::Statement,
            "question" => SentenceKind::Question,
            "yesno_question" => SentenceKind::YesNoQuestion,
            "negation" => SentenceKind::Negation,
            "progressive" => SentenceKind::Progressive,
            "perfect" => SentenceKind::Perfect,
            "conditional" => SentenceKind::Conditional,
            "relative" => SentenceKind::Relative,
            "imperative" => SentenceKind::Imperative,
            other => SentenceKind::Other(other.to_string()),
        }
    }

    /// True for constructions that end in a question mark.
    pub fn is_question(&self) -> bool {
        matches!(self, SentenceKind::Question | SentenceKind::YesNoQuestion)
    }
}

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    First,
    Second,
    Third,
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    Singular,
    Plural,
}

/// Grammatical gender, recorded only where it disambiguates agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Masculine,
    Feminine,
}

/// Coarse politeness bucket of a pronoun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HonorificBucket {
    Low,
    Base,
    High,
}

/// Feature bundle for a subject pronoun. Drives suffix synthesis when no
/// override form exists, and the advisory agreement check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronounFeatures {
    pub person: Person,
    pub number: Number,
    pub gender: Option<Gender>,
    pub honorific: HonorificBucket,
}

impl Default for PronounFeatures {
    /// The bucket assumed for subjects missing from the pronoun table:
    /// third person singular, base register.
    fn default() -> Self {
        Self {
            person: Person::Third,
            number: Number::Singular,
            gender: None,
            honorific: HonorificBucket::Base,
        }
    }
}

impl PronounFeatures {
    pub fn new(person: Person, number: Number) -> Self {
        Self {
            person,
            number,
            gender: None,
            honorific: HonorificBucket::Base,
        }
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn honorific(mut self, bucket: HonorificBucket) -> Self {
        self.honorific = bucket;
        self
    }
}
