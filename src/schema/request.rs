/// The input record for one generation call.

use serde::{Deserialize, Serialize};

use super::features::{
    Aspect, Case, Dialect, Formality, Polarity, SentenceKind, Style, Tense,
};

/// Everything the pipeline needs to produce one sentence.
///
/// Built with chained setters; unset parameters keep their defaults
/// (present tense, simple aspect, positive polarity, accusative case,
/// singular object, informal register, standard dialect, formal style,
/// statement construction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub verb: String,
    pub subject: String,
    pub noun: Option<String>,
    pub tense: Tense,
    pub aspect: Aspect,
    pub polarity: Polarity,
    pub case: Case,
    pub plural_object: bool,
    pub formality: Formality,
    pub dialect: Dialect,
    pub style: Style,
    pub template: SentenceKind,
    /// Head noun for relative constructions.
    pub head: Option<String>,
    /// Pre-built relative clause; a default is derived when absent.
    pub relclause: Option<String>,
    /// Pre-built conditional subclause; a default is derived when absent.
    pub subclause: Option<String>,
    /// Pre-built conditional main clause; a default is derived when absent.
    pub mainclause: Option<String>,
}

impl GenerationRequest {
    pub fn new(verb: &str, subject: &str) -> Self {
        Self {
            verb: verb.to_string(),
            subject: subject.to_string(),
            noun: None,
            tense: Tense::Present,
            aspect: Aspect::Simple,
            polarity: Polarity::Positive,
            case: Case::Accusative,
            plural_object: false,
            formality: Formality::Informal,
            dialect: Dialect::Standard,
            style: Style::Formal,
            template: SentenceKind::Statement,
            head: None,
            relclause: None,
            subclause: None,
            mainclause: None,
        }
    }

    pub fn noun(mut self, noun: &str) -> Self {
        self.noun = Some(noun.to_string());
        self
    }

    pub fn tense(mut self, tense: Tense) -> Self {
        self.tense = tense;
        self
    }

    pub fn aspect(mut self, aspect: Aspect) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    pub fn plural_object(mut self, plural: bool) -> Self {
        self.plural_object = plural;
        self
    }

    pub fn formality(mut self, formality: Formality) -> Self {
        self.formality = formality;
        self
    }

    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn template(mut self, template: SentenceKind) -> Self {
        self.template = template;
        self
    }

    pub fn head(mut self, head: &str) -> Self {
        self.head = Some(head.to_string());
        self
    }

    pub fn relclause(mut self, relclause: &str) -> Self {
        self.relclause = Some(relclause.to_string());
        self
    }

    pub fn subclause(mut self, subclause: &str) -> Self {
        self.subclause = Some(subclause.to_string());
        self
    }

    pub fn mainclause(mut self, mainclause: &str) -> Self {
        self.mainclause = Some(mainclause.to_string());
        self
    }
}
