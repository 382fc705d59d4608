/// The generation pipeline: request → sentence orchestration.
///
/// Wires together honorific remapping, morphology, template selection and
/// filling, sandhi joining, register passes, punctuation enforcement, and
/// advisory validation. One linear pass per call; pure apart from reading
/// the lexicon.

use std::collections::HashMap;
use thiserror::Error;

use crate::core::lexicon::{Lexicon, LexiconError};
use crate::core::morphology::{FormBundle, Morphology};
use crate::core::sandhi;
use crate::core::style::{apply_dialect, apply_honorific, apply_style};
use crate::core::syntax::SyntaxError;
use crate::core::validate::{self, Warning};
use crate::schema::features::{Aspect, Polarity, SentenceKind};
use crate::schema::request::GenerationRequest;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
}

/// A generated sentence together with its advisory findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub sentence: String,
    pub warnings: Vec<Warning>,
}

/// Sentence characters accepted as already-terminal punctuation.
const TERMINALS: &[char] = &['.', '!', '?', '।'];

/// The template actually rendered for a request, after weighing the
/// requested construction against aspect and polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateBranch {
    Statement,
    YesNo,
    Negative,
    Progressive,
    Perfect,
    Conditional,
    Relative,
    Imperative,
}

impl TemplateBranch {
    /// Resolve the branch for a request. First match wins; the order is
    /// load-bearing: an explicit negation request (or negative polarity on
    /// a plain statement) outranks aspect, aspect outranks the literal
    /// construction name, and unmatched names fall back to a statement.
    fn select(kind: &SentenceKind, aspect: &Aspect, polarity: Polarity) -> TemplateBranch {
        if *kind == SentenceKind::Negation
            || (polarity == Polarity::Negative && *kind == SentenceKind::Statement)
        {
            return TemplateBranch::Negative;
        }
        if *kind == SentenceKind::Progressive || *aspect == Aspect::Progressive {
            return TemplateBranch::Progressive;
        }
        if *kind == SentenceKind::Perfect || *aspect == Aspect::Perfect {
            return TemplateBranch::Perfect;
        }
        match kind {
            SentenceKind::Statement => TemplateBranch::Statement,
            SentenceKind::Question | SentenceKind::YesNoQuestion => TemplateBranch::YesNo,
            SentenceKind::Conditional => TemplateBranch::Conditional,
            SentenceKind::Relative => TemplateBranch::Relative,
            SentenceKind::Imperative => TemplateBranch::Imperative,
            _ => TemplateBranch::Statement,
        }
    }

    fn template_name(self) -> &'static str {
        match self {
            TemplateBranch::Statement => "statement",
            TemplateBranch::YesNo => "yesno_question",
            TemplateBranch::Negative => "neg_statement",
            TemplateBranch::Progressive => "progressive",
            TemplateBranch::Perfect => "perfect",
            TemplateBranch::Conditional => "conditional",
            TemplateBranch::Relative => "relative",
            TemplateBranch::Imperative => "imperative",
        }
    }
}

/// Default head noun for relative constructions with no caller-supplied head.
const DEFAULT_RELATIVE_HEAD: &str = "అబ్బాయి";
/// Completed-action verb used in the derived default relative clause.
const DEFAULT_RELATIVE_VERB: &str = "చదివిన";
/// Conditional marker appended to the finite form in derived subclauses.
const CONDITIONAL_MARKER: &str = "యితే";

/// The rule-based sentence generator.
///
/// Owns the lexical tables. Generation borrows the engine immutably, so
/// extension merges (which need `&mut`) cannot race in-flight calls.
pub struct TeluguEngine {
    lexicon: Lexicon,
}

impl Default for TeluguEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TeluguEngine {
    /// An engine over the embedded seed lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::seed(),
        }
    }

    /// An engine over a caller-prepared lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Mutable access for extension merges. Serialize these against
    /// generation calls; the borrow checker enforces it within one owner.
    pub fn lexicon_mut(&mut self) -> &mut Lexicon {
        &mut self.lexicon
    }

    /// Generate a sentence, discarding advisory warnings.
    pub fn generate(&self, request: &GenerationRequest) -> Result<String, EngineError> {
        Ok(self.generate_checked(request)?.sentence)
    }

    /// Generate a sentence together with any advisory warnings.
    pub fn generate_checked(
        &self,
        request: &GenerationRequest,
    ) -> Result<Generated, EngineError> {
        // 1. Honorific remap decides the subject key for everything below.
        let subject = apply_honorific(&self.lexicon, &request.subject, request.formality);

        // 2. Morphology: verb form bundle and declined object.
        let morph = Morphology::new(&self.lexicon);
        let forms = morph.conjugate(
            &request.verb,
            &request.tense,
            &subject,
            &request.aspect,
            request.polarity,
        );
        let object = match request.noun.as_deref() {
            Some(noun) => morph.decline(noun, &request.case, request.plural_object),
            None => String::new(),
        };

        // 3. Template selection and slot filling.
        let branch = TemplateBranch::select(&request.template, &request.aspect, request.polarity);
        let slots = fill_slots(branch, request, &subject, &object, &forms);
        let rendered = self
            .lexicon
            .templates
            .apply(branch.template_name(), &slots)?;

        // 4. Sandhi across the rendered tokens.
        let tokens: Vec<&str> = rendered.split_whitespace().collect();
        let joined = sandhi::join_sequence(&tokens);

        // 5. Register passes: spoken contractions, then dialect coloring.
        let styled = apply_style(&self.lexicon, &joined, request.style);
        let colored = apply_dialect(&self.lexicon, &styled, &request.dialect);

        // 6. Terminal punctuation, then advisory validation.
        let sentence = enforce_punctuation(colored, &request.template);
        let warnings = validate::check(&self.lexicon, &subject, &sentence);

        Ok(Generated { sentence, warnings })
    }
}

fn fill_slots(
    branch: TemplateBranch,
    request: &GenerationRequest,
    subject: &str,
    object: &str,
    forms: &FormBundle,
) -> HashMap<&'static str, String> {
    let mut slots: HashMap<&'static str, String> = HashMap::new();
    match branch {
        TemplateBranch::Statement => {
            slots.insert("subject", subject.to_string());
            slots.insert("object", object.to_string());
            slots.insert("verb", forms.finite.clone());
        }
        TemplateBranch::YesNo => {
            slots.insert("verb", forms.finite.clone());
            slots.insert("subject", subject.to_string());
            slots.insert("object", object.to_string());
        }
        TemplateBranch::Negative => {
            slots.insert("subject", subject.to_string());
            slots.insert("object", object.to_string());
            slots.insert("verb_neg", forms.negated.clone());
        }
        TemplateBranch::Progressive => {
            slots.insert("subject", subject.to_string());
            slots.insert("object", object.to_string());
            slots.insert("aux_progressive", forms.progressive_aux.clone());
            slots.insert("verb_participle", forms.participle.clone());
        }
        TemplateBranch::Perfect => {
            slots.insert("subject", subject.to_string());
            slots.insert("object", object.to_string());
            slots.insert("aux_perfect", forms.perfect_aux.clone());
            slots.insert("verb_participle", forms.participle.clone());
        }
        TemplateBranch::Conditional => {
            let subclause = request.subclause.clone().unwrap_or_else(|| {
                format!(
                    "{} {} {}{}",
                    subject, object, forms.finite, CONDITIONAL_MARKER
                )
            });
            let mainclause = request
                .mainclause
                .clone()
                .unwrap_or_else(|| format!("{} {}", subject, forms.finite));
            slots.insert("subclause", subclause);
            slots.insert("mainclause", mainclause);
        }
        TemplateBranch::Relative => {
            let relclause = request
                .relclause
                .clone()
                .unwrap_or_else(|| format!("{} {}", object, DEFAULT_RELATIVE_VERB));
            let head = request
                .head
                .clone()
                .unwrap_or_else(|| DEFAULT_RELATIVE_HEAD.to_string());
            slots.insert("relclause", relclause);
            slots.insert("head", head);
            slots.insert("verb", forms.finite.clone());
        }
        TemplateBranch::Imperative => {
            slots.insert("object", object.to_string());
            slots.insert("verb_imp", forms.imperative.clone());
        }
    }
    slots
}

/// Append the terminal mark the construction calls for, unless the
/// sentence already ends in one.
fn enforce_punctuation(mut sentence: String, kind: &SentenceKind) -> String {
    if sentence.ends_with(TERMINALS) {
        return sentence;
    }
    let mark = if kind.is_question() {
        '?'
    } else if *kind == SentenceKind::Imperative {
        '!'
    } else {
        '.'
    };
    sentence.push(mark);
    sentence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::features::{Case, Dialect, Formality, Style, Tense};

    #[test]
    fn branch_negation_outranks_aspect_and_kind() {
        assert_eq!(
            TemplateBranch::select(
                &SentenceKind::Negation,
                &Aspect::Progressive,
                Polarity::Positive
            ),
            TemplateBranch::Negative
        );
        assert_eq!(
            TemplateBranch::select(&SentenceKind::Statement, &Aspect::Simple, Polarity::Negative),
            TemplateBranch::Negative
        );
        // Negative polarity on a non-statement kind does not force negation
        assert_eq!(
            TemplateBranch::select(&SentenceKind::Question, &Aspect::Simple, Polarity::Negative),
            TemplateBranch::YesNo
        );
    }

    #[test]
    fn branch_aspect_forces_aspectual_templates() {
        assert_eq!(
            TemplateBranch::select(
                &SentenceKind::Statement,
                &Aspect::Progressive,
                Polarity::Positive
            ),
            TemplateBranch::Progressive
        );
        assert_eq!(
            TemplateBranch::select(&SentenceKind::Statement, &Aspect::Perfect, Polarity::Positive),
            TemplateBranch::Perfect
        );
        // Imperfective shares the participle but not the branch
        assert_eq!(
            TemplateBranch::select(
                &SentenceKind::Statement,
                &Aspect::Imperfective,
                Polarity::Positive
            ),
            TemplateBranch::Statement
        );
    }

    #[test]
    fn branch_unmatched_kind_falls_back_to_statement() {
        assert_eq!(
            TemplateBranch::select(
                &SentenceKind::Other("ballad".into()),
                &Aspect::Simple,
                Polarity::Positive
            ),
            TemplateBranch::Statement
        );
    }

    #[test]
    fn punctuation_enforcement() {
        assert_eq!(
            enforce_punctuation("నేను వచ్చాను".to_string(), &SentenceKind::Statement),
            "నేను వచ్చాను."
        );
        assert_eq!(
            enforce_punctuation("మీరు వస్తారా".to_string(), &SentenceKind::Question),
            "మీరు వస్తారా?"
        );
        assert_eq!(
            enforce_punctuation("పోండి".to_string(), &SentenceKind::Imperative),
            "పోండి!"
        );
        // Already terminal: untouched
        assert_eq!(
            enforce_punctuation("పోండి!".to_string(), &SentenceKind::Statement),
            "పోండి!"
        );
        assert_eq!(
            enforce_punctuation("అతను వెళ్ళాడు।".to_string(), &SentenceKind::Statement),
            "అతను వెళ్ళాడు।"
        );
    }

    #[test]
    fn generate_statement_with_object() {
        let engine = TeluguEngine::new();
        let request = GenerationRequest::new("చేయు", "నేను").noun("పుస్తకం");
        let sentence = engine.generate(&request).unwrap();
        assert_eq!(sentence, "నేను పుస్తకాన్ని చేస్తాను.");
    }

    #[test]
    fn generate_formal_statement_remaps_subject() {
        let engine = TeluguEngine::new();
        let request = GenerationRequest::new("పో", "నీవు")
            .noun("పుస్తకం")
            .formality(Formality::Formal);
        let generated = engine.generate_checked(&request).unwrap();
        // నీవు → మీరు under the formal honorific; the మీరు override row wins
        assert_eq!(generated.sentence, "మీరు పుస్తకాన్ని పోతారు.");
        assert!(generated.warnings.is_empty());
    }

    #[test]
    fn generate_spoken_style_contracts() {
        let engine = TeluguEngine::new();
        let request = GenerationRequest::new("చేయు", "నేను")
            .noun("పుస్తకం")
            .style(Style::Spoken);
        let sentence = engine.generate(&request).unwrap();
        assert_eq!(sentence, "నేను పుస్తకాన్ని చేస్తా.");
    }

    #[test]
    fn generate_question_uses_yesno_layout() {
        let engine = TeluguEngine::new();
        let request = GenerationRequest::new("పో", "మీరు")
            .noun("బడి")
            .case(Case::Locative)
            .template(SentenceKind::Question);
        let sentence = engine.generate(&request).unwrap();
        assert_eq!(sentence, "పోతారు మీరు బడిలో?");
    }

    #[test]
    fn generate_imperative() {
        let engine = TeluguEngine::new();
        let request = GenerationRequest::new("పో", "మీరు")
            .noun("బడి")
            .case(Case::Locative)
            .template(SentenceKind::Imperative);
        let sentence = engine.generate(&request).unwrap();
        assert_eq!(sentence, "బడిలో పోండి!");
    }

    #[test]
    fn generate_without_noun_leaves_no_gap() {
        let engine = TeluguEngine::new();
        let request = GenerationRequest::new("పో", "నేను");
        let sentence = engine.generate(&request).unwrap();
        assert_eq!(sentence, "నేను పోతాను.");
    }

    #[test]
    fn generate_negative_statement() {
        let engine = TeluguEngine::new();
        let request = GenerationRequest::new("చేయు", "నేను")
            .noun("బడి")
            .case(Case::Locative)
            .polarity(Polarity::Negative);
        let sentence = engine.generate(&request).unwrap();
        assert_eq!(sentence, "నేను బడిలో చేయను.");
    }

    #[test]
    fn generate_progressive_by_aspect() {
        let engine = TeluguEngine::new();
        let request = GenerationRequest::new("చదువు", "నేను")
            .noun("పుస్తకం")
            .aspect(Aspect::Progressive);
        let sentence = engine.generate(&request).unwrap();
        assert_eq!(sentence, "నేను పుస్తకాన్ని ఉన్నాను చదువుతూ.");
    }

    #[test]
    fn generate_perfect_with_formal_subject() {
        let engine = TeluguEngine::new();
        let request = GenerationRequest::new("చదువు", "ఆయన")
            .noun("పుస్తకం")
            .tense(Tense::Past)
            .aspect(Aspect::Perfect)
            .formality(Formality::Formal);
        let sentence = engine.generate(&request).unwrap();
        assert_eq!(sentence, "ఆయన పుస్తకాన్ని ఉన్నారు చదువిన.");
    }

    #[test]
    fn generate_conditional_with_derived_clauses() {
        let engine = TeluguEngine::new();
        let request = GenerationRequest::new("చేయు", "నేను")
            .noun("పుస్తకం")
            .template(SentenceKind::Conditional);
        let sentence = engine.generate(&request).unwrap();
        assert_eq!(sentence, "నేను పుస్తకాన్ని చేస్తానుయితే, నేను చేస్తాను.");
    }

    #[test]
    fn generate_relative_with_defaults() {
        let engine = TeluguEngine::new();
        let request = GenerationRequest::new("చదువు", "అతను")
            .noun("పుస్తకం")
            .template(SentenceKind::Relative);
        let sentence = engine.generate(&request).unwrap();
        assert_eq!(sentence, "పుస్తకాన్ని చదివిన అబ్బాయి చదువుతాడు.");
    }

    #[test]
    fn generate_hyderabad_dialect() {
        let engine = TeluguEngine::new();
        let request = GenerationRequest::new("పో", "నీవు").dialect(Dialect::Hyderabad);
        let sentence = engine.generate(&request).unwrap();
        // Informal remap first (నీవు → నువ్వు), then the dialect substitution
        assert_eq!(sentence, "నువ్వు పోతవ్వా.");
    }

    #[test]
    fn warnings_surface_for_agreement_mismatch() {
        let mut engine = TeluguEngine::new();
        // Force a mismatching override: plural-polite subject, singular form
        engine
            .lexicon_mut()
            .extend_verbs_from_ron(r#"{ "తిను": { "present": { "మీరు": "తింటాడు" } } }"#)
            .unwrap();
        let request = GenerationRequest::new("తిను", "మీరు");
        let generated = engine.generate_checked(&request).unwrap();
        assert_eq!(generated.sentence, "మీరు తింటాడు.");
        assert_eq!(generated.warnings.len(), 1);
        assert!(matches!(generated.warnings[0], Warning::Agreement { .. }));
    }
}
