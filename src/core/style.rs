/// Register passes — honorific remapping, spoken contractions, dialect
/// coloring.
///
/// Three independent literal-substitution passes. The honorific remap runs
/// before morphology because it changes which subject key the rest of the
/// pipeline sees; the spoken and dialect passes run over the rendered
/// sentence, spoken first.

use crate::core::lexicon::Lexicon;
use crate::schema::features::{Dialect, Formality, Style};

/// Substitute the subject pronoun for the requested formality level.
pub fn apply_honorific(lexicon: &Lexicon, pronoun: &str, level: Formality) -> String {
    lexicon.honorific(pronoun, level)
}

/// Replace formal verb endings with their spoken contractions. A no-op
/// unless the spoken style was requested.
pub fn apply_style(lexicon: &Lexicon, text: &str, style: Style) -> String {
    if style != Style::Spoken {
        return text.to_string();
    }
    let mut out = text.to_string();
    for (formal, spoken) in &lexicon.spoken {
        out = out.replace(formal.as_str(), spoken.as_str());
    }
    out
}

/// Apply dialect-specific literal substitutions. Unknown dialect names
/// substitute nothing.
pub fn apply_dialect(lexicon: &Lexicon, text: &str, dialect: &Dialect) -> String {
    let mut out = text.to_string();
    for (from, to) in lexicon.dialect_substitutions(dialect) {
        out = out.replace(from.as_str(), to.as_str());
    }
    out
}
