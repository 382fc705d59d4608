//! Telugu Engine — rule-based Telugu sentence generation.
//!
//! Produces grammatically shaped Telugu sentences from a small semantic
//! input (a verb, a subject, an optional object noun) plus grammatical
//! features, without any trained model: every surface form comes from
//! deterministic lookup-and-fallback rules over an extensible seed lexicon,
//! joined by lightweight sandhi and filled into named sentence templates.

pub mod core;
pub mod schema;
