/// Showcase — a tour of the seed lexicon across constructions and registers.
///
/// Run with: cargo run --example showcase

use telugu_engine::core::pipeline::TeluguEngine;
use telugu_engine::schema::features::{
    Aspect, Case, Dialect, Formality, Polarity, SentenceKind, Style, Tense,
};
use telugu_engine::schema::request::GenerationRequest;

fn main() {
    let engine = TeluguEngine::new();

    println!("Example 1 — Formal statement:");
    show(
        &engine,
        GenerationRequest::new("పో", "నీవు")
            .noun("పుస్తకం")
            .formality(Formality::Formal),
    );

    println!("\nExample 2 — Spoken progressive:");
    show(
        &engine,
        GenerationRequest::new("చదువు", "నేను")
            .noun("పుస్తకం")
            .aspect(Aspect::Progressive)
            .style(Style::Spoken)
            .template(SentenceKind::Progressive),
    );

    println!("\nExample 3 — Negative (first person singular):");
    show(
        &engine,
        GenerationRequest::new("చేయు", "నేను")
            .noun("బడి")
            .case(Case::Locative)
            .polarity(Polarity::Negative)
            .template(SentenceKind::Negation),
    );

    println!("\nExample 4 — Hyderabad dialect:");
    show(
        &engine,
        GenerationRequest::new("పో", "నీవు").dialect(Dialect::Hyderabad),
    );

    println!("\nExample 5 — Perfect with a polite subject:");
    show(
        &engine,
        GenerationRequest::new("చదువు", "ఆయన")
            .noun("పుస్తకం")
            .tense(Tense::Past)
            .aspect(Aspect::Perfect)
            .formality(Formality::Formal)
            .template(SentenceKind::Perfect),
    );

    println!("\nExample 6 — Polite imperative:");
    show(
        &engine,
        GenerationRequest::new("పో", "మీరు")
            .noun("బడి")
            .case(Case::Locative)
            .template(SentenceKind::Imperative),
    );
}

fn show(engine: &TeluguEngine, request: GenerationRequest) {
    match engine.generate_checked(&request) {
        Ok(generated) => {
            println!("{}", generated.sentence);
            for warning in &generated.warnings {
                eprintln!("[warn] {}", warning);
            }
        }
        Err(err) => eprintln!("generation failed: {}", err),
    }
}
