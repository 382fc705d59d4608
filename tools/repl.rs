/// Repl — interactive generation shell over the seed lexicon.
///
/// Usage: repl [--verbs <path.ron>] [--nouns <path.ron>]
///
/// Reads one request per line as comma-separated fields:
///   subject, verb, noun(optional)
/// Omitted fields fall back to నేను / చేయు / no object. An empty line
/// exits. Advisory warnings are printed to stderr.

use std::io::{self, BufRead, Write};
use std::path::Path;

use telugu_engine::core::pipeline::TeluguEngine;
use telugu_engine::schema::request::GenerationRequest;

const DEFAULT_SUBJECT: &str = "నేను";
const DEFAULT_VERB: &str = "చేయు";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_usage();
        return;
    }

    let mut verbs_path = None;
    let mut nouns_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--verbs" if i + 1 < args.len() => {
                i += 1;
                verbs_path = Some(args[i].clone());
            }
            "--nouns" if i + 1 < args.len() => {
                i += 1;
                nouns_path = Some(args[i].clone());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut engine = TeluguEngine::new();

    if let Some(path) = verbs_path {
        if let Err(err) = engine.lexicon_mut().load_verbs_from_ron(Path::new(&path)) {
            eprintln!("Failed to load verbs from {}: {}", path, err);
            std::process::exit(1);
        }
    }
    if let Some(path) = nouns_path {
        if let Err(err) = engine.lexicon_mut().load_nouns_from_ron(Path::new(&path)) {
            eprintln!("Failed to load nouns from {}: {}", path, err);
            std::process::exit(1);
        }
    }

    let stdin = io::stdin();
    loop {
        print!("\nEnter: subject, verb, noun(optional) → ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                eprintln!("read error: {}", err);
                break;
            }
        }

        let raw = line.trim();
        if raw.is_empty() {
            break;
        }

        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        let subject = parts.first().filter(|s| !s.is_empty()).unwrap_or(&DEFAULT_SUBJECT);
        let verb = parts.get(1).filter(|s| !s.is_empty()).unwrap_or(&DEFAULT_VERB);
        let noun = parts.get(2).filter(|s| !s.is_empty());

        let mut request = GenerationRequest::new(verb, subject);
        if let Some(noun) = noun {
            request = request.noun(noun);
        }

        match engine.generate_checked(&request) {
            Ok(generated) => {
                println!("→ {}", generated.sentence);
                for warning in &generated.warnings {
                    eprintln!("[warn] {}", warning);
                }
            }
            Err(err) => eprintln!("generation failed: {}", err),
        }
    }
}

fn print_usage() {
    println!("Usage: repl [--verbs <path.ron>] [--nouns <path.ron>]");
    println!();
    println!("Reads comma-separated requests from stdin:");
    println!("  subject, verb, noun(optional)");
    println!("Defaults: {} / {} / no object.", DEFAULT_SUBJECT, DEFAULT_VERB);
}
