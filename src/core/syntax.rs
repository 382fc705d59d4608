/// Syntax templates — parsing, loading, and slot substitution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyntaxError {
    #[error("template parse error: {0}")]
    TemplateParse(String),
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TemplateSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// A named slot filled by the caller: `{subject}`, `{verb}`, ...
    Slot(String),
}

/// A parsed template — a sequence of segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parse a template pattern into a sequence of segments.
    ///
    /// Syntax:
    /// - `{name}` → `Slot`
    /// - `{{` / `}}` → literal braces
    /// - Everything else → `Literal`
    pub fn parse(input: &str) -> Result<Template, SyntaxError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;

        while i < len {
            if chars[i] == '{' {
                // Escaped brace
                if i + 1 < len && chars[i + 1] == '{' {
                    literal_buf.push('{');
                    i += 2;
                    continue;
                }

                // Flush any accumulated literal
                if !literal_buf.is_empty() {
                    segments.push(TemplateSegment::Literal(literal_buf.clone()));
                    literal_buf.clear();
                }

                // Find the closing brace
                let start = i + 1;
                let mut end = start;
                while end < len && chars[end] != '}' {
                    if chars[end] == '{' {
                        return Err(SyntaxError::TemplateParse(
                            "nested braces are not allowed".to_string(),
                        ));
                    }
                    end += 1;
                }

                if end == len {
                    return Err(SyntaxError::TemplateParse("unclosed brace".to_string()));
                }

                let name: String = chars[start..end].iter().collect();
                if name.is_empty() {
                    return Err(SyntaxError::TemplateParse("empty braces".to_string()));
                }

                segments.push(TemplateSegment::Slot(name));
                i = end + 1;
            } else if chars[i] == '}' {
                // Escaped closing brace
                if i + 1 < len && chars[i + 1] == '}' {
                    literal_buf.push('}');
                    i += 2;
                    continue;
                }
                return Err(SyntaxError::TemplateParse(
                    "unmatched closing brace".to_string(),
                ));
            } else {
                literal_buf.push(chars[i]);
                i += 1;
            }
        }

        if !literal_buf.is_empty() {
            segments.push(TemplateSegment::Literal(literal_buf));
        }

        Ok(Template { segments })
    }

    /// Substitute slot values into the template. Supplied values are
    /// trimmed; missing slots render as empty strings.
    fn render(&self, slots: &HashMap<&str, String>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(text) => out.push_str(text),
                TemplateSegment::Slot(name) => {
                    if let Some(value) = slots.get(name.as_str()) {
                        out.push_str(value.trim());
                    }
                }
            }
        }
        out
    }
}

/// A set of named sentence templates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplateSet {
    pub templates: HashMap<String, Template>,
}

/// The seed template inventory: name → slot pattern.
const SEED_TEMPLATES: &[(&str, &str)] = &[
    ("statement", "{subject} {object} {verb}."),
    ("question", "{subject} {object} {verb}నా?"),
    ("yesno_question", "{verb} {subject} {object}?"),
    ("neg_statement", "{subject} {object} {verb_neg}."),
    (
        "progressive",
        "{subject} {object} {aux_progressive} {verb_participle}.",
    ),
    (
        "perfect",
        "{subject} {object} {aux_perfect} {verb_participle}.",
    ),
    ("conditional", "{subclause}, {mainclause}."),
    ("relative", "{relclause} {head} {verb}."),
    ("imperative", "{object} {verb_imp}!"),
];

impl TemplateSet {
    /// The embedded seed templates.
    pub fn seed() -> TemplateSet {
        let mut set = TemplateSet::default();
        for (name, pattern) in SEED_TEMPLATES {
            if let Ok(template) = Template::parse(pattern) {
                set.templates.insert((*name).to_string(), template);
            }
        }
        debug_assert_eq!(set.templates.len(), SEED_TEMPLATES.len());
        set
    }

    /// Parse a template set from a RON string of shape
    /// `{ "name": "pattern", ... }`.
    pub fn parse_ron(input: &str) -> Result<TemplateSet, SyntaxError> {
        let raw: HashMap<String, String> = ron::from_str(input)?;
        let mut templates = HashMap::new();
        for (name, pattern) in raw {
            templates.insert(name, Template::parse(&pattern)?);
        }
        Ok(TemplateSet { templates })
    }

    /// Load a template set from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<TemplateSet, SyntaxError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Merge another template set into this one. Templates from `other`
    /// override templates in `self` with the same name.
    pub fn merge(&mut self, other: TemplateSet) {
        for (name, template) in other.templates {
            self.templates.insert(name, template);
        }
    }

    /// Fill the named template's slots and normalize spacing.
    ///
    /// This is the pipeline's only hard failure: an unknown template name
    /// has no slot layout to fall back to.
    pub fn apply(
        &self,
        name: &str,
        slots: &HashMap<&str, String>,
    ) -> Result<String, SyntaxError> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| SyntaxError::UnknownTemplate(name.to_string()))?;
        Ok(tidy_spacing(&template.render(slots)))
    }
}

/// Collapse whitespace runs to single spaces, trim the ends, and drop
/// whitespace immediately preceding sentence punctuation.
pub fn tidy_spacing(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(collapsed.len());
    for c in collapsed.chars() {
        if matches!(c, '.' | '?' | '!' | ',') {
            while out.ends_with(' ') {
                out.pop();
            }
        }
        out.push(c);
    }
    out
}
