//! Model description language.
//!
//! ```text
//! User
//! Name  string required
//! Email string gorm:"uniqueIndex" binding:"required,email"
//! Age   int
//!
//! Book
//! Title string
//! ```
//!
//! Definitions are separated by blank lines. The first line of a definition
//! is the model name; every following line is `<field> <type> [tag...]`.
//!
//! Parsing never fails. Anything malformed is dropped from the output and
//! recorded as a [`Diagnostic`] so callers can tell "nothing produced" apart
//! from "nothing wrong".

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::domain::entities::model::{Model, ModelField};

/// How the `required` flag of a field is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredRule {
    /// Only a bare `required` tag, or a `binding:`/`validate:` tag listing
    /// `required`, marks a field required.
    #[default]
    Tag,
    /// Any occurrence of the text `required` on the raw line, including
    /// inside the field name or type.
    Substring,
}

impl std::str::FromStr for RequiredRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tag" => Ok(Self::Tag),
            "substring" | "legacy" => Ok(Self::Substring),
            other => Err(format!("unknown required rule: {other}")),
        }
    }
}

/// Non-fatal finding produced while parsing. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    BlockWithoutFields { line: usize, name: String },
    FieldTooShort { line: usize, text: String },
    UnknownTag { line: usize, tag: String },
    PersistenceHintOverridden { line: usize, discarded: String },
    DuplicateModel { line: usize, name: String },
}

impl Diagnostic {
    pub fn line(&self) -> usize {
        match self {
            Self::BlockWithoutFields { line, .. }
            | Self::FieldTooShort { line, .. }
            | Self::UnknownTag { line, .. }
            | Self::PersistenceHintOverridden { line, .. }
            | Self::DuplicateModel { line, .. } => *line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockWithoutFields { line, name } => {
                write!(f, "line {line}: model '{name}' has no field lines, skipped")
            }
            Self::FieldTooShort { line, text } => {
                write!(f, "line {line}: field '{text}' needs a name and a type, skipped")
            }
            Self::UnknownTag { line, tag } => write!(f, "line {line}: unknown tag '{tag}' ignored"),
            Self::PersistenceHintOverridden { line, discarded } => {
                write!(f, "line {line}: gorm hint '{discarded}' overridden by a later one")
            }
            Self::DuplicateModel { line, name } => {
                write!(f, "line {line}: model '{name}' collides with an earlier model")
            }
        }
    }
}

/// Result of parsing a DSL document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    /// Models in source order; fields keep their source order too.
    pub models: Vec<Model>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Lenient parser for the model DSL.
#[derive(Debug, Clone, Copy, Default)]
pub struct DslParser {
    required_rule: RequiredRule,
}

impl DslParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_required_rule(mut self, rule: RequiredRule) -> Self {
        self.required_rule = rule;
        self
    }

    pub fn required_rule(&self) -> RequiredRule {
        self.required_rule
    }

    pub fn parse(&self, input: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();
        let mut seen = HashSet::new();

        for block in blocks(input) {
            let Some((&(name_line, name), field_lines)) = block.split_first() else {
                continue;
            };

            if field_lines.is_empty() {
                outcome.diagnostics.push(Diagnostic::BlockWithoutFields {
                    line: name_line,
                    name: name.to_string(),
                });
                continue;
            }

            let fields = field_lines
                .iter()
                .filter_map(|&(line, text)| self.parse_field(line, text, &mut outcome.diagnostics))
                .collect();

            let model = Model::new(name, fields);
            if !seen.insert(model.snake_name().to_string()) {
                outcome.diagnostics.push(Diagnostic::DuplicateModel {
                    line: name_line,
                    name: name.to_string(),
                });
            }
            outcome.models.push(model);
        }

        outcome
    }

    fn parse_field(
        &self,
        line: usize,
        raw: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<ModelField> {
        let mut tokens = raw.split_whitespace();
        let (Some(name), Some(field_type)) = (tokens.next(), tokens.next()) else {
            diagnostics.push(Diagnostic::FieldTooShort {
                line,
                text: raw.to_string(),
            });
            return None;
        };

        let mut persistence: Option<&str> = None;
        let mut required = false;

        for token in tokens {
            match Tag::classify(token) {
                Tag::Persistence(hint) => {
                    if let Some(previous) = persistence.replace(hint) {
                        diagnostics.push(Diagnostic::PersistenceHintOverridden {
                            line,
                            discarded: previous.to_string(),
                        });
                    }
                }
                Tag::Required => required = true,
                Tag::Constraints(list) => {
                    required |= list.split(',').any(|c| c.trim() == "required");
                }
                Tag::Unknown => diagnostics.push(Diagnostic::UnknownTag {
                    line,
                    tag: token.to_string(),
                }),
            }
        }

        if self.required_rule == RequiredRule::Substring {
            required = raw.contains("required");
        }

        let mut field = ModelField::new(name, field_type).required(required);
        if let Some(hint) = persistence.filter(|h| !h.is_empty()) {
            field = field.with_persistence_tag(hint);
        }
        Some(field)
    }
}

/// A token following the field type.
enum Tag<'a> {
    Persistence(&'a str),
    Required,
    Constraints(&'a str),
    Unknown,
}

impl<'a> Tag<'a> {
    fn classify(token: &'a str) -> Self {
        if token == "required" {
            return Self::Required;
        }
        if let Some(value) = token.strip_prefix("gorm:") {
            return Self::Persistence(unquote(value));
        }
        if let Some(value) = token
            .strip_prefix("binding:")
            .or_else(|| token.strip_prefix("validate:"))
        {
            return Self::Constraints(unquote(value));
        }
        Self::Unknown
    }
}

fn unquote(value: &str) -> &str {
    value.trim_matches(|c| matches!(c, '"' | '\'' | '`'))
}

/// Split input into groups of trimmed, non-blank `(line_number, text)` pairs.
fn blocks(input: &str) -> Vec<Vec<(usize, &str)>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push((idx + 1, line));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> ParseOutcome {
        DslParser::new().parse(input)
    }

    #[test]
    fn single_model_with_required_tag() {
        let outcome = parse("User\nName string required\nAge int");

        assert_eq!(outcome.models.len(), 1);
        let user = &outcome.models[0];
        assert_eq!(user.name(), "User");
        assert_eq!(user.fields().len(), 2);

        assert_eq!(user.fields()[0].name, "Name");
        assert_eq!(user.fields()[0].field_type, "string");
        assert!(user.fields()[0].required);

        assert_eq!(user.fields()[1].name, "Age");
        assert_eq!(user.fields()[1].field_type, "int");
        assert!(!user.fields()[1].required);

        assert!(outcome.is_clean());
    }

    #[test]
    fn single_token_field_is_dropped_with_diagnostic() {
        let outcome = parse("User\nx\nName string");

        assert_eq!(outcome.models[0].fields().len(), 1);
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::FieldTooShort {
                line: 2,
                text: "x".into()
            }]
        );
    }

    #[test]
    fn block_without_fields_is_dropped() {
        let outcome = parse("Orphan\n\nBook\nTitle string");

        assert_eq!(outcome.models.len(), 1);
        assert_eq!(outcome.models[0].name(), "Book");
        assert!(matches!(
            outcome.diagnostics[0],
            Diagnostic::BlockWithoutFields { line: 1, .. }
        ));
    }

    #[test]
    fn models_keep_source_order() {
        let outcome = parse("Zeta\nA int\n\n\n\nAlpha\nB int\n\nMid\nC int\n");
        let names: Vec<_> = outcome.models.iter().map(Model::name).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn crlf_and_indented_lines_are_accepted() {
        let outcome = parse("User\r\n  Name string\r\n   \r\nBook\r\n\tTitle string\r\n");
        assert_eq!(outcome.models.len(), 2);
        assert_eq!(outcome.models[1].fields()[0].name, "Title");
    }

    #[test]
    fn empty_input_yields_nothing() {
        let outcome = parse("   \n\n");
        assert!(outcome.models.is_empty());
        assert!(outcome.is_clean());
    }

    #[test]
    fn gorm_hint_overrides_default_and_last_wins() {
        let outcome = parse("User\nEmail string gorm:\"unique\" gorm:\"uniqueIndex\"");
        let field = &outcome.models[0].fields()[0];

        assert_eq!(field.persistence_tag, "uniqueIndex");
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::PersistenceHintOverridden {
                line: 2,
                discarded: "unique".into()
            }]
        );
    }

    #[test]
    fn empty_gorm_hint_falls_back_to_column() {
        let outcome = parse("User\nFullName string gorm:\"\"");
        assert_eq!(
            outcome.models[0].fields()[0].persistence_tag,
            "column:full_name"
        );
    }

    #[test]
    fn serialization_tag_is_lowercased_name() {
        let outcome = parse("User\nFullName string");
        assert_eq!(outcome.models[0].fields()[0].serialization_tag, "fullname");
    }

    #[test]
    fn binding_list_marks_required() {
        let outcome = parse("User\nEmail string binding:\"email,required\"\nNick string validate:\"max=5\"");
        let fields = outcome.models[0].fields();
        assert!(fields[0].required);
        assert!(!fields[1].required);
    }

    #[test]
    fn required_inside_identifier_is_not_a_tag() {
        let outcome = parse("Form\nRequiredBy string\nNotes requiredType");
        assert!(outcome.models[0].fields().iter().all(|f| !f.required));
    }

    #[test]
    fn substring_rule_reproduces_legacy_detection() {
        let parser = DslParser::new().with_required_rule(RequiredRule::Substring);
        let outcome = parser.parse("Form\nNotes requiredType\nAge int");
        assert!(outcome.models[0].fields()[0].required);
        assert!(!outcome.models[0].fields()[1].required);
    }

    #[test]
    fn unknown_tags_are_reported() {
        let outcome = parse("User\nName string json:\"n\"");
        assert_eq!(outcome.models[0].fields().len(), 1);
        assert!(matches!(
            &outcome.diagnostics[0],
            Diagnostic::UnknownTag { tag, .. } if tag == "json:\"n\""
        ));
    }

    #[test]
    fn duplicate_models_are_kept_but_reported() {
        let outcome = parse("Book\nTitle string\n\nBook\nIsbn string");
        assert_eq!(outcome.models.len(), 2);
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::DuplicateModel {
                line: 4,
                name: "Book".into()
            }]
        );
    }

    #[test]
    fn model_with_only_invalid_fields_still_exists() {
        let outcome = parse("Ghost\na\nb");
        assert_eq!(outcome.models.len(), 1);
        assert!(outcome.models[0].fields().is_empty());
        assert_eq!(outcome.diagnostics.len(), 2);
    }

    #[test]
    fn required_rule_parses_from_str() {
        assert_eq!("tag".parse::<RequiredRule>(), Ok(RequiredRule::Tag));
        assert_eq!("Legacy".parse::<RequiredRule>(), Ok(RequiredRule::Substring));
        assert!("other".parse::<RequiredRule>().is_err());
    }
}
