//! Declarative per-field schemas for form drafts.
//!
//! A draft is a JSON object. Each [`FieldRule`] checks one key:
//!
//! 1. missing/null or wrong JSON type yields `invalid_type` and stops the
//!    remaining checks for that field;
//! 2. every [`Check`] runs in declaration order, each failure is one issue;
//! 3. refinements run last and produce `custom` issues.
//!
//! Issues are reported in traversal order (fields in declaration order).

use super::issue::{Issue, IssueCode};
use super::messages::{to_field_errors, FieldErrors};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

static LETTERS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").expect("letters regex is valid"));

// Email syntax without the look-ahead parts (handled in `is_email`).
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Only ASCII letters, at least one
pub fn is_ascii_letters(value: &str) -> bool {
    LETTERS_ONLY.is_match(value)
}

/// Email syntax check
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL.is_match(value)
}

/// Exactly `n` ASCII digits
pub fn digits_regex(n: usize) -> Regex {
    Regex::new(&format!(r"^[0-9]{{{}}}$", n)).expect("digits regex is valid")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Integer,
}

impl FieldType {
    fn name(&self) -> &'static str {
        match self {
            FieldType::Text => "string",
            FieldType::Integer => "number",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Check {
    /// Минимальная длина строки (в символах), включительно
    MinLength(usize),
    /// Максимальная длина строки, включительно
    MaxLength(usize),
    /// Минимальное значение числа, включительно
    Min(i64),
    /// Максимальное значение числа, включительно
    Max(i64),
    Pattern { regex: Regex, message: String },
    Email { message: String },
}

#[derive(Debug, Clone)]
pub struct Refinement {
    pub predicate: fn(&str) -> bool,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct FieldRule {
    pub name: &'static str,
    pub ty: FieldType,
    pub checks: Vec<Check>,
    pub refinements: Vec<Refinement>,
}

impl FieldRule {
    pub fn text(name: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::Text,
            checks: Vec::new(),
            refinements: Vec::new(),
        }
    }

    pub fn integer(name: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::Integer,
            checks: Vec::new(),
            refinements: Vec::new(),
        }
    }

    pub fn min_len(mut self, n: usize) -> Self {
        self.checks.push(Check::MinLength(n));
        self
    }

    pub fn max_len(mut self, n: usize) -> Self {
        self.checks.push(Check::MaxLength(n));
        self
    }

    pub fn min(mut self, n: i64) -> Self {
        self.checks.push(Check::Min(n));
        self
    }

    pub fn max(mut self, n: i64) -> Self {
        self.checks.push(Check::Max(n));
        self
    }

    pub fn pattern(mut self, regex: Regex, message: &str) -> Self {
        self.checks.push(Check::Pattern {
            regex,
            message: message.to_string(),
        });
        self
    }

    pub fn email(mut self, message: &str) -> Self {
        self.checks.push(Check::Email {
            message: message.to_string(),
        });
        self
    }

    pub fn refine(mut self, predicate: fn(&str) -> bool, message: &str) -> Self {
        self.refinements.push(Refinement {
            predicate,
            message: message.to_string(),
        });
        self
    }

    /// Проверяет значение поля, дописывая нарушения в `issues`
    pub fn check(&self, value: Option<&Value>, issues: &mut Vec<Issue>) {
        let value = match value {
            None | Some(Value::Null) => {
                issues.push(Issue::new(self.name, IssueCode::InvalidType, "Required"));
                return;
            }
            Some(v) => v,
        };

        match self.ty {
            FieldType::Text => match value.as_str() {
                Some(text) => self.check_text(text, issues),
                None => self.push_type_issue(value, issues),
            },
            FieldType::Integer => match value.as_i64() {
                Some(number) => self.check_integer(number, issues),
                None => self.push_type_issue(value, issues),
            },
        }
    }

    fn push_type_issue(&self, value: &Value, issues: &mut Vec<Issue>) {
        issues.push(Issue::new(
            self.name,
            IssueCode::InvalidType,
            format!("Expected {}, received {}", self.ty.name(), json_type_name(value)),
        ));
    }

    fn check_text(&self, text: &str, issues: &mut Vec<Issue>) {
        let len = text.chars().count();
        for check in &self.checks {
            match check {
                Check::MinLength(min) if len < *min => issues.push(Issue::new(
                    self.name,
                    IssueCode::TooSmall,
                    format!("String must contain at least {} character(s)", min),
                )),
                Check::MaxLength(max) if len > *max => issues.push(Issue::new(
                    self.name,
                    IssueCode::TooBig,
                    format!("String must contain at most {} character(s)", max),
                )),
                Check::Pattern { regex, message } if !regex.is_match(text) => {
                    issues.push(Issue::new(self.name, IssueCode::InvalidString, message.clone()))
                }
                Check::Email { message } if !is_email(text) => {
                    issues.push(Issue::new(self.name, IssueCode::InvalidString, message.clone()))
                }
                _ => {}
            }
        }
        for refinement in &self.refinements {
            if !(refinement.predicate)(text) {
                issues.push(Issue::new(
                    self.name,
                    IssueCode::Custom,
                    refinement.message.clone(),
                ));
            }
        }
    }

    fn check_integer(&self, number: i64, issues: &mut Vec<Issue>) {
        for check in &self.checks {
            match check {
                Check::Min(min) if number < *min => issues.push(Issue::new(
                    self.name,
                    IssueCode::TooSmall,
                    format!("Number must be greater than or equal to {}", min),
                )),
                Check::Max(max) if number > *max => issues.push(Issue::new(
                    self.name,
                    IssueCode::TooBig,
                    format!("Number must be less than or equal to {}", max),
                )),
                _ => {}
            }
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Draft failed one or more rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {} issue(s)", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

impl ValidationError {
    /// Field → message map, last issue per field wins
    pub fn field_errors(&self) -> FieldErrors {
        to_field_errors(&self.issues)
    }
}

/// Ordered set of field rules for one record type
#[derive(Debug, Clone)]
pub struct Schema {
    pub name: &'static str,
    pub fields: Vec<FieldRule>,
}

impl Schema {
    pub fn new(name: &'static str, fields: Vec<FieldRule>) -> Self {
        Self { name, fields }
    }

    /// Validates a draft object. Keys not described by the schema are ignored.
    pub fn validate(&self, draft: &Map<String, Value>) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        for field in &self.fields {
            field.check(draft.get(field.name), &mut issues);
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }

    /// Same as [`Schema::validate`] for an arbitrary JSON value
    pub fn validate_value(&self, value: &Value) -> Result<(), ValidationError> {
        match value.as_object() {
            Some(map) => self.validate(map),
            None => Err(ValidationError {
                issues: vec![Issue::new(
                    "",
                    IssueCode::InvalidType,
                    format!("Expected object, received {}", json_type_name(value)),
                )],
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn name_schema() -> Schema {
        Schema::new(
            "test",
            vec![FieldRule::text("nombre")
                .min_len(3)
                .max_len(5)
                .refine(is_ascii_letters, "solo letras")],
        )
    }

    fn draft(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_valid_text() {
        assert!(name_schema().validate(&draft(json!({ "nombre": "abcd" }))).is_ok());
    }

    #[test]
    fn test_length_bounds_inclusive() {
        let schema = name_schema();
        assert!(schema.validate(&draft(json!({ "nombre": "abc" }))).is_ok());
        assert!(schema.validate(&draft(json!({ "nombre": "abcde" }))).is_ok());
        let err = schema.validate(&draft(json!({ "nombre": "abcdef" }))).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].code, IssueCode::TooBig);
    }

    #[test]
    fn test_refinement_runs_after_length_failure() {
        let err = name_schema()
            .validate(&draft(json!({ "nombre": "a1" })))
            .unwrap_err();
        let codes: Vec<IssueCode> = err.issues.iter().map(|i| i.code).collect();
        assert_eq!(codes, vec![IssueCode::TooSmall, IssueCode::Custom]);
        assert_eq!(err.field_errors()["nombre"], "solo letras");
    }

    #[test]
    fn test_missing_and_wrong_type_stop_checks() {
        let schema = name_schema();
        let missing = schema.validate(&Map::new()).unwrap_err();
        assert_eq!(missing.issues.len(), 1);
        assert_eq!(missing.issues[0].code, IssueCode::InvalidType);
        assert_eq!(missing.issues[0].message, "Required");

        let wrong = schema.validate(&draft(json!({ "nombre": 0 }))).unwrap_err();
        assert_eq!(wrong.issues.len(), 1);
        assert_eq!(wrong.issues[0].message, "Expected string, received number");
    }

    #[test]
    fn test_length_counts_characters() {
        let schema = Schema::new("t", vec![FieldRule::text("x").max_len(3)]);
        assert!(schema.validate(&draft(json!({ "x": "ñáé" }))).is_ok());
    }

    #[test]
    fn test_integer_bounds() {
        let schema = Schema::new("t", vec![FieldRule::integer("n").min(0).max(10)]);
        assert!(schema.validate(&draft(json!({ "n": 0 }))).is_ok());
        let err = schema.validate(&draft(json!({ "n": -1 }))).unwrap_err();
        assert_eq!(err.issues[0].code, IssueCode::TooSmall);
        let err = schema.validate(&draft(json!({ "n": "7" }))).unwrap_err();
        assert_eq!(err.issues[0].code, IssueCode::InvalidType);
        let err = schema.validate(&draft(json!({ "n": 1.5 }))).unwrap_err();
        assert_eq!(err.issues[0].code, IssueCode::InvalidType);
    }

    #[test]
    fn test_pattern_and_email() {
        let schema = Schema::new(
            "t",
            vec![
                FieldRule::text("tel").pattern(digits_regex(9), "Formato incorrecto"),
                FieldRule::text("mail").email("Correo Invalido"),
            ],
        );
        assert!(schema
            .validate(&draft(json!({ "tel": "987654321", "mail": "ana@empresa.pe" })))
            .is_ok());
        let err = schema
            .validate(&draft(json!({ "tel": "98765432", "mail": "ana@" })))
            .unwrap_err();
        let errors = err.field_errors();
        assert_eq!(errors["tel"], "Formato incorrecto");
        assert_eq!(errors["mail"], "Correo Invalido");
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_email("a.b+c@mail.example.com"));
        assert!(!is_email(".ab@mail.com"));
        assert!(!is_email("a..b@mail.com"));
        assert!(!is_email("ab@mail"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_letters_only() {
        assert!(is_ascii_letters("Central"));
        assert!(!is_ascii_letters("Central Norte"));
        assert!(!is_ascii_letters(""));
        assert!(!is_ascii_letters("Peña"));
    }

    #[test]
    fn test_digits_are_ascii_only() {
        let nine = digits_regex(9);
        assert!(nine.is_match("987654321"));
        assert!(!nine.is_match("١٢٣٤٥٦٧٨٩"));
        assert!(!nine.is_match("98765432"));
    }

    #[test]
    fn test_non_object_value() {
        let err = name_schema().validate_value(&json!([1, 2])).unwrap_err();
        assert_eq!(err.issues[0].message, "Expected object, received array");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert!(name_schema()
            .validate(&draft(json!({ "nombre": "abcd", "id_almacen": 4 })))
            .is_ok());
    }
}
