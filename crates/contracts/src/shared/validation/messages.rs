//! Таблица сообщений: категория правила → текст для пользователя.
//!
//! Таблица намеренно грубая: для трёх категорий сообщение правила
//! заменяется шаблоном, для остальных показывается как есть.

use super::issue::{Issue, IssueCode};
use std::collections::BTreeMap;

pub const MSG_TOO_SMALL: &str = "El valor es demasiado pequeño.";
pub const MSG_TOO_BIG: &str = "El valor es demasiado grande.";
pub const MSG_INVALID_TYPE: &str = "El tipo de dato es inválido.";

/// Ошибки формы: имя поля → сообщение
pub type FieldErrors = BTreeMap<String, String>;

/// Текст, который видит пользователь для данного нарушения
pub fn message_for(issue: &Issue) -> String {
    match issue.code {
        IssueCode::TooSmall => MSG_TOO_SMALL.to_string(),
        IssueCode::TooBig => MSG_TOO_BIG.to_string(),
        IssueCode::InvalidType => MSG_INVALID_TYPE.to_string(),
        _ => issue.message.clone(),
    }
}

/// Собирает карту ошибок по полям.
///
/// Нарушения обходятся в порядке проверки, каждое следующее перезаписывает
/// предыдущее для того же поля: в карте остаётся последнее.
pub fn to_field_errors(issues: &[Issue]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for issue in issues {
        errors.insert(issue.path.clone(), message_for(issue));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_messages() {
        let small = Issue::new("nombre", IssueCode::TooSmall, "String must contain at least 3 character(s)");
        let big = Issue::new("nombre", IssueCode::TooBig, "String must contain at most 20 character(s)");
        let ty = Issue::new("nombre", IssueCode::InvalidType, "Required");
        assert_eq!(message_for(&small), MSG_TOO_SMALL);
        assert_eq!(message_for(&big), MSG_TOO_BIG);
        assert_eq!(message_for(&ty), MSG_INVALID_TYPE);
    }

    #[test]
    fn test_rule_message_passthrough() {
        let issue = Issue::new("email", IssueCode::InvalidString, "Correo Invalido");
        assert_eq!(message_for(&issue), "Correo Invalido");
        let custom = Issue::new("ciudad", IssueCode::Custom, "La ciudad debe contener solo letras");
        assert_eq!(message_for(&custom), "La ciudad debe contener solo letras");
    }

    #[test]
    fn test_last_issue_per_field_wins() {
        let issues = vec![
            Issue::new("nombre", IssueCode::TooSmall, "min"),
            Issue::new("nombre", IssueCode::Custom, "solo letras"),
            Issue::new("ciudad", IssueCode::TooBig, "max"),
        ];
        let errors = to_field_errors(&issues);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["nombre"], "solo letras");
        assert_eq!(errors["ciudad"], MSG_TOO_BIG);
    }
}
