use serde::{Deserialize, Serialize};

/// Категория нарушенного правила
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Значение отсутствует или имеет неверный JSON-тип
    InvalidType,
    /// Длина строки или число меньше допустимого
    TooSmall,
    /// Длина строки или число больше допустимого
    TooBig,
    /// Строка не прошла проверку формата (шаблон, email)
    InvalidString,
    /// Пользовательская проверка (refine)
    Custom,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::InvalidType => "invalid_type",
            IssueCode::TooSmall => "too_small",
            IssueCode::TooBig => "too_big",
            IssueCode::InvalidString => "invalid_string",
            IssueCode::Custom => "custom",
        }
    }
}

/// Одно нарушение правила валидации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Имя поля черновика (ключ JSON)
    pub path: String,
    pub code: IssueCode,
    /// Собственное сообщение правила
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code,
            message: message.into(),
        }
    }
}
