use thiserror::Error;

/// Ошибка обращения к удалённому API.
///
/// Каждая операция клиента коллекций возвращает `Result<_, ApiError>`,
/// а решение о том, как показать ошибку, принимает вызывающий код.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Запрос не дошёл до сервера (сеть, CORS, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Сервер ответил статусом вне диапазона 2xx
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// Тело ответа не удалось разобрать
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Тело запроса не удалось сериализовать
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Категория ошибки для логов
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "network",
            ApiError::Http { .. } => "http",
            ApiError::Decode(_) => "decode",
            ApiError::Encode(_) => "encode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Http { status: 500 }.to_string(), "HTTP 500");
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(ApiError::Http { status: 404 }.kind(), "http");
        assert_eq!(ApiError::Network(String::new()).kind(), "network");
        assert_eq!(ApiError::Decode(String::new()).kind(), "decode");
    }
}
