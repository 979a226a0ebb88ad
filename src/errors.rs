use std::fmt;
use std::path::PathBuf;

use teloxide::{ApiError, RequestError};
use thiserror::Error;

/// Ошибки обработки одного обновления
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Картинка платья отсутствует или не читается
    #[error("failed to open image {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("dispatch was cancelled")]
    Cancelled,
}

/// Класс ошибки транспорта, определяет что логировать и нужна ли пауза
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorClass {
    /// Telegram вернул ошибку с кодом
    Api { code: u16, message: String },
    /// Упал сам уровень запросов (сеть, ввод-вывод)
    Request(String),
    Generic(String),
}

impl ErrorClass {
    /// Только сбой уровня запросов требует паузы перед повтором
    pub fn needs_backoff(&self) -> bool {
        matches!(self, ErrorClass::Request(_))
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorClass::Api { code, message } => {
                write!(f, "Telegram API Error:\n[{code}]\n{message}")
            }
            ErrorClass::Request(text) | ErrorClass::Generic(text) => f.write_str(text),
        }
    }
}

impl From<&RequestError> for ErrorClass {
    fn from(error: &RequestError) -> Self {
        let message = error.to_string();
        match error {
            // Display самого RequestError добавляет префикс, логируем текст API как есть
            RequestError::Api(api) => ErrorClass::Api {
                code: api_error_code(api),
                message: api.to_string(),
            },
            RequestError::MigrateToChatId(_) => ErrorClass::Api { code: 400, message },
            RequestError::RetryAfter(_) => ErrorClass::Api { code: 429, message },
            RequestError::Network(_) | RequestError::Io(_) => ErrorClass::Request(message),
            _ => ErrorClass::Generic(message),
        }
    }
}

impl From<&DispatchError> for ErrorClass {
    fn from(error: &DispatchError) -> Self {
        match error {
            DispatchError::Request(request) => ErrorClass::from(request),
            other => ErrorClass::Generic(other.to_string()),
        }
    }
}

fn api_error_code(error: &ApiError) -> u16 {
    match error {
        ApiError::BotBlocked => 403,
        ApiError::TerminatedByOtherGetUpdates => 409,
        _ => 400,
    }
}
