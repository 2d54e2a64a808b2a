use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (пустое имя, неизвестное действие, битый конфиг).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Стол или игрок не найден.
    #[error("not found: {0}")]
    NotFound(String),

    /// Команда не может быть выполнена в текущем состоянии стола.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Внутренняя ошибка сервера.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP-статус, которым транспорт отвечает на эту ошибку.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 409,
            ApiError::Internal(_) => 500,
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let msg = err.to_string();
        match err {
            EngineError::TableNotFound(_) | EngineError::PlayerNotFound(_) => {
                ApiError::NotFound(msg)
            }
            EngineError::GameIsFull
            | EngineError::GameAlreadyStarted
            | EngineError::CardsAlreadyDealt
            | EngineError::GameNotInProgress
            | EngineError::OtherPlayerTurn(_)
            | EngineError::DuplicateName(_) => ApiError::Conflict(msg),
            EngineError::EmptyName | EngineError::Config(_) => ApiError::BadRequest(msg),
            EngineError::Internal(_) => ApiError::Internal(msg),
        }
    }
}
