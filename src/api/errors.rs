use serde::{Deserialize, Serialize};

use crate::engine::EngineError;
use crate::infra::persistence::SessionId;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// У сессии нет игры — сначала нужна ставка.
    SessionNotFound(SessionId),

    /// Ошибка движка (ставка, ход, индекс позиции).
    EngineError(String),

    /// Внутренняя ошибка сервера.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::EngineError(err.to_string())
    }
}
