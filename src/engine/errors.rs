use crate::domain::PositionIndex;

use thiserror::Error;

/// Ошибки движка блэкджека.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("В башмаке закончились карты")]
    OutOfCards,

    #[error("Позиция {0} не существует в этом раунде")]
    InvalidPosition(PositionIndex),

    #[error("Раунд не начат — сначала сделайте ставку")]
    NoActiveRound,

    #[error("Раунд уже рассчитан — начните следующий новой ставкой")]
    RoundFinished,
}
