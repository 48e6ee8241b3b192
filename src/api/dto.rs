use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::round::{RoundPhase, RoundSummary};
use crate::domain::{PositionIndex, RoundId};
use crate::engine::RoundStatus;

/// DTO карты.
///
/// `code` («Ah», «Td») заполняется только для видимых карт: закрытая
/// карта дилера до расчёта раунда наружу не отдаётся, фронт получает
/// рубашку. Сам флаг `face_up` отражает состояние карты, а не маскировку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub code: Option<String>,
    pub face_up: bool,
}

/// DTO позиции игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionViewDto {
    pub position: PositionIndex,
    pub cards: Vec<CardDto>,
    pub hand_value: u32,
    pub bet: Chips,
    pub bust: bool,
    pub playable: bool,
}

/// DTO дилера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealerViewDto {
    pub cards: Vec<CardDto>,
    /// Очки по видимым картам; после расчёта раунда — по всей руке.
    pub visible_value: u32,
    pub bust: bool,
}

/// DTO всей игры — то, что рендерит фронт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub round_id: RoundId,
    pub phase: RoundPhase,
    pub bankroll: Chips,
    /// Сколько карт осталось в башмаке.
    pub shoe_remaining: u32,
    pub positions: Vec<PositionViewDto>,
    pub dealer: DealerViewDto,
    pub finished: bool,
    /// Итоговый ярлык («Human won» и т.п.), когда раунд рассчитан.
    pub result: Option<String>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных (сброс сессии).
    Ok,

    /// Обновлённое состояние игры — раунд продолжается.
    GameState(GameViewDto),

    /// Раунд рассчитан: состояние игры плюс итоги расчёта.
    RoundFinished {
        game: GameViewDto,
        summary: RoundSummary,
    },
}

/// DTO одной карты с учётом маскировки закрытых карт.
pub fn map_card_to_dto(card: &Card, reveal_hidden: bool) -> CardDto {
    let visible = card.face_up || reveal_hidden;
    CardDto {
        code: if visible { Some(card.to_string()) } else { None },
        face_up: card.face_up,
    }
}

/// Помощник: преобразование RoundStatus движка в DTO-ответ.
pub fn map_round_status_to_response(status: RoundStatus, game_dto: GameViewDto) -> CommandResponse {
    match status {
        RoundStatus::Ongoing => CommandResponse::GameState(game_dto),
        RoundStatus::Finished(summary) => CommandResponse::RoundFinished {
            game: game_dto,
            summary,
        },
    }
}
