use serde::{Deserialize, Serialize};

use crate::domain::position::Position;
use crate::domain::PositionIndex;
use crate::engine::round::Game;
use crate::infra::persistence::{GameStorage, SessionId};

use super::dto::{map_card_to_dto, DealerViewDto, GameViewDto, PositionViewDto};

/// Запросы «только чтение».
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Получить состояние игры сессии.
    GetGame { session_id: SessionId },
}

/// Результат запроса «только чтение».
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Game(GameViewDto),
    /// У сессии нет игры (не начиналась или была сброшена).
    NoGame,
}

/// Ответить на запрос, подняв снимок игры из хранилища.
pub fn answer_query<S: GameStorage>(storage: &S, query: Query) -> QueryResponse {
    match query {
        Query::GetGame { session_id } => match storage.load_game(session_id) {
            Some(snapshot) => QueryResponse::Game(build_game_view(&snapshot.into_game())),
            None => QueryResponse::NoGame,
        },
    }
}

/// Сформировать DTO игры.
///
/// Пока раунд не рассчитан, закрытые карты маскируются и очки дилера
/// считаются только по видимым картам; после расчёта фронт видит всё.
/// Маскировка живёт здесь, на сборке DTO — состояние карт не трогается.
pub fn build_game_view(game: &Game) -> GameViewDto {
    let reveal_hidden = game.finished();

    let positions = game
        .positions
        .iter()
        .enumerate()
        .map(|(idx, pos)| build_position_dto(idx as PositionIndex, pos, reveal_hidden))
        .collect();

    let dealer_cards = game
        .dealer
        .hand
        .cards
        .iter()
        .map(|c| map_card_to_dto(c, reveal_hidden))
        .collect();

    let visible_value = if reveal_hidden {
        game.dealer.hand_value()
    } else {
        game.dealer
            .hand
            .cards
            .iter()
            .filter(|c| c.face_up)
            .map(|c| c.point_value())
            .sum()
    };

    GameViewDto {
        round_id: game.round_id,
        phase: game.phase,
        bankroll: game.bankroll,
        shoe_remaining: game.shoe.len() as u32,
        positions,
        dealer: DealerViewDto {
            cards: dealer_cards,
            visible_value,
            bust: game.dealer.bust,
        },
        finished: game.finished(),
        result: game.result.map(|outcome| outcome.to_string()),
    }
}

/// Собрать DTO одной позиции игрока.
fn build_position_dto(index: PositionIndex, pos: &Position, reveal_hidden: bool) -> PositionViewDto {
    PositionViewDto {
        position: index,
        cards: pos
            .hand
            .cards
            .iter()
            .map(|c| map_card_to_dto(c, reveal_hidden))
            .collect(),
        hand_value: pos.hand_value(),
        bet: pos.bet_amount(),
        bust: pos.bust,
        playable: pos.playable,
    }
}
