use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PositionIndex;
use crate::engine::round::Game;
use crate::engine::{place_bet, submit_move, RandomSource};
use crate::infra::persistence::{GameStorage, SessionId};
use crate::state::GameSnapshot;

use super::dto::{map_round_status_to_response, CommandResponse};
use super::errors::ApiError;
use super::queries::build_game_view;

/// Команда верхнего уровня.
///
/// Хост превращает входящие запросы в эти команды и применяет их к игре
/// своей сессии через `execute_command` / `execute_for_session`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Начать новый раунд со ставкой.
    PlaceBet(PlaceBetCommand),

    /// Ход игрока в текущем раунде.
    PlayerMove(PlayerMoveCommand),

    /// Сбросить сессию: игра выбрасывается целиком, следующая ставка
    /// начнёт со стартового банкролла.
    ResetSession,
}

/// Команда новой ставки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlaceBetCommand {
    pub amount: Chips,
}

/// Ход игрока.
///
/// Действие передаётся внешним именем (`take_card`, `stay`, `double_bet`,
/// `split_hand`); неизвестное имя — no-op по контракту движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerMoveCommand {
    pub position: PositionIndex,
    pub action: String,
}

/// Применить команду к живой игре.
pub fn execute_command<R: RandomSource>(
    game: &mut Game,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::PlaceBet(cmd) => {
            place_bet(game, rng, cmd.amount)?;
            Ok(CommandResponse::GameState(build_game_view(game)))
        }

        Command::PlayerMove(cmd) => {
            let status = submit_move(game, cmd.position, &cmd.action)?;
            let game_dto = build_game_view(game);
            Ok(map_round_status_to_response(status, game_dto))
        }

        Command::ResetSession => {
            *game = Game::new();
            Ok(CommandResponse::Ok)
        }
    }
}

/// Применить команду к сессии в хранилище: поднять снимок, выполнить,
/// сохранить обратно.
///
/// `PlaceBet` на пустой сессии заводит новую игру; `ResetSession`
/// очищает слот, не поднимая снимка. Остальным командам игра нужна —
/// без неё `SessionNotFound`.
pub fn execute_for_session<S: GameStorage, R: RandomSource>(
    storage: &mut S,
    session_id: SessionId,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    if matches!(command, Command::ResetSession) {
        storage.save_game(session_id, None);
        return Ok(CommandResponse::Ok);
    }

    let mut game = match storage.load_game(session_id) {
        Some(snapshot) => snapshot.into_game(),
        None => {
            if matches!(command, Command::PlaceBet(_)) {
                Game::new()
            } else {
                return Err(ApiError::SessionNotFound(session_id));
            }
        }
    };

    let response = execute_command(&mut game, rng, command)?;
    storage.save_game(session_id, Some(GameSnapshot::from_game(&game)));

    Ok(response)
}
