use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::position::Position;
use crate::domain::round::{RoundOutcome, RoundPhase};
use crate::domain::shoe::Shoe;
use crate::domain::RoundId;
use crate::engine::history::RoundHistory;
use crate::engine::round::Game;

/// Снимок игры для хранения между запросами хоста.
///
/// Это «замороженная» сессия: явный список полей вместо сериализации
/// живого `Game`, чтобы формат хранения был виден целиком в одном месте.
/// В снимок входит всё наблюдаемое состояние, включая порядок остатка
/// башмака и флаги видимости уже разданных карт (закрытая карта дилера —
/// контракт интерфейса).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameSnapshot {
    pub shoe: Shoe,
    pub positions: Vec<Position>,
    pub dealer: Position,
    pub bankroll: Chips,
    pub phase: RoundPhase,
    pub result: Option<RoundOutcome>,
    pub round_id: RoundId,
    pub history: RoundHistory,
}

impl GameSnapshot {
    /// Упаковать живую игру в снимок для хранения.
    pub fn from_game(game: &Game) -> Self {
        Self {
            shoe: game.shoe.clone(),
            positions: game.positions.clone(),
            dealer: game.dealer.clone(),
            bankroll: game.bankroll,
            phase: game.phase,
            result: game.result,
            round_id: game.round_id,
            history: game.history.clone(),
        }
    }

    /// Развернуть снимок обратно в игру (в памяти).
    pub fn into_game(self) -> Game {
        Game {
            shoe: self.shoe,
            positions: self.positions,
            dealer: self.dealer,
            bankroll: self.bankroll,
            phase: self.phase,
            result: self.result,
            round_id: self.round_id,
            history: self.history,
        }
    }

    /// Непрозрачный блоб для сессии хоста.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Восстановить снимок из блоба. Побитовая точность полей — контракт:
    /// восстановленная игра неотличима от исходной.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
