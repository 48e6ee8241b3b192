use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{PositionIndex, RoundId};

/// Фаза раунда.
///
/// `DealerTurn` проживается синхронно внутри хода, который закрыл
/// последнюю позицию игрока, поэтому в снимке между запросами встречаются
/// только `AwaitingBet`, `PlayerTurn` и `Settled`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    /// Ставка ещё не сделана (свежая сессия).
    AwaitingBet,
    /// Игрок ходит; позиции принимают действия.
    PlayerTurn,
    /// Добор дилера.
    DealerTurn,
    /// Раунд рассчитан; следующий начинается новой ставкой.
    Settled,
}

/// Итоговая классификация раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundOutcome {
    HumanWon,
    DealerWon,
    /// После сплита выиграли обе руки.
    TwoHumansWon,
    /// После сплита выиграла одна рука из двух.
    OneHumanWon,
}

impl fmt::Display for RoundOutcome {
    /// Человекочитаемые ярлыки — внешний контракт, текст фиксирован.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RoundOutcome::HumanWon => "Human won",
            RoundOutcome::DealerWon => "Dealer won",
            RoundOutcome::TwoHumansWon => "2 Humans won",
            RoundOutcome::OneHumanWon => "1 Human won",
        };
        write!(f, "{text}")
    }
}

/// Результат одной позиции игрока в расчёте.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PositionResult {
    pub position: PositionIndex,
    pub bet: Chips,
    pub hand_value: u32,
    pub busted: bool,
    pub is_winner: bool,
    /// Дельта банкролла от этой позиции: +ставка, −ставка или 0.
    pub net: Chips,
}

/// Краткое описание рассчитанного раунда. Удобно для истории/фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub round_id: RoundId,
    pub outcome: RoundOutcome,
    pub dealer_value: u32,
    pub dealer_busted: bool,
    /// Банкролл после применения расчёта.
    pub bankroll_after: Chips,
    pub results: Vec<PositionResult>,
}
