use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::round::RoundOutcome;
use crate::domain::{PositionIndex, RoundId};
use crate::engine::actions::Move;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Новый раунд начался со ставкой.
    RoundStarted { round_id: RoundId, bet: Chips },

    /// Позиция игрока получила карту при стартовой раздаче.
    CardDealt {
        position: PositionIndex,
        card: Card,
    },

    /// Дилер получил стартовые карты (первая закрытая, вторая открытая).
    DealerCardsDealt { cards: Vec<Card> },

    /// Выполненный ход игрока. No-op'ы (неизвестные имена, пустой башмак
    /// при take_card, сплит вне канона) сюда не записываются.
    PlayerActed {
        position: PositionIndex,
        action: Move,
        hand_value_after: u32,
    },

    /// Сплит: последняя карта стартовой руки ушла в новую позицию.
    HandSplit {
        from_position: PositionIndex,
        new_position: PositionIndex,
        moved: Card,
        bet: Chips,
    },

    /// Дилер добрал карту.
    DealerDrew { card: Card, value_after: u32 },

    /// Дилер остановился (17 и больше либо пустой башмак).
    DealerStood { value: u32 },

    /// Раунд рассчитан.
    RoundSettled {
        outcome: RoundOutcome,
        bankroll_after: Chips,
    },
}

/// Событие раунда с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда. Сбрасывается при каждой новой ставке.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }
}
