use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Hand;

/// Роль позиции за столом.
///
/// Один тип записи на обе роли; различия в поведении (набор доступных
/// ходов, правило добора дилера) разруливает engine матчем по роли.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    /// Игрок: ставка, stay / double_bet / split_hand / take_card.
    Human,
    /// Дилер: без ставки, фиксированный добор до 17.
    Dealer,
}

/// Одна игровая позиция: рука, ставка (только у игрока) и флаги состояния.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub role: Role,
    pub hand: Hand,
    /// Ставка позиции. У дилера всегда `None`.
    pub bet: Option<Chips>,
    /// Перебор (> 21). Однажды взведённый флаг не сбрасывается до
    /// следующего раунда.
    pub bust: bool,
    /// Позиция ещё может ходить. Гаснет навсегда при переборе или stay.
    pub playable: bool,
}

impl Position {
    /// Позиция игрока с начальной ставкой.
    pub fn human(bet: Chips) -> Self {
        Self {
            role: Role::Human,
            hand: Hand::new(),
            bet: Some(bet),
            bust: false,
            playable: true,
        }
    }

    /// Позиция дилера.
    pub fn dealer() -> Self {
        Self {
            role: Role::Dealer,
            hand: Hand::new(),
            bet: None,
            bust: false,
            playable: true,
        }
    }

    /// Очки руки позиции.
    pub fn hand_value(&self) -> u32 {
        self.hand.value()
    }

    /// Ставка позиции; для дилера — ноль.
    pub fn bet_amount(&self) -> Chips {
        self.bet.unwrap_or(Chips::ZERO)
    }

    /// Пересчитать перебор. Идемпотентно и монотонно: флаги только
    /// взводятся, обратного пути нет.
    pub fn check_value(&mut self) {
        if self.hand.value() > 21 {
            self.bust = true;
            self.playable = false;
        }
    }

    /// Позиция «в игре»: ещё может ходить и не перебрала.
    pub fn is_in_play(&self) -> bool {
        self.playable && !self.bust
    }
}
