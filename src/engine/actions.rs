use serde::{Deserialize, Serialize};

/// Ход игрока. Закрытый набор вариантов вместо строковой диспетчеризации.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Move {
    /// Взять карту из башмака.
    TakeCard,
    /// Остановиться — позиция больше не ходит.
    Stay,
    /// Удвоить текущую ставку. Карта не берётся, ход не заканчивается,
    /// повторное удвоение разрешено.
    DoubleBet,
    /// Разделить стартовую руку на две позиции.
    SplitHand,
}

impl Move {
    /// Разобрать внешнее имя хода (то, что присылает хост).
    /// Неизвестное имя — `None`: по контракту это no-op, а не ошибка.
    pub fn from_name(name: &str) -> Option<Move> {
        match name {
            "take_card" => Some(Move::TakeCard),
            "stay" => Some(Move::Stay),
            "double_bet" => Some(Move::DoubleBet),
            "split_hand" => Some(Move::SplitHand),
            _ => None,
        }
    }

    /// Внешнее имя хода, обратное к `from_name`.
    pub fn name(&self) -> &'static str {
        match self {
            Move::TakeCard => "take_card",
            Move::Stay => "stay",
            Move::DoubleBet => "double_bet",
            Move::SplitHand => "split_hand",
        }
    }
}
