use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Рука одной позиции — карты в порядке раздачи (порядок важен для
/// отображения и для протокола сплита).
///
/// Рука только пополняется; единственное исключение — сплит, который
/// переносит последнюю карту в руку новой позиции.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    /// Добавить карту в конец руки.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Сумма очков руки. Пустая рука — 0, на этом держатся проверки
    /// перебора. Туз всегда 11, пересчёта нет.
    pub fn value(&self) -> u32 {
        self.cards.iter().map(|c| c.point_value()).sum()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
