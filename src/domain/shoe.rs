use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Башмак на одну 52-карточную колоду. В домене — просто упорядоченный
/// список карт. Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shoe {
    pub cards: Vec<Card>,
}

impl Shoe {
    /// Полный башмак в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    /// Каждая пара (ранг, масть) встречается ровно один раз.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Shoe { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Выдать одну карту сверху башмака с нужной видимостью.
    /// `None` — башмак пуст; карту-заглушку отсюда получить нельзя.
    pub fn draw(&mut self, face_up: bool) -> Option<Card> {
        self.cards.pop().map(|mut card| {
            card.face_up = face_up;
            card
        })
    }
}
