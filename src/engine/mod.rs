//! Движок блэкджека: ставка, ходы позиций, добор дилера, расчёт банкролла.
//!
//! Высокоуровневый объект: `Game`
//! Основные операции:
//!   - `place_bet` – начать раунд новой ставкой
//!   - `submit_move` – применить ход игрока по внешнему имени
//!   - `apply_move` – применить типизированный ход

pub mod actions;
pub mod errors;
pub mod history;
pub mod round;

pub use actions::Move;
pub use errors::EngineError;
pub use history::{RoundEvent, RoundEventKind, RoundHistory};
pub use round::{apply_move, place_bet, submit_move, Game, RoundStatus};

/// RNG интерфейс для engine.
/// Реализации живут в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
