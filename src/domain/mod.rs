//! Доменная модель блэкджека: карты, башмак, руки, позиции, итоги раунда.

pub mod card;
pub mod chips;
pub mod hand;
pub mod position;
pub mod round;
pub mod shoe;

/// Индекс позиции игрока в раунде (0 — первая рука, 1 — рука после сплита).
pub type PositionIndex = u8;
/// Сквозной номер раунда в рамках одной сессии.
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use hand::*;
pub use position::*;
pub use round::*;
pub use shoe::*;
