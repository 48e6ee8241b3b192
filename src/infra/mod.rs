//! Инфраструктурный слой вокруг движка блэкджека:
//! - RNG-реализации для engine;
//! - абстракция хранения снимков (хост / тесты).

pub mod persistence;
pub mod rng;

pub use persistence::{GameStorage, InMemoryGameStorage, SessionId};
pub use rng::*;
