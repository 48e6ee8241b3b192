//! Движок блэкджека для одного стола.
//!
//! Библиотека без собственного I/O: хост (web-слой, CLI) подаёт команды,
//! хранит снимки между запросами и рендерит наблюдаемое состояние.
//!
//! Слои:
//! - `domain` — карты, башмак, руки, позиции, итоги раунда;
//! - `engine` — машина состояний раунда и расчёт банкролла;
//! - `infra` — RNG и хранилище снимков;
//! - `api` — команды/запросы/DTO для хоста;
//! - `state` — явный снимок игры для сессии.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod state;
