use std::collections::HashMap;

use crate::state::GameSnapshot;

/// Ключ сессии: один снимок игры на сессию хоста.
pub type SessionId = u64;

/// Абстракция хранилища снимков игры.
///
/// Само хранилище (cookie-сессия, БД, память процесса) — забота хоста;
/// эта абстракция нужна:
/// - интеграционным тестам движка,
/// - dev-CLI и любому локальному хосту.
///
/// Хост обязан сериализовать доступ к сессии сам: два одновременных
/// запроса к одному `SessionId` этим слоем не разруливаются.
pub trait GameStorage {
    /// Загрузить снимок игры для сессии (если он есть).
    fn load_game(&self, id: SessionId) -> Option<GameSnapshot>;

    /// Сохранить / очистить снимок. `None` — сброс сессии: следующая
    /// ставка начнёт игру с чистого состояния.
    fn save_game(&mut self, id: SessionId, snapshot: Option<GameSnapshot>);
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryGameStorage {
    games: HashMap<SessionId, GameSnapshot>,
}

impl InMemoryGameStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameStorage for InMemoryGameStorage {
    fn load_game(&self, id: SessionId) -> Option<GameSnapshot> {
        self.games.get(&id).cloned()
    }

    fn save_game(&mut self, id: SessionId, snapshot: Option<GameSnapshot>) {
        if let Some(s) = snapshot {
            self.games.insert(id, s);
        } else {
            self.games.remove(&id);
        }
    }
}
