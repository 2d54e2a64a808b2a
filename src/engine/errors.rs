use crate::domain::{ConfigError, PlayerId, TableId};

use thiserror::Error;

/// Ошибки движка блэкджека.
///
/// Все ошибки – нарушение предусловий со стороны вызывающего.
/// Движок ничего не повторяет сам, ретраить тоже нечего.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Стол {0} не найден")]
    TableNotFound(TableId),

    #[error("Игрок {0} не найден за столом")]
    PlayerNotFound(PlayerId),

    #[error("Все места за столом заняты")]
    GameIsFull,

    #[error("Игра уже началась")]
    GameAlreadyStarted,

    #[error("Карты уже розданы")]
    CardsAlreadyDealt,

    #[error("Раунд не идёт")]
    GameNotInProgress,

    #[error("Сейчас не ход игрока с id={0}")]
    OtherPlayerTurn(PlayerId),

    #[error("Игрок с именем {0:?} уже сидит за столом")]
    DuplicateName(String),

    #[error("Имя игрока не может быть пустым")]
    EmptyName,

    #[error("Некорректный конфиг стола: {0}")]
    Config(#[from] ConfigError),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

impl EngineError {
    /// Промах поиска стола или игрока.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EngineError::TableNotFound(_) | EngineError::PlayerNotFound(_)
        )
    }
}
