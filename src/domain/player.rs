use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Итог раунда для игрока.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Раунд ещё не завершён.
    #[default]
    Undecided,
    Win,
    Lose,
    Push,
}

impl Outcome {
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

/// Игрок за конкретным столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Готовность имеет смысл только до раздачи.
    pub is_ready: bool,
    pub chips: Chips,
    /// Ставка – только учёт, логика ходов её не использует.
    pub bet: Chips,
    pub outcome: Outcome,
}

impl Player {
    pub fn new(id: PlayerId, name: String, chips: Chips) -> Self {
        Self {
            id,
            name,
            is_ready: false,
            chips,
            bet: Chips::ZERO,
            outcome: Outcome::Undecided,
        }
    }
}
