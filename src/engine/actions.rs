use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// Тип действия игрока. Сплита, дабла и страховки нет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlayerActionKind {
    /// Взять карту.
    Hit,
    /// Остановиться.
    Stand,
}

impl FromStr for PlayerActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hit" => Ok(PlayerActionKind::Hit),
            "stand" => Ok(PlayerActionKind::Stand),
            other => Err(format!("Unknown action: {other}")),
        }
    }
}

/// Конкретное действие игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// Какой игрок действует.
    pub player_id: PlayerId,
    /// Само действие.
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn hit(player_id: PlayerId) -> Self {
        Self {
            player_id,
            kind: PlayerActionKind::Hit,
        }
    }

    pub fn stand(player_id: PlayerId) -> Self {
        Self {
            player_id,
            kind: PlayerActionKind::Stand,
        }
    }
}
