use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Outcome;
use crate::domain::table::TableState;
use crate::domain::{PlayerId, TableId};

/// DTO карты.
///
/// Числовые коды совпадают с фронтом: масти 1..4 (пики, бубны, трефы, червы),
/// ранги 1..13, джокер – ранг 14 и масть = тег джокера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub rank: u8,
    pub suit: u8,
    /// Текстовая форма, например `Ah`.
    pub label: String,
}

/// DTO игрока. Id игрока наружу не отдаём: он работает как секрет места.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDto {
    pub name: String,
    pub is_ready: bool,
    pub chips: Chips,
    pub bet: Chips,
    pub outcome: Outcome,
}

/// DTO стола. Колода наружу не отдаётся.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub table_id: TableId,
    /// `hands[0]` – дилер, дальше места по порядку.
    pub hands: Vec<Vec<CardDto>>,
    pub players: Vec<PlayerDto>,
    pub state: TableState,
    pub current_player: usize,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Создан новый стол.
    TableCreated { table_id: TableId },

    /// Игрок сел за стол. Id нужен клиенту для дальнейших команд.
    PlayerAdded { player_id: PlayerId },

    /// Игрок ушёл из-за стола.
    PlayerRemoved,

    /// Игрок после изменения (например, готовности).
    Player(PlayerDto),

    /// Обновлённое состояние стола.
    TableState(TableViewDto),
}
