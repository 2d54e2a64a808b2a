use core::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::deck::{Deck, DeckStep};
use crate::domain::hand::Hand;
use crate::domain::player::Player;
use crate::domain::{PlayerId, TableId};

/// Индекс места за столом (0..max_seats-1). Руке места соответствует индекс `seat + 1`.
pub type SeatIndex = usize;

/// Индекс руки дилера в `Table::hands`.
pub const DEALER_HAND: usize = 0;

/// Уведомление наблюдателей об изменении стола.
///
/// Вызывается после каждой успешной мутации. Движок не ждёт результата
/// и не реагирует на сбои доставки (это забота транспорта).
///
/// Через `TableManager` нотификатор вызывается уже после снятия блокировки
/// стола, поэтому из него можно читать стол через тот же реестр.
/// При прямой работе с `engine::*` вызов идёт, пока вызывающий держит `&mut Table`.
pub trait Notifier: Send + Sync {
    fn notify(&self);
}

/// Любое замыкание без аргументов годится как нотификатор.
impl<F> Notifier for F
where
    F: Fn() + Send + Sync,
{
    fn notify(&self) {
        self()
    }
}

/// Состояние стола. Переходы только вперёд, без пропусков.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TableState {
    #[default]
    WaitingForPlayers,
    CardsDealt,
    Finished,
}

/// Ошибки конфигурации стола.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Стол должен иметь хотя бы одно место")]
    NoSeats,

    #[error("В колоде {available} карт, на раунд нужно минимум {needed}")]
    DeckTooSmall { needed: usize, available: usize },
}

/// Конфиг стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Максимальное количество игроков (дилер не считается).
    pub max_seats: usize,
    /// Стартовый стек каждого нового игрока.
    pub starting_chips: Chips,
    /// Шаги построения колоды, применяются по порядку.
    pub deck: Vec<DeckStep>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_seats: 1,
            starting_chips: Chips::STARTING_STAKE,
            deck: vec![DeckStep::Shuffle],
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_seats == 0 {
            return Err(ConfigError::NoSeats);
        }
        Ok(())
    }

    /// Сколько карт нужно на один раунд при полном столе:
    /// по две каждой руке (с дилером) + по одному hit на игрока.
    pub fn min_deck_len(&self) -> usize {
        2 * (self.max_seats + 1) + self.max_seats
    }

    /// Проверить, что построенной колоды хватит на раунд.
    pub fn check_deck(&self, deck: &Deck) -> Result<(), ConfigError> {
        let needed = self.min_deck_len();
        if deck.len() < needed {
            return Err(ConfigError::DeckTooSmall {
                needed,
                available: deck.len(),
            });
        }
        Ok(())
    }
}

/// Основное состояние стола (агрегат).
///
/// Инвариант: `hands.len() == players.len() + 1` после любой мутации.
/// Мутирует стол только engine (`engine::game_loop`).
#[derive(Clone)]
pub struct Table {
    pub id: TableId,
    pub config: TableConfig,
    pub deck: Deck,
    /// `hands[0]` – дилер, `hands[i + 1]` – игрок на месте `i`.
    pub hands: Vec<Hand>,
    /// Порядок вставки = порядок мест.
    pub players: Vec<Player>,
    pub state: TableState,
    /// Указатель хода, с единицы (ноль – дилер, который не ходит).
    pub current_player: usize,
    notifier: Option<Arc<dyn Notifier>>,
}

impl Table {
    /// Создать пустой стол с готовой колодой.
    pub fn new(
        id: TableId,
        config: TableConfig,
        deck: Deck,
        notifier: Option<Arc<dyn Notifier>>,
    ) -> Self {
        Self {
            id,
            config,
            deck,
            hands: vec![Hand::new()],
            players: Vec::new(),
            state: TableState::WaitingForPlayers,
            current_player: 1,
            notifier,
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.config.max_seats
    }

    pub fn is_finished(&self) -> bool {
        self.state == TableState::Finished
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.hands[DEALER_HAND]
    }

    pub fn player_hand(&self, seat: SeatIndex) -> Option<&Hand> {
        self.hands.get(seat + 1)
    }

    pub fn seat_of(&self, player_id: PlayerId) -> Option<SeatIndex> {
        self.players.iter().position(|p| p.id == player_id)
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Место, чей сейчас ход (если раздача идёт).
    pub fn current_seat(&self) -> Option<SeatIndex> {
        match self.state {
            TableState::CardsDealt => Some(self.current_player - 1),
            _ => None,
        }
    }

    pub fn set_notifier(&mut self, notifier: Option<Arc<dyn Notifier>>) {
        self.notifier = notifier;
    }

    /// Снять нотификатор со стола (реестр вызывает его сам, уже без блокировки).
    pub(crate) fn take_notifier(&mut self) -> Option<Arc<dyn Notifier>> {
        self.notifier.take()
    }

    /// Дёрнуть нотификатор, если он задан.
    pub(crate) fn notify(&self) {
        if let Some(n) = &self.notifier {
            n.notify();
        }
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("deck_len", &self.deck.len())
            .field("hands", &self.hands)
            .field("players", &self.players)
            .field("state", &self.state)
            .field("current_player", &self.current_player)
            .field("has_notifier", &self.notifier.is_some())
            .finish()
    }
}
