//! Движок блэкджека: жизненный цикл стола, раздача, ходы, завершение раунда.
//!
//! Основные операции (над `domain::Table`):
//!   - `create_table` – собрать колоду по конфигу и создать пустой стол
//!   - `add_player` / `remove_player` – ростер, пока стол ждёт игроков
//!   - `toggle_ready` – готовность; когда готовы все, стол раздаёт карты
//!   - `deal` – две карты каждой руке, по одной за проход, дилер первым
//!   - `apply_action` – hit/stand; после последнего места – итоги раунда
//!
//! `TableManager` – реестр столов с блокировкой на каждый стол.

pub mod actions;
pub mod errors;
pub mod game_loop;
pub mod shuffle;
pub mod table_manager;

pub use actions::{PlayerAction, PlayerActionKind};
pub use errors::EngineError;
pub use game_loop::{add_player, apply_action, create_table, deal, remove_player, toggle_ready};
pub use shuffle::{build_deck, shuffle};
pub use table_manager::TableManager;

/// RNG интерфейс для engine.
///
/// Реализации лежат в infra: `SystemRng` (криптостойкий, для боя)
/// и `DeterministicRng` (seed, для тестов и реплея).
pub trait RandomSource {
    /// Равномерное число из `0..upper`. `upper` > 0.
    fn gen_index(&mut self, upper: usize) -> usize;

    /// Случайный 64-битный идентификатор.
    fn next_id(&mut self) -> u64;

    /// Ненулевой id, которого ещё нет среди занятых.
    fn fresh_id(&mut self, is_taken: impl Fn(u64) -> bool) -> u64
    where
        Self: Sized,
    {
        loop {
            let id = self.next_id();
            if id != 0 && !is_taken(id) {
                return id;
            }
        }
    }
}
