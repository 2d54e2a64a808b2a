// src/engine/table_manager.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, warn};

use crate::domain::player::Player;
use crate::domain::table::{Notifier, Table, TableConfig, TableState};
use crate::domain::{PlayerId, TableId};
use crate::engine::{self, EngineError, PlayerAction, RandomSource};

/// Реестр столов процесса.
///
/// - хранит столы по TableId;
/// - у каждого стола свой `Mutex`: операции над одним столом идут строго
///   по очереди, разные столы обрабатываются параллельно;
/// - сама карта столов под `RwLock`, пишем в неё только при создании/удалении.
///
/// Вытеснение "зависших" столов – забота владельца реестра.
#[derive(Default)]
pub struct TableManager {
    tables: RwLock<HashMap<TableId, Arc<Mutex<Table>>>>,
}

impl TableManager {
    /// Создать пустой менеджер.
    pub fn new() -> Self {
        Self::default()
    }

    /// Создать новый стол со свежим случайным id.
    ///
    /// `make_notifier` получает id стола, чтобы транспорт мог привязать
    /// к нему рассылку обновлений.
    pub fn create_table<R, F>(
        &self,
        config: TableConfig,
        rng: &mut R,
        make_notifier: F,
    ) -> Result<TableId, EngineError>
    where
        R: RandomSource,
        F: FnOnce(TableId) -> Option<Arc<dyn Notifier>>,
    {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| EngineError::Internal("table registry lock poisoned"))?;

        let id = rng.fresh_id(|candidate| tables.contains_key(&candidate));
        let table = engine::create_table(id, config, rng, make_notifier(id))?;
        tables.insert(id, Arc::new(Mutex::new(table)));

        debug!(table_id = id, "table registered");
        Ok(id)
    }

    /// Положить готовый стол под его id.
    ///
    /// Конфиг и колоду проверяем так же, как при `create_table`.
    /// Если стол с таким id уже был – заменяем его.
    pub fn insert_table(&self, table: Table) -> Result<TableId, EngineError> {
        table.config.validate()?;
        table.config.check_deck(&table.deck)?;
        let id = table.id;
        let mut tables = self
            .tables
            .write()
            .map_err(|_| EngineError::Internal("table registry lock poisoned"))?;
        tables.insert(id, Arc::new(Mutex::new(table)));
        Ok(id)
    }

    /// Убрать стол из реестра.
    pub fn remove_table(&self, table_id: TableId) -> Result<(), EngineError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| EngineError::Internal("table registry lock poisoned"))?;
        tables
            .remove(&table_id)
            .map(|_| ())
            .ok_or(EngineError::TableNotFound(table_id))
    }

    /// Есть ли стол с таким id.
    pub fn has_table(&self, table_id: TableId) -> bool {
        self.tables
            .read()
            .map(|t| t.contains_key(&table_id))
            .unwrap_or(false)
    }

    /// Все id столов (по возрастанию).
    pub fn table_ids(&self) -> Vec<TableId> {
        let mut ids: Vec<TableId> = self
            .tables
            .read()
            .map(|t| t.keys().copied().collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }

    /// Прочитать стол под его блокировкой.
    pub fn with_table<T>(
        &self,
        table_id: TableId,
        f: impl FnOnce(&Table) -> T,
    ) -> Result<T, EngineError> {
        let entry = self.entry(table_id)?;
        let table = entry
            .lock()
            .map_err(|_| EngineError::Internal("table lock poisoned"))?;
        Ok(f(&table))
    }

    /// Изменить стол под его блокировкой.
    ///
    /// Нотификатор стола на время `f` снимается и после успешной операции
    /// вызывается один раз, когда блокировка уже отпущена.
    /// Отказ движка логируем здесь: это граница, за которой ошибку
    /// увидит только транспорт.
    pub fn with_table_mut<T>(
        &self,
        table_id: TableId,
        f: impl FnOnce(&mut Table) -> Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        let entry = self.entry(table_id)?;
        let (res, notifier) = {
            let mut table = entry
                .lock()
                .map_err(|_| EngineError::Internal("table lock poisoned"))?;

            let notifier = table.take_notifier();
            let res = f(&mut table);
            table.set_notifier(notifier.clone());
            (res, notifier)
        };

        match &res {
            Ok(_) => {
                if let Some(n) = notifier {
                    n.notify();
                }
            }
            Err(err) => warn!(table_id, error = %err, "table operation rejected"),
        }
        res
    }

    /// Копия стола (для DTO и тестов).
    pub fn snapshot(&self, table_id: TableId) -> Result<Table, EngineError> {
        self.with_table(table_id, Table::clone)
    }

    pub fn add_player<R: RandomSource>(
        &self,
        table_id: TableId,
        rng: &mut R,
        name: &str,
    ) -> Result<Player, EngineError> {
        self.with_table_mut(table_id, |t| engine::add_player(t, rng, name))
    }

    pub fn remove_player(
        &self,
        table_id: TableId,
        player_id: PlayerId,
    ) -> Result<Player, EngineError> {
        self.with_table_mut(table_id, |t| engine::remove_player(t, player_id))
    }

    pub fn toggle_ready(
        &self,
        table_id: TableId,
        player_id: PlayerId,
    ) -> Result<Player, EngineError> {
        self.with_table_mut(table_id, |t| engine::toggle_ready(t, player_id))
    }

    pub fn deal(&self, table_id: TableId) -> Result<(), EngineError> {
        self.with_table_mut(table_id, engine::deal)
    }

    /// Применить действие игрока на конкретном столе.
    pub fn apply_action(
        &self,
        table_id: TableId,
        action: PlayerAction,
    ) -> Result<TableState, EngineError> {
        self.with_table_mut(table_id, |t| engine::apply_action(t, action))
    }

    fn entry(&self, table_id: TableId) -> Result<Arc<Mutex<Table>>, EngineError> {
        let tables = self
            .tables
            .read()
            .map_err(|_| EngineError::Internal("table registry lock poisoned"))?;
        tables
            .get(&table_id)
            .cloned()
            .ok_or(EngineError::TableNotFound(table_id))
    }
}
