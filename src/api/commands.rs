use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::table::{Notifier, TableConfig};
use crate::domain::{PlayerId, TableId};
use crate::engine::{PlayerAction, PlayerActionKind, RandomSource, TableManager};
use crate::infra::mapping::{map_player_to_dto, map_table_to_dto};

use super::dto::CommandResponse;
use super::errors::ApiError;

/// Команда верхнего уровня: всё, что меняет состояние.
///
/// Один вариант = один эндпоинт транспорта (REST / gRPC).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать новый стол.
    CreateTable(CreateTableCommand),

    /// Посадить игрока за стол.
    AddPlayer(AddPlayerCommand),

    /// Убрать игрока из-за стола (до раздачи).
    RemovePlayer(RemovePlayerCommand),

    /// Переключить готовность игрока.
    ToggleReady(ToggleReadyCommand),

    /// Действие игрока в раунде.
    PlayerAction(PlayerActionCommand),
}

/// Команда создания стола.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreateTableCommand {
    /// `None` – конфиг по умолчанию (одно место, одна перемешанная колода).
    pub config: Option<TableConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddPlayerCommand {
    pub table_id: TableId,
    pub player_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemovePlayerCommand {
    pub table_id: TableId,
    pub player_id: PlayerId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToggleReadyCommand {
    pub table_id: TableId,
    pub player_id: PlayerId,
}

/// Действие игрока. `action` приходит строкой: "hit" / "stand".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerActionCommand {
    pub table_id: TableId,
    pub player_id: PlayerId,
    pub action: String,
}

/// Выполнить команду над реестром столов.
///
/// `make_notifier` вызывается только для `CreateTable`: транспорт привязывает
/// к новому столу свою рассылку обновлений.
pub fn execute<R, F>(
    manager: &TableManager,
    rng: &mut R,
    command: Command,
    make_notifier: F,
) -> Result<CommandResponse, ApiError>
where
    R: RandomSource,
    F: FnOnce(TableId) -> Option<Arc<dyn Notifier>>,
{
    match command {
        Command::CreateTable(cmd) => {
            let config = cmd.config.unwrap_or_default();
            let table_id = manager.create_table(config, rng, make_notifier)?;
            debug!(table_id, "created a new table");
            Ok(CommandResponse::TableCreated { table_id })
        }
        Command::AddPlayer(cmd) => {
            let player = manager.add_player(cmd.table_id, rng, &cmd.player_name)?;
            Ok(CommandResponse::PlayerAdded {
                player_id: player.id,
            })
        }
        Command::RemovePlayer(cmd) => {
            manager.remove_player(cmd.table_id, cmd.player_id)?;
            Ok(CommandResponse::PlayerRemoved)
        }
        Command::ToggleReady(cmd) => {
            let player = manager.toggle_ready(cmd.table_id, cmd.player_id)?;
            Ok(CommandResponse::Player(map_player_to_dto(&player)))
        }
        Command::PlayerAction(cmd) => {
            let kind: PlayerActionKind = cmd.action.parse().map_err(ApiError::BadRequest)?;
            manager.apply_action(
                cmd.table_id,
                PlayerAction {
                    player_id: cmd.player_id,
                    kind,
                },
            )?;
            let view = manager.with_table(cmd.table_id, map_table_to_dto)?;
            Ok(CommandResponse::TableState(view))
        }
    }
}
