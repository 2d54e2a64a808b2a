use serde::{Deserialize, Serialize};

use crate::domain::TableId;
use crate::engine::TableManager;
use crate::infra::mapping::map_table_to_dto;

use super::dto::TableViewDto;
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Получить состояние стола.
    GetTable { table_id: TableId },

    /// Получить список столов.
    ListTables,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Table(TableViewDto),
    Tables(Vec<TableViewDto>),
}

pub fn run_query(manager: &TableManager, query: Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetTable { table_id } => {
            let view = manager.with_table(table_id, map_table_to_dto)?;
            Ok(QueryResponse::Table(view))
        }
        Query::ListTables => {
            // Стол могли удалить между чтением списка и чтением стола – пропускаем.
            let views = manager
                .table_ids()
                .into_iter()
                .filter_map(|id| manager.with_table(id, map_table_to_dto).ok())
                .collect();
            Ok(QueryResponse::Tables(views))
        }
    }
}
