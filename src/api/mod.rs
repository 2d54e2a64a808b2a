//! Внешний API движка блэкджека.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (создать стол, посадить игрока, действие игрока);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент.
//!
//! Сам транспорт (HTTP, gRPC, websocket) живёт снаружи крейта.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
