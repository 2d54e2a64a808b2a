//! Движок блэкджека для хостящихся однотабличных сессий.
//!
//! Слои:
//! - `domain` – карты, колода, руки, игроки, стол (данные);
//! - `eval` – очки руки, натуральный блэкджек, исходы раунда;
//! - `engine` – автомат состояний стола и реестр столов;
//! - `infra` – RNG, нотификаторы, маппинг в DTO;
//! - `api` – команды/запросы/DTO/ошибки для транспорта.
//!
//! Транспорт (HTTP, gRPC, websocket) в крейт не входит: он вызывает
//! `api::execute` / `api::run_query` и сериализует ответы.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
