use std::sync::mpsc::Sender;
use std::sync::Mutex;

use tracing::warn;

use crate::domain::table::Notifier;
use crate::domain::TableId;

/// Нотификатор, который шлёт id изменившегося стола в канал.
///
/// Транспорт (например, websocket-рассылка) читает канал и сам решает,
/// кому и что отправить. Если получатель ушёл – просто пишем в лог.
#[derive(Debug)]
pub struct ChannelNotifier {
    table_id: TableId,
    sender: Mutex<Sender<TableId>>,
}

impl ChannelNotifier {
    pub fn new(table_id: TableId, sender: Sender<TableId>) -> Self {
        Self {
            table_id,
            sender: Mutex::new(sender),
        }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self) {
        let Ok(sender) = self.sender.lock() else {
            warn!(table_id = self.table_id, "notifier lock poisoned");
            return;
        };
        if sender.send(self.table_id).is_err() {
            warn!(table_id = self.table_id, "state update receiver is gone");
        }
    }
}
