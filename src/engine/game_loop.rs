use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::domain::player::Player;
use crate::domain::table::{Notifier, Table, TableConfig, TableState};
use crate::domain::{PlayerId, TableId};
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::errors::EngineError;
use crate::engine::shuffle::build_deck;
use crate::engine::RandomSource;
use crate::eval::resolve_outcomes;

/// Создать пустой стол:
/// - проверить конфиг;
/// - собрать колоду по шагам из конфига;
/// - убедиться, что колоды хватит на полный раунд.
pub fn create_table<R: RandomSource>(
    id: TableId,
    config: TableConfig,
    rng: &mut R,
    notifier: Option<Arc<dyn Notifier>>,
) -> Result<Table, EngineError> {
    config.validate()?;
    let deck = build_deck(&config.deck, rng);
    config.check_deck(&deck)?;

    debug!(table_id = id, deck_len = deck.len(), "table created");
    Ok(Table::new(id, config, deck, notifier))
}

/// Посадить нового игрока. Возвращает копию созданного игрока.
pub fn add_player<R: RandomSource>(
    table: &mut Table,
    rng: &mut R,
    name: &str,
) -> Result<Player, EngineError> {
    if table.state != TableState::WaitingForPlayers {
        return Err(EngineError::GameAlreadyStarted);
    }
    if table.is_full() {
        return Err(EngineError::GameIsFull);
    }
    if table.players.iter().any(|p| p.name == name) {
        return Err(EngineError::DuplicateName(name.to_string()));
    }
    if name.trim().is_empty() {
        return Err(EngineError::EmptyName);
    }

    let players = &table.players;
    let id = rng.fresh_id(|candidate| players.iter().any(|p| p.id == candidate));

    let player = Player::new(id, name.to_string(), table.config.starting_chips);
    table.players.push(player.clone());
    table.hands.push(Hand::new());

    debug!(table_id = table.id, player_id = id, name, "player added");
    table.notify();
    Ok(player)
}

/// Убрать игрока (только пока стол ждёт игроков).
/// Относительный порядок остальных мест сохраняется.
pub fn remove_player(table: &mut Table, player_id: PlayerId) -> Result<Player, EngineError> {
    if table.state != TableState::WaitingForPlayers {
        return Err(EngineError::GameAlreadyStarted);
    }
    let seat = table
        .seat_of(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;

    let removed = table.players.remove(seat);
    table.hands.remove(seat + 1);

    debug!(table_id = table.id, player_id, seat, "player removed");
    table.notify();
    Ok(removed)
}

/// Переключить готовность игрока.
///
/// Если после переключения готовы все сидящие игроки – стол сразу раздаёт
/// карты и переходит в `CardsDealt`. Возвращает игрока после изменения.
pub fn toggle_ready(table: &mut Table, player_id: PlayerId) -> Result<Player, EngineError> {
    if table.state != TableState::WaitingForPlayers {
        return Err(EngineError::GameAlreadyStarted);
    }
    let seat = table
        .seat_of(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;

    let player = &mut table.players[seat];
    player.is_ready = !player.is_ready;
    let snapshot = player.clone();

    debug!(
        table_id = table.id,
        player_id,
        is_ready = snapshot.is_ready,
        "player readiness toggled"
    );

    if table.players.iter().all(|p| p.is_ready) {
        if let Err(err) = deal_cards(table) {
            table.players[seat].is_ready = !snapshot.is_ready;
            return Err(err);
        }
    }

    table.notify();
    Ok(snapshot)
}

/// Раздать карты вручную (обычно это делает `toggle_ready`).
pub fn deal(table: &mut Table) -> Result<(), EngineError> {
    if table.state != TableState::WaitingForPlayers {
        return Err(EngineError::CardsAlreadyDealt);
    }
    deal_cards(table)?;
    table.notify();
    Ok(())
}

/// Применить действие игрока. Возвращает состояние стола после хода.
pub fn apply_action(table: &mut Table, action: PlayerAction) -> Result<TableState, EngineError> {
    if table.state != TableState::CardsDealt {
        return Err(EngineError::GameNotInProgress);
    }
    let seat = table
        .seat_of(action.player_id)
        .ok_or(EngineError::PlayerNotFound(action.player_id))?;

    if seat + 1 != table.current_player {
        return Err(EngineError::OtherPlayerTurn(action.player_id));
    }

    match action.kind {
        PlayerActionKind::Hit => {
            let card = draw(&mut table.deck)?;
            table.hands[seat + 1].push(card);
            debug!(
                table_id = table.id,
                player_id = action.player_id,
                %card,
                "player hit"
            );
        }
        PlayerActionKind::Stand => {
            debug!(
                table_id = table.id,
                player_id = action.player_id,
                "player stood"
            );
        }
    }
    table.current_player += 1;

    finish_if_all_acted(table);

    table.notify();
    Ok(table.state)
}

/// Две "круговые" раздачи: за проход каждая рука получает одну карту,
/// дилер (рука 0) первым, затем места по порядку.
///
/// Если карт на всю раздачу не хватает, стол не трогаем вообще.
fn deal_cards(table: &mut Table) -> Result<(), EngineError> {
    if table.deck.len() < 2 * table.hands.len() {
        return Err(EngineError::Internal("deck exhausted"));
    }
    for _round in 0..2 {
        for idx in 0..table.hands.len() {
            let card = draw(&mut table.deck)?;
            table.hands[idx].push(card);
        }
    }
    table.state = TableState::CardsDealt;
    table.current_player = 1;

    info!(
        table_id = table.id,
        players = table.players.len(),
        deck_left = table.deck.len(),
        "cards dealt"
    );

    // Стол без игроков: ходить некому, раунд сразу закончен.
    finish_if_all_acted(table);
    Ok(())
}

/// Все места сходили (дилер не ходит) – раунд окончен, считаем итоги ровно один раз.
fn finish_if_all_acted(table: &mut Table) {
    if table.state == TableState::CardsDealt && table.current_player == table.hands.len() {
        table.state = TableState::Finished;
        resolve_outcomes(table);
        info!(table_id = table.id, "round finished");
    }
}

/// Колоду заранее проверяет `TableConfig::check_deck`, поэтому пустая
/// колода здесь – баг конфигурации, а не игровая ситуация.
fn draw(deck: &mut Deck) -> Result<Card, EngineError> {
    deck.draw_one().ok_or(EngineError::Internal("deck exhausted"))
}
