use crate::api::dto::{CardDto, PlayerDto, TableViewDto};
use crate::domain::card::{Card, Suit};
use crate::domain::player::Player;
use crate::domain::table::Table;

/// Маппинг карты в DTO с числовыми кодами фронта.
pub fn map_card_to_dto(card: &Card) -> CardDto {
    let suit = match card.suit {
        Suit::Spades => 1,
        Suit::Diamonds => 2,
        Suit::Clubs => 3,
        Suit::Hearts => 4,
        Suit::Joker(tag) => tag,
    };
    CardDto {
        rank: card.rank as u8,
        suit,
        label: card.to_string(),
    }
}

pub fn map_player_to_dto(player: &Player) -> PlayerDto {
    PlayerDto {
        name: player.name.clone(),
        is_ready: player.is_ready,
        chips: player.chips,
        bet: player.bet,
        outcome: player.outcome,
    }
}

/// Утилита: маппинг Table -> TableViewDto.
pub fn map_table_to_dto(table: &Table) -> TableViewDto {
    let hands = table
        .hands
        .iter()
        .map(|h| h.cards().iter().map(map_card_to_dto).collect())
        .collect();

    TableViewDto {
        table_id: table.id,
        hands,
        players: table.players.iter().map(map_player_to_dto).collect(),
        state: table.state,
        current_player: table.current_player,
    }
}
