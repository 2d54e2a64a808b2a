use crate::domain::card::Card;
use crate::domain::player::Outcome;
use crate::domain::table::Table;

use super::score::{is_natural, score, BLACKJACK};

/// Сравнить руку игрока с рукой дилера.
///
/// Порядок правил важен: натуральные блэкджеки решают раньше перебора,
/// перебор игрока – раньше перебора дилера.
pub fn determine_outcome(dealer: &[Card], player: &[Card]) -> Outcome {
    let dealer_natural = is_natural(dealer);
    let player_natural = is_natural(player);

    match (player_natural, dealer_natural) {
        (true, true) => return Outcome::Push,
        (true, false) => return Outcome::Win,
        (false, true) => return Outcome::Lose,
        (false, false) => {}
    }

    let player_score = score(player);
    let dealer_score = score(dealer);

    if player_score > BLACKJACK {
        return Outcome::Lose;
    }
    if dealer_score > BLACKJACK {
        return Outcome::Win;
    }

    match player_score.cmp(&dealer_score) {
        std::cmp::Ordering::Greater => Outcome::Win,
        std::cmp::Ordering::Less => Outcome::Lose,
        std::cmp::Ordering::Equal => Outcome::Push,
    }
}

/// Проставить исход каждому игроку стола.
///
/// Каждый игрок сравнивается с одной и той же (замороженной) рукой дилера,
/// поэтому повторный вызов даёт те же результаты.
pub fn resolve_outcomes(table: &mut Table) {
    let dealer = table.dealer_hand().cards.clone();
    for (seat, player) in table.players.iter_mut().enumerate() {
        let hand = &table.hands[seat + 1];
        player.outcome = determine_outcome(&dealer, hand.cards());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(codes: &[&str]) -> Vec<Card> {
        codes.iter().map(|c| c.parse().unwrap()).collect()
    }

    fn outcome(dealer: &[&str], player: &[&str]) -> Outcome {
        determine_outcome(&hand(dealer), &hand(player))
    }

    #[test]
    fn naturals_take_priority() {
        assert_eq!(outcome(&["As", "Kd"], &["Ah", "Tc"]), Outcome::Push);
        assert_eq!(outcome(&["9s", "Kd"], &["Ah", "Jc"]), Outcome::Win);
        assert_eq!(outcome(&["As", "Qd"], &["7h", "7c", "7d"]), Outcome::Lose);
    }

    #[test]
    fn player_bust_loses_even_if_dealer_busts() {
        let dealer = hand(&["Ks", "Qd", "5c"]);
        let player = hand(&["Th", "9c", "5d"]);
        assert_eq!(determine_outcome(&dealer, &player), Outcome::Lose);
    }

    #[test]
    fn dealer_bust_wins_for_player() {
        let dealer = hand(&["Ks", "Qd", "5c"]);
        let player = hand(&["2h", "3c"]);
        assert_eq!(determine_outcome(&dealer, &player), Outcome::Win);
    }

    #[test]
    fn higher_score_wins_equal_pushes() {
        assert_eq!(outcome(&["Ks", "7d"], &["Th", "8c"]), Outcome::Win);
        assert_eq!(outcome(&["Ks", "9d"], &["Th", "8c"]), Outcome::Lose);
        assert_eq!(outcome(&["Ks", "8d"], &["Jh", "8c"]), Outcome::Push);
    }

    #[test]
    fn same_hands_same_outcome() {
        let dealer = hand(&["Ks", "6d"]);
        let player = hand(&["9h", "8c"]);
        let first = determine_outcome(&dealer, &player);
        let second = determine_outcome(&dealer, &player);
        assert_eq!(first, second);
        assert_eq!(first, Outcome::Win);
    }
}
