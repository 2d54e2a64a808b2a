use crate::domain::card::{Card, Rank};

/// Лучшая сумма очков.
pub const BLACKJACK: u32 = 21;

/// Очки руки.
///
/// Сначала каждый туз считается за 11 (1 + 10 "мягкого" кредита),
/// затем, пока сумма больше 21, по одному тузу переводим в 1.
/// Масть на очки не влияет, порядок карт – тоже.
pub fn score(cards: &[Card]) -> u32 {
    let mut total = 0;
    let mut soft_aces = 0;

    for card in cards {
        total += card.rank.pip_value();
        if card.rank == Rank::Ace {
            total += 10;
            soft_aces += 1;
        }
    }

    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    total
}

/// Перебор.
pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > BLACKJACK
}

/// Натуральный блэкджек: ровно две карты, туз + десятка/картинка.
/// Трёхкарточные 21 натуральными не считаются.
pub fn is_natural(cards: &[Card]) -> bool {
    match cards {
        [a, b] => {
            (a.rank == Rank::Ace && b.rank.is_ten_valued())
                || (b.rank == Rank::Ace && a.rank.is_ten_valued())
        }
        _ => false,
    }
}
