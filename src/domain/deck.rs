use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardPattern, Rank, Suit};

/// Шаг конфигурации колоды.
///
/// Шаги применяются строго по порядку (см. `engine::build_deck`).
/// Перемешивание требует RNG, поэтому `Shuffle` выполняет engine,
/// остальные шаги – детерминированные методы `Deck`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "step", content = "arg", rename_all = "snake_case")]
pub enum DeckStep {
    /// Перемешать текущую последовательность.
    Shuffle,
    /// Добавить n джокеров и пересортировать.
    AddJokers(u8),
    /// Выкинуть все карты, подходящие хотя бы под один шаблон.
    Filter(Vec<CardPattern>),
    /// Размножить текущую последовательность n раз и пересортировать.
    Multiply(usize),
}

/// Колода карт. Упорядоченный список, голова (`cards[0]`) – следующая карта.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Spades A..K, Diamonds A..K, Clubs A..K, Hearts A..K.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::STANDARD {
            for rank in Rank::STANDARD {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Колода из заранее заданных карт (голова списка уходит первой).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту с головы колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        Some(self.cards.remove(0))
    }

    /// Стабильная сортировка по (масть, ранг).
    pub fn sort(&mut self) {
        self.cards.sort_by_key(|c| (c.suit, c.rank));
    }

    /// Стабильная сортировка произвольным компаратором.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Card, &Card) -> Ordering,
    {
        self.cards.sort_by(compare);
    }

    /// Добавить `n` джокеров (теги 0..n) и пересортировать.
    pub fn add_jokers(&mut self, n: u8) {
        for tag in 0..n {
            self.cards.push(Card::joker(tag));
        }
        self.sort();
    }

    /// Убрать все карты, которые подходят под любой из шаблонов.
    pub fn filter(&mut self, patterns: &[CardPattern]) {
        self.cards.retain(|c| !patterns.iter().any(|p| p.matches(c)));
    }

    /// Размножить текущую последовательность до `n` копий и пересортировать.
    /// `n <= 1` оставляет колоду как есть (кроме сортировки).
    pub fn multiply(&mut self, n: usize) {
        let single = self.cards.clone();
        for _ in 1..n {
            self.cards.extend_from_slice(&single);
        }
        self.sort();
    }
}
