use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Масть карты.
///
/// Порядок объявления = порядок сортировки колоды.
/// Джокеры не имеют настоящей масти: вместо неё – порядковый тег,
/// чтобы несколько джокеров в одной колоде различались.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Spades,   // ♠
    Diamonds, // ♦
    Clubs,    // ♣
    Hearts,   // ♥
    Joker(u8),
}

impl Suit {
    /// Четыре обычные масти в порядке построения колоды.
    pub const STANDARD: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];
}

/// Ранг карты. Численное значение = номинал (Ace = 1 для "сырой" арифметики).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Joker,
}

impl Rank {
    /// Ранги одной стандартной колоды (без джокера), Ace..King.
    pub const STANDARD: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Очки карты в блэкджеке: туз = 1 (мягкий туз считает eval),
    /// картинки = 10, джокер не считается.
    pub const fn pip_value(self) -> u32 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Joker => 0,
            r => r as u32,
        }
    }

    /// Десятка или картинка.
    pub const fn is_ten_valued(self) -> bool {
        matches!(self, Rank::Ten | Rank::Jack | Rank::Queen | Rank::King)
    }
}

/// Карта. Неизменяемое значение.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Джокер с порядковым тегом.
    pub const fn joker(tag: u8) -> Self {
        Self {
            rank: Rank::Joker,
            suit: Suit::Joker(tag),
        }
    }

    pub fn is_joker(&self) -> bool {
        self.rank == Rank::Joker
    }
}

/// Шаблон для фильтрации колоды.
///
/// `None` в поле = "любой ранг" / "любая масть".
/// В розданных руках шаблоны не встречаются.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardPattern {
    pub rank: Option<Rank>,
    pub suit: Option<Suit>,
}

impl CardPattern {
    /// Конкретная карта.
    pub const fn exact(rank: Rank, suit: Suit) -> Self {
        Self {
            rank: Some(rank),
            suit: Some(suit),
        }
    }

    /// Все карты данного ранга.
    pub const fn any_suit(rank: Rank) -> Self {
        Self {
            rank: Some(rank),
            suit: None,
        }
    }

    /// Все карты данной масти.
    pub const fn any_rank(suit: Suit) -> Self {
        Self {
            rank: None,
            suit: Some(suit),
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        if let Some(rank) = self.rank {
            if card.rank != rank {
                return false;
            }
        }
        if let Some(suit) = self.suit {
            if card.suit != suit {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Spades => write!(f, "s"),
            Suit::Diamonds => write!(f, "d"),
            Suit::Clubs => write!(f, "c"),
            Suit::Hearts => write!(f, "h"),
            Suit::Joker(tag) => write!(f, "{tag}"),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Rank::Ace => 'A',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Joker => 'X',
            r => char::from_digit(*r as u32, 10).unwrap_or('?'),
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`, джокер – `X0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "Ah", "Td", "7c", "X0".
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (r_ch, rest) = match chars.next() {
            Some(ch) => (ch, chars.as_str()),
            None => return Err("Card string must not be empty".into()),
        };

        if r_ch == 'X' || r_ch == 'x' {
            let tag = rest
                .parse::<u8>()
                .map_err(|_| format!("Invalid joker tag: {rest}"))?;
            return Ok(Card::joker(tag));
        }

        if rest.chars().count() != 1 {
            return Err("Card string must have length 2".into());
        }

        let rank = match r_ch {
            'A' | 'a' => Rank::Ace,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' | 't' => Rank::Ten,
            'J' | 'j' => Rank::Jack,
            'Q' | 'q' => Rank::Queen,
            'K' | 'k' => Rank::King,
            _ => return Err(format!("Invalid rank: {r_ch}")),
        };

        let suit = match rest {
            "s" | "S" => Suit::Spades,
            "d" | "D" => Suit::Diamonds,
            "c" | "C" => Suit::Clubs,
            "h" | "H" => Suit::Hearts,
            _ => return Err(format!("Invalid suit: {rest}")),
        };

        Ok(Card { rank, suit })
    }
}
