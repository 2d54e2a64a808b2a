//! Оценка рук блэкджека и определение исходов раунда.
//!
//! Основные функции:
//!   `score(cards) -> u32` – очки руки с правилом мягкого туза
//!   `is_natural(cards) -> bool` – натуральный блэкджек (две карты)
//!   `determine_outcome(dealer, player) -> Outcome`

pub mod outcome;
pub mod score;

pub use outcome::{determine_outcome, resolve_outcomes};
pub use score::{is_bust, is_natural, score, BLACKJACK};
