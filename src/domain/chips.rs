use serde::{Deserialize, Serialize};

/// Количество фишек. Обёртка над u64, чтобы не путать с обычными числами.
///
/// Денежных расчётов движок не ведёт: фишки и ставка – только учёт.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Chips(pub u64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    /// Стартовый стек игрока за столом.
    pub const STARTING_STAKE: Chips = Chips(100);
}
