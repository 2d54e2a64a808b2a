use crate::domain::deck::{Deck, DeckStep};
use crate::engine::RandomSource;

/// Перемешивание Фишера–Йетса на месте.
///
/// Идём с последнего индекса вниз до 1, меняем позицию `i`
/// с равномерно выбранной позицией из `0..=i`.
pub fn shuffle<T, R: RandomSource>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_index(i + 1);
        slice.swap(i, j);
    }
}

/// Собрать колоду: стандартные 52 карты + шаги конфигурации слева направо.
pub fn build_deck<R: RandomSource>(steps: &[DeckStep], rng: &mut R) -> Deck {
    let mut deck = Deck::standard_52();
    for step in steps {
        match step {
            DeckStep::Shuffle => shuffle(&mut deck.cards, rng),
            DeckStep::AddJokers(n) => deck.add_jokers(*n),
            DeckStep::Filter(patterns) => deck.filter(patterns),
            DeckStep::Multiply(n) => deck.multiply(*n),
        }
    }
    deck
}
