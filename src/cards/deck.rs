//! A deck of playing cards for shuffled deals.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use super::card::Card;

/// A deck of up to 52 playing cards.
///
/// The simulator keeps one base deck per request and reads each trial's deal
/// off a fresh shuffled clone, so no trial observes another trial's order.
#[derive(Clone)]
pub struct Deck {
    /// Usable cards in current order, packed at the front.
    cards: [Card; 52],
    /// Number of usable cards in the deck (52 minus dead cards).
    size: usize,
}

impl Deck {
    /// Create a deck with specific cards removed.
    pub fn without(dead_cards: &[Card]) -> Self {
        let dead_mask = dead_cards
            .iter()
            .fold(0u64, |mask, card| mask | (1u64 << card.id()));
        let mut cards = [Card::from_id(0); 52];
        let mut size = 0;
        for id in 0..52u8 {
            if dead_mask & (1u64 << id) == 0 {
                cards[size] = Card::from_id(id);
                size += 1;
            }
        }
        Self { cards, size }
    }

    /// Shuffle the usable cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[..self.size].shuffle(rng);
    }

    /// Return a shuffled copy, leaving `self` untouched.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut deck = self.clone();
        deck.shuffle(rng);
        deck
    }

    /// Get the number of usable cards.
    pub fn remaining(&self) -> usize {
        self.size
    }

    /// Usable cards in deal order.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[..self.size]
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} remaining)", self.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_full_deck() {
        let deck = Deck::without(&[]);
        assert_eq!(deck.remaining(), 52);
        let ids: Vec<u8> = deck.remaining_cards().iter().map(|c| c.id()).collect();
        assert_eq!(ids, (0..52).collect::<Vec<u8>>());
    }

    #[test]
    fn test_deck_without() {
        let dead = [card("As"), card("Ah")];
        let deck = Deck::without(&dead);
        assert_eq!(deck.remaining(), 50);
        assert!(!deck.remaining_cards().contains(&dead[0]));
        assert!(!deck.remaining_cards().contains(&dead[1]));

        let mut ids: Vec<u8> = deck.remaining_cards().iter().map(|c| c.id()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_deck_without_repeated_card() {
        let deck = Deck::without(&[card("Kd"), card("Kd")]);
        assert_eq!(deck.remaining(), 51);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let base = Deck::without(&[card("2c"), card("7h")]);
        let shuffled = base.shuffled(&mut rng);

        let mut before: Vec<u8> = base.remaining_cards().iter().map(|c| c.id()).collect();
        let mut after: Vec<u8> = shuffled.remaining_cards().iter().map(|c| c.id()).collect();
        assert_ne!(before, after);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_shuffled_leaves_base_untouched() {
        let mut rng = StdRng::seed_from_u64(11);
        let base = Deck::without(&[card("Ac"), card("Ad")]);
        let order: Vec<Card> = base.remaining_cards().to_vec();
        for _ in 0..5 {
            let trial = base.shuffled(&mut rng);
            assert_ne!(trial.remaining_cards(), order.as_slice());
        }
        assert_eq!(base.remaining_cards(), order.as_slice());
        assert_eq!(base.remaining(), 50);
    }

    #[test]
    fn test_shuffle_has_no_positional_bias() {
        // The first dealt card should be roughly uniform over the 50 cards.
        let mut rng = StdRng::seed_from_u64(2024);
        let base = Deck::without(&[card("As"), card("Ks")]);
        let mut hits = [0u32; 52];
        let rounds = 50_000;
        for _ in 0..rounds {
            let deck = base.shuffled(&mut rng);
            hits[deck.remaining_cards()[0].id() as usize] += 1;
        }
        let expected = rounds as f64 / 50.0;
        for card in base.remaining_cards() {
            let observed = hits[card.id() as usize] as f64;
            assert!(
                (observed - expected).abs() < expected * 0.2,
                "card {} seen {} times, expected ~{}",
                card,
                observed,
                expected
            );
        }
    }
}
