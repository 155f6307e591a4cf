use super::card::Card;
use crate::gameplay::Error;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The cards not yet dealt in the current hand.
///
/// The top of the deck is the last element, so dealing is a `pop`.
/// Shuffling is seeded so that a hand can be replayed exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// A full, unshuffled deck in encoding order.
    pub fn new() -> Self {
        Self(Card::all().collect())
    }
    /// Fisher–Yates permutation driven by a generator seeded with `seed`.
    pub fn shuffle(&mut self, seed: u64) {
        let ref mut rng = StdRng::seed_from_u64(seed);
        for i in (1..self.0.len()).rev() {
            let j = rng.random_range(0..=i);
            self.0.swap(i, j);
        }
    }
    /// Removes and returns the top card.
    pub fn deal_one(&mut self) -> Result<Card, Error> {
        self.0.pop().ok_or(Error::DeckExhausted)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_deck_is_complete() {
        let deck = Deck::new();
        let unique = deck.cards().iter().collect::<HashSet<_>>();
        assert!(deck.len() == 52);
        assert!(unique.len() == 52);
    }

    #[test]
    fn shuffle_is_deterministic() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle(7);
        b.shuffle(7);
        assert!(a == b);
        let mut c = Deck::new();
        c.shuffle(8);
        assert!(a != c);
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut deck = Deck::new();
        deck.shuffle(42);
        let mut cards = deck.cards().to_vec();
        cards.sort();
        assert!(cards == Deck::new().cards().to_vec());
    }

    #[test]
    fn deals_from_top() {
        let mut deck = Deck::new();
        let top = *deck.cards().last().unwrap();
        assert!(deck.deal_one() == Ok(top));
        assert!(deck.len() == 51);
        assert!(!deck.contains(&top));
    }

    #[test]
    fn exhausted_deck_fails() {
        let mut deck = Deck::new();
        for _ in 0..52 {
            assert!(deck.deal_one().is_ok());
        }
        assert!(deck.deal_one() == Err(Error::DeckExhausted));
    }
}
