//! Deck generators give more control over shuffling.
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::CardCollection;

/// Trait to be implemented by deck generators to be used at a `Game`.
///
/// Each hand is dealt from a fresh deck.
pub trait DeckGenerator {
    /// Generate a new shuffled deck
    fn shuffled_deck(&mut self) -> CardCollection;
}

/// Default deck generator which randomly shuffles a deck using `thread_rng`
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDeckGenerator;

impl DeckGenerator for DefaultDeckGenerator {
    fn shuffled_deck(&mut self) -> CardCollection {
        let mut deck = CardCollection::default();
        deck.shuffle(&mut rand::thread_rng());
        deck
    }
}

/// Deck generator producing a reproducible sequence of decks from a seed.
#[derive(Debug, Clone)]
pub struct SeededDeckGenerator {
    rng: StdRng,
}

impl SeededDeckGenerator {
    /// Create a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DeckGenerator for SeededDeckGenerator {
    fn shuffled_deck(&mut self) -> CardCollection {
        let mut deck = CardCollection::default();
        deck.shuffle(&mut self.rng);
        deck
    }
}
