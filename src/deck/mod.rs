//! This module provides the card sources used at a table.
//!
//! Cards and their values/suits are the ones from `rs_poker`. A fresh deck is produced for every
//! hand by a `DeckGenerator`.
mod card_collection;
mod generator;

pub use card_collection::CardCollection;
pub use generator::{DeckGenerator, DefaultDeckGenerator, SeededDeckGenerator};
pub use rs_poker::core::{Card, Suit, Value};

/// A trait representing a card deck.
pub trait Deck {
    /// Deal a card from the deck.
    /// The card should never be dealt again.
    fn deal(&mut self) -> Option<Card>;

    /// Check whether this deck is empty.
    fn is_empty(&self) -> bool;

    /// Deal `n` cards at once.
    ///
    /// Fewer cards are returned if the deck runs out.
    fn draw(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.deal()).collect()
    }
}
