use std::collections::HashSet;
use std::convert::TryFrom;
use std::ops::Deref;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Card, Deck, Suit, Value};

/// A convenience struct holding an ordered collection of cards.
///
/// Cards are dealt from the back.
#[derive(Debug, Clone, PartialEq)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    /// Shuffle this card collection using the given random number generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }
}

impl Default for CardCollection {
    /// Return a default deck consisting of 52 cards (13 values * 4 suits).
    fn default() -> Self {
        let mut cards = Vec::with_capacity(52);
        for v in &Value::values() {
            for s in &Suit::suits() {
                cards.push(Card {
                    value: *v,
                    suit: *s,
                });
            }
        }
        CardCollection { cards }
    }
}

impl From<Vec<Card>> for CardCollection {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl From<&[Card]> for CardCollection {
    fn from(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }
}

impl TryFrom<&str> for CardCollection {
    type Error = String;

    /// Parse cards from str, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::convert::TryInto;
    /// use pokergame::deck::CardCollection;
    /// let hand : Result<CardCollection, _> = "AdKd".try_into();
    /// assert!(hand.is_ok());
    /// ```
    ///
    /// Anything that can't be parsed will return an error, so will duplicate cards.
    ///
    /// ```
    /// use std::convert::TryInto;
    /// use pokergame::deck::CardCollection;
    /// let hand : Result<CardCollection, _> = "AdKx".try_into();
    /// assert!(hand.is_err());
    /// let hand : Result<CardCollection, _> = "AdAd".try_into();
    /// assert!(hand.is_err());
    /// ```
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        let mut seen = HashSet::new();
        let mut cards = Vec::new();

        while let Some(vc) = chars.next() {
            let sc = chars.next();
            let value =
                Value::from_char(vc).ok_or_else(|| format!("Couldn't parse value {}", vc))?;
            let suit = sc
                .and_then(Suit::from_char)
                .ok_or_else(|| format!("Couldn't parse suit {}", sc.unwrap_or('?')))?;

            let c = Card { value, suit };
            if !seen.insert(c) {
                return Err(format!("This card has already been added {}{}", vc, suit.to_char()));
            }
            cards.push(c);
        }

        Ok(Self { cards })
    }
}

impl Deck for CardCollection {
    fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Deref for CardCollection {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}
