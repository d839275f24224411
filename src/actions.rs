//! This module contains the actions logged while a hand is played.
//!
//! Everything what happens at the virtual poker table can be reconstructed using the stream of
//! actions of a hand. Players are referred to by name, since seats move between hands.
use crate::deck::Card;
use crate::ChipCount;
use std::fmt;

/// An `Action` records one step of a hand.
///
/// Usually the first argument names the player who caused the action (or who can be associated
/// with this action).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Indicates the start of the hand.
    StartRound {
        /// The 1-based number of this hand.
        id: usize,
        /// The size of the small blind for this hand.
        small_blind: ChipCount,
        /// The size of the big blind for this hand.
        big_blind: ChipCount,
    },
    /// Indicates that the player paid a blind of the given size.
    Blind(String, ChipCount),
    /// Indicates that the player was dealt the given hand.
    DealHand(String, [Card; 2]),
    /// Indicates that the given cards were dealt as flop cards.
    DealFlop([Card; 3]),
    /// Indicates that the given card was played as the turn card.
    DealTurn(Card),
    /// Indicates that the given card was played as the river card.
    DealRiver(Card),
    /// Indicates that the player checked.
    Check(String),
    /// Indicates that the player called for the given amount of chips.
    Call(String, ChipCount),
    /// Indicates that the player opened the betting of a street with the given amount of chips.
    Bet(String, ChipCount),
    /// Indicates that the player raised, putting in the given amount of chips.
    Raise(String, ChipCount),
    /// Indicates that the player went all-in for less than the amount to call (or posted an
    /// incomplete blind) with the given amount of chips.
    AllIn(String, ChipCount),
    /// Indicates that the player folded the hand.
    Fold(String),
    /// Indicates that the player won the given amount of chips.
    Win(String, ChipCount),
    /// Indicates that the hand ended.
    EndRound,
}

fn cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for c in cards {
        write!(f, "{}{}", c.value.to_char(), c.suit.to_char())?;
    }
    Ok(())
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::StartRound {
                id,
                small_blind,
                big_blind,
            } => write!(f, "Hand #{} ({}/{})", id, small_blind, big_blind),
            Action::Blind(p, c) => write!(f, "{} posts blind {}", p, c),
            Action::DealHand(p, hand) => {
                write!(f, "{} is dealt ", p)?;
                cards(f, hand)
            }
            Action::DealFlop(flop) => {
                write!(f, "Flop: ")?;
                cards(f, flop)
            }
            Action::DealTurn(c) => {
                write!(f, "Turn: ")?;
                cards(f, &[*c])
            }
            Action::DealRiver(c) => {
                write!(f, "River: ")?;
                cards(f, &[*c])
            }
            Action::Check(p) => write!(f, "{} checks", p),
            Action::Call(p, c) => write!(f, "{} calls {}", p, c),
            Action::Bet(p, c) => write!(f, "{} bets {}", p, c),
            Action::Raise(p, c) => write!(f, "{} raises {}", p, c),
            Action::AllIn(p, c) => write!(f, "{} is all-in with {}", p, c),
            Action::Fold(p) => write!(f, "{} folds", p),
            Action::Win(p, c) => write!(f, "{} wins {}", p, c),
            Action::EndRound => write!(f, "End of hand"),
        }
    }
}
