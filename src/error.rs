//! Fatal conditions raised while a hand is played.
//!
//! Nothing in here is recoverable. A `ChipError` means either a `Decider` broke its contract or
//! the chip accounting itself went wrong, and the hand it happened in cannot be settled anymore.
use crate::ChipCount;
use thiserror::Error;

/// An error raised from inside a betting round or the pot distribution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChipError {
    /// A decider asked to put more chips into the pot than its player owns.
    #[error("player {player} bet {bet} chips with only {stack} left")]
    ProtocolViolation {
        /// Name of the offending player.
        player: String,
        /// The bet size returned by the decider.
        bet: ChipCount,
        /// The stack the player had at that moment.
        stack: ChipCount,
    },
    /// The chip accounting does not add up.
    #[error("invariant breached: {0}")]
    InvariantBreach(String),
}

/// An error which aborted a hand, attributed to the hand it occurred in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Hand number `hand` could not be completed.
    #[error("hand #{hand} aborted")]
    Hand {
        /// The 1-based number of the aborted hand.
        hand: usize,
        /// What went wrong.
        #[source]
        source: ChipError,
    },
    /// A previous hand was aborted, the table state can not be trusted anymore.
    #[error("the game was aborted in an earlier hand")]
    Poisoned,
}

impl GameError {
    pub(crate) fn in_hand(hand: usize) -> impl FnOnce(ChipError) -> Self {
        move |source| GameError::Hand { hand, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_hand_error_carries_source() {
        let err = GameError::in_hand(7)(ChipError::ProtocolViolation {
            player: "alice".to_owned(),
            bet: 20,
            stack: 10,
        });

        assert_eq!(err.to_string(), "hand #7 aborted");
        assert_eq!(
            err.source().map(|e| e.to_string()),
            Some("player alice bet 20 chips with only 10 left".to_owned())
        );
    }
}
