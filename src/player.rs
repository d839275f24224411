//! This module exposes the player data and the main decision trait.
use crate::deck::Card;
use crate::eval::HandScore;
use crate::ChipCount;

/// A seat at the table as seen by everyone.
///
/// These fields should be considered readonly by anyone but the dealer.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// The name identifying this player at the table.
    pub name: String,
    /// The total chip count the player has left.
    pub stack: ChipCount,
    /// The amount the player already put in the pot during the current hand.
    ///
    /// This accumulates over all streets of the hand.
    pub bet: ChipCount,
    /// The player's hole cards. Empty after folding.
    pub hand: Vec<Card>,
    /// Whether the player folded the current hand.
    pub has_folded: bool,
    /// The strength of the player's hand, only known after a showdown.
    pub hand_score: Option<HandScore>,
}

impl Player {
    /// Create a player with the given initial stack.
    pub fn new(name: impl Into<String>, stack: ChipCount) -> Self {
        Self {
            name: name.into(),
            stack,
            bet: 0,
            hand: Vec::new(),
            has_folded: false,
            hand_score: None,
        }
    }

    /// A player without any chips left can not take any further action.
    pub fn is_allin(&self) -> bool {
        self.stack == 0
    }

    /// Whether this player is still contesting the pot.
    pub fn is_contending(&self) -> bool {
        !self.has_folded
    }

    pub(crate) fn reset_hand(&mut self) {
        self.bet = 0;
        self.hand.clear();
        self.has_folded = false;
        self.hand_score = None;
    }

    pub(crate) fn fold(&mut self) {
        self.has_folded = true;
        self.hand.clear();
    }

    /// Moves `amount` chips from the stack into the pot.
    pub(crate) fn put(&mut self, amount: ChipCount) {
        debug_assert!(amount <= self.stack);
        self.stack -= amount;
        self.bet += amount;
    }
}

/// The answer of a `Decider` whenever its player is required to act.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Give up the hand.
    Fold,
    /// Put the given amount of chips into the pot.
    ///
    /// Equal to the amount to call is a call (or a check if nothing is to call).
    /// Anything above raises by the difference.
    /// Anything below is converted into an all-in call for whatever the player can afford.
    /// It must never exceed the player's stack.
    Bet(ChipCount),
}

/// A trait to be implemented by anyone who is playing.
///
/// The default behaviour of a player is implemented by `CallingStation`.
pub trait Decider {
    /// This function gets called at the start of every hand and reveals the cards this player has
    /// received.
    fn receive_cards(&mut self, _cards: &[Card]) {}

    /// This function gets called everytime the player is required to act.
    ///
    /// `seat` is the index of the acting player within `players`. `to_call` is the number of chips
    /// required to stay in the hand.
    fn decide(
        &mut self,
        seat: usize,
        players: &[Player],
        board: &[Card],
        to_call: ChipCount,
    ) -> Decision;

    /// This function gets called when the player lost all the chips and has to leave the table.
    fn bust(&mut self) {}
}

impl<D: Decider + ?Sized> Decider for Box<D> {
    fn receive_cards(&mut self, cards: &[Card]) {
        (**self).receive_cards(cards)
    }

    fn decide(
        &mut self,
        seat: usize,
        players: &[Player],
        board: &[Card],
        to_call: ChipCount,
    ) -> Decision {
        (**self).decide(seat, players, board, to_call)
    }

    fn bust(&mut self) {
        (**self).bust()
    }
}

/// A bot which always calls, going all-in if it can not afford the call.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallingStation;

impl Decider for CallingStation {
    fn decide(
        &mut self,
        seat: usize,
        players: &[Player],
        _board: &[Card],
        to_call: ChipCount,
    ) -> Decision {
        Decision::Bet(std::cmp::min(to_call, players[seat].stack))
    }
}
