//! This is a simple library which can be used to simulate no-limit Texas Hold'em poker games in
//! rust.
//! Cards and hand ranking are taken from [rs_poker](https://crates.io/crates/rs-poker).
//!
//! A `Game` seats players, each controlled by a `Decider`, and plays hands until at most one
//! player is left. Every hand yields a `RoundSummary` holding the final board, the stacks, the
//! winners and the full list of actions.
//!
//! ### Example:
//! ```rust
//! use pokergame::prelude::*;
//!
//! /// Raises once with a pocket pair, calls everything else.
//! struct PairRaiser {
//!     pair: bool,
//! }
//!
//! impl Decider for PairRaiser {
//!     fn receive_cards(&mut self, cards: &[Card]) {
//!         self.pair = cards[0].value == cards[1].value;
//!     }
//!
//!     fn decide(
//!         &mut self,
//!         seat: usize,
//!         players: &[Player],
//!         _board: &[Card],
//!         to_call: ChipCount,
//!     ) -> Decision {
//!         let stack = players[seat].stack;
//!         if self.pair && to_call < stack {
//!             self.pair = false;
//!             Decision::Bet(std::cmp::min(stack, to_call + 20))
//!         } else {
//!             Decision::Bet(std::cmp::min(stack, to_call))
//!         }
//!     }
//!
//!     fn bust(&mut self) {
//!         println!(":(");
//!     }
//! }
//!
//! fn main() {
//!     let mut game = Game::new(Blinds::new(1, 2), BlindPolicy::DoubleEvery(10))
//!         .with_deck_generator(SeededDeckGenerator::new(42))
//!         .with_player(Player::new("alice", 100), PairRaiser { pair: false })
//!         .with_player(Player::new("bob", 100), CallingStation)
//!         .with_player(Player::new("carol", 100), CallingStation);
//!
//!     for summary in game.play(Hooks::new()).take(5) {
//!         println!("{}", summary.expect("Calling stations never cheat"));
//!     }
//! }
//! ```
#![warn(missing_docs)]
#![deny(unsafe_code)]
// I cannot figure out how to explicitly allow for the example only,
// so I guess we live like this now
#![allow(clippy::needless_doctest_main)]

/// A unit for counting chips.
///
/// This should be considered as "the number of chips of minimal value".
/// This crate abstracts all associated values of chips. The only unit used
/// is this `ChipCount`
pub type ChipCount = u32;

#[cfg(test)]
mod mock;

pub mod actions;
pub mod betting;
mod blinds;
pub mod deck;
mod error;
pub mod eval;
mod game;
mod player;
pub mod pot;
mod runner;
mod summary;

pub use blinds::{BlindPolicy, Blinds};
pub use error::{ChipError, GameError};
pub use game::{BoxedDecider, Game, Hands, Hook, Hooks, MAX_PLAYERS};
pub use player::{CallingStation, Decider, Decision, Player};
pub use runner::Runner;
pub use summary::RoundSummary;

pub mod prelude {
    //! Module containing common imports required for basic usage.
    pub use super::{
        actions::Action,
        deck::{self, Card, SeededDeckGenerator},
        BlindPolicy, Blinds, CallingStation, ChipCount, Decider, Decision, Game, Hooks, Player,
        RoundSummary,
    };
}
