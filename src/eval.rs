//! Hand strength evaluation used at showdown.
use rs_poker::core::{Card, Rank, Rankable};

/// A comparable hand strength. **Lower is stronger.**
///
/// Two hands of equal strength have equal scores and split the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandScore(pub u64);

/// Maps a player's hole cards and the board to a `HandScore`.
pub trait Evaluator {
    /// Score the best hand which can be built from `hole` and `board` (5 to 7 cards in total).
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> HandScore;
}

/// The default evaluator, built on `rs_poker`'s ranking.
#[derive(Debug, Default, Clone, Copy)]
pub struct RankEvaluator;

impl Evaluator for RankEvaluator {
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> HandScore {
        let cards = ShowdownCards(hole.iter().chain(board.iter()).copied().collect());
        HandScore::from(cards.rank())
    }
}

struct ShowdownCards(Vec<Card>);

impl Rankable for ShowdownCards {
    fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Rank> for HandScore {
    fn from(rank: Rank) -> Self {
        let (category, strength) = match rank {
            Rank::HighCard(s) => (0, s),
            Rank::OnePair(s) => (1, s),
            Rank::TwoPair(s) => (2, s),
            Rank::ThreeOfAKind(s) => (3, s),
            Rank::Straight(s) => (4, s),
            Rank::Flush(s) => (5, s),
            Rank::FullHouse(s) => (6, s),
            Rank::FourOfAKind(s) => (7, s),
            Rank::StraightFlush(s) => (8, s),
        };
        // `Rank` orders stronger hands higher, scores order them lower
        HandScore(((8 - category) << 32) | u64::from(u32::MAX - strength))
    }
}
