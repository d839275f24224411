use crate::deck::{Card, CardCollection, DeckGenerator};
use crate::eval::{Evaluator, HandScore};
use crate::player::{Decider, Decision, Player};
use crate::ChipCount;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub(crate) struct ScriptedDecider {
    pub(crate) cards: Vec<Card>,
    pub(crate) next_decisions: VecDeque<Decision>,
    pub(crate) seen_to_call: Vec<ChipCount>,
    busted: Arc<AtomicBool>,
}

impl ScriptedDecider {
    pub(crate) fn new(next_decisions: Vec<Decision>) -> Self {
        Self {
            cards: Vec::new(),
            next_decisions: VecDeque::from(next_decisions),
            seen_to_call: Vec::new(),
            busted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.next_decisions.is_empty()
    }

    /// Set once the decider was told its player busted, shared so it can be observed after the
    /// decider was handed to a `Game`.
    pub(crate) fn busted_flag(&self) -> Arc<AtomicBool> {
        self.busted.clone()
    }
}

impl Decider for ScriptedDecider {
    fn receive_cards(&mut self, cards: &[Card]) {
        self.cards = cards.to_vec();
    }

    fn decide(
        &mut self,
        _seat: usize,
        _players: &[Player],
        _board: &[Card],
        to_call: ChipCount,
    ) -> Decision {
        self.seen_to_call.push(to_call);
        self.next_decisions
            .pop_front()
            .expect("Should have valid next decision")
    }

    fn bust(&mut self) {
        self.busted.store(true, Ordering::SeqCst);
    }
}

/// Scores hands by their first hole card only.
#[derive(Debug, Default, Clone)]
pub(crate) struct FixedEvaluator {
    scores: HashMap<Card, u64>,
}

impl FixedEvaluator {
    pub(crate) fn with_score(mut self, card: Card, score: u64) -> Self {
        self.scores.insert(card, score);
        self
    }
}

impl Evaluator for FixedEvaluator {
    fn evaluate(&self, hole: &[Card], _board: &[Card]) -> HandScore {
        let score = hole
            .first()
            .and_then(|c| self.scores.get(c))
            .expect("Every evaluated hand should have a score");
        HandScore(*score)
    }
}

/// Scores every hand the same, so every showdown is a split.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TiedEvaluator;

impl Evaluator for TiedEvaluator {
    fn evaluate(&self, _hole: &[Card], _board: &[Card]) -> HandScore {
        HandScore(0)
    }
}

/// Hands out the given decks in order, then unshuffled ones.
#[derive(Debug, Default, Clone)]
pub(crate) struct StackedDecks(pub(crate) VecDeque<CardCollection>);

impl DeckGenerator for StackedDecks {
    fn shuffled_deck(&mut self) -> CardCollection {
        self.0.pop_front().unwrap_or_default()
    }
}

pub(crate) fn players_with_stacks(stacks: &[ChipCount]) -> Vec<Player> {
    stacks
        .iter()
        .enumerate()
        .map(|(i, &s)| Player::new(format!("p{}", i), s))
        .collect()
}

pub(crate) fn card(s: &str) -> Card {
    use std::convert::TryFrom;
    CardCollection::try_from(s).expect("Should be a valid card")[0]
}

/// A deck dealing the given cards front to back.
pub(crate) fn dealt_in_order(cards: &str) -> CardCollection {
    use std::convert::TryFrom;
    let mut cards = CardCollection::try_from(cards)
        .expect("Should be valid cards")
        .to_vec();
    cards.reverse();
    CardCollection::from(cards)
}

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
