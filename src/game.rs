use crate::actions::Action;
use crate::betting::run_round;
use crate::blinds::{BlindPolicy, Blinds};
use crate::deck::{Card, CardCollection, Deck, DeckGenerator, DefaultDeckGenerator};
use crate::error::{ChipError, GameError};
use crate::eval::{Evaluator, RankEvaluator};
use crate::player::{Decider, Player};
use crate::pot::distribute;
use crate::summary::RoundSummary;
use crate::ChipCount;

/// The maximum number of players seated at one table, limited by the cards of a single deck.
pub const MAX_PLAYERS: usize = 23;

/// A boxed decider as seated at a `Game`.
pub type BoxedDecider = Box<dyn Decider + Send>;

/// A callback receiving the players of the current hand and the board.
pub type Hook = Box<dyn FnMut(&[Player], &[Card]) + Send>;

/// Optional callbacks invoked at fixed points of every hand.
#[derive(Default)]
pub struct Hooks {
    dealt: Option<Hook>,
    flop: Option<Hook>,
    turn: Option<Hook>,
    river: Option<Hook>,
}

impl Hooks {
    /// No hooks at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called after the hands are dealt and the blinds are placed.
    pub fn on_dealt(mut self, hook: impl FnMut(&[Player], &[Card]) + Send + 'static) -> Self {
        self.dealt = Some(Box::new(hook));
        self
    }

    /// Called after the flop was dealt but before players bet.
    pub fn on_flop(mut self, hook: impl FnMut(&[Player], &[Card]) + Send + 'static) -> Self {
        self.flop = Some(Box::new(hook));
        self
    }

    /// Called after the turn was dealt but before players bet.
    pub fn on_turn(mut self, hook: impl FnMut(&[Player], &[Card]) + Send + 'static) -> Self {
        self.turn = Some(Box::new(hook));
        self
    }

    /// Called after the river was dealt but before players bet.
    pub fn on_river(mut self, hook: impl FnMut(&[Player], &[Card]) + Send + 'static) -> Self {
        self.river = Some(Box::new(hook));
        self
    }

    fn street(&mut self, street: Street) -> Option<&mut Hook> {
        match street {
            Street::Flop => self.flop.as_mut(),
            Street::Turn => self.turn.as_mut(),
            Street::River => self.river.as_mut(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Street {
    Flop,
    Turn,
    River,
}

impl Street {
    const POSTFLOP: [Street; 3] = [Street::Flop, Street::Turn, Street::River];

    fn n_cards(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }

    fn action(self, cards: &[Card]) -> Action {
        match self {
            Street::Flop => Action::DealFlop([cards[0], cards[1], cards[2]]),
            Street::Turn => Action::DealTurn(cards[0]),
            Street::River => Action::DealRiver(cards[0]),
        }
    }
}

/// The main entrypoint for playing poker games.
/// A game represents the players seated at a table and handles the actual game logic.
///
/// Players may join or leave between hands only. The seat at index `big_blind()` posts the big
/// blind in the next hand, the seat before it the small blind. Both move one seat after every
/// hand.
pub struct Game {
    players: Vec<Player>,
    deciders: Vec<BoxedDecider>,
    blinds: Blinds,
    blind_policy: BlindPolicy,
    hands_played: usize,
    big_blind: usize,
    deck_generator: Box<dyn DeckGenerator + Send>,
    evaluator: Box<dyn Evaluator + Send>,
    poisoned: bool,
}

impl Game {
    /// Initialize an empty table starting with the given blinds.
    ///
    /// In order to increase blind levels a `BlindPolicy` other than `NeverIncrease` should be
    /// specified. Decks are shuffled with `thread_rng` and hands ranked by `RankEvaluator` unless
    /// configured otherwise.
    pub fn new(blinds: Blinds, blind_policy: BlindPolicy) -> Self {
        Self {
            players: Vec::new(),
            deciders: Vec::new(),
            blinds,
            blind_policy,
            hands_played: 0,
            big_blind: 0,
            deck_generator: Box::new(DefaultDeckGenerator),
            evaluator: Box::new(RankEvaluator),
            poisoned: false,
        }
    }

    /// Use the given source of shuffled decks, f.e. a `SeededDeckGenerator` for reproducible games.
    pub fn with_deck_generator(mut self, generator: impl DeckGenerator + Send + 'static) -> Self {
        self.deck_generator = Box::new(generator);
        self
    }

    /// Rank hands at showdown with the given evaluator.
    pub fn with_evaluator(mut self, evaluator: impl Evaluator + Send + 'static) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Seat a player at the end of the table.
    pub fn with_player(mut self, player: Player, decider: impl Decider + Send + 'static) -> Self {
        let position = self.players.len();
        self.join(player, Box::new(decider), position);
        self
    }

    /// Add a player to this game at the given seat (clamped to the number of players).
    ///
    /// Must not be called while a hand is played, which the borrow of `play` already prevents.
    /// The big blind stays with the player who would have posted it.
    ///
    /// Panics if the table is already full (see `MAX_PLAYERS`).
    pub fn join(&mut self, player: Player, decider: BoxedDecider, position: usize) {
        assert!(
            self.players.len() < MAX_PLAYERS,
            "At most {} players can be seated",
            MAX_PLAYERS
        );
        let position = std::cmp::min(position, self.players.len());
        if position <= self.big_blind && !self.players.is_empty() {
            self.big_blind += 1;
        }
        log::debug!("{} joins at seat {}", player.name, position);
        self.players.insert(position, player);
        self.deciders.insert(position, decider);
    }

    /// Remove the named player from this game, returning the player and its decider.
    pub fn leave(&mut self, name: &str) -> Option<(Player, BoxedDecider)> {
        let position = self.players.iter().position(|p| p.name == name)?;
        log::debug!("{} leaves seat {}", name, position);
        Some(self.remove_seat(position))
    }

    /// The players seated at the table.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The blinds for the next hand.
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }

    /// The number of hands played so far.
    pub fn hands_played(&self) -> usize {
        self.hands_played
    }

    /// The seat posting the big blind in the next hand.
    pub fn big_blind(&self) -> usize {
        self.big_blind
    }

    /// Play hands until at most one player is left.
    ///
    /// The returned iterator yields one summary per hand. If a hand can not be completed the
    /// error is yielded and no further hands are played, neither by this iterator nor by any
    /// later one.
    pub fn play(&mut self, hooks: Hooks) -> Hands<'_> {
        Hands {
            game: self,
            hooks,
            done: false,
        }
    }

    fn remove_seat(&mut self, position: usize) -> (Player, BoxedDecider) {
        if position < self.big_blind {
            self.big_blind -= 1;
        }
        let player = self.players.remove(position);
        let decider = self.deciders.remove(position);
        if !self.players.is_empty() {
            self.big_blind %= self.players.len();
        } else {
            self.big_blind = 0;
        }
        (player, decider)
    }

    /// Play one hand with everyone currently seated.
    fn play_hand(&mut self, hooks: &mut Hooks) -> Result<RoundSummary, GameError> {
        let hand = self.hands_played + 1;
        let n = self.players.len();
        let blinds = self.blinds;
        let bb = self.big_blind % n;
        let sb = (bb + n - 1) % n;

        let mut actions = vec![Action::StartRound {
            id: hand,
            small_blind: blinds.small,
            big_blind: blinds.big,
        }];
        let mut deck = self.deck_generator.shuffled_deck();

        for (player, decider) in self.players.iter_mut().zip(self.deciders.iter_mut()) {
            player.reset_hand();
            let cards = draw(&mut deck, 2).map_err(GameError::in_hand(hand))?;
            decider.receive_cards(&cards);
            actions.push(Action::DealHand(player.name.clone(), [cards[0], cards[1]]));
            player.hand = cards;
        }

        let small = self.post_blind(sb, blinds.small, &mut actions);
        let big = self.post_blind(bb, blinds.big, &mut actions);

        let mut board = Vec::with_capacity(5);
        if let Some(hook) = hooks.dealt.as_mut() {
            hook(&self.players, &board);
        }

        // pre-flop action starts at big blind + 1
        let (mut bet, mut players_left) = run_round(
            (bb + 1) % n,
            &mut self.players,
            &mut self.deciders,
            &board,
            std::cmp::max(small, big),
            n,
            &mut actions,
        )
        .map_err(GameError::in_hand(hand))?;

        for &street in Street::POSTFLOP.iter() {
            if players_left <= 1 {
                break;
            }

            let cards = draw(&mut deck, street.n_cards()).map_err(GameError::in_hand(hand))?;
            board.extend_from_slice(&cards);
            actions.push(street.action(&cards));
            if let Some(hook) = hooks.street(street) {
                hook(&self.players, &board);
            }

            let (closing_bet, left) = run_round(
                sb,
                &mut self.players,
                &mut self.deciders,
                &board,
                bet,
                players_left,
                &mut actions,
            )
            .map_err(GameError::in_hand(hand))?;
            bet = closing_bet;
            players_left = left;
        }

        let awards = distribute(&mut self.players, &board, &*self.evaluator)
            .map_err(GameError::in_hand(hand))?;
        let mut winners = Vec::with_capacity(awards.len());
        for (i, amount) in awards {
            let player = &mut self.players[i];
            player.stack += amount;
            log::info!("hand #{}: {} wins {}", hand, player.name, amount);
            actions.push(Action::Win(player.name.clone(), amount));
            winners.push((player.name.clone(), amount));
        }
        actions.push(Action::EndRound);

        self.big_blind = (bb + 1) % n;
        self.hands_played += 1;
        self.blinds = self.blind_policy.next(self.hands_played, self.blinds);
        self.remove_busted();

        Ok(RoundSummary {
            hands_played: self.hands_played,
            board,
            players: self
                .players
                .iter()
                .map(|p| (p.name.clone(), p.stack))
                .collect(),
            winners,
            blinds,
            actions,
        })
    }

    /// Forces the player at `seat` to post a blind of the specified size.
    ///
    /// Forces the player all-in if it has not enough chips available. Returns the amount posted.
    fn post_blind(&mut self, seat: usize, size: ChipCount, actions: &mut Vec<Action>) -> ChipCount {
        let player = &mut self.players[seat];
        let amount = std::cmp::min(size, player.stack);
        player.put(amount);
        actions.push(if player.is_allin() {
            Action::AllIn(player.name.clone(), amount)
        } else {
            Action::Blind(player.name.clone(), amount)
        });
        amount
    }

    fn remove_busted(&mut self) {
        for position in (0..self.players.len()).rev() {
            if self.players[position].stack == 0 {
                let (player, mut decider) = self.remove_seat(position);
                log::warn!("{} busted after {} hands", player.name, self.hands_played);
                decider.bust();
            }
        }
    }
}

fn draw(deck: &mut CardCollection, n: usize) -> Result<Vec<Card>, ChipError> {
    let cards = deck.draw(n);
    if cards.len() < n {
        return Err(ChipError::InvariantBreach(
            "the deck ran out of cards".to_owned(),
        ));
    }
    Ok(cards)
}

/// Iterator over the hands played at a `Game`, see `Game::play`.
pub struct Hands<'a> {
    game: &'a mut Game,
    hooks: Hooks,
    done: bool,
}

impl Iterator for Hands<'_> {
    type Item = Result<RoundSummary, GameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.game.poisoned {
            self.done = true;
            return Some(Err(GameError::Poisoned));
        }
        if self.game.players.len() <= 1 {
            self.done = true;
            return None;
        }

        let result = self.game.play_hand(&mut self.hooks);
        if let Err(e) = &result {
            log::error!("{}", e);
            self.game.poisoned = true;
            self.done = true;
        }
        Some(result)
    }
}
