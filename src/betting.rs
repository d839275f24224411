//! The betting round engine: plays one street of betting to completion.
use crate::actions::Action;
use crate::deck::Card;
use crate::error::ChipError;
use crate::player::{Decider, Decision, Player};
use crate::ChipCount;

/// Perform one betting round starting with the player at index `first`.
///
/// `current_bet` is the level every contending player has to match (the bets of `players` are
/// accumulated over the whole hand, so it carries over from the previous street).
/// `players_left` is the number of players which did not fold yet.
///
/// The round is over once the action returns to the last raiser (or to `first` if nobody
/// raised) or only one player is left. Folded and all-in players keep their seat but are
/// skipped, so indices stay stable during the whole hand.
///
/// Returns the closing bet level and the number of players left.
pub fn run_round<D: Decider>(
    first: usize,
    players: &mut [Player],
    deciders: &mut [D],
    board: &[Card],
    mut current_bet: ChipCount,
    mut players_left: usize,
    actions: &mut Vec<Action>,
) -> Result<(ChipCount, usize), ChipError> {
    debug_assert_eq!(players.len(), deciders.len());
    let n = players.len();
    if n == 0 {
        return Ok((current_bet, players_left));
    }

    let mut i = first % n;
    let mut last_raiser = i;
    let mut is_first_round = true;

    while players_left > 1 {
        if !is_first_round && i == last_raiser {
            break;
        }
        is_first_round = false;

        if !players[i].has_folded && !players[i].is_allin() {
            let to_call = current_bet - players[i].bet;
            let decision = deciders[i].decide(i, players, board, to_call);
            let player = &mut players[i];

            match decision {
                Decision::Fold => {
                    player.fold();
                    players_left -= 1;
                    log::debug!("{} folds", player.name);
                    actions.push(Action::Fold(player.name.clone()));
                }
                Decision::Bet(size) if size > player.stack => {
                    return Err(ChipError::ProtocolViolation {
                        player: player.name.clone(),
                        bet: size,
                        stack: player.stack,
                    });
                }
                Decision::Bet(size) if size < to_call => {
                    let size = std::cmp::min(player.stack, to_call);
                    player.put(size);
                    let action = if player.is_allin() {
                        log::warn!("{} is all-in short of the call with {}", player.name, size);
                        Action::AllIn(player.name.clone(), size)
                    } else {
                        Action::Call(player.name.clone(), size)
                    };
                    actions.push(action);
                }
                Decision::Bet(size) if size == to_call => {
                    player.put(size);
                    log::debug!("{} calls {}", player.name, size);
                    actions.push(if size == 0 {
                        Action::Check(player.name.clone())
                    } else {
                        Action::Call(player.name.clone(), size)
                    });
                }
                Decision::Bet(size) => {
                    player.put(size);
                    current_bet += size - to_call;
                    last_raiser = i;
                    log::debug!("{} raises to {}", player.name, current_bet);
                    actions.push(if to_call == 0 && !board.is_empty() {
                        Action::Bet(player.name.clone(), size)
                    } else {
                        Action::Raise(player.name.clone(), size)
                    });
                }
            }
        }

        i = (i + 1) % n;
    }

    Ok((current_bet, players_left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::CardCollection;
    use crate::mock::{players_with_stacks, ScriptedDecider};
    use crate::player::Decision::{Bet, Fold};

    fn round(
        first: usize,
        players: &mut [Player],
        deciders: &mut [ScriptedDecider],
        current_bet: ChipCount,
    ) -> (ChipCount, usize, Vec<Action>) {
        let flop = CardCollection::default()[..3].to_vec();
        let left = players.iter().filter(|p| !p.has_folded).count();
        let mut actions = Vec::new();
        let (bet, left) =
            run_round(first, players, deciders, &flop, current_bet, left, &mut actions).unwrap();
        (bet, left, actions)
    }

    fn bets(players: &[Player]) -> Vec<ChipCount> {
        players.iter().map(|p| p.bet).collect()
    }

    #[test]
    fn test_round_without_raise_closes_after_one_pass() {
        let mut players = players_with_stacks(&[100, 100, 100]);
        let mut deciders = vec![
            ScriptedDecider::new(vec![Bet(0)]),
            ScriptedDecider::new(vec![Bet(0)]),
            ScriptedDecider::new(vec![Bet(0)]),
        ];
        let (bet, left, actions) = round(1, &mut players, &mut deciders, 0);

        assert_eq!((bet, left), (0, 3));
        assert_eq!(
            actions,
            vec![
                Action::Check("p1".into()),
                Action::Check("p2".into()),
                Action::Check("p0".into()),
            ]
        );
        assert!(deciders.iter().all(ScriptedDecider::is_exhausted));
    }

    #[test]
    fn test_round_closes_when_action_returns_to_last_raiser() {
        let mut players = players_with_stacks(&[100, 100, 100]);
        let mut deciders = vec![
            ScriptedDecider::new(vec![Bet(10), Bet(20)]),
            ScriptedDecider::new(vec![Bet(30)]),
            ScriptedDecider::new(vec![Bet(30)]),
        ];
        let (bet, left, _) = round(0, &mut players, &mut deciders, 10);

        assert_eq!((bet, left), (30, 3));
        assert_eq!(bets(&players), vec![30, 30, 30]);
        assert!(deciders.iter().all(ScriptedDecider::is_exhausted));
        assert_eq!(deciders[0].seen_to_call, vec![10, 20]);
    }

    #[test]
    fn test_round_with_multiple_raises() {
        let mut players = players_with_stacks(&[100, 100, 100]);
        let mut deciders = vec![
            ScriptedDecider::new(vec![Bet(0), Bet(30), Bet(40)]),
            ScriptedDecider::new(vec![Bet(10), Bet(60)]),
            ScriptedDecider::new(vec![Bet(10), Bet(20)]),
        ];
        let (bet, left, actions) = round(0, &mut players, &mut deciders, 0);

        assert_eq!((bet, left), (70, 3));
        assert_eq!(bets(&players), vec![70, 70, 70]);
        assert_eq!(
            actions,
            vec![
                Action::Check("p0".into()),
                Action::Bet("p1".into(), 10),
                Action::Call("p2".into(), 10),
                Action::Raise("p0".into(), 30),
                Action::Raise("p1".into(), 60),
                // below the call with a deep stack is turned into the full call
                Action::Call("p2".into(), 60),
                Action::Call("p0".into(), 40),
            ]
        );
        assert!(deciders.iter().all(ScriptedDecider::is_exhausted));
    }

    #[test]
    fn test_short_stack_goes_allin_without_reopening() {
        let mut players = players_with_stacks(&[500, 30, 500]);
        let mut deciders = vec![
            ScriptedDecider::new(vec![Bet(100)]),
            ScriptedDecider::new(vec![Bet(30)]),
            ScriptedDecider::new(vec![Bet(100)]),
        ];
        let (bet, left, actions) = round(0, &mut players, &mut deciders, 0);

        assert_eq!((bet, left), (100, 3));
        assert_eq!(bets(&players), vec![100, 30, 100]);
        assert!(players[1].is_allin());
        assert_eq!(actions[1], Action::AllIn("p1".into(), 30));
        assert!(deciders.iter().all(ScriptedDecider::is_exhausted));
    }

    #[test]
    fn test_consecutive_folds_keep_indices_stable() {
        let mut players = players_with_stacks(&[100, 100, 100, 100]);
        let mut deciders = vec![
            ScriptedDecider::new(vec![Fold]),
            ScriptedDecider::new(vec![Fold]),
            ScriptedDecider::new(vec![Bet(20)]),
            ScriptedDecider::new(vec![Fold]),
        ];
        let (bet, left, actions) = round(0, &mut players, &mut deciders, 10);

        assert_eq!((bet, left), (20, 1));
        assert_eq!(
            actions,
            vec![
                Action::Fold("p0".into()),
                Action::Fold("p1".into()),
                Action::Raise("p2".into(), 20),
                Action::Fold("p3".into()),
            ]
        );
        assert_eq!(players.len(), 4);
        assert!(players[3].has_folded && players[3].hand.is_empty());
        assert!(!players[2].has_folded);
    }

    #[test]
    fn test_folded_and_allin_players_are_skipped() {
        let mut players = players_with_stacks(&[100, 0, 100, 100]);
        players[3].fold();
        let mut deciders = vec![
            ScriptedDecider::new(vec![Bet(0)]),
            ScriptedDecider::new(vec![]),
            ScriptedDecider::new(vec![Bet(0)]),
            ScriptedDecider::new(vec![]),
        ];
        let (bet, left, actions) = round(0, &mut players, &mut deciders, 0);

        assert_eq!((bet, left), (0, 3));
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn test_bet_above_stack_is_a_protocol_violation() {
        let mut players = players_with_stacks(&[100, 10]);
        let mut deciders = vec![
            ScriptedDecider::new(vec![Bet(0)]),
            ScriptedDecider::new(vec![Bet(20)]),
        ];
        let mut actions = Vec::new();
        let result = run_round(0, &mut players, &mut deciders, &[], 0, 2, &mut actions);

        assert_eq!(
            result,
            Err(ChipError::ProtocolViolation {
                player: "p1".into(),
                bet: 20,
                stack: 10
            })
        );
    }
}
