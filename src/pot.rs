//! This module settles the pot at the end of a hand.
//!
//! All the chips a player put into the pot during the hand are tracked in `Player::bet`. The pot
//! is carved into side pots by the sizes of these bets, so an all-in player can only win up to
//! what each opponent matched.
use crate::deck::Card;
use crate::error::ChipError;
use crate::eval::{Evaluator, HandScore};
use crate::player::Player;
use crate::ChipCount;
use itertools::Itertools;

/// Distributes the pot between the players which did not fold.
///
/// Returns the seat index and the number of chips won for each winner, in the order the chips
/// were awarded (strongest hand first). The bets of all players are consumed, i.e. they are zero
/// afterwards, and the awards always sum up to the bets' total. Stacks are left untouched.
///
/// Contending players are scored with `evaluator` (their `hand_score` is set) whenever there is a
/// board. If only one of them is left, that player wins everything.
///
/// Hands of equal strength split the pots they are eligible for. If such a split can not be
/// done evenly, the player with the smallest bet which caps the split pot receives the
/// remaining chips.
pub fn distribute<E: Evaluator + ?Sized>(
    players: &mut [Player],
    board: &[Card],
    evaluator: &E,
) -> Result<Vec<(usize, ChipCount)>, ChipError> {
    let total: ChipCount = players.iter().map(|p| p.bet).sum();
    let contenders: Vec<usize> = players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_contending())
        .map(|(i, _)| i)
        .collect();

    let mut won = vec![0; players.len()];
    let mut order = Vec::new();

    match contenders.as_slice() {
        [] => {
            return Err(ChipError::InvariantBreach(
                "every player folded, nobody can win the pot".to_owned(),
            ))
        }
        &[winner] => {
            // the player left gets the pot
            if !board.is_empty() {
                let score = evaluator.evaluate(&players[winner].hand, board);
                players[winner].hand_score = Some(score);
            }
            for p in players.iter_mut() {
                p.bet = 0;
            }
            won[winner] = total;
            order.push(winner);
        }
        _ if board.is_empty() => {
            return Err(ChipError::InvariantBreach(format!(
                "showdown between {} players without a board",
                contenders.len()
            )))
        }
        _ => {
            let mut ranked: Vec<(HandScore, usize)> = contenders
                .iter()
                .map(|&i| {
                    let score = evaluator.evaluate(&players[i].hand, board);
                    players[i].hand_score = Some(score);
                    (score, i)
                })
                .collect();
            // stable, so ties stay in seat order
            ranked.sort_by_key(|&(score, _)| score);
            let strongest = ranked[0].1;

            for (_, group) in &ranked.into_iter().group_by(|&(score, _)| score) {
                let winners: Vec<usize> = group.map(|(_, i)| i).collect();
                split_pot(&winners, players, &mut won, &mut order);

                if players.iter().all(|p| p.bet == 0) {
                    break;
                }
            }

            // chips of folded players above every contender's bet
            let rest: ChipCount = players.iter_mut().map(|p| std::mem::take(&mut p.bet)).sum();
            if rest > 0 {
                log::warn!("{} uncontested chips go to the strongest hand", rest);
                if won[strongest] == 0 {
                    order.push(strongest);
                }
                won[strongest] += rest;
            }
        }
    }

    let awarded: ChipCount = won.iter().sum();
    if awarded != total {
        return Err(ChipError::InvariantBreach(format!(
            "awarded {} chips from a pot of {}",
            awarded, total
        )));
    }

    Ok(order.into_iter().map(|i| (i, won[i])).collect())
}

/// Splits the pots capped by the bets of `winners` (which share the same hand strength) between
/// them.
///
/// Winners are served by ascending bet: every player contributes up to the winner's remaining bet
/// and the collected chips are shared with every winner not served yet.
fn split_pot(
    winners: &[usize],
    players: &mut [Player],
    won: &mut [ChipCount],
    order: &mut Vec<usize>,
) {
    let mut winners: Vec<usize> = winners
        .iter()
        .copied()
        .filter(|&w| players[w].bet > 0)
        .collect();
    winners.sort_by_key(|&w| players[w].bet);

    let mut n_receivers = winners.len() as ChipCount;
    let mut pot_size = 0;

    for w in winners {
        let shared_size = players[w].bet;
        for p in players.iter_mut() {
            let actual_size = std::cmp::min(p.bet, shared_size);
            p.bet -= actual_size;
            pot_size += actual_size;
        }

        let share = pot_size / n_receivers;
        let rest = pot_size % n_receivers;
        if share + rest > 0 {
            if won[w] == 0 {
                order.push(w);
            }
            won[w] += share + rest;
        }
        pot_size -= share + rest;
        n_receivers -= 1;
    }
}
