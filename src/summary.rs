use crate::actions::Action;
use crate::blinds::Blinds;
use crate::deck::Card;
use crate::ChipCount;
use std::fmt;

/// The result of one hand played, handed to the caller once the hand is settled.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummary {
    /// The number of hands played at the table, including this one.
    pub hands_played: usize,
    /// The community cards at the end of the hand.
    pub board: Vec<Card>,
    /// Name and stack of every player still seated after the hand, in seating order.
    pub players: Vec<(String, ChipCount)>,
    /// Name and amount won for every winner, in the order the pot was distributed.
    pub winners: Vec<(String, ChipCount)>,
    /// The blinds this hand was played with.
    pub blinds: Blinds,
    /// Everything that happened during the hand.
    pub actions: Vec<Action>,
}

impl RoundSummary {
    /// The total number of chips which were in the pot.
    pub fn pot_size(&self) -> ChipCount {
        self.winners.iter().map(|(_, won)| won).sum()
    }

    /// The stack of the named player after the hand, `None` if the player busted or was not seated.
    pub fn stack_of(&self, name: &str) -> Option<ChipCount> {
        self.players
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, stack)| stack)
    }
}

impl fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in &self.actions {
            writeln!(f, "{}", action)?;
        }
        write!(f, "Pot size: {}", self.pot_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_actions_and_pot() {
        let summary = RoundSummary {
            hands_played: 3,
            board: Vec::new(),
            players: vec![("a".into(), 103), ("b".into(), 97)],
            winners: vec![("a".into(), 6)],
            blinds: Blinds::new(1, 2),
            actions: vec![
                Action::StartRound {
                    id: 3,
                    small_blind: 1,
                    big_blind: 2,
                },
                Action::Win("a".into(), 6),
                Action::EndRound,
            ],
        };

        assert_eq!(
            summary.to_string(),
            "Hand #3 (1/2)\na wins 6\nEnd of hand\nPot size: 6"
        );
        assert_eq!(summary.stack_of("b"), Some(97));
        assert_eq!(summary.stack_of("c"), None);
    }
}
