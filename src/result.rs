//! Hand results.

use core::fmt;

use crate::hand::{BLACKJACK, Hand};

/// How a hand ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21. Checked before anything else.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has the higher score.
    PlayerWin,
    /// Dealer has the higher score.
    DealerWin,
    /// Scores are equal.
    Draw,
}

impl Outcome {
    /// Decides the outcome from both final scores.
    #[must_use]
    pub const fn from_scores(player: u8, dealer: u8) -> Self {
        if player > BLACKJACK {
            Self::PlayerBust
        } else if dealer > BLACKJACK {
            Self::DealerBust
        } else if player > dealer {
            Self::PlayerWin
        } else if dealer > player {
            Self::DealerWin
        } else {
            Self::Draw
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerBust => "You busted",
            Self::DealerBust => "Dealer busted",
            Self::PlayerWin => "You win!",
            Self::DealerWin => "You lose",
            Self::Draw => "Draw",
        })
    }
}

/// Final hands and outcome of a settled hand.
///
/// The `Display` impl renders the end-of-hand summary block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSummary {
    /// The outcome.
    pub outcome: Outcome,
    /// The player's final hand.
    pub player: Hand,
    /// The dealer's final hand, fully revealed.
    pub dealer: Hand,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
}

impl fmt::Display for HandSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=====FINAL HANDS=====")?;
        writeln!(f, "Player: {} \nScore: {}", self.player, self.player_score)?;
        writeln!(f, "Dealer: {} \nScore: {}", self.dealer, self.dealer_score)?;
        writeln!(f, "{}", self.outcome)?;
        writeln!(f)
    }
}
