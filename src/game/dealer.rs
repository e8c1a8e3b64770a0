use tracing::{debug, trace};

use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::{HandSummary, Outcome};

use super::{GameState, Phase};

/// The dealer's fixed decision for a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerAction {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl DealerAction {
    /// Decides the dealer's next move from the dealer's hand alone.
    ///
    /// The dealer hits on 16 or less and on a soft 17, and stands otherwise.
    ///
    /// ```
    /// use hitstand::{Card, DealerAction, Hand, Rank, Suit};
    ///
    /// let soft_17: Hand = [
    ///     Card::new(Rank::Ace, Suit::Hearts),
    ///     Card::new(Rank::Six, Suit::Clubs),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert_eq!(DealerAction::for_hand(&soft_17), DealerAction::Hit);
    /// ```
    #[must_use]
    pub fn for_hand(hand: &Hand) -> Self {
        let score = hand.score();
        if score <= 16 || (score == 17 && hand.min_score() != 17) {
            Self::Hit
        } else {
            Self::Stand
        }
    }
}

impl GameState {
    /// Plays out the dealer's turn using [`DealerAction::for_hand`].
    ///
    /// Returns the state after the dealer stands or busts, which is always in
    /// [`Phase::HandOver`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotDealerTurn`] outside the dealer's turn, or
    /// [`ActionError::NoCards`] if the deck runs out while the dealer must
    /// draw.
    pub fn play_dealer(&self) -> Result<Self, ActionError> {
        if self.phase != Phase::DealerTurn {
            return Err(ActionError::NotDealerTurn);
        }

        let mut state = self.clone();
        while state.phase == Phase::DealerTurn {
            let action = DealerAction::for_hand(&state.dealer);
            trace!(
                score = state.dealer.score(),
                min_score = state.dealer.min_score(),
                ?action,
                "dealer decision"
            );
            state = match action {
                DealerAction::Hit => state.hit()?,
                DealerAction::Stand => state.stand()?,
            };
        }

        Ok(state)
    }

    /// Settles the hand.
    ///
    /// Returns the summary with both hands fully revealed, and a state whose
    /// hands are empty. The deck and phase are carried over unchanged.
    #[must_use]
    pub fn end_hand(&self) -> (Self, HandSummary) {
        let player_score = self.player.score();
        let dealer_score = self.dealer.score();
        let outcome = Outcome::from_scores(player_score, dealer_score);
        debug!(player_score, dealer_score, ?outcome, "hand over");

        let mut next = self.clone();
        let summary = HandSummary {
            outcome,
            player: core::mem::take(&mut next.player),
            dealer: core::mem::take(&mut next.dealer),
            player_score,
            dealer_score,
        };

        (next, summary)
    }
}
