use tracing::debug;

use crate::error::DealError;
use crate::hand::Hand;

use super::{GameState, Phase};

/// Cards needed for the opening deal: two each for player and dealer.
const OPENING_CARDS: usize = 4;

impl GameState {
    /// Deals a new hand.
    ///
    /// Both hands are emptied, then two cards go to each side alternately,
    /// player first. The returned state is in [`Phase::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than four cards remain.
    /// Nothing is drawn in that case.
    pub fn deal(&self) -> Result<Self, DealError> {
        if self.deck.len() < OPENING_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        let mut next = self.clone();
        next.player = Hand::new();
        next.dealer = Hand::new();

        for _ in 0..2 {
            // Length was checked above.
            if let Some(card) = next.deck.draw() {
                next.player.add_card(card);
            }
            if let Some(card) = next.deck.draw() {
                next.dealer.add_card(card);
            }
        }

        next.phase = Phase::PlayerTurn;
        debug!(
            player_score = next.player.score(),
            remaining = next.deck.len(),
            "dealt new hand"
        );
        Ok(next)
    }
}
