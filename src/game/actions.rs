use tracing::debug;

use crate::action::PlayerAction;
use crate::error::ActionError;

use super::GameState;

impl GameState {
    /// Draws a card into the hand of whoever's turn it is.
    ///
    /// If the card takes that hand over 21 the turn ends immediately, exactly
    /// as if [`stand`](Self::stand) had been called.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotAnyPlayersTurn`] once the hand is over, or
    /// [`ActionError::NoCards`] if the deck is empty.
    pub fn hit(&self) -> Result<Self, ActionError> {
        let seat = self.current_seat()?;

        let mut next = self.clone();
        let card = next.deck.draw().ok_or(ActionError::NoCards)?;
        let hand = next.hand_mut(seat);
        hand.add_card(card);

        let score = hand.score();
        debug!(?seat, %card, score, "hit");

        if hand.is_bust() {
            debug!(?seat, score, "bust");
            return next.stand();
        }

        Ok(next)
    }

    /// Ends the current turn and advances to the next phase.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::HandOver`] if the hand has already finished;
    /// the phase never moves past [`Phase::HandOver`](super::Phase::HandOver).
    pub fn stand(&self) -> Result<Self, ActionError> {
        let phase = self.phase.next().ok_or(ActionError::HandOver)?;

        let mut next = self.clone();
        next.phase = phase;
        debug!(from = ?self.phase, to = ?phase, "stand");
        Ok(next)
    }

    /// Applies a player's chosen action.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying [`hit`](Self::hit) or
    /// [`stand`](Self::stand).
    pub fn apply(&self, action: PlayerAction) -> Result<Self, ActionError> {
        match action {
            PlayerAction::Hit => self.hit(),
            PlayerAction::Stand => self.stand(),
        }
    }
}
