//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer than four cards are left in the deck.
    #[error("not enough cards in the deck to deal")]
    NotEnoughCards,
}

/// Errors that can occur when applying a turn action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The current phase belongs to neither the player nor the dealer.
    #[error("it isn't currently any player's turn")]
    NotAnyPlayersTurn,
    /// Stand was called after the hand already finished.
    #[error("the hand is already over")]
    HandOver,
    /// The dealer was asked to play outside the dealer's turn.
    #[error("it isn't the dealer's turn")]
    NotDealerTurn,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Input that is neither `hit` nor `stand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Options are 'hit' or 'stand'\nPlease pick one of those two options")]
pub struct ParseActionError;
