//! Game state snapshots and transitions.
//!
//! A [`GameState`] is never changed in place. Every transition borrows the
//! current snapshot, clones it, and returns the updated copy, so earlier
//! snapshots stay valid and never share storage with later ones.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use dealer::DealerAction;
pub use state::{Phase, Seat};

/// A snapshot of a single-player blackjack hand.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Cards left to draw.
    deck: Deck,
    /// Current phase.
    phase: Phase,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Game options.
    options: GameOptions,
    /// Random number generator used by [`GameState::shuffle`].
    rng: ChaCha8Rng,
}

impl GameState {
    /// Creates an empty game with the given seed.
    ///
    /// The game has no cards and no hand in progress; call
    /// [`shuffle`](Self::shuffle) and then [`deal`](Self::deal) to start.
    ///
    /// # Example
    ///
    /// ```
    /// use hitstand::{GameOptions, GameState, Phase};
    ///
    /// let game = GameState::new(GameOptions::default(), 42)
    ///     .shuffle()
    ///     .deal()
    ///     .unwrap();
    /// assert_eq!(game.phase(), Phase::PlayerTurn);
    /// assert_eq!(game.player().len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Deck::default(),
            phase: Phase::HandOver,
            player: Hand::new(),
            dealer: Hand::new(),
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns a copy of this state drawing from `deck`.
    ///
    /// Setup helper for tests and fixtures. The card count of the result is
    /// whatever the caller supplies; it is not tied to the previous state.
    #[doc(hidden)]
    #[must_use]
    pub fn with_deck(&self, deck: Deck) -> Self {
        let mut next = self.clone();
        next.deck = deck;
        next
    }

    /// Returns a copy of this state holding the given hands.
    ///
    /// Setup helper for tests and fixtures. The hands are not drawn from the
    /// deck, so card conservation does not hold across this call.
    #[doc(hidden)]
    #[must_use]
    pub fn with_hands(&self, player: Hand, dealer: Hand) -> Self {
        let mut next = self.clone();
        next.player = player;
        next.dealer = dealer;
        next
    }

    /// Replaces the deck with freshly shuffled cards.
    ///
    /// The new deck combines [`GameOptions::decks`] standard decks and does
    /// not depend on the cards currently left; hands and phase are kept.
    #[must_use]
    pub fn shuffle(&self) -> Self {
        let mut next = self.clone();
        next.deck = Deck::new(next.options.decks, &mut next.rng);
        debug!(remaining = next.deck.len(), "shuffled deck");
        next
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the cards left to draw.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotAnyPlayersTurn`] once the hand is over.
    pub const fn current_seat(&self) -> Result<Seat, ActionError> {
        match self.phase.seat() {
            Some(seat) => Ok(seat),
            None => Err(ActionError::NotAnyPlayersTurn),
        }
    }

    /// Returns the hand belonging to whoever's turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotAnyPlayersTurn`] once the hand is over.
    pub fn current_hand(&self) -> Result<&Hand, ActionError> {
        Ok(self.hand(self.current_seat()?))
    }

    /// Returns the hand held at `seat`.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Player => &self.player,
            Seat::Dealer => &self.dealer,
        }
    }

    const fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        }
    }
}
