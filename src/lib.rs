//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`GameState`] snapshot and the transitions that move
//! a hand from the player's turn, through the dealer's turn, to settlement.
//! Transitions never modify the snapshot they are called on; each returns a
//! new one.
//!
//! # Example
//!
//! ```
//! use hitstand::{GameOptions, GameState, Phase};
//!
//! let game = GameState::new(GameOptions::default(), 42).shuffle();
//! let game = game.deal()?.stand()?.play_dealer()?;
//! assert_eq!(game.phase(), Phase::HandOver);
//!
//! let (game, summary) = game.end_hand();
//! assert!(game.player().is_empty());
//! println!("{summary}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use action::PlayerAction;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, ParseActionError};
pub use game::{DealerAction, GameState, Phase, Seat};
pub use hand::{BLACKJACK, DealerView, Hand};
pub use options::GameOptions;
pub use result::{HandSummary, Outcome};
