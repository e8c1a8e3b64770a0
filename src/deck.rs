//! The card source a hand is dealt from.

use alloc::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered sequence of cards. The front card is the next one drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds `num_decks` standard decks and shuffles them together.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(num_decks: u8, rng: &mut R) -> Self {
        let mut deck = Self::standard(num_decks);
        deck.cards.make_contiguous().shuffle(rng);
        deck
    }

    /// Builds `num_decks` standard decks in suit-then-rank order, unshuffled.
    #[must_use]
    pub fn standard(num_decks: u8) -> Self {
        let mut cards = VecDeque::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push_back(Card::new(rank, suit));
                }
            }
        }

        Self { cards }
    }

    /// Creates a deck that yields `cards` in the given order.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Removes and returns the front card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates the remaining cards in draw order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
