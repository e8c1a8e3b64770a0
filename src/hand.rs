//! Hand representation and scoring.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest score that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Minimum score at or below which an ace can count as 11 without busting.
const SOFT_LIMIT: u8 = BLACKJACK - 10;

/// An ordered set of cards held by one participant, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Total with every ace counted as 1 and face cards capped at 10.
    #[must_use]
    pub fn min_score(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |score, card| score.saturating_add(card.rank.min_value()))
    }

    /// Best total for the hand.
    ///
    /// One ace is promoted to 11 when the minimum score leaves room for it.
    /// At most one ace is ever promoted, since two would always bust.
    #[must_use]
    pub fn score(&self) -> u8 {
        let min_score = self.min_score();
        if min_score > SOFT_LIMIT {
            return min_score;
        }
        if self.cards.iter().any(Card::is_ace) {
            min_score + 10
        } else {
            min_score
        }
    }

    /// Returns whether the score relies on an ace counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.score() != self.min_score()
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Renders the hand as the dealer shows it while the player is deciding:
    /// the up card, with everything after it hidden.
    #[must_use]
    pub const fn dealer_view(&self) -> DealerView<'_> {
        DealerView(self)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Masked display of a dealer's hand. See [`Hand::dealer_view`].
#[derive(Debug, Clone, Copy)]
pub struct DealerView<'a>(&'a Hand);

impl fmt::Display for DealerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(up_card) = self.0.up_card() else {
            return Ok(());
        };
        write!(f, "{up_card}")?;
        if self.0.len() > 1 {
            f.write_str(", **HIDDEN**")?;
        }
        Ok(())
    }
}
