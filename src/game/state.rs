//! Phase and seat types.

/// Phase of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hand has ended and can be settled.
    HandOver,
}

impl Phase {
    /// Returns the phase that follows this one, or `None` after `HandOver`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::PlayerTurn => Some(Self::DealerTurn),
            Self::DealerTurn => Some(Self::HandOver),
            Self::HandOver => None,
        }
    }

    /// Returns whose turn this phase is, if anyone's.
    #[must_use]
    pub const fn seat(self) -> Option<Seat> {
        match self {
            Self::PlayerTurn => Some(Seat::Player),
            Self::DealerTurn => Some(Seat::Dealer),
            Self::HandOver => None,
        }
    }
}

/// A participant at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Player,
    /// The dealer.
    Dealer,
}
