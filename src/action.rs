//! Player input.

use core::str::FromStr;

use crate::error::ParseActionError;

/// An action the player can take on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Draw a card.
    Hit,
    /// End the turn.
    Stand,
}

impl FromStr for PlayerAction {
    type Err = ParseActionError;

    /// Accepts exactly `hit` or `stand`. Matching is case-sensitive.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "hit" => Ok(Self::Hit),
            "stand" => Ok(Self::Stand),
            _ => Err(ParseActionError),
        }
    }
}
