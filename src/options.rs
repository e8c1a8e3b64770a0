//! Game configuration options.

/// Configuration options for a game.
///
/// ```
/// use hitstand::GameOptions;
///
/// let options = GameOptions::default().with_decks(6);
/// assert_eq!(options.decks, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of standard decks combined on every shuffle.
    pub decks: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { decks: 3 }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use hitstand::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }
}
