//! Table configuration options.

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// What the leaderboard keeps for each player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScorePolicy {
    /// The most recent balance replaces the previous entry.
    #[default]
    Latest,
    /// The highest balance seen is kept.
    Peak,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_table::GameOptions;
///
/// let options = GameOptions::default()
///     .with_blackjack_pays(1.5)
///     .with_max_players(6)
///     .with_reshuffle_threshold(20);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Maximum number of seated players, dealer excluded.
    pub max_players: usize,
    /// Money given to a new profile.
    pub starting_money: usize,
    /// Profit paid on a natural blackjack, as a multiple of the bet.
    ///
    /// `1.0` pays naturals like any other win.
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// The dealer stands at this total or higher.
    pub dealer_stands_on: u8,
    /// Whether the dealer draws when every player has busted.
    pub dealer_plays_when_all_bust: bool,
    /// Reshuffle the discard pile back in when fewer cards remain after a
    /// round. An empty draw pile is always reshuffled, so 0 reshuffles only
    /// then.
    pub reshuffle_threshold: usize,
    /// Leaderboard policy.
    pub score_policy: ScorePolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_players: 4,
            starting_money: 1000,
            blackjack_pays: 1.0,
            rounding_blackjack: RoundingMode::Down,
            dealer_stands_on: 17,
            dealer_plays_when_all_bust: false,
            reshuffle_threshold: 26,
            score_policy: ScorePolicy::Latest,
        }
    }
}

impl GameOptions {
    /// Sets the maximum number of seated players.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_players(2);
    /// assert_eq!(options.max_players, 2);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the money given to a new profile.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_money(500);
    /// assert_eq!(options.starting_money, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_money(mut self, money: usize) -> Self {
        self.starting_money = money;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.5);
    /// assert_eq!(options.blackjack_pays, 1.5);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets whether the dealer draws after every player has busted.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_plays_when_all_bust(true);
    /// assert!(options.dealer_plays_when_all_bust);
    /// ```
    #[must_use]
    pub const fn with_dealer_plays_when_all_bust(mut self, plays: bool) -> Self {
        self.dealer_plays_when_all_bust = plays;
        self
    }

    /// Sets the draw pile size below which cleanup reshuffles.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(13);
    /// assert_eq!(options.reshuffle_threshold, 13);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, cards: usize) -> Self {
        self.reshuffle_threshold = cards;
        self
    }

    /// Sets the leaderboard policy.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{GameOptions, ScorePolicy};
    ///
    /// let options = GameOptions::default().with_score_policy(ScorePolicy::Peak);
    /// assert_eq!(options.score_policy, ScorePolicy::Peak);
    /// ```
    #[must_use]
    pub const fn with_score_policy(mut self, policy: ScorePolicy) -> Self {
        self.score_policy = policy;
        self
    }
}
