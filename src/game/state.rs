//! Round state types.

use core::fmt;

/// Phase of the current round.
///
/// Rounds move strictly forward through the phases and return to
/// [`RoundState::Betting`] after cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    /// Collecting bets.
    #[default]
    Betting,
    /// Dealing the opening two cards.
    Dealing,
    /// Players hit or stand.
    PlayerTurn,
    /// The dealer plays out the hand.
    DealerTurn,
    /// Hands are settled.
    Payout,
    /// Cards go back to the deck.
    Cleanup,
}

impl RoundState {
    /// Returns the phase after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Betting => Self::Dealing,
            Self::Dealing => Self::PlayerTurn,
            Self::PlayerTurn => Self::DealerTurn,
            Self::DealerTurn => Self::Payout,
            Self::Payout => Self::Cleanup,
            Self::Cleanup => Self::Betting,
        }
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Betting => "betting",
            Self::Dealing => "dealing",
            Self::PlayerTurn => "player turn",
            Self::DealerTurn => "dealer turn",
            Self::Payout => "payout",
            Self::Cleanup => "cleanup",
        };
        f.write_str(name)
    }
}
