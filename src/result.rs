//! Round result types for the payout phase.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// How a player's hand was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player beat the dealer or the dealer busted.
    Win,
    /// Player won holding a natural blackjack.
    Blackjack,
    /// Dealer finished higher.
    Lose,
    /// Player went over 21.
    Bust,
    /// Tie; the bet was returned.
    Push,
}

impl HandOutcome {
    /// Returns whether the outcome counts as a win in the statistics.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack)
    }

    /// Returns whether the outcome counts as a loss in the statistics.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Lose | Self::Bust)
    }
}

/// Result for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's name.
    pub name: String,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet that was at stake.
    pub bet: usize,
    /// Amount credited back to the player (stake included).
    pub payout: usize,
    /// The player's hand total.
    pub player_total: u8,
    /// The dealer's hand total.
    pub dealer_total: u8,
    /// The player's money after settlement.
    pub money: usize,
}

impl PlayerResult {
    /// Net change of the player's money over the round.
    #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
    #[must_use]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}

/// Result of a whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The round number, starting at 1.
    pub round: u32,
    /// Results for each player who bet, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer played out the hand instead of standing on a
    /// table of busted players.
    pub dealer_played: bool,
}

impl RoundResult {
    /// Looks up the result for `name`.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerResult> {
        self.players.iter().find(|p| p.name == name)
    }
}
